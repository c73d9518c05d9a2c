// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotation discovery on the reduced preference lists.
//!
//! In the reduced lists every proposer's first entry is his current partner.
//! Following `m → last(second(m))` from any proposer not yet at his
//! receiver-optimal partner must eventually revisit a proposer already on the
//! path; the proposers on that cycle, with their current partners, form a
//! rotation exposed in the current matching.
//!
//! After a rotation is eliminated, the part of the path below the cycle is
//! still a valid path in the new lists, so the walk resumes from it instead
//! of starting over. This keeps the whole enumeration at O(n²).

use super::SolverContext;
use crate::matching::{Matching, Rotation, RotationIndex, StableCouples};
use crate::person::Proposer;
use crate::statistics::Counters;
use crate::worklist::Worklist;
use tracing::{debug, trace};

/// Where the walk through the "next proposal" graph stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// The path grew by one proposer.
    FollowingChain,
    /// The path closed a cycle starting at the given proposer.
    CycleClosed(Proposer),
    /// Every proposer holds his receiver-optimal partner.
    Done,
}

/// Enumerates the rotations leading from `M0` to `Mz`, one per `next()`.
///
/// Each yielded rotation has already been applied to the working matching
/// and its consequences deleted from the preference lists.
#[derive(Debug)]
pub struct RotationFinder {
    ctx: SolverContext,
    solution: Matching,
    target: Matching,
    worklist: Worklist<Proposer>,
    /// Proposers below the cursor already hold their target partner.
    cursor: usize,
    stable_couples: StableCouples,
    index: RotationIndex,
    found: usize,
}

/// What remains once a [`RotationFinder`] is exhausted.
#[derive(Debug)]
pub struct RotationParts {
    pub ctx: SolverContext,
    pub solution: Matching,
    pub stable_couples: StableCouples,
    pub rotation_index: RotationIndex,
}

impl RotationFinder {
    /// Start from `start` (normally `M0`) on the reduced lists in `ctx`.
    pub fn new(
        ctx: SolverContext,
        start: Matching,
        target: Matching,
        stable_couples: StableCouples,
    ) -> Self {
        let n = ctx.store.size();
        Self {
            ctx,
            solution: start,
            target,
            worklist: Worklist::new(n),
            cursor: 0,
            stable_couples,
            index: RotationIndex::new(n),
            found: 0,
        }
    }

    /// The working matching, with every rotation found so far applied.
    pub fn solution(&self) -> &Matching {
        &self.solution
    }

    /// Give back the context and the accumulated outputs.
    ///
    /// # Panics
    ///
    /// Panics if called before the iterator is exhausted.
    pub fn finish(self) -> RotationParts {
        assert_eq!(
            self.solution, self.target,
            "rotation search stopped before reaching the target matching"
        );
        RotationParts {
            ctx: self.ctx,
            solution: self.solution,
            stable_couples: self.stable_couples,
            rotation_index: self.index,
        }
    }

    /// Extend the path by one step.
    fn advance(&mut self) -> Walk {
        let Some(top) = self.worklist.top() else {
            return match self.next_unfinished() {
                Some(m) => {
                    self.worklist.push(m);
                    Walk::FollowingChain
                }
                None => Walk::Done,
            };
        };

        let next = self.next_in_chain(top);
        if self.worklist.contains(next) {
            Walk::CycleClosed(next)
        } else {
            self.worklist.push(next);
            Walk::FollowingChain
        }
    }

    /// First proposer at or after the cursor not yet at his target partner.
    fn next_unfinished(&mut self) -> Option<Proposer> {
        let n = self.solution.len();
        while self.cursor < n {
            let m = Proposer::new(self.cursor);
            if self.solution.partner(m) != self.target.partner(m) {
                return Some(m);
            }
            self.cursor += 1;
        }
        None
    }

    /// The proposer whose partner `m` would move to next: the last entry in
    /// the list of `m`'s second choice.
    fn next_in_chain(&self, m: Proposer) -> Proposer {
        let store = &self.ctx.store;
        let w = store
            .proposers()
            .second(m)
            .unwrap_or_else(|| panic!("proposer {:?} on the path has no second choice", m));
        store
            .receivers()
            .last(w)
            .unwrap_or_else(|| panic!("receiver {:?} has an empty list", w))
    }

    /// Pop the cycle closed at `start`, apply it and delete what it rules out.
    fn eliminate(&mut self, start: Proposer) -> Rotation {
        let mut pairs = Vec::new();
        loop {
            let m = self
                .worklist
                .pop()
                .unwrap_or_else(|| panic!("cycle start {:?} is not on the path", start));
            pairs.push((m, self.solution.partner(m)));
            if m == start {
                break;
            }
        }
        pairs.reverse();
        let rotation = Rotation::new(pairs);

        self.solution.apply(&rotation);
        let before = self.ctx.store.removed();
        for (m, w) in rotation.successors() {
            self.ctx.store.truncate_receiver(w, m);
            self.stable_couples.insert(m, w);
        }

        self.index.record(self.found, &rotation);
        self.found += 1;
        self.ctx.statistics.increment_counter(Counters::Rotations);
        trace!(
            rotation = self.found,
            pairs = %rotation,
            deleted = self.ctx.store.removed() - before,
            "rotation eliminated"
        );
        rotation
    }
}

impl Iterator for RotationFinder {
    type Item = Rotation;

    fn next(&mut self) -> Option<Rotation> {
        loop {
            match self.advance() {
                Walk::FollowingChain => continue,
                Walk::CycleClosed(start) => return Some(self.eliminate(start)),
                Walk::Done => {
                    debug!(rotations = self.found, "rotation search complete");
                    return None;
                }
            }
        }
    }
}
