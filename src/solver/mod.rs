// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three-phase solve: construct → reduce → rotate.
//!
//! A single [`SolverContext`] owns all mutable state. Each phase takes it by
//! value and hands it back, so the flow of the shrinking preference lists
//! from one phase to the next is explicit:
//!
//! 1. [`SolverContext::new`] builds the full lists from a [`PreferenceTable`]
//! 2. [`extremal::build`] finds `M0` and `Mz` and reduces the lists
//! 3. [`RotationFinder`] walks the reduced lists from `M0` to `Mz`
//!
//! # Example
//!
//! ```
//! use stable_gi::preferences::PreferenceTable;
//! use stable_gi::solver::solve;
//!
//! let table = PreferenceTable::new(
//!     vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 1, 2]],
//!     vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]],
//! ).unwrap();
//!
//! let outcome = solve(&table);
//! assert_eq!(outcome.proposer_optimal.to_indices(), vec![0, 1, 2]);
//! assert_eq!(outcome.receiver_optimal.to_indices(), vec![1, 0, 2]);
//! assert_eq!(outcome.rotations.len(), 1);
//! assert_eq!(outcome.rotations[0].to_string(), "(1,1),(2,2)");
//! ```

pub mod extremal;
pub mod rotations;

pub use extremal::ExtremalMatchings;
pub use rotations::{RotationFinder, RotationParts};

use crate::matching::{Matching, Rotation, RotationIndex, StableCouples};
use crate::person::{Proposer, Receiver};
use crate::preferences::PreferenceTable;
use crate::statistics::{Counters, Statistics};
use crate::store::{PreferenceSnapshot, PreferenceStore};
use tracing::debug;

/// All mutable state of one solve.
#[derive(Debug)]
pub struct SolverContext {
    pub(crate) store: PreferenceStore,
    pub(crate) statistics: Statistics,
}

impl SolverContext {
    /// Build the full preference lists for `table`.
    pub fn new(table: &PreferenceTable) -> Self {
        Self {
            store: PreferenceStore::new(table),
            statistics: Statistics::new(),
        }
    }

    /// The preference lists in their current state.
    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Counters accumulated so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Everything a solve produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarriageOutcome {
    /// `M0`.
    pub proposer_optimal: Matching,
    /// `Mz`.
    pub receiver_optimal: Matching,
    /// Couples of `M0` and of every matching reached by a rotation.
    pub stable_couples: StableCouples,
    /// Rotations in the order they were eliminated.
    pub rotations: Vec<Rotation>,
    /// Which rotation lists each pair.
    pub rotation_index: RotationIndex,
    /// The lists after both deferred-acceptance passes.
    pub reduced: PreferenceSnapshot,
    pub statistics: Statistics,
}

impl MarriageOutcome {
    /// Position in [`Self::rotations`] of the rotation listing `(m, w)`.
    pub fn rotation_of(&self, m: Proposer, w: Receiver) -> Option<usize> {
        self.rotation_index.rotation_of(m, w)
    }

    /// `M0` followed by the matching after each rotation, ending at `Mz`.
    pub fn matchings(&self) -> Vec<Matching> {
        let mut current = self.proposer_optimal.clone();
        let mut chain = Vec::with_capacity(self.rotations.len() + 1);
        chain.push(current.clone());
        for rotation in &self.rotations {
            current.apply(rotation);
            chain.push(current.clone());
        }
        chain
    }
}

/// Run all three phases on `table`.
pub fn solve(table: &PreferenceTable) -> MarriageOutcome {
    let ctx = SolverContext::new(table);
    let (ctx, extremal) = extremal::build(ctx);
    let reduced = ctx.store.snapshot();

    let ExtremalMatchings {
        proposer_optimal,
        receiver_optimal,
        stable_couples,
    } = extremal;

    let mut finder = RotationFinder::new(
        ctx,
        proposer_optimal.clone(),
        receiver_optimal.clone(),
        stable_couples,
    );
    let rotations: Vec<Rotation> = finder.by_ref().collect();
    let RotationParts {
        ctx,
        stable_couples,
        rotation_index,
        ..
    } = finder.finish();

    let mut statistics = ctx.statistics;
    statistics.add(Counters::Deletions, ctx.store.removed() as u64);
    debug!(
        size = table.size(),
        rotations = rotations.len(),
        stable_couples = stable_couples.len(),
        "solve complete"
    );

    MarriageOutcome {
        proposer_optimal,
        receiver_optimal,
        stable_couples,
        rotations,
        rotation_index,
        reduced,
        statistics,
    }
}
