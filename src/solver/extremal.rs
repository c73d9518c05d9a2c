// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Proposer-optimal and receiver-optimal matchings by deferred acceptance.
//!
//! Both passes run the same stack-driven procedure with the roles swapped:
//! a free suitor proposes to the head of its list, the partner keeps the
//! proposal and deletes every suitor it ranks lower. Deletions are mutual, so
//! afterwards the lists only hold pairs compatible with the matching found.
//!
//! Running the receiver pass on the lists left by the proposer pass leaves
//! the reduced lists from which every stable matching can be reached by
//! rotations. In them each proposer's first entry is his partner in `M0`
//! and his last entry is his partner in `Mz`.

use super::SolverContext;
use crate::matching::{Matching, StableCouples};
use crate::person::{Person, Proposer, Receiver};
use crate::statistics::Counters;
use crate::store::{PreferenceStore, RankingLists};
use crate::worklist::Worklist;
use tracing::{debug, trace};

/// Output of the two deferred-acceptance passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtremalMatchings {
    /// `M0`, weakly preferred by every proposer to any other stable matching.
    pub proposer_optimal: Matching,
    /// `Mz`, weakly preferred by every receiver to any other stable matching.
    pub receiver_optimal: Matching,
    /// Seeded with the couples of `M0`.
    pub stable_couples: StableCouples,
}

/// A side that can make proposals.
trait Suitor: Person {
    /// The suitors' own ranking lists.
    fn lists(store: &PreferenceStore) -> &RankingLists<Self>;

    /// Delete every suitor `partner` ranks below `keep`.
    fn truncate_partner(store: &mut PreferenceStore, partner: Self::Partner, keep: Self) -> usize;
}

impl Suitor for Proposer {
    fn lists(store: &PreferenceStore) -> &RankingLists<Self> {
        store.proposers()
    }

    fn truncate_partner(store: &mut PreferenceStore, partner: Receiver, keep: Self) -> usize {
        store.truncate_receiver(partner, keep)
    }
}

impl Suitor for Receiver {
    fn lists(store: &PreferenceStore) -> &RankingLists<Self> {
        store.receivers()
    }

    fn truncate_partner(store: &mut PreferenceStore, partner: Proposer, keep: Self) -> usize {
        store.truncate_proposer(partner, keep)
    }
}

/// Run both passes, handing the reduced context back.
pub fn build(mut ctx: SolverContext) -> (SolverContext, ExtremalMatchings) {
    let n = ctx.store.size();

    let holders: Vec<Proposer> = deferred_acceptance(&mut ctx);
    let proposer_optimal = Matching::from_receiver_partners(&holders);
    debug!(
        size = n,
        live_pairs = ctx.store.live_pairs(),
        "proposer-optimal matching found"
    );

    let partners: Vec<Receiver> = deferred_acceptance(&mut ctx);
    let receiver_optimal = Matching::new(partners);
    debug!(
        size = n,
        live_pairs = ctx.store.live_pairs(),
        "receiver-optimal matching found"
    );

    let mut stable_couples = StableCouples::new(n);
    stable_couples.insert_matching(&proposer_optimal);

    (
        ctx,
        ExtremalMatchings {
            proposer_optimal,
            receiver_optimal,
            stable_couples,
        },
    )
}

/// One deferred-acceptance pass with `S` proposing.
///
/// Returns, for every partner, the suitor it holds at the end.
fn deferred_acceptance<S: Suitor>(ctx: &mut SolverContext) -> Vec<S> {
    let n = ctx.store.size();
    let mut worklist = Worklist::new(n);
    let mut held: Vec<Option<S>> = vec![None; n];

    for suitor in (0..n).map(S::new) {
        worklist.push(suitor);
    }

    while let Some(suitor) = worklist.pop() {
        let partner = S::lists(&ctx.store)
            .first(suitor)
            .unwrap_or_else(|| panic!("{} {:?} has an empty list", S::SIDE, suitor));
        ctx.statistics.increment_counter(Counters::Proposals);
        trace!(side = %S::SIDE, suitor = suitor.index(), partner = partner.index(), "propose");

        if let Some(rival) = held[partner.index()].replace(suitor) {
            ctx.statistics.increment_counter(Counters::Displacements);
            worklist.push(rival);
        }

        S::truncate_partner(&mut ctx.store, partner, suitor);
    }

    held.into_iter()
        .enumerate()
        .map(|(partner, suitor)| {
            suitor.unwrap_or_else(|| panic!("{} {} was never proposed to", S::SIDE, partner))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::PreferenceTable;

    fn scenario() -> PreferenceTable {
        PreferenceTable::new(
            vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 1, 2]],
            vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_extremal_matchings() {
        let (ctx, extremal) = build(SolverContext::new(&scenario()));
        assert_eq!(extremal.proposer_optimal.to_indices(), vec![0, 1, 2]);
        assert_eq!(extremal.receiver_optimal.to_indices(), vec![1, 0, 2]);
        assert_eq!(extremal.stable_couples.len(), 3);

        // Reduced lists: proposers 0 and 1 each keep both receivers 0 and 1.
        let snapshot = ctx.store().snapshot();
        assert_eq!(snapshot.proposers[0], vec![Receiver::new(0), Receiver::new(1)]);
        assert_eq!(snapshot.proposers[1], vec![Receiver::new(1), Receiver::new(0)]);
        assert_eq!(snapshot.proposers[2], vec![Receiver::new(2)]);
        assert_eq!(snapshot.receivers[0], vec![Proposer::new(1), Proposer::new(0)]);
    }

    #[test]
    fn test_reduced_lists_bracket_extremal_partners() {
        let table = PreferenceTable::new(
            vec![vec![1, 0, 3, 2], vec![0, 1, 2, 3], vec![3, 2, 1, 0], vec![2, 3, 0, 1]],
            vec![vec![0, 1, 2, 3], vec![1, 0, 3, 2], vec![2, 3, 0, 1], vec![3, 2, 1, 0]],
        )
        .unwrap();
        let (ctx, extremal) = build(SolverContext::new(&table));
        for m in Proposer::all(4) {
            let lists = ctx.store().proposers();
            assert_eq!(lists.first(m), Some(extremal.proposer_optimal.partner(m)));
            assert_eq!(lists.last(m), Some(extremal.receiver_optimal.partner(m)));
        }
        assert!(extremal.proposer_optimal.is_stable(&table));
        assert!(extremal.receiver_optimal.is_stable(&table));
    }

    #[test]
    fn test_statistics_counted() {
        let (ctx, _) = build(SolverContext::new(&scenario()));
        // Phase 1 makes 4 proposals (one displacement), phase 2 makes 5 (two).
        assert_eq!(ctx.statistics().get(Counters::Proposals), 9);
        assert_eq!(ctx.statistics().get(Counters::Displacements), 3);
    }
}
