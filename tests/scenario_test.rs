// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end solves of small hand-checked tables.

mod common;

use stable_gi::statistics::Counters;
use stable_gi::{solve, Matching, PreferenceTable, Proposer, Receiver};

#[test]
fn test_three_person_scenario() {
    let outcome = solve(&common::scenario());

    assert_eq!(outcome.proposer_optimal.to_indices(), vec![0, 1, 2]);
    assert_eq!(outcome.receiver_optimal.to_indices(), vec![1, 0, 2]);
    assert_eq!(outcome.rotations.len(), 1);
    assert_eq!(outcome.rotations[0].to_indices(), vec![(0, 0), (1, 1)]);

    // Proposer 2 is never moved.
    assert!(outcome.rotations[0].proposers().all(|m| m != Proposer::new(2)));

    let couples: Vec<(usize, usize)> = outcome
        .stable_couples
        .iter()
        .map(|(m, w)| (m.index(), w.index()))
        .collect();
    assert_eq!(couples, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 2)]);
}

#[test]
fn test_three_person_reduced_lists() {
    let outcome = solve(&common::scenario());
    let reduced = &outcome.reduced;
    assert_eq!(reduced.proposers[0], vec![Receiver::new(0), Receiver::new(1)]);
    assert_eq!(reduced.proposers[1], vec![Receiver::new(1), Receiver::new(0)]);
    assert_eq!(reduced.proposers[2], vec![Receiver::new(2)]);
    assert_eq!(reduced.receivers[1], vec![Proposer::new(0), Proposer::new(1)]);
}

#[test]
fn test_report_text() {
    let outcome = solve(&common::scenario());
    assert_eq!(outcome.proposer_optimal.labelled("M0").to_string(), "M0 =  1 2 3");
    assert_eq!(outcome.receiver_optimal.labelled("Mz").to_string(), "Mz =  2 1 3");
    assert_eq!(outcome.rotations[0].to_string(), "(1,1),(2,2)");
}

#[test]
fn test_identical_rankings_have_a_unique_stable_matching() {
    // Everyone agrees on the same order: the matching is forced.
    let rows = vec![vec![0, 1, 2, 3]; 4];
    let table = PreferenceTable::new(rows.clone(), rows).unwrap();
    let outcome = solve(&table);

    assert_eq!(outcome.proposer_optimal, Matching::from_indices(&[0, 1, 2, 3]));
    assert_eq!(outcome.proposer_optimal, outcome.receiver_optimal);
    assert!(outcome.rotations.is_empty());
    assert_eq!(outcome.stable_couples.len(), 4);
    assert_eq!(outcome.statistics.get(Counters::Rotations), 0);
}

#[test]
fn test_opposed_rankings() {
    // Proposer m ranks receivers in order, receiver w ranks proposers in
    // reverse: M0 gives proposers their favourites, Mz the receivers theirs.
    let n = 3;
    let proposers = (0..n).map(|m| (0..n).map(|k| (m + k) % n).collect()).collect();
    let receivers = (0..n).map(|w| (0..n).map(|k| (w + 1 + k) % n).collect()).collect();
    let table = PreferenceTable::new(proposers, receivers).unwrap();
    let outcome = solve(&table);

    assert_eq!(outcome.proposer_optimal.to_indices(), vec![0, 1, 2]);
    assert_eq!(outcome.receiver_optimal.to_indices(), vec![2, 0, 1]);
    assert_eq!(outcome.rotations.len(), 2);
    assert_eq!(outcome.stable_couples.len(), 9);
    assert_eq!(outcome.matchings().len(), 3);
}

#[test]
fn test_rerun_is_identical() {
    let table = common::scenario();
    assert_eq!(solve(&table), solve(&table));
}
