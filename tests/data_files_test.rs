// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The bundled preference files parse and solve as documented.

mod common;

use stable_gi::{solve, PreferenceTable};

#[test]
fn test_demo_file_is_the_scenario() {
    let table: PreferenceTable = include_str!("../data/demo.txt").parse().unwrap();
    assert_eq!(table, common::scenario());
}

#[test]
fn test_cyclic_file() {
    let table: PreferenceTable = include_str!("../data/cyclic4.txt").parse().unwrap();
    let outcome = solve(&table);

    assert_eq!(outcome.proposer_optimal.to_indices(), vec![0, 1, 2, 3]);
    assert_eq!(outcome.receiver_optimal.to_indices(), vec![3, 0, 1, 2]);
    assert_eq!(outcome.rotations.len(), 3);
    assert!(outcome.rotations.iter().all(|rotation| rotation.len() == 4));

    // Every shift by k is reached in turn.
    for (k, matching) in outcome.matchings().iter().enumerate() {
        let expected: Vec<usize> = (0..4).map(|m| (m + k) % 4).collect();
        assert_eq!(matching.to_indices(), expected);
    }
    assert_eq!(outcome.stable_couples.len(), 16);
    // The reduced lists are still complete: no pair is ruled out before the rotations.
    assert!(outcome.reduced.proposers.iter().all(|row| row.len() == 4));
}
