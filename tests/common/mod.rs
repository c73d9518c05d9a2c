// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use stable_gi::{Matching, PreferenceTable};

/// The three-person table with a single rotation.
pub fn scenario() -> PreferenceTable {
    PreferenceTable::new(
        vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 1, 2]],
        vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]],
    )
    .expect("scenario table is valid")
}

/// Every stable matching of `table`, found by trying all `n!` bijections.
///
/// Only usable for small `n`.
pub fn brute_force_stable(table: &PreferenceTable) -> Vec<Matching> {
    let mut found = Vec::new();
    let mut current: Vec<usize> = (0..table.size()).collect();
    permute(&mut current, 0, &mut |perm| {
        let matching = Matching::from_indices(perm);
        if matching.is_stable(table) {
            found.push(matching);
        }
    });
    found
}

fn permute(items: &mut Vec<usize>, k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

/// A random permutation of `0..n`.
pub fn permutation(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
}

/// A random valid table with `1..=max` persons per side.
pub fn table(max: usize) -> impl Strategy<Value = PreferenceTable> {
    (1..=max)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(permutation(n), n),
                prop::collection::vec(permutation(n), n),
            )
        })
        .prop_map(|(proposers, receivers)| {
            PreferenceTable::new(proposers, receivers).expect("permutation rows are valid")
        })
}
