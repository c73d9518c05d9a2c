// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matchings and the other values a solve produces.
//!
//! - [`Matching`]: a bijection from proposers to receivers
//! - [`StableCouples`]: pairs known to belong to some stable matching
//! - [`Rotation`]: a cyclic reassignment between two stable matchings
//! - [`RotationIndex`]: which rotation lists a given pair

pub mod couples;
pub mod rotation;

pub use couples::StableCouples;
pub use rotation::{Rotation, RotationIndex};

use crate::person::{Proposer, Receiver};
use crate::preferences::PreferenceTable;
use std::fmt;

/// A perfect matching, stored as each proposer's receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matching {
    partners: Vec<Receiver>,
}

impl Matching {
    /// Wrap a proposer-indexed partner array.
    ///
    /// # Panics
    ///
    /// Panics if `partners` is not a permutation of `0..partners.len()`.
    pub fn new(partners: Vec<Receiver>) -> Self {
        let matching = Self { partners };
        assert!(
            matching.is_bijection(),
            "not a bijection: {:?}",
            matching.partners
        );
        matching
    }

    /// Build from zero-based receiver indices.
    ///
    /// # Panics
    ///
    /// Panics if `indices` is not a permutation of `0..indices.len()`.
    pub fn from_indices(indices: &[usize]) -> Self {
        Self::new(indices.iter().map(|&w| Receiver::new(w)).collect())
    }

    /// Build from a receiver-indexed array of proposers (the inverse view).
    pub(crate) fn from_receiver_partners(holders: &[Proposer]) -> Self {
        let mut partners = vec![Receiver::new(0); holders.len()];
        for (w, m) in holders.iter().enumerate() {
            partners[m.index()] = Receiver::new(w);
        }
        Self::new(partners)
    }

    /// Number of couples.
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// True for the empty matching.
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// The receiver matched to `m`.
    #[inline]
    pub fn partner(&self, m: Proposer) -> Receiver {
        self.partners[m.index()]
    }

    /// The proposer matched to `w` (O(n)).
    pub fn proposer_of(&self, w: Receiver) -> Proposer {
        let m = self
            .partners
            .iter()
            .position(|&x| x == w)
            .unwrap_or_else(|| panic!("receiver {:?} is unmatched", w));
        Proposer::new(m)
    }

    /// Receiver-indexed view: `result[w]` is the proposer matched to `w`.
    pub fn receiver_partners(&self) -> Vec<Proposer> {
        let mut holders = vec![Proposer::new(0); self.len()];
        for (m, w) in self.couples() {
            holders[w.index()] = m;
        }
        holders
    }

    /// Every couple, in proposer order.
    pub fn couples(&self) -> impl Iterator<Item = (Proposer, Receiver)> + '_ {
        self.partners
            .iter()
            .enumerate()
            .map(|(m, &w)| (Proposer::new(m), w))
    }

    /// Partner array as zero-based indices.
    pub fn to_indices(&self) -> Vec<usize> {
        self.partners.iter().map(|w| w.index()).collect()
    }

    /// True if every receiver appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.len()];
        for w in &self.partners {
            match seen.get_mut(w.index()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Replace `m`'s partner.
    ///
    /// The matching is only a bijection again once a whole rotation has been
    /// applied.
    pub(crate) fn set_partner(&mut self, m: Proposer, w: Receiver) {
        self.partners[m.index()] = w;
    }

    /// Apply a rotation: every listed proposer takes the receiver of the next
    /// pair, cyclically.
    ///
    /// # Panics
    ///
    /// Panics if a pair of the rotation is not a couple of this matching.
    pub fn apply(&mut self, rotation: &Rotation) {
        for (m, w) in rotation.pairs() {
            assert_eq!(
                self.partner(m),
                w,
                "rotation pair ({}, {}) is not a couple",
                m,
                w
            );
        }
        for (m, w) in rotation.successors() {
            self.set_partner(m, w);
        }
    }

    /// Pairs `(m, w)` that prefer each other to their assigned partners.
    pub fn blocking_pairs(&self, table: &PreferenceTable) -> Vec<(Proposer, Receiver)> {
        let holders = self.receiver_partners();
        let mut blocking = Vec::new();
        for (m, current) in self.couples() {
            // Only receivers `m` ranks above his partner can block.
            for &w in table.proposer_row(m) {
                if w == current {
                    break;
                }
                if table.receiver_prefers(w, m, holders[w.index()]) {
                    blocking.push((m, w));
                }
            }
        }
        blocking
    }

    /// True if no blocking pair exists.
    pub fn is_stable(&self, table: &PreferenceTable) -> bool {
        self.blocking_pairs(table).is_empty()
    }

    /// Attach a label for display, e.g. `M0 =  1 2 3`.
    pub fn labelled<'a>(&'a self, label: &'a str) -> Labelled<'a> {
        Labelled {
            label,
            matching: self,
        }
    }
}

/// Partners one-based, separated by spaces.
impl fmt::Display for Matching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in &self.partners {
            write!(f, "{:>2}", w)?;
        }
        Ok(())
    }
}

/// A matching printed after a label.
pub struct Labelled<'a> {
    label: &'a str,
    matching: &'a Matching,
}

impl fmt::Display for Labelled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.label, self.matching)
    }
}
