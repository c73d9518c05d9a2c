// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotations and the pair-to-rotation lookup.

use crate::person::{Proposer, Receiver};
use std::fmt;

/// A rotation `ρ = (m_0, w_0), ..., (m_{k-1}, w_{k-1})`.
///
/// Each `(m_i, w_i)` is a couple of the matching the rotation is exposed in.
/// Eliminating it matches `m_i` with `w_{i+1}` (indices modulo `k`), which
/// every `m_i` likes less and every receiver likes more.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rotation {
    pairs: Vec<(Proposer, Receiver)>,
}

impl Rotation {
    /// Create a rotation from its pairs, in cycle order.
    ///
    /// # Panics
    ///
    /// Panics if `pairs` is empty.
    pub fn new(pairs: Vec<(Proposer, Receiver)>) -> Self {
        assert!(!pairs.is_empty(), "a rotation has at least one pair");
        Self { pairs }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false: a rotation has at least one pair.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The listed `(m_i, w_i)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (Proposer, Receiver)> + '_ {
        self.pairs.iter().copied()
    }

    /// The couples created by eliminating the rotation: `(m_i, w_{i+1})`.
    pub fn successors(&self) -> impl Iterator<Item = (Proposer, Receiver)> + '_ {
        let k = self.pairs.len();
        (0..k).map(move |i| (self.pairs[i].0, self.pairs[(i + 1) % k].1))
    }

    /// Proposers moved by the rotation.
    pub fn proposers(&self) -> impl Iterator<Item = Proposer> + '_ {
        self.pairs.iter().map(|&(m, _)| m)
    }

    /// Pairs as zero-based `(proposer, receiver)` indices.
    pub fn to_indices(&self) -> Vec<(usize, usize)> {
        self.pairs
            .iter()
            .map(|&(m, w)| (m.index(), w.index()))
            .collect()
    }
}

/// `(1,1),(2,2)` with one-based persons.
impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (m, w)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "({},{})", m, w)?;
        }
        Ok(())
    }
}

/// `n × n` lookup from a pair to the rotation that lists it.
///
/// A pair is listed by at most one rotation: once eliminated, it is removed
/// from the preference lists for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationIndex {
    size: usize,
    slots: Vec<Option<u32>>,
}

impl RotationIndex {
    /// An index with no entries.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            slots: vec![None; size * size],
        }
    }

    /// Record every pair of `rotation` as belonging to rotation `index`.
    pub(crate) fn record(&mut self, index: usize, rotation: &Rotation) {
        for (m, w) in rotation.pairs() {
            let slot = &mut self.slots[m.index() * self.size + w.index()];
            debug_assert!(slot.is_none(), "pair ({}, {}) listed twice", m, w);
            *slot = Some(index as u32);
        }
    }

    /// Position (in the rotation sequence) of the rotation listing `(m, w)`.
    pub fn rotation_of(&self, m: Proposer, w: Receiver) -> Option<usize> {
        self.slots[m.index() * self.size + w.index()].map(|index| index as usize)
    }
}
