// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated preference rankings.
//!
//! A [`PreferenceTable`] holds one strict, complete ranking per person on each
//! side, most preferred first. Construction checks that every row is a
//! permutation of the other universe, so the solver never has to.
//!
//! The table also keeps the inverse rankings (`rank[person][partner]`) which
//! give O(1) comparisons for the stability checks in [`crate::matching`].

pub mod parse;

use crate::errors::PreferenceError;
use crate::person::{Proposer, Receiver, Side, MAX_PEOPLE};

/// Complete strict rankings for `n` proposers and `n` receivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable {
    size: usize,
    /// `proposer_ranks[m][k]` is the receiver that `m` ranks `k`-th.
    proposer_ranks: Vec<Vec<Receiver>>,
    /// `receiver_ranks[w][k]` is the proposer that `w` ranks `k`-th.
    receiver_ranks: Vec<Vec<Proposer>>,
    /// `proposer_rank_of[m * n + w]` is the position of `w` in `m`'s row.
    proposer_rank_of: Vec<u16>,
    /// `receiver_rank_of[w * n + m]` is the position of `m` in `w`'s row.
    receiver_rank_of: Vec<u16>,
}

impl PreferenceTable {
    /// Build a table from zero-based ranking rows.
    ///
    /// `proposer_ranks[m]` lists receivers in `m`'s order of preference and
    /// `receiver_ranks[w]` lists proposers in `w`'s order of preference.
    ///
    /// # Errors
    ///
    /// Returns a [`PreferenceError`] if the sides differ in size, the size
    /// exceeds [`MAX_PEOPLE`], or any row is not a permutation of `0..n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stable_gi::preferences::PreferenceTable;
    ///
    /// let table = PreferenceTable::new(
    ///     vec![vec![0, 1], vec![1, 0]],
    ///     vec![vec![1, 0], vec![0, 1]],
    /// ).unwrap();
    /// assert_eq!(table.size(), 2);
    ///
    /// assert!(PreferenceTable::new(vec![vec![0, 0]], vec![vec![0]]).is_err());
    /// ```
    pub fn new(
        proposer_ranks: Vec<Vec<usize>>,
        receiver_ranks: Vec<Vec<usize>>,
    ) -> Result<Self, PreferenceError> {
        let size = proposer_ranks.len();
        if receiver_ranks.len() != size {
            return Err(PreferenceError::SizeMismatch {
                proposers: size,
                receivers: receiver_ranks.len(),
            });
        }
        if size > MAX_PEOPLE {
            return Err(PreferenceError::TooManyPeople {
                size,
                max: MAX_PEOPLE,
            });
        }

        let proposer_rank_of = inverse_ranks(Side::Proposer, &proposer_ranks, size)?;
        let receiver_rank_of = inverse_ranks(Side::Receiver, &receiver_ranks, size)?;

        Ok(Self {
            size,
            proposer_ranks: proposer_ranks
                .iter()
                .map(|row| row.iter().map(|&w| Receiver::new(w)).collect())
                .collect(),
            receiver_ranks: receiver_ranks
                .iter()
                .map(|row| row.iter().map(|&m| Proposer::new(m)).collect())
                .collect(),
            proposer_rank_of,
            receiver_rank_of,
        })
    }

    /// Number of persons on each side.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Receivers in `m`'s order of preference.
    pub fn proposer_row(&self, m: Proposer) -> &[Receiver] {
        &self.proposer_ranks[m.index()]
    }

    /// Proposers in `w`'s order of preference.
    pub fn receiver_row(&self, w: Receiver) -> &[Proposer] {
        &self.receiver_ranks[w.index()]
    }

    /// Position of `w` in `m`'s ranking (0 = most preferred).
    #[inline]
    pub fn proposer_rank(&self, m: Proposer, w: Receiver) -> usize {
        self.proposer_rank_of[m.index() * self.size + w.index()] as usize
    }

    /// Position of `m` in `w`'s ranking (0 = most preferred).
    #[inline]
    pub fn receiver_rank(&self, w: Receiver, m: Proposer) -> usize {
        self.receiver_rank_of[w.index() * self.size + m.index()] as usize
    }

    /// True if `m` strictly prefers `a` to `b`.
    pub fn proposer_prefers(&self, m: Proposer, a: Receiver, b: Receiver) -> bool {
        self.proposer_rank(m, a) < self.proposer_rank(m, b)
    }

    /// True if `w` strictly prefers `a` to `b`.
    pub fn receiver_prefers(&self, w: Receiver, a: Proposer, b: Proposer) -> bool {
        self.receiver_rank(w, a) < self.receiver_rank(w, b)
    }
}

/// Check that every row is a permutation of `0..size` and return the flattened
/// inverse (`result[person * size + value] = position`).
fn inverse_ranks(
    side: Side,
    rows: &[Vec<usize>],
    size: usize,
) -> Result<Vec<u16>, PreferenceError> {
    const UNSEEN: u16 = u16::MAX;
    let mut inverse = vec![UNSEEN; size * size];

    for (person, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(PreferenceError::RowLength {
                side,
                person,
                len: row.len(),
                expected: size,
            });
        }
        let slots = &mut inverse[person * size..(person + 1) * size];
        for (position, &value) in row.iter().enumerate() {
            if value >= size {
                return Err(PreferenceError::OutOfRange {
                    side,
                    person,
                    value,
                    size,
                });
            }
            if slots[value] != UNSEEN {
                return Err(PreferenceError::Duplicate {
                    side,
                    person,
                    value,
                });
            }
            slots[value] = position as u16;
        }
    }

    Ok(inverse)
}
