// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incidence matrix of stable couples.

use super::Matching;
use crate::person::{Proposer, Receiver};
use std::fmt;

/// `n × n` boolean matrix; `[m][w]` is set once `(m, w)` is known to be a
/// couple of some stable matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StableCouples {
    size: usize,
    cells: Vec<bool>,
}

impl StableCouples {
    /// An empty matrix for `size` persons per side.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Number of persons per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if `(m, w)` has been marked.
    #[inline]
    pub fn contains(&self, m: Proposer, w: Receiver) -> bool {
        self.cells[m.index() * self.size + w.index()]
    }

    /// Mark `(m, w)`.
    pub(crate) fn insert(&mut self, m: Proposer, w: Receiver) {
        self.cells[m.index() * self.size + w.index()] = true;
    }

    /// Mark every couple of `matching`.
    pub(crate) fn insert_matching(&mut self, matching: &Matching) {
        for (m, w) in matching.couples() {
            self.insert(m, w);
        }
    }

    /// Number of marked couples.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True if nothing is marked.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Marked couples, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Proposer, Receiver)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(move |(i, _)| (Proposer::new(i / size), Receiver::new(i % size)))
    }
}

/// 0/1 matrix, proposers down and receivers across.
impl fmt::Display for StableCouples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "     ")?;
        for w in Receiver::all(self.size) {
            write!(f, "{:>3}", w)?;
        }
        writeln!(f, " <- Receivers")?;
        for m in Proposer::all(self.size) {
            write!(f, "**{:>2}:", m)?;
            for w in Receiver::all(self.size) {
                write!(f, "{:>3}", u8::from(self.contains(m, w)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
