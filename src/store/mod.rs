// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The shrinking preference structure shared by every solver phase.
//!
//! [`PreferenceStore`] owns one [`RankingLists`] per side. The only mutation is
//! [`PreferenceStore::remove`], which deletes a pair from both sides at once,
//! so a pair is always either in both lists or in neither.

pub mod lists;

pub use lists::{ListIter, RankingLists};

use crate::person::{Proposer, Receiver};
use crate::preferences::PreferenceTable;
use std::fmt;
use tracing::trace;

/// Both sides' ranking lists plus the deletion count.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    proposers: RankingLists<Proposer>,
    receivers: RankingLists<Receiver>,
    removed: usize,
}

impl PreferenceStore {
    /// Build full lists for every person in O(n²).
    pub fn new(table: &PreferenceTable) -> Self {
        let proposer_rows: Vec<&[Receiver]> = Proposer::all(table.size())
            .map(|m| table.proposer_row(m))
            .collect();
        let receiver_rows: Vec<&[Proposer]> = Receiver::all(table.size())
            .map(|w| table.receiver_row(w))
            .collect();

        Self {
            proposers: RankingLists::new(&proposer_rows),
            receivers: RankingLists::new(&receiver_rows),
            removed: 0,
        }
    }

    /// Number of persons on each side.
    #[inline]
    pub fn size(&self) -> usize {
        self.proposers.size()
    }

    /// Proposers' lists (entries are receivers).
    #[inline]
    pub fn proposers(&self) -> &RankingLists<Proposer> {
        &self.proposers
    }

    /// Receivers' lists (entries are proposers).
    #[inline]
    pub fn receivers(&self) -> &RankingLists<Receiver> {
        &self.receivers
    }

    /// Number of pairs deleted so far.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Number of pairs still present.
    pub fn live_pairs(&self) -> usize {
        self.size() * self.size() - self.removed
    }

    /// Delete the pair `(m, w)` from both `m`'s and `w`'s lists.
    pub fn remove(&mut self, m: Proposer, w: Receiver) {
        trace!(proposer = m.index(), receiver = w.index(), "remove pair");
        self.proposers.unlink(m, w);
        self.receivers.unlink(w, m);
        self.removed += 1;
    }

    /// Delete every proposer that `w` ranks below `keep`.
    ///
    /// Returns the number of pairs deleted.
    ///
    /// # Panics
    ///
    /// Panics if `keep` is no longer in `w`'s list.
    pub fn truncate_receiver(&mut self, w: Receiver, keep: Proposer) -> usize {
        let mut deleted = 0;
        loop {
            match self.receivers.last(w) {
                Some(m) if m == keep => return deleted,
                Some(m) => {
                    self.remove(m, w);
                    deleted += 1;
                }
                None => panic!("proposer {:?} missing from list of {:?}", keep, w),
            }
        }
    }

    /// Delete every receiver that `m` ranks below `keep`.
    ///
    /// Returns the number of pairs deleted.
    ///
    /// # Panics
    ///
    /// Panics if `keep` is no longer in `m`'s list.
    pub fn truncate_proposer(&mut self, m: Proposer, keep: Receiver) -> usize {
        let mut deleted = 0;
        loop {
            match self.proposers.last(m) {
                Some(w) if w == keep => return deleted,
                Some(w) => {
                    self.remove(m, w);
                    deleted += 1;
                }
                None => panic!("receiver {:?} missing from list of {:?}", keep, m),
            }
        }
    }

    /// Copy out every live list.
    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            proposers: Proposer::all(self.size())
                .map(|m| self.proposers.iter(m).collect())
                .collect(),
            receivers: Receiver::all(self.size())
                .map(|w| self.receivers.iter(w).collect())
                .collect(),
        }
    }
}

/// An owned copy of every live preference list at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSnapshot {
    /// `proposers[m]`: receivers still in `m`'s list, best first.
    pub proposers: Vec<Vec<Receiver>>,
    /// `receivers[w]`: proposers still in `w`'s list, best first.
    pub receivers: Vec<Vec<Proposer>>,
}

impl PreferenceSnapshot {
    /// True if `(m, w)` is present in the snapshot.
    pub fn contains(&self, m: Proposer, w: Receiver) -> bool {
        self.proposers[m.index()].contains(&w)
    }
}

/// One line per index: the proposer's list, then the receiver's list.
impl fmt::Display for PreferenceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.proposers.len();
        let width = 3 * n;
        writeln!(f, "{:<5}{:<width$} | Receivers", "", "Proposers", width = width)?;
        for i in 0..n {
            let left: String = self.proposers[i].iter().map(|w| format!("{:>3}", w)).collect();
            let right: String = self.receivers[i].iter().map(|m| format!("{:>3}", m)).collect();
            writeln!(f, "**{:>2}:{:<width$} |{}", i + 1, left, right, width = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PreferenceTable {
        PreferenceTable::new(
            vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 1, 2]],
            vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_remove_is_mutual() {
        let mut store = PreferenceStore::new(&table());
        let (m, w) = (Proposer::new(1), Receiver::new(0));
        assert_eq!(store.live_pairs(), 9);

        store.remove(m, w);
        assert!(!store.proposers().contains(m, w));
        assert!(!store.receivers().contains(w, m));
        assert_eq!(store.proposers().count(m), 2);
        assert_eq!(store.receivers().count(w), 2);
        assert_eq!(store.removed(), 1);
        assert_eq!(store.live_pairs(), 8);
    }

    #[test]
    fn test_truncate_receiver() {
        let mut store = PreferenceStore::new(&table());
        // Receiver 1 ranks 0, 1, 2: keeping 0 deletes 2 then 1.
        let w = Receiver::new(1);
        assert_eq!(store.truncate_receiver(w, Proposer::new(0)), 2);
        assert_eq!(store.receivers().last(w), Some(Proposer::new(0)));
        assert!(!store.proposers().contains(Proposer::new(2), w));
        assert!(!store.proposers().contains(Proposer::new(1), w));
        assert_eq!(store.truncate_receiver(w, Proposer::new(0)), 0);
    }

    #[test]
    fn test_truncate_proposer() {
        let mut store = PreferenceStore::new(&table());
        let m = Proposer::new(1);
        assert_eq!(store.truncate_proposer(m, Receiver::new(0)), 1);
        let left: Vec<Receiver> = store.proposers().iter(m).collect();
        assert_eq!(left, vec![Receiver::new(1), Receiver::new(0)]);
    }

    #[test]
    #[should_panic(expected = "missing from list")]
    fn test_truncate_missing_keep() {
        let mut store = PreferenceStore::new(&table());
        let w = Receiver::new(2);
        store.remove(Proposer::new(1), w);
        store.truncate_receiver(w, Proposer::new(1));
    }

    #[test]
    fn test_snapshot() {
        let mut store = PreferenceStore::new(&table());
        store.remove(Proposer::new(2), Receiver::new(0));
        let snapshot = store.snapshot();
        assert!(!snapshot.contains(Proposer::new(2), Receiver::new(0)));
        assert!(snapshot.contains(Proposer::new(2), Receiver::new(1)));
        assert_eq!(snapshot.receivers[0], vec![Proposer::new(1), Proposer::new(0)]);

        let text = snapshot.to_string();
        assert!(text.contains("** 3:  2  3 "));
        assert_eq!(text.lines().count(), 4);
    }
}
