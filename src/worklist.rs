// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded stack of persons with O(1) membership test.
//!
//! Deferred acceptance uses it as the pool of free persons; the rotation
//! search uses it as the current path through the "next proposal" graph,
//! where membership detects that the path has closed into a cycle.

use crate::person::Person;

/// A stack of persons bounded at `2n` entries.
///
/// # Implementation Notes
///
/// The membership flag of a person is cleared on `pop`, so a person pushed
/// twice is reported absent once either copy is popped. Neither solver phase
/// ever holds the same person twice.
#[derive(Debug, Clone)]
pub struct Worklist<P: Person> {
    /// Stacked persons, bottom first.
    entries: Vec<P>,
    /// `present[p]` is true while `p` is on the stack.
    present: Vec<bool>,
    /// Maximum number of entries.
    capacity: usize,
}

impl<P: Person> Worklist<P> {
    /// Create an empty worklist for a universe of `size` persons.
    pub fn new(size: usize) -> Self {
        let capacity = 2 * size;
        Self {
            entries: Vec::with_capacity(capacity),
            present: vec![false; size],
            capacity,
        }
    }

    /// Push a person.
    ///
    /// # Panics
    ///
    /// Panics if the stack already holds `2n` entries (indicates a bug in the
    /// solver; valid input never gets there).
    pub fn push(&mut self, person: P) {
        if self.entries.len() >= self.capacity {
            panic!("Worklist overflow: exceeded {} entries", self.capacity);
        }
        self.present[person.index()] = true;
        self.entries.push(person);
    }

    /// Pop the most recently pushed person.
    pub fn pop(&mut self) -> Option<P> {
        let person = self.entries.pop()?;
        self.present[person.index()] = false;
        Some(person)
    }

    /// The most recently pushed person, without removing it.
    pub fn top(&self) -> Option<P> {
        self.entries.last().copied()
    }

    /// True if `person` is on the stack.
    #[inline]
    pub fn contains(&self, person: P) -> bool {
        self.present[person.index()]
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
