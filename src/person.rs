// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Person indices for the two matched universes.
//!
//! Proposers and receivers are both numbered `0..n`, but they live in
//! disjoint universes. Each gets its own newtype so that a proposer can never
//! be used where a receiver is expected.
//!
//! # Examples
//!
//! ```
//! use stable_gi::person::{Person, Proposer, Receiver};
//!
//! let m = Proposer::new(0);
//! let w = Receiver::new(2);
//! assert_eq!(m.index(), 0);
//! assert_eq!(format!("{}", w), "3"); // displayed one-based
//! ```

use std::fmt;
use strum_macros::Display;

/// Largest supported problem size.
///
/// Every arena node index (there are `2 * n * (n + 1)` of them) must fit in a
/// `u32`, and persons are stored as `u16`.
pub const MAX_PEOPLE: usize = 4096;

/// Which universe a person belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    #[strum(serialize = "proposer")]
    Proposer,
    #[strum(serialize = "receiver")]
    Receiver,
}

/// Common behaviour of [`Proposer`] and [`Receiver`].
///
/// Lets the preference lists, the worklist and the two deferred-acceptance
/// passes be written once for both universes.
pub trait Person: Copy + Eq + fmt::Debug + fmt::Display {
    /// The universe this person type indexes.
    const SIDE: Side;

    /// The universe on the other side of the matching.
    type Partner: Person<Partner = Self>;

    /// Create a person, panicking if `index >= MAX_PEOPLE`.
    fn new(index: usize) -> Self;

    /// Zero-based index, for array access.
    fn index(self) -> usize;
}

macro_rules! person_type {
    ($(#[$doc:meta])* $name:ident, $side:ident, $partner:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u16);

        impl $name {
            /// Create a new person, panicking if out of range.
            ///
            /// # Panics
            ///
            /// Panics if `index >= MAX_PEOPLE`.
            pub fn new(index: usize) -> Self {
                assert!(
                    index < MAX_PEOPLE,
                    concat!(stringify!($name), " out of range: {}"),
                    index
                );
                Self(index as u16)
            }

            /// Try to create a new person, returning None if out of range.
            pub fn try_new(index: usize) -> Option<Self> {
                if index < MAX_PEOPLE {
                    Some(Self(index as u16))
                } else {
                    None
                }
            }

            /// Get the person as a usize (for array indexing).
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Iterate over the first `n` persons of this universe.
            pub fn all(n: usize) -> impl Iterator<Item = Self> + Clone {
                (0..n).map(Self::new)
            }
        }

        impl Person for $name {
            const SIDE: Side = Side::$side;
            type Partner = $partner;

            fn new(index: usize) -> Self {
                $name::new(index)
            }

            #[inline]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        /// Persons are displayed one-based, as in printed preference tables.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&(self.index() + 1), f)
            }
        }
    };
}

person_type!(
    /// A member of the proposing universe (historically "men").
    Proposer,
    Proposer,
    Receiver
);

person_type!(
    /// A member of the receiving universe (historically "women").
    Receiver,
    Receiver,
    Proposer
);
