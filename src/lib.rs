// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Extremal stable matchings and rotations for the Stable Marriage Problem.
//!
//! Given complete strict rankings for `n` proposers and `n` receivers, the
//! solver finds the proposer-optimal matching `M0`, the receiver-optimal
//! matching `Mz`, and the sequence of rotations that leads from one to the
//! other, following Gusfield & Irving's extension of Gale–Shapley.
//!
//! # Architecture
//!
//! ## Preference lists
//!
//! Every person's ranking is a circular doubly-linked list in an index arena,
//! with a reverse lookup table so that any `(proposer, receiver)` pair can be
//! deleted from both sides in O(1). Lists only ever shrink.
//!
//! ## Phases
//!
//! 1. **Construct**: build the lists from a validated [`PreferenceTable`]
//! 2. **Reduce**: two deferred-acceptance passes give `M0`, `Mz` and the
//!    reduced lists
//! 3. **Rotate**: follow "next proposal" pointers to find, eliminate, and
//!    record each rotation until `M0` has become `Mz`
//!
//! One owned [`SolverContext`] carries the lists through all three phases.
//! The whole computation is O(n²) in time and memory.
//!
//! # References
//!
//! - Gusfield, D. and Irving, R. W. (1989). *The Stable Marriage Problem:
//!   Structure and Algorithms*. MIT Press.

pub mod errors;
pub mod matching;
pub mod person;
pub mod preferences;
pub mod solver;
pub mod statistics;
pub mod store;
pub mod worklist;

// Re-export commonly used types
pub use errors::{ParseError, PreferenceError};
pub use matching::{Matching, Rotation, StableCouples};
pub use person::{Proposer, Receiver};
pub use preferences::PreferenceTable;
pub use solver::{solve, MarriageOutcome, SolverContext};
