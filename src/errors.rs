// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for preference input.
//!
//! The solver itself cannot fail on a validated [`PreferenceTable`]; every
//! recoverable error is raised while building or parsing one.
//!
//! [`PreferenceTable`]: crate::preferences::PreferenceTable

use crate::person::Side;
use thiserror::Error;

/// A preference table that is not a pair of complete, strict rankings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// The two universes have different sizes.
    #[error("{proposers} proposer rows but {receivers} receiver rows")]
    SizeMismatch { proposers: usize, receivers: usize },

    /// More persons than the index types can address.
    #[error("problem size {size} exceeds the maximum of {max}")]
    TooManyPeople { size: usize, max: usize },

    /// A ranking row does not list every member of the other universe.
    #[error("{side} {person} ranks {len} persons, expected {expected}")]
    RowLength {
        side: Side,
        person: usize,
        len: usize,
        expected: usize,
    },

    /// A ranking row names a person outside `0..n`.
    #[error("{side} {person} ranks out-of-range person {value} (size {size})")]
    OutOfRange {
        side: Side,
        person: usize,
        value: usize,
        size: usize,
    },

    /// A ranking row names the same person twice (ties are not supported).
    #[error("{side} {person} ranks person {value} more than once")]
    Duplicate {
        side: Side,
        person: usize,
        value: usize,
    },
}

/// Errors raised while reading the textual preference format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input holds no problem size.
    #[error("missing problem size")]
    MissingSize,

    /// A token is not a positive integer.
    #[error("line {line}: invalid token {token:?}")]
    InvalidToken { line: usize, token: String },

    /// The input ended before all ranking rows were read.
    #[error("expected {expected} ranking rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    /// Content after the last ranking row.
    #[error("line {line}: unexpected trailing data")]
    TrailingData { line: usize },

    /// The rows were read but do not form valid rankings.
    #[error(transparent)]
    Preference(#[from] PreferenceError),
}
