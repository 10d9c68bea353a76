//! Errors produced when building dataset split points.
//!
//! All errors from the split module use [`SplitError`]. The config module converts
//! these into its own validation error, keeping the field name in the message.

use std::fmt;

/// Errors produced by the split module.
///
/// # Variants
///
/// - **OutOfRange**: A boundary lies outside `[0, 100]`.
///   *When*: Constructing [`SplitPoints`](super::SplitPoints) from raw percentages.
///   *Recovery*: Correct the boundary; each value is a percentage position in the corpus.
///
/// - **NotIncreasing**: Two consecutive boundaries are not strictly increasing.
///   *When*: Constructing [`SplitPoints`](super::SplitPoints).
///   *Recovery*: Reorder or respace the boundaries; every segment must be non-empty.
///
/// - **WrongCount**: The boundary list does not have exactly four entries.
///   *When*: Constructing [`SplitPoints`](super::SplitPoints) from a slice or parsed string.
///   *Recovery*: Provide `head, train_end, validation_end, test_end`.
///
/// - **InvalidBoundary**: A boundary could not be parsed as a percentage.
///   *When*: Parsing [`SplitPoints`](super::SplitPoints) from a string (e.g. an env override).
///   *Recovery*: Use comma-separated integers, e.g. `0,90,95,100`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// A boundary exceeds the percentage range.
    OutOfRange(u8),

    /// Boundaries are not strictly increasing.
    NotIncreasing {
        /// The earlier boundary.
        prev: u8,
        /// The boundary that failed to exceed it.
        next: u8,
    },

    /// The boundary list does not have four entries.
    WrongCount {
        /// Number of boundaries actually given.
        got: usize,
    },

    /// A boundary string could not be parsed as a percentage.
    InvalidBoundary(String),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::OutOfRange(p) => write!(f, "split point {p} outside 0..=100"),
            SplitError::NotIncreasing { prev, next } => {
                write!(f, "split points must be strictly increasing ({prev} then {next})")
            }
            SplitError::WrongCount { got } => {
                write!(f, "expected four split boundaries, got {got}")
            }
            SplitError::InvalidBoundary(s) => write!(f, "invalid split boundary {s:?}"),
        }
    }
}

impl std::error::Error for SplitError {}
