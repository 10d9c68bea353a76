//! Dataset split points: percentage boundaries partitioning a corpus into held-out
//! head, train, validation, and test segments.
//!
//! Validation at construction (and on deserialization) ensures boundaries are strictly
//! increasing and within `[0, 100]`, so a [`SplitPoints`] held by a
//! [`TrainingConfiguration`](crate::config::TrainingConfiguration) is always usable by
//! the data loader.

mod error;

use std::ops::Range;

use serde::{Deserialize, Serialize};

pub use error::SplitError;

/// Percentage boundaries `(head, train_end, validation_end, test_end)`.
///
/// `(0, 90, 95, 100)` reads: nothing held out before training, 0–90% train,
/// 90–95% validation, 95–100% test. A non-zero first boundary holds the head
/// of the corpus out of all three segments.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 4]", into = "[u8; 4]")]
pub struct SplitPoints {
    head: u8,
    train_end: u8,
    validation_end: u8,
    test_end: u8,
}

impl SplitPoints {
    /// Builds split points from the four boundaries.
    ///
    /// # Errors
    ///
    /// - [`SplitError::OutOfRange`] when a boundary exceeds 100.
    /// - [`SplitError::NotIncreasing`] when boundaries are not strictly increasing.
    pub fn new(
        head: u8,
        train_end: u8,
        validation_end: u8,
        test_end: u8,
    ) -> Result<Self, SplitError> {
        Self::from_slice(&[head, train_end, validation_end, test_end])
    }

    /// Builds split points from a raw boundary list.
    ///
    /// Range and ordering are checked before arity, so a malformed list reports
    /// its most specific problem first.
    ///
    /// # Errors
    ///
    /// - [`SplitError::OutOfRange`] when a boundary exceeds 100.
    /// - [`SplitError::NotIncreasing`] when boundaries are not strictly increasing.
    /// - [`SplitError::WrongCount`] when the list does not have four entries.
    pub fn from_slice(points: &[u8]) -> Result<Self, SplitError> {
        for &p in points {
            if p > 100 {
                return Err(SplitError::OutOfRange(p));
            }
        }
        for pair in points.windows(2) {
            if pair[1] <= pair[0] {
                return Err(SplitError::NotIncreasing {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        match *points {
            [head, train_end, validation_end, test_end] => Ok(SplitPoints {
                head,
                train_end,
                validation_end,
                test_end,
            }),
            _ => Err(SplitError::WrongCount { got: points.len() }),
        }
    }

    /// Returns `true` when a head segment is held out before the training data.
    #[must_use]
    pub fn has_held_out_head(&self) -> bool {
        self.head > 0
    }

    /// Held-out head segment; empty when the first boundary is 0.
    #[must_use]
    pub fn held_out(&self) -> Range<u8> {
        0..self.head
    }

    /// Training segment.
    #[must_use]
    pub fn train(&self) -> Range<u8> {
        self.head..self.train_end
    }

    /// Validation segment.
    #[must_use]
    pub fn validation(&self) -> Range<u8> {
        self.train_end..self.validation_end
    }

    /// Test segment.
    #[must_use]
    pub fn test(&self) -> Range<u8> {
        self.validation_end..self.test_end
    }

    /// The four raw boundaries, in order.
    #[must_use]
    pub fn boundaries(&self) -> [u8; 4] {
        [self.head, self.train_end, self.validation_end, self.test_end]
    }
}

impl Default for SplitPoints {
    /// `(0, 90, 95, 100)`: 90% train, 5% validation, 5% test, no held-out head.
    fn default() -> Self {
        SplitPoints {
            head: 0,
            train_end: 90,
            validation_end: 95,
            test_end: 100,
        }
    }
}

impl TryFrom<[u8; 4]> for SplitPoints {
    type Error = SplitError;

    fn try_from(boundaries: [u8; 4]) -> Result<Self, SplitError> {
        Self::from_slice(&boundaries)
    }
}

impl From<SplitPoints> for [u8; 4] {
    fn from(splits: SplitPoints) -> [u8; 4] {
        splits.boundaries()
    }
}

impl std::str::FromStr for SplitPoints {
    type Err = SplitError;

    /// Parses the comma-separated form used in env overrides, e.g. `0,90,95,100`.
    /// Surrounding parentheses are tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();
        let points: Vec<u8> = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u8>()
                    .map_err(|_| SplitError::InvalidBoundary(part.to_string()))
            })
            .collect::<Result<_, _>>()?;
        Self::from_slice(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_splits_are_the_standard_partition() {
        let splits = SplitPoints::default();
        assert_eq!(splits.boundaries(), [0, 90, 95, 100]);
        assert!(!splits.has_held_out_head());
        assert_eq!(splits.train(), 0..90);
        assert_eq!(splits.validation(), 90..95);
        assert_eq!(splits.test(), 95..100);
    }

    #[test]
    fn non_increasing_boundaries_are_rejected() {
        let result = SplitPoints::from_slice(&[90, 0, 95]);
        assert_eq!(
            result,
            Err(SplitError::NotIncreasing { prev: 90, next: 0 })
        );
    }

    #[test]
    fn boundary_above_hundred_is_rejected() {
        let result = SplitPoints::from_slice(&[0, 90, 105]);
        assert_eq!(result, Err(SplitError::OutOfRange(105)));
    }

    #[test]
    fn equal_boundaries_are_rejected() {
        assert!(matches!(
            SplitPoints::new(0, 90, 90, 100),
            Err(SplitError::NotIncreasing { prev: 90, next: 90 })
        ));
    }

    #[test]
    fn three_valid_boundaries_are_too_few() {
        let result = SplitPoints::from_slice(&[0, 90, 95]);
        assert_eq!(result, Err(SplitError::WrongCount { got: 3 }));
    }

    #[test]
    fn non_zero_head_is_held_out() {
        let splits = SplitPoints::new(5, 90, 95, 100).unwrap();
        assert!(splits.has_held_out_head());
        assert_eq!(splits.held_out(), 0..5);
        assert_eq!(splits.train(), 5..90);
    }

    #[test]
    fn from_str_parses_env_form() {
        let splits: SplitPoints = "0,90,95,100".parse().unwrap();
        assert_eq!(splits, SplitPoints::default());
        let with_parens: SplitPoints = "(0, 90, 95, 100)".parse().unwrap();
        assert_eq!(with_parens, SplitPoints::default());
    }

    #[test]
    fn from_str_rejects_garbage_boundary() {
        let result = "0,90,ninety-five,100".parse::<SplitPoints>();
        assert_eq!(
            result,
            Err(SplitError::InvalidBoundary("ninety-five".to_string()))
        );
    }

    #[test]
    fn split_error_display_names_the_problem() {
        assert!(SplitError::OutOfRange(105).to_string().contains("105"));
        assert!(SplitError::NotIncreasing { prev: 90, next: 0 }
            .to_string()
            .contains("strictly increasing"));
        assert!(SplitError::WrongCount { got: 3 }.to_string().contains("four"));
    }
}
