//! Core configuration value types: numeric [`Precision`] and input [`EncodingStrategy`].

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Floating-point bit width for training computation.
///
/// Defaults to [`Precision::Full`]. The width is an explicit setting and is never
/// inferred from the selected device; 16-bit on an accelerator is an opt-in,
/// not an automatic consequence of detecting one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Precision {
    /// 16-bit floating point.
    #[serde(rename = "16")]
    Half,

    /// 32-bit floating point.
    #[default]
    #[serde(rename = "32")]
    Full,
}

impl Precision {
    /// Bit width as a number (16 or 32).
    #[must_use]
    pub fn bits(self) -> u8 {
        match self {
            Precision::Half => 16,
            Precision::Full => 32,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Error returned when parsing a [`Precision`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePrecisionError(String);

impl fmt::Display for ParsePrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown precision {:?} (expected 16 or 32)", self.0)
    }
}

impl std::error::Error for ParsePrecisionError {}

impl std::str::FromStr for Precision {
    type Err = ParsePrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16" => Ok(Precision::Half),
            "32" => Ok(Precision::Full),
            other => Err(ParsePrecisionError(other.to_string())),
        }
    }
}

/// How input characters are presented to the first recurrent layer.
///
/// Folds the "embedding dimension 0 means one-hot" convention of flat settings
/// surfaces into the type: a learned embedding always carries a non-zero
/// dimension, so consumers never have to remember to check for zero.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingStrategy {
    /// One-hot vectors over the vocabulary; no learned embedding table.
    #[default]
    OneHot,

    /// Learned embedding table with the given dimension.
    Embedding(NonZeroUsize),
}

impl EncodingStrategy {
    /// Maps a raw embedding dimension to a strategy; 0 selects one-hot.
    #[must_use]
    pub fn from_dim(dim: usize) -> Self {
        match NonZeroUsize::new(dim) {
            Some(dim) => EncodingStrategy::Embedding(dim),
            None => EncodingStrategy::OneHot,
        }
    }

    /// Raw embedding dimension; 0 for one-hot.
    #[must_use]
    pub fn dim(self) -> usize {
        match self {
            EncodingStrategy::OneHot => 0,
            EncodingStrategy::Embedding(dim) => dim.get(),
        }
    }

    /// Returns `true` when a learned embedding is configured.
    #[must_use]
    pub fn is_embedding(self) -> bool {
        matches!(self, EncodingStrategy::Embedding(_))
    }
}
