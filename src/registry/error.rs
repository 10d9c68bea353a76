//! Errors produced when resolving names against the registries.
//!
//! All errors from the registry module use [`RegistryError`]. The config module
//! converts these into its own validation error.

use std::fmt;

/// Errors produced by the registry module.
///
/// # Variants
///
/// - **UnknownDataset**: The dataset name is not registered.
///   *When*: Resolving a dataset name with [`DatasetRegistry::resolve`](super::DatasetRegistry::resolve).
///   *Recovery*: Use one of the registered names (listed in the message), or build a registry that includes the corpus.
///
/// - **UnknownModel**: The model architecture name is not registered.
///   *When*: Checking a model name with [`ModelRegistry::check`](super::ModelRegistry::check).
///   *Recovery*: Use one of the registered architecture names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The dataset name is not in the registry.
    UnknownDataset {
        /// The name that failed to resolve.
        name: String,
        /// Registered dataset names, in registration order.
        known: Vec<String>,
    },

    /// The model architecture name is not in the registry.
    UnknownModel {
        /// The name that failed to resolve.
        name: String,
        /// Registered architecture names, in registration order.
        known: Vec<String>,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownDataset { name, known } => {
                write!(f, "dataset name {name:?} not recognized (known: {})", known.join(", "))
            }
            RegistryError::UnknownModel { name, known } => {
                write!(f, "model name {name:?} not recognized (known: {})", known.join(", "))
            }
        }
    }
}

impl std::error::Error for RegistryError {}
