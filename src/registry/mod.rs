//! Known datasets and model architectures.
//!
//! The configuration refers to corpora and architectures by name; this module defines
//! the registries those names must resolve against. A dataset name resolves to the
//! relative corpus path `data/<name>.txt`. Whether that file exists is the data
//! loader's concern, and whether the model directory is writable is the trainer's —
//! neither is checked here.

mod error;

use std::path::PathBuf;

pub use error::RegistryError;

/// Registered text corpora: dataset names and the path template they resolve through.
#[derive(Clone, Debug)]
pub struct DatasetRegistry {
    names: Vec<String>,
}

impl DatasetRegistry {
    /// Directory holding the corpora, relative to the working directory.
    pub const DATA_DIR: &'static str = "data";

    /// Returns the built-in registry: the corpora this project ships fetch scripts for.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(["shakespeare", "warandpeace"])
    }

    /// Builds a registry from names. Duplicates are skipped (first occurrence wins).
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        DatasetRegistry { names: out }
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The corpus path a dataset name maps to (`data/<name>.txt`), without any
    /// membership check. Prefer [`DatasetRegistry::resolve`] for user input.
    #[must_use]
    pub fn path_for(name: &str) -> PathBuf {
        PathBuf::from(Self::DATA_DIR).join(format!("{name}.txt"))
    }

    /// Resolves a registered dataset name to its corpus path.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownDataset`] when `name` is not registered.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, RegistryError> {
        if self.contains(name) {
            Ok(Self::path_for(name))
        } else {
            Err(RegistryError::UnknownDataset {
                name: name.to_string(),
                known: self.names.clone(),
            })
        }
    }

    /// Registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Registered model architecture names (the recurrent cell families the model
/// builder knows how to construct).
#[derive(Clone, Debug)]
pub struct ModelRegistry {
    names: Vec<String>,
}

impl ModelRegistry {
    /// Returns the built-in registry.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(["lstm", "gru"])
    }

    /// Builds a registry from names. Duplicates are skipped (first occurrence wins).
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        ModelRegistry { names: out }
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Checks that a model architecture name is registered.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownModel`] when `name` is not registered.
    pub fn check(&self, name: &str) -> Result<(), RegistryError> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(RegistryError::UnknownModel {
                name: name.to_string(),
                known: self.names.clone(),
            })
        }
    }

    /// Registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_datasets_resolve_to_corpus_paths() {
        let registry = DatasetRegistry::builtin();
        assert!(registry.contains("shakespeare"));
        let path = registry.resolve("shakespeare").unwrap();
        assert_eq!(path, PathBuf::from("data/shakespeare.txt"));
    }

    #[test]
    fn unknown_dataset_lists_known_names() {
        let registry = DatasetRegistry::builtin();
        let err = registry.resolve("klingon").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("klingon"));
        assert!(msg.contains("shakespeare"));
    }

    #[test]
    fn dataset_registry_skips_duplicates() {
        let registry = DatasetRegistry::new(["a", "b", "a"]);
        assert_eq!(registry.names(), ["a", "b"]);
    }

    #[test]
    fn path_for_applies_the_template() {
        assert_eq!(
            DatasetRegistry::path_for("warandpeace"),
            PathBuf::from("data/warandpeace.txt")
        );
    }

    #[test]
    fn builtin_models_include_lstm() {
        let registry = ModelRegistry::builtin();
        assert!(registry.check("lstm").is_ok());
        assert!(registry.check("gru").is_ok());
    }

    #[test]
    fn unknown_model_returns_error() {
        let registry = ModelRegistry::builtin();
        let err = registry.check("transformer").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownModel { .. }));
        assert!(err.to_string().contains("transformer"));
    }
}
