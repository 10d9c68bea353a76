//! Configuration for a character-level recurrent language-model trainer.
//!
//! Load from environment via [`from_env`] and validate with
//! [`TrainingConfiguration::validate`]. Default values and env key names are
//! centralized in the `constants` submodule. The compute device is resolved through
//! an injected [`AcceleratorProbe`](crate::device::AcceleratorProbe), so loading
//! needs no real hardware; everything else is a pure, synchronous computation.

mod builder;
mod constants;
mod error;
mod types;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_DATASET, DEFAULT_DROPOUT, DEFAULT_GRAD_CLIP,
    DEFAULT_HIDDEN_SIZE, DEFAULT_LEARNING_RATE, DEFAULT_MAX_EPOCHS, DEFAULT_MODEL,
    DEFAULT_MODEL_DIR, DEFAULT_N_LAYERS, DEFAULT_SEQ_LEN,
};

use crate::device::Device;
use crate::registry::{DatasetRegistry, ModelRegistry};
use crate::split::SplitPoints;

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;
pub use types::{EncodingStrategy, ParsePrecisionError, Precision};

/// Central configuration for the trainer, data loader, model builder, and
/// persistence layer.
///
/// Constructed once at process start (see [`from_env`]) and read-only thereafter.
/// Consumers share it by reference; since nothing mutates it after load, concurrent
/// reads from multiple threads need no locking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfiguration {
    /// Dataset name; must be registered in the [`DatasetRegistry`].
    pub dataset: String,
    /// Corpus path derived from the dataset name (`data/<name>.txt`). Existence is
    /// checked by the data loader, not here.
    pub dataset_path: PathBuf,
    /// Directory trained models are written to.
    pub model_dir: PathBuf,
    /// Compute device, resolved through the accelerator probe at load time.
    pub device: Device,
    /// Number of stacked recurrent layers.
    pub n_layers: usize,
    /// Training window length, in characters.
    pub seq_len: usize,
    /// Hidden state size of each recurrent layer.
    pub hidden_size: usize,
    /// Training batch size.
    pub batch_size: usize,
    /// Window length used when sampling text; defaults to `seq_len`.
    pub predict_seq_len: usize,
    /// Optimizer learning rate.
    pub learning_rate: f64,
    /// Maximum gradient norm before updates are clipped.
    pub grad_clip: f64,
    /// Dropout probability between recurrent layers; 0 disables dropout.
    pub dropout: f64,
    /// Upper bound on training epochs.
    pub max_epochs: usize,
    /// Input encoding: one-hot or a learned embedding.
    pub encoding: EncodingStrategy,
    /// Model architecture name; must be registered in the [`ModelRegistry`].
    pub model: String,
    /// Floating-point bit width for training computation; never inferred from the device.
    pub precision: Precision,
    /// Percentage boundaries partitioning the corpus into train/validation/test.
    pub splits: SplitPoints,
}

impl Default for TrainingConfiguration {
    /// Returns default configuration (suitable for tests and fallbacks): the
    /// Shakespeare corpus on cpu, a two-layer model over 70-character windows,
    /// one-hot input, no dropout, 32-bit precision.
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            dataset_path: DatasetRegistry::path_for(DEFAULT_DATASET),
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            device: Device::Cpu,
            n_layers: DEFAULT_N_LAYERS,
            seq_len: DEFAULT_SEQ_LEN,
            hidden_size: DEFAULT_HIDDEN_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            predict_seq_len: DEFAULT_SEQ_LEN,
            learning_rate: DEFAULT_LEARNING_RATE,
            grad_clip: DEFAULT_GRAD_CLIP,
            dropout: DEFAULT_DROPOUT,
            max_epochs: DEFAULT_MAX_EPOCHS,
            encoding: EncodingStrategy::default(),
            model: DEFAULT_MODEL.to_string(),
            precision: Precision::default(),
            splits: SplitPoints::default(),
        }
    }
}

impl TrainingConfiguration {
    /// Validates the configuration. Returns `Ok(())` if every field satisfies its
    /// invariant, or the first violation as a [`ConfigError`].
    ///
    /// Split points carry their invariant in the type and need no re-check here;
    /// name fields are resolved against the built-in registries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let expected_path = DatasetRegistry::builtin().resolve(&self.dataset)?;
        if self.dataset_path != expected_path {
            return Err(ConfigError::Validation(format!(
                "dataset_path {:?} does not match the corpus path {:?} for dataset {:?}",
                self.dataset_path, expected_path, self.dataset
            )));
        }
        ModelRegistry::builtin().check(&self.model)?;
        if self.n_layers == 0 {
            return Err(ConfigError::Validation(
                "n_layers must be greater than 0".to_string(),
            ));
        }
        if self.seq_len == 0 {
            return Err(ConfigError::Validation(
                "seq_len must be greater than 0".to_string(),
            ));
        }
        if self.hidden_size == 0 {
            return Err(ConfigError::Validation(
                "hidden_size must be greater than 0".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Validation(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        if self.predict_seq_len == 0 {
            return Err(ConfigError::Validation(
                "predict_seq_len must be greater than 0".to_string(),
            ));
        }
        if self.max_epochs == 0 {
            return Err(ConfigError::Validation(
                "max_epochs must be greater than 0".to_string(),
            ));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(ConfigError::Validation(
                "learning_rate must be positive and finite".to_string(),
            ));
        }
        if !(self.grad_clip > 0.0 && self.grad_clip.is_finite()) {
            return Err(ConfigError::Validation(
                "grad_clip must be positive and finite".to_string(),
            ));
        }
        if !(self.dropout >= 0.0 && self.dropout < 1.0) {
            return Err(ConfigError::Validation(
                "dropout must be in [0, 1)".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads a configuration from a JSON file and validates it before returning.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::File`] when the file cannot be read or is not valid JSON.
    /// - [`ConfigError::Validation`] when the stored record violates an invariant.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration to a JSON file, pretty-printed.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::File`] when serialization or the write fails.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, text).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
