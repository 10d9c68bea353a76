//! Build [`TrainingConfiguration`] from environment variables.
//!
//! Uses [`env_string`] and [`env_parsed`] to read env vars with a single place for key
//! names (see [`crate::config::constants`]) and typed errors ([`ConfigError`]). The
//! compute device is resolved through the caller's [`AcceleratorProbe`]; nothing here
//! touches hardware, so loading is testable on any machine.

use std::path::PathBuf;

use super::constants::{
    ENV_BATCH_SIZE, ENV_DATASET, ENV_DEVICE, ENV_DROPOUT, ENV_EMBEDDING_DIM, ENV_GRAD_CLIP,
    ENV_HIDDEN_SIZE, ENV_LEARNING_RATE, ENV_MAX_EPOCHS, ENV_MODEL, ENV_MODEL_DIR, ENV_N_LAYERS,
    ENV_PRECISION, ENV_PREDICT_SEQ_LEN, ENV_PREFIX, ENV_SEQ_LEN, ENV_SPLITS,
};
use super::types::{EncodingStrategy, Precision};
use super::ConfigError;
use super::TrainingConfiguration;
use crate::device::{AcceleratorProbe, Device};
use crate::registry::DatasetRegistry;
use crate::split::SplitPoints;

/// Returns the full environment variable key for a given suffix (e.g. `SEQ_LEN` → `CHARLM_SEQ_LEN`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if unset.
/// Returns `Err(ConfigError::EnvVar)` if the variable is set but unreadable (e.g. not Unicode).
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails (e.g. `N_LAYERS=two`).
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let s = match std::env::var(key) {
        Ok(s) => s,
        Err(std::env::VarError::NotPresent) => return Ok(None),
        Err(e) => {
            return Err(ConfigError::EnvVar {
                key: key.to_string(),
                message: e.to_string(),
            })
        }
    };
    match s.parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds a validated [`TrainingConfiguration`] from environment variables, falling
/// back to [`TrainingConfiguration::default`] for unset values. This is the one load
/// entry point: derived fields (corpus path, device, prediction window) are resolved
/// here and the record is validated before it is returned.
///
/// Derivations:
/// - the corpus path comes from the dataset name via the built-in
///   [`DatasetRegistry`](crate::registry::DatasetRegistry);
/// - the device is resolved through `probe` — an accelerator is used only when one
///   is detected, regardless of any `CHARLM_DEVICE=cuda` override;
/// - the prediction window defaults to the (possibly overridden) training window.
///
/// # Errors
///
/// - [`ConfigError::EnvVar`] / [`ConfigError::Parse`] when a *set* variable is
///   unreadable or unparseable (e.g. `CHARLM_SEQ_LEN=abc`).
/// - [`ConfigError::Validation`] when the assembled record violates an invariant
///   (unknown dataset or model name, non-positive dimension, out-of-range dropout).
pub fn from_env(probe: &dyn AcceleratorProbe) -> Result<TrainingConfiguration, ConfigError> {
    let default = TrainingConfiguration::default();

    let dataset = env_string(&env_key(ENV_DATASET))?.unwrap_or(default.dataset);
    let dataset_path = DatasetRegistry::builtin().resolve(&dataset)?;
    let model_dir = env_string(&env_key(ENV_MODEL_DIR))?
        .map(PathBuf::from)
        .unwrap_or(default.model_dir);

    let requested = env_parsed::<Device>(&env_key(ENV_DEVICE))?;
    let device = Device::select(requested, probe);
    if requested == Some(Device::Accelerator) && device == Device::Cpu {
        tracing::warn!("accelerator requested but not detected; using cpu");
    }

    let n_layers = env_parsed(&env_key(ENV_N_LAYERS))?.unwrap_or(default.n_layers);
    let seq_len = env_parsed(&env_key(ENV_SEQ_LEN))?.unwrap_or(default.seq_len);
    let hidden_size = env_parsed(&env_key(ENV_HIDDEN_SIZE))?.unwrap_or(default.hidden_size);
    let batch_size = env_parsed(&env_key(ENV_BATCH_SIZE))?.unwrap_or(default.batch_size);
    // Prediction windows match training windows unless explicitly overridden.
    let predict_seq_len = env_parsed(&env_key(ENV_PREDICT_SEQ_LEN))?.unwrap_or(seq_len);
    let learning_rate = env_parsed(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let grad_clip = env_parsed(&env_key(ENV_GRAD_CLIP))?.unwrap_or(default.grad_clip);
    let dropout = env_parsed(&env_key(ENV_DROPOUT))?.unwrap_or(default.dropout);
    let max_epochs = env_parsed(&env_key(ENV_MAX_EPOCHS))?.unwrap_or(default.max_epochs);
    let encoding = env_parsed::<usize>(&env_key(ENV_EMBEDDING_DIM))?
        .map(EncodingStrategy::from_dim)
        .unwrap_or(default.encoding);
    let model = env_string(&env_key(ENV_MODEL))?.unwrap_or(default.model);
    let precision = env_parsed::<Precision>(&env_key(ENV_PRECISION))?.unwrap_or(default.precision);
    let splits = env_parsed::<SplitPoints>(&env_key(ENV_SPLITS))?.unwrap_or(default.splits);

    let config = TrainingConfiguration {
        dataset,
        dataset_path,
        model_dir,
        device,
        n_layers,
        seq_len,
        hidden_size,
        batch_size,
        predict_seq_len,
        learning_rate,
        grad_clip,
        dropout,
        max_epochs,
        encoding,
        model,
        precision,
        splits,
    };
    config.validate()?;
    tracing::debug!(
        device = %config.device,
        dataset = %config.dataset,
        precision = %config.precision,
        "configuration loaded"
    );
    Ok(config)
}
