//! Configuration errors.
//!
//! All errors produced by the config module (validation, env loading, file round-trips)
//! use [`ConfigError`]. Callers can match on variants to handle specific cases or use
//! [`ConfigError::message`] for logging.

use std::fmt;
use std::path::PathBuf;

use crate::registry::RegistryError;
use crate::split::SplitError;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: A field violates its invariant (e.g. split points not strictly
///   increasing, dataset name not registered, zero layer count).
///   *When*: In [`validate`](super::TrainingConfiguration::validate), which every load path
///   runs before returning a record.
///   *Recovery*: None at runtime; fix the offending value. The message names the field and
///   the violated constraint.
///
/// - **EnvVar**: An environment variable could not be read (e.g. invalid Unicode).
///   *When*: When using env helpers to read a key.
///   *Recovery*: Ensure the variable contains valid Unicode, or unset it.
///
/// - **Parse**: An environment variable was set but could not be parsed into the expected
///   type (e.g. `N_LAYERS=two`).
///   *When*: When using `env_parsed` and the value is not valid for the target type.
///   *Recovery*: Set the variable to a valid value or unset it to use the default; the
///   message names the key and the invalid value.
///
/// - **File**: Reading or writing a configuration file failed (I/O or malformed JSON).
///   *When*: In [`from_json_file`](super::TrainingConfiguration::from_json_file) and
///   [`to_json_file`](super::TrainingConfiguration::to_json_file).
///   *Recovery*: Check the path, permissions, and (for reads) the file content.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration validation failed (e.g. invalid dimensions or ranges).
    Validation(String),

    /// Failed to read an environment variable (e.g. invalid Unicode).
    EnvVar {
        /// The full environment variable name that was read.
        key: String,
        /// Underlying cause (e.g. NotUnicode).
        message: String,
    },

    /// Environment variable was set but could not be parsed into the expected type.
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable parse reason.
        message: String,
    },

    /// A configuration file could not be read, written, or decoded.
    File {
        /// The file involved.
        path: PathBuf,
        /// Human-readable reason (I/O or JSON error).
        message: String,
    },
}

impl ConfigError {
    /// Returns a short message suitable for logging or user display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } => message,
            ConfigError::Parse { message, .. } => message,
            ConfigError::File { message, .. } => message,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Validation(m) => write!(f, "config validation: {m}"),
            ConfigError::EnvVar { key, message } => write!(f, "env var {key}: {message}"),
            ConfigError::Parse {
                key,
                value,
                message,
            } => {
                write!(f, "env var {key}={value:?}: {message}")
            }
            ConfigError::File { path, message } => {
                write!(f, "config file {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<SplitError> for ConfigError {
    fn from(e: SplitError) -> Self {
        ConfigError::Validation(e.to_string())
    }
}

impl From<RegistryError> for ConfigError {
    fn from(e: RegistryError) -> Self {
        ConfigError::Validation(e.to_string())
    }
}
