//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.
//! Keeping them here avoids magic numbers and repeated string literals across the
//! config module. The defaults are the standard Shakespeare recipe: a two-layer
//! model over 70-character windows, one-hot input, no dropout.

/// Environment variable prefix (e.g. `CHARLM_SEQ_LEN`).
pub(crate) const ENV_PREFIX: &str = "CHARLM_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_DATASET: &str = "DATASET";
pub(crate) const ENV_MODEL_DIR: &str = "MODEL_DIR";
pub(crate) const ENV_DEVICE: &str = "DEVICE";
pub(crate) const ENV_N_LAYERS: &str = "N_LAYERS";
pub(crate) const ENV_SEQ_LEN: &str = "SEQ_LEN";
pub(crate) const ENV_HIDDEN_SIZE: &str = "HIDDEN_SIZE";
pub(crate) const ENV_BATCH_SIZE: &str = "BATCH_SIZE";
pub(crate) const ENV_PREDICT_SEQ_LEN: &str = "PREDICT_SEQ_LEN";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_GRAD_CLIP: &str = "GRAD_CLIP";
pub(crate) const ENV_DROPOUT: &str = "DROPOUT";
pub(crate) const ENV_MAX_EPOCHS: &str = "MAX_EPOCHS";
pub(crate) const ENV_EMBEDDING_DIM: &str = "EMBEDDING_DIM";
pub(crate) const ENV_MODEL: &str = "MODEL";
pub(crate) const ENV_PRECISION: &str = "PRECISION";
pub(crate) const ENV_SPLITS: &str = "SPLITS";

// --- Default values ---

pub(crate) const DEFAULT_DATASET: &str = "shakespeare";
pub(crate) const DEFAULT_MODEL_DIR: &str = "models";
pub(crate) const DEFAULT_N_LAYERS: usize = 2;
pub(crate) const DEFAULT_SEQ_LEN: usize = 70;
pub(crate) const DEFAULT_HIDDEN_SIZE: usize = 32;
pub(crate) const DEFAULT_BATCH_SIZE: usize = 128;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub(crate) const DEFAULT_GRAD_CLIP: f64 = 5.0;
pub(crate) const DEFAULT_DROPOUT: f64 = 0.0;
pub(crate) const DEFAULT_MAX_EPOCHS: usize = 100;
pub(crate) const DEFAULT_MODEL: &str = "lstm";
