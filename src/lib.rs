//! # charlm-config
//!
//! Configuration registry for a character-level recurrent language-model trainer:
//! one validated, immutable [`config::TrainingConfiguration`] built at process start
//! and shared by reference with the data loader, model builder, trainer, and
//! persistence layer.

pub mod config;
pub mod device;
pub mod registry;
pub mod split;
