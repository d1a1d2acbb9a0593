//! Error types.
//!
//! Predicates never fail. Errors only come from the configuration boundary:
//! building a registry with a bad size, addressing a slot that does not
//! exist, or loading a malformed config file.

use std::path::PathBuf;
use thiserror::Error;

/// Precondition violations of the device registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("gamepad index {index} is out of range (registry holds {count})")]
    GamepadOutOfRange { index: usize, count: usize },

    #[error("gamepad count {count} is invalid (expected 1..={max})")]
    InvalidGamepadCount { count: usize, max: usize },
}

/// Failure to load or store an [`InputConfig`](crate::config::InputConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Invalid(#[from] InputError),
}
