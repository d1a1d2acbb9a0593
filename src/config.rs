//! Input configuration.
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! gamepad_count = 4   # registry size, 1..=4
//! keyboard = true     # sample the keyboard every tick
//! mouse = true        # sample the mouse every tick
//! log_level = "info"  # off | error | warn | info | debug | trace
//! ```
//!
//! `log_level` is not applied by [`InputManager`](crate::InputManager); the
//! host passes it to [`logging::init_from_config`](crate::logging::init_from_config)
//! (or [`logging::init`](crate::logging::init)) once at startup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, InputError};
use crate::registry::{GamepadRegistry, MAX_GAMEPADS};

/// Verbosity for [`logging::init`](crate::logging::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Number of gamepad slots, fixed for the lifetime of the manager.
    pub gamepad_count: usize,
    pub keyboard: bool,
    pub mouse: bool,
    pub log_level: LogLevel,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            gamepad_count: MAX_GAMEPADS,
            keyboard: true,
            mouse: true,
            log_level: LogLevel::Info,
        }
    }
}

impl InputConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: InputConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded input config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        GamepadRegistry::check_count(self.gamepad_count)
    }
}
