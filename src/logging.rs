//! Logging setup.
//!
//! The crate emits `tracing` events (target `edgepoll::*`); installing a
//! subscriber is up to the host. These helpers install a plain `fmt`
//! subscriber for tools, demos and tests. Calling them twice is harmless.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{InputConfig, LogLevel};

fn max_level(level: LogLevel) -> Option<Level> {
    match level {
        LogLevel::Off => None,
        LogLevel::Error => Some(Level::ERROR),
        LogLevel::Warn => Some(Level::WARN),
        LogLevel::Info => Some(Level::INFO),
        LogLevel::Debug => Some(Level::DEBUG),
        LogLevel::Trace => Some(Level::TRACE),
    }
}

/// Install a global subscriber at `level`. `RUST_LOG` directives still apply.
///
/// Returns `true` if this call installed the subscriber. [`LogLevel::Off`]
/// installs nothing, and a subscriber set earlier is left in place.
pub fn init(level: LogLevel) -> bool {
    let Some(level) = max_level(level) else {
        return false;
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

/// [`init`] at the config's `log_level`.
pub fn init_from_config(config: &InputConfig) -> bool {
    init(config.log_level)
}

/// [`init`] at `info`.
pub fn init_default() -> bool {
    init(LogLevel::Info)
}
