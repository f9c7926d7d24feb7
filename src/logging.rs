//! Process-wide logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LogLevel};

/// Installs the global `tracing` subscriber.
///
/// The fmt layer prints timestamp, target, severity and message. The
/// minimum severity comes from the validated `level`; a `RUST_LOG`
/// environment filter takes precedence when set, matching the usual
/// tracing convention.
///
/// Kept separate from [`crate::config::Settings`] construction so
/// configuration can be parsed and validated without touching global
/// logging state.
///
/// # Errors
///
/// Returns [`ConfigError::LoggingInit`] if a global subscriber is
/// already installed. Logging is configured once per process; later
/// calls cannot change the level.
pub fn init(level: LogLevel) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|_| ConfigError::LoggingInit)
}
