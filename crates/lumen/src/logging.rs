//! Structured logging setup.
//!
//! The extraction crates only emit `tracing` events. This module installs a
//! `tracing-subscriber` registry for binaries that want them printed:
//! JSON lines for production, pretty output for development.
//!
//! # Example
//!
//! ```rust,no_run
//! use lumen::{init_logging, LumenConfig};
//!
//! let config = LumenConfig::development();
//! init_logging(&config.logging).unwrap();
//!
//! tracing::info!(parsers = 4, "ready");
//! ```

use lumen_config::{LogFormat, LoggingConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::LoggingError;

/// Installs the global log subscriber described by `config`.
///
/// Does nothing when logging is disabled.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] if `config.level` is not a valid
/// filter directive and [`LoggingError::Init`] if a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = create_env_filter(&config.level)?;

    match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_file(config.file_line_info)
                .with_line_number(config.file_line_info)
                .with_target(true)
                .with_filter(filter);

            tracing_subscriber::registry()
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        }
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .pretty()
                .with_file(config.file_line_info)
                .with_line_number(config.file_line_info)
                .with_target(true)
                .with_filter(filter);

            tracing_subscriber::registry()
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        }
    }

    Ok(())
}

/// Creates an env filter from a directive string.
///
/// # Arguments
///
/// * `filter` - Filter string (e.g., "info", "lumen_extract=trace,warn")
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] if the directive is invalid.
pub fn create_env_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter).map_err(|e| LoggingError::InvalidFilter(e.to_string()))
}
