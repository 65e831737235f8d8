//! Error types for chain assembly and logging setup.

use lumen_config::ConfigError;
use thiserror::Error;

/// Errors raised while assembling a parser chain from configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The base URL could not be used for source composition.
    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl {
        /// The configured URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed.
    #[error("failed to initialize logging: {0}")]
    Init(String),
}
