//! Typed configuration for Lumen parameter chains.
//!
//! This crate describes which request parameters a Lumen chain accepts and
//! where the image source comes from, with support for:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! # Overview
//!
//! [`LumenConfig`] holds three sections:
//!
//! - [`SourceConfig`] - Query or path source, optional base URL
//! - [`ParamsConfig`] - Built-in parameter toggles and extra parameters
//! - [`LoggingConfig`] - Log level and output format
//!
//! # Example
//!
//! ```no_run
//! use lumen_config::ConfigLoader;
//!
//! # fn main() -> Result<(), lumen_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_file("lumen.toml")?
//!     .with_env_prefix("LUMEN")
//!     .load()?;
//!
//! println!("Source mode: {:?}", config.source.mode);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [source]
//! mode = "path"
//! base_url = "http://store/image"
//!
//! [params]
//! format = true
//! quality = true
//! gamma_correction = false
//! extra = [
//!     { name = "width", kind = "int" },
//!     { name = "blur", kind = "float" },
//! ]
//!
//! [logging]
//! level = "info"
//! format = "json"
//! file_line_info = false
//! ```
//!
//! # Environment Variables
//!
//! With prefix `LUMEN`:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `LUMEN__SOURCE__MODE` | `source.mode` |
//! | `LUMEN__SOURCE__BASE_URL` | `source.base_url` (empty clears it) |
//! | `LUMEN__PARAMS__FORMAT` | `params.format` |
//! | `LUMEN__PARAMS__QUALITY` | `params.quality` |
//! | `LUMEN__PARAMS__GAMMA_CORRECTION` | `params.gamma_correction` |
//! | `LUMEN__LOGGING__ENABLED` | `logging.enabled` |
//! | `LUMEN__LOGGING__LEVEL` | `logging.level` |
//! | `LUMEN__LOGGING__FORMAT` | `logging.format` |
//! | `LUMEN__LOGGING__FILE_LINE_INFO` | `logging.file_line_info` |

#![doc(html_root_url = "https://docs.rs/lumen-config/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::{LumenConfig, LumenConfigBuilder};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{
    ExtraParam, ExtraParamKind, LogFormat, LoggingConfig, ParamsConfig, SourceConfig, SourceMode,
};
