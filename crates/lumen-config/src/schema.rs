//! Configuration schema types.
//!
//! This module defines the structure of all configuration sections.

use serde::{Deserialize, Serialize};

/// Where the image source is read from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// The `source` query parameter.
    #[default]
    Query,
    /// The request path.
    Path,
}

/// Source configuration section.
///
/// # Example
///
/// ```
/// use lumen_config::{SourceConfig, SourceMode};
///
/// let config = SourceConfig {
///     mode: SourceMode::Path,
///     base_url: Some("http://store/image".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Where the source is read from.
    #[serde(default)]
    pub mode: SourceMode,

    /// Absolute URL the source is joined onto. Unset keeps the source as a
    /// plain string.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Target type of an extra query parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtraParamKind {
    /// Kept as a string.
    String,
    /// Signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Boolean.
    Bool,
}

/// An extra query parameter copied into the bag under its own name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtraParam {
    /// Query parameter name, also used as the internal name.
    pub name: String,

    /// Type the value is coerced to.
    pub kind: ExtraParamKind,
}

/// Parameter selection section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParamsConfig {
    /// Accept the `format` parameter.
    #[serde(default = "default_true")]
    pub format: bool,

    /// Accept the `quality` parameter.
    #[serde(default = "default_true")]
    pub quality: bool,

    /// Accept the `gamma_correction` parameter.
    #[serde(default = "default_true")]
    pub gamma_correction: bool,

    /// Additional parameters, parsed after the built-in ones in declaration
    /// order.
    #[serde(default)]
    pub extra: Vec<ExtraParam>,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            format: true,
            quality: true,
            gamma_correction: true,
            extra: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Log output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level or filter directive (e.g. "info", "lumen_extract=trace").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub file_line_info: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            file_line_info: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
