//! Main configuration types.
//!
//! This module provides the top-level [`LumenConfig`] struct and its builder.

use std::collections::HashSet;

use http::Uri;
use lumen_core::{FORMAT_PARAM, GAMMA_CORRECTION_PARAM, QUALITY_PARAM, SOURCE_PARAM};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingConfig, ParamsConfig, SourceConfig};

/// Parameter names owned by the built-in parsers.
const BUILTIN_PARAMS: [&str; 4] = [SOURCE_PARAM, FORMAT_PARAM, QUALITY_PARAM, GAMMA_CORRECTION_PARAM];

/// Complete Lumen configuration.
///
/// Describes which parameters a chain accepts and where the image source
/// comes from. Use [`ConfigLoader`](crate::ConfigLoader) to load it from
/// files and environment variables.
///
/// # Example
///
/// ```
/// use lumen_config::{LumenConfig, SourceMode};
///
/// let config = LumenConfig::default();
/// assert_eq!(config.source.mode, SourceMode::Query);
/// assert!(config.params.quality);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct LumenConfig {
    /// Image source configuration.
    #[serde(default)]
    pub source: SourceConfig,

    /// Accepted image parameters.
    #[serde(default)]
    pub params: ParamsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LumenConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_config::{LumenConfig, SourceConfig, SourceMode};
    ///
    /// let config = LumenConfig::builder()
    ///     .source(SourceConfig {
    ///         mode: SourceMode::Path,
    ///         ..Default::default()
    ///     })
    ///     .build();
    ///
    /// assert_eq!(config.source.mode, SourceMode::Path);
    /// ```
    #[must_use]
    pub fn builder() -> LumenConfigBuilder {
        LumenConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field if:
    /// - `source.base_url` is not an absolute URL
    /// - an extra parameter has an empty name
    /// - an extra parameter name is declared twice or shadows a built-in one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.source.base_url {
            validate_base_url(base_url)?;
        }

        let mut seen = HashSet::new();
        for extra in &self.params.extra {
            if extra.name.is_empty() {
                return Err(ConfigError::invalid_value(
                    "params.extra",
                    "extra parameter name must not be empty",
                ));
            }
            if BUILTIN_PARAMS.contains(&extra.name.as_str()) {
                return Err(ConfigError::invalid_value(
                    "params.extra",
                    format!("extra parameter '{}' collides with a built-in parameter", extra.name),
                ));
            }
            if !seen.insert(extra.name.as_str()) {
                return Err(ConfigError::invalid_value(
                    "params.extra",
                    format!("duplicate extra parameter: {}", extra.name),
                ));
            }
        }

        Ok(())
    }

    /// Create a development configuration preset.
    ///
    /// Pretty debug logs with source locations.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_config::LumenConfig;
    ///
    /// let config = LumenConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.file_line_info = true;

        config
    }

    /// Create a production configuration preset.
    ///
    /// JSON logs at info level.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_config::{LogFormat, LumenConfig};
    ///
    /// let config = LumenConfig::production();
    /// assert_eq!(config.logging.format, LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.logging.file_line_info = false;

        config
    }
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let uri: Uri = base_url
        .parse()
        .map_err(|e| ConfigError::invalid_value("source.base_url", format!("'{base_url}': {e}")))?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(ConfigError::invalid_value(
            "source.base_url",
            format!("'{base_url}' must be an absolute URL"),
        ));
    }
    Ok(())
}

/// Builder for [`LumenConfig`].
#[derive(Debug, Default)]
pub struct LumenConfigBuilder {
    source: Option<SourceConfig>,
    params: Option<ParamsConfig>,
    logging: Option<LoggingConfig>,
}

impl LumenConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source configuration.
    #[must_use]
    pub fn source(mut self, source: SourceConfig) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the parameter configuration.
    #[must_use]
    pub fn params(mut self, params: ParamsConfig) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Build the configuration.
    ///
    /// Any unset sections will use their default values.
    #[must_use]
    pub fn build(self) -> LumenConfig {
        LumenConfig {
            source: self.source.unwrap_or_default(),
            params: self.params.unwrap_or_default(),
            logging: self.logging.unwrap_or_default(),
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build_validated(self) -> Result<LumenConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtraParam, ExtraParamKind, SourceMode};

    fn extra(name: &str, kind: ExtraParamKind) -> ExtraParam {
        ExtraParam {
            name: name.to_string(),
            kind,
        }
    }

    fn with_base_url(url: &str) -> LumenConfig {
        LumenConfig::builder()
            .source(SourceConfig {
                mode: SourceMode::Path,
                base_url: Some(url.to_string()),
            })
            .build()
    }

    fn with_extras(extras: Vec<ExtraParam>) -> LumenConfig {
        LumenConfig::builder()
            .params(ParamsConfig {
                extra: extras,
                ..Default::default()
            })
            .build()
    }

    #[test]
    fn test_default_config() {
        let config = LumenConfig::default();
        assert_eq!(config.source.mode, SourceMode::Query);
        assert!(config.source.base_url.is_none());
        assert!(config.params.format);
        assert!(config.params.gamma_correction);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_absolute_base_url() {
        assert!(with_base_url("http://store/image").validate().is_ok());
        assert!(with_base_url("https://cdn.example.com").validate().is_ok());
    }

    #[test]
    fn test_validate_relative_base_url() {
        let err = with_base_url("/image").validate().unwrap_err();
        assert!(err.to_string().contains("absolute URL"));
    }

    #[test]
    fn test_validate_unparseable_base_url() {
        let err = with_base_url("http://exa mple.com").validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "source.base_url"
        ));
    }

    #[test]
    fn test_validate_extras() {
        let config = with_extras(vec![
            extra("width", ExtraParamKind::Int),
            extra("blur", ExtraParamKind::Float),
        ]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_extra_name() {
        let config = with_extras(vec![extra("", ExtraParamKind::String)]);
        assert!(config.validate().unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_validate_duplicate_extra() {
        let config = with_extras(vec![
            extra("width", ExtraParamKind::Int),
            extra("width", ExtraParamKind::Float),
        ]);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "params.extra"
        ));
        assert!(err.to_string().contains("duplicate extra parameter: width"));
    }

    #[test]
    fn test_validate_builtin_collision() {
        for name in BUILTIN_PARAMS {
            let config = with_extras(vec![extra(name, ExtraParamKind::String)]);
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("built-in"), "{name}");
        }
    }

    #[test]
    fn test_development_preset() {
        let config = LumenConfig::development();
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.logging.file_line_info);
    }

    #[test]
    fn test_production_preset() {
        let config = LumenConfig::production();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_line_info);
    }

    #[test]
    fn test_build_validated_failure() {
        let result = LumenConfig::builder()
            .source(SourceConfig {
                mode: SourceMode::Query,
                base_url: Some("store/image".to_string()),
            })
            .build_validated();
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = with_base_url("http://store/image");
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LumenConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_toml_deserialization() {
        let config: LumenConfig = toml::from_str(
            r#"
            [source]
            mode = "path"
            base_url = "http://store/image"

            [params]
            gamma_correction = false
            extra = [{ name = "width", kind = "int" }]

            [logging]
            level = "lumen_extract=trace"
            format = "pretty"
            "#,
        )
        .unwrap();

        assert_eq!(config.source.mode, SourceMode::Path);
        assert!(!config.params.gamma_correction);
        assert_eq!(config.params.extra.len(), 1);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<LumenConfig, _> = toml::from_str(
            r#"
            [server]
            http_addr = "0.0.0.0:8080"
            "#,
        );
        assert!(result.is_err());
    }
}
