//! Parameter error type.
//!
//! [`ParamError`] is the single error kind raised while extracting or reading
//! parameters. It is always terminal for the current parse attempt.

use http::StatusCode;
use std::fmt;
use thiserror::Error;

use crate::ParamKind;

/// Result type alias using [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Error associating a parameter name with a human-readable reason.
///
/// # Example
///
/// ```rust
/// use lumen_core::ParamError;
/// use http::StatusCode;
///
/// let err = ParamError::parse_type("quality", "int", "invalid digit found in string");
/// assert_eq!(err.param(), "quality");
/// assert_eq!(err.message(), "parse int: invalid digit found in string");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(
///     err.to_string(),
///     "invalid parameter \"quality\": parse int: invalid digit found in string"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid parameter \"{param}\": {message}")]
pub struct ParamError {
    param: String,
    message: String,
}

impl ParamError {
    /// Creates an error for `param` with a free-form message.
    #[must_use]
    pub fn new(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Creates an error for a value that could not be coerced to `type_label`.
    ///
    /// The message embeds the underlying parse failure.
    #[must_use]
    pub fn parse_type(
        param: impl Into<String>,
        type_label: &str,
        cause: impl fmt::Display,
    ) -> Self {
        Self::new(param, format!("parse {type_label}: {cause}"))
    }

    /// Creates an error for a key missing from the bag.
    #[must_use]
    pub fn not_set(param: impl Into<String>) -> Self {
        Self::new(param, "not set")
    }

    /// Creates an error for a bag value of the wrong kind.
    #[must_use]
    pub fn wrong_kind(param: impl Into<String>, expected: ParamKind) -> Self {
        Self::new(param, format!("not a {expected}"))
    }

    /// Returns the internal name of the offending parameter.
    #[must_use]
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code a server should answer with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Returns the error code suitable for error envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        "INVALID_PARAMETER"
    }
}
