//! Dynamically-typed parameter values.

use http::Uri;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Kind tag of a [`ParamValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// UTF-8 string.
    String,
    /// Signed 64-bit integer.
    Int,
    /// 64-bit float.
    Float,
    /// Boolean flag.
    Bool,
    /// Absolute URL.
    Url,
    /// Value opaque to the extraction layer.
    Opaque,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Url => write!(f, "url"),
            Self::Opaque => write!(f, "opaque"),
        }
    }
}

/// A value stored in [`Params`](crate::Params).
///
/// Opaque values are shared behind an [`Arc`] so cloning a bag never deep
/// copies them; two opaque values are equal only when they point to the
/// same allocation.
#[derive(Debug, Clone)]
pub enum ParamValue {
    /// String value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// URL value.
    Url(Uri),
    /// Any other value the pipeline wants to carry.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl ParamValue {
    /// Wraps an arbitrary value as [`ParamValue::Opaque`].
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::String(_) => ParamKind::String,
            Self::Int(_) => ParamKind::Int,
            Self::Float(_) => ParamKind::Float,
            Self::Bool(_) => ParamKind::Bool,
            Self::Url(_) => ParamKind::Url,
            Self::Opaque(_) => ParamKind::Opaque,
        }
    }

    /// Returns the string if this is a [`ParamValue::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Url(a), Self::Url(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Url(u) => write!(f, "{u}"),
            Self::Opaque(_) => f.write_str("<opaque>"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Uri> for ParamValue {
    fn from(value: Uri) -> Self {
        Self::Url(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(ParamValue::from("a").kind(), ParamKind::String);
        assert_eq!(ParamValue::from(1_i64).kind(), ParamKind::Int);
        assert_eq!(ParamValue::from(1.5).kind(), ParamKind::Float);
        assert_eq!(ParamValue::from(true).kind(), ParamKind::Bool);
        assert_eq!(
            ParamValue::from(Uri::from_static("http://store/image")).kind(),
            ParamKind::Url
        );
        assert_eq!(ParamValue::opaque(vec![1_u8]).kind(), ParamKind::Opaque);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::from("jpeg").to_string(), "jpeg");
        assert_eq!(ParamValue::from(42).to_string(), "42");
        assert_eq!(ParamValue::from(false).to_string(), "false");
        assert_eq!(
            ParamValue::from(Uri::from_static("http://store/image/a")).to_string(),
            "http://store/image/a"
        );
        assert_eq!(ParamValue::opaque(()).to_string(), "<opaque>");
    }

    #[test]
    fn test_opaque_equality_is_identity() {
        let a = ParamValue::opaque(String::from("x"));
        let b = ParamValue::opaque(String::from("x"));

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_cross_kind_inequality() {
        assert_ne!(ParamValue::from(1), ParamValue::from(1.0));
        assert_ne!(ParamValue::from("1"), ParamValue::from(1));
    }
}
