//! The parameter bag.
//!
//! [`Params`] is created empty by the caller for each request, filled by the
//! extraction chain and then handed to the image pipeline.

use http::Uri;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use crate::{ParamError, ParamKind, ParamResult, ParamValue};

/// Mapping from parameter name to a [`ParamValue`].
///
/// Keys are unique and kept in sorted order, so iteration and the
/// [`Display`](fmt::Display) rendering are deterministic regardless of the
/// order in which parameters were set. Values can be overwritten but the bag
/// offers no removal.
///
/// # Example
///
/// ```rust
/// use lumen_core::Params;
///
/// let mut params = Params::new();
/// params.set("gamma_correction", true);
///
/// assert!(params.has("gamma_correction"));
/// assert_eq!(params.get_bool("gamma_correction").unwrap(), true);
/// assert_eq!(
///     params.get_bool("missing").unwrap_err().message(),
///     "not set"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Params {
    inner: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> ParamResult<&ParamValue> {
        self.inner.get(key).ok_or_else(|| ParamError::not_set(key))
    }

    /// Returns the value for `key` as a string.
    pub fn get_string(&self, key: &str) -> ParamResult<&str> {
        match self.get(key)? {
            ParamValue::String(s) => Ok(s),
            _ => Err(ParamError::wrong_kind(key, ParamKind::String)),
        }
    }

    /// Returns the value for `key` as an integer.
    pub fn get_int(&self, key: &str) -> ParamResult<i64> {
        match self.get(key)? {
            ParamValue::Int(i) => Ok(*i),
            _ => Err(ParamError::wrong_kind(key, ParamKind::Int)),
        }
    }

    /// Returns the value for `key` as a float.
    pub fn get_float(&self, key: &str) -> ParamResult<f64> {
        match self.get(key)? {
            ParamValue::Float(f) => Ok(*f),
            _ => Err(ParamError::wrong_kind(key, ParamKind::Float)),
        }
    }

    /// Returns the value for `key` as a boolean.
    pub fn get_bool(&self, key: &str) -> ParamResult<bool> {
        match self.get(key)? {
            ParamValue::Bool(b) => Ok(*b),
            _ => Err(ParamError::wrong_kind(key, ParamKind::Bool)),
        }
    }

    /// Returns the value for `key` as a URL.
    pub fn get_url(&self, key: &str) -> ParamResult<&Uri> {
        match self.get(key)? {
            ParamValue::Url(u) => Ok(u),
            _ => Err(ParamError::wrong_kind(key, ParamKind::Url)),
        }
    }

    /// Returns the opaque value for `key` downcast to `T`.
    pub fn get_opaque<T: Any + Send + Sync>(&self, key: &str) -> ParamResult<&T> {
        match self.get(key)? {
            ParamValue::Opaque(v) => v
                .downcast_ref::<T>()
                .ok_or_else(|| ParamError::wrong_kind(key, ParamKind::Opaque)),
            _ => Err(ParamError::wrong_kind(key, ParamKind::Opaque)),
        }
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Returns an iterator over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Renders the bag as a form-encoded query string in key order.
///
/// Keys and values are escaped, so a value can never pass itself off as
/// further pairs. This is the string cache-key builders hash.
impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.inner {
            serializer.append_pair(key, &value.to_string());
        }
        f.write_str(&serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_and_get() {
        let mut params = Params::new();
        assert!(params.is_empty());

        params.set("format", "png");
        params.set("quality", 90);
        params.set("ratio", 0.5);

        assert_eq!(params.len(), 3);
        assert_eq!(params.get_string("format").unwrap(), "png");
        assert_eq!(params.get_int("quality").unwrap(), 90);
        assert!((params.get_float("ratio").unwrap() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overwrite() {
        let mut params = Params::new();
        params.set("format", "jpg");
        params.set("format", "jpeg");

        assert_eq!(params.get_string("format").unwrap(), "jpeg");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let params = Params::new();
        let err = params.get_string("source").unwrap_err();

        assert_eq!(err.param(), "source");
        assert_eq!(err.message(), "not set");
        assert!(!params.has("source"));
    }

    #[test]
    fn test_wrong_kind() {
        let mut params = Params::new();
        params.set("format", 666);

        let err = params.get_string("format").unwrap_err();
        assert_eq!(err.param(), "format");
        assert_eq!(err.message(), "not a string");
        assert!(params.get_url("format").is_err());
    }

    #[test]
    fn test_url_value() {
        let mut params = Params::new();
        params.set("source", Uri::from_static("http://store/image/a.png"));

        assert_eq!(
            params.get_url("source").unwrap().to_string(),
            "http://store/image/a.png"
        );
        assert!(params.get_string("source").is_err());
    }

    #[test]
    fn test_opaque_value() {
        #[derive(Debug, PartialEq)]
        struct Crop {
            width: u32,
        }

        let mut params = Params::new();
        params.set("crop", ParamValue::opaque(Crop { width: 10 }));

        assert_eq!(params.get_opaque::<Crop>("crop").unwrap(), &Crop { width: 10 });
        assert!(params.get_opaque::<String>("crop").is_err());
    }

    #[test]
    fn test_display_escapes_separators() {
        let mut smuggled = Params::new();
        smuggled.set("format", "png&gamma_correction=true");

        let mut plain = Params::new();
        plain.set("format", "png");
        plain.set("gamma_correction", true);

        assert_ne!(smuggled, plain);
        assert_ne!(smuggled.to_string(), plain.to_string());
        assert_eq!(smuggled.to_string(), "format=png%26gamma_correction%3Dtrue");
        assert_eq!(plain.to_string(), "format=png&gamma_correction=true");
    }

    #[test]
    fn test_display_escapes_keys_and_urls() {
        let mut params = Params::new();
        params.set("a=b", "c d");
        params.set("source", Uri::from_static("http://store/image/a.png"));

        assert_eq!(
            params.to_string(),
            "a%3Db=c+d&source=http%3A%2F%2Fstore%2Fimage%2Fa.png"
        );
    }

    #[test]
    fn test_display_is_sorted() {
        let mut params = Params::new();
        params.set("quality", 50);
        params.set("format", "jpeg");
        params.set("gamma_correction", true);

        assert_eq!(
            params.to_string(),
            "format=jpeg&gamma_correction=true&quality=50"
        );
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["format", "gamma_correction", "quality"]
        );
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = vec![("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(params.to_string(), "a=1&b=2");
    }

    proptest! {
        #[test]
        fn display_ignores_insertion_order(pairs in proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..8)) {
            let forward: Params = pairs.iter().map(|(k, v)| (k.clone(), *v)).collect();
            let reversed: Params = pairs.iter().rev().map(|(k, v)| (k.clone(), *v)).collect();
            prop_assert_eq!(forward.to_string(), reversed.to_string());
        }
    }
}
