//! Parse context providing access to request data.
//!
//! The [`ParseContext`] is the read-only view of an already-received request
//! that every [`Parser`](crate::Parser) works from.

use http::{HeaderMap, Method, Uri};

/// Read-only view of the parts of an HTTP request parsers look at.
///
/// The query string is decoded once, when the context is built, following
/// `application/x-www-form-urlencoded` rules. Lookups by name return the first
/// occurrence of a key.
///
/// # Example
///
/// ```rust
/// use lumen_extract::ParseContext;
/// use http::{HeaderMap, Method, Uri};
///
/// let ctx = ParseContext::new(
///     Method::GET,
///     Uri::from_static("/images/cat.png?format=jpg&quality=80&format=png"),
///     HeaderMap::new(),
/// );
///
/// assert_eq!(ctx.path(), "/images/cat.png");
/// assert_eq!(ctx.query("format"), Some("jpg"));
/// assert_eq!(ctx.query("quality"), Some("80"));
/// assert_eq!(ctx.query("width"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    query: Vec<(String, String)>,
}

impl ParseContext {
    /// Creates a new parse context.
    #[must_use]
    pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
        let query = uri.query().map(decode_query).unwrap_or_default();
        Self {
            method,
            uri,
            headers,
            query,
        }
    }

    /// Creates a context for a GET request to `uri` with no headers.
    #[must_use]
    pub fn get(uri: Uri) -> Self {
        Self::new(Method::GET, uri, HeaderMap::new())
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the path portion of the URI, still percent-encoded.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the raw query string if present.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the first decoded value for `name`.
    #[must_use]
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every decoded query pair in request order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a specific header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<B> From<&http::Request<B>> for ParseContext {
    fn from(req: &http::Request<B>) -> Self {
        Self::new(req.method().clone(), req.uri().clone(), req.headers().clone())
    }
}

// Invalid UTF-8 in keys or values is replaced lossily.
fn decode_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = ParseContext::new(
            Method::GET,
            Uri::from_static("/cat.png?quality=50"),
            HeaderMap::new(),
        );

        assert_eq!(ctx.method(), &Method::GET);
        assert_eq!(ctx.path(), "/cat.png");
        assert_eq!(ctx.query_string(), Some("quality=50"));
        assert_eq!(ctx.query("quality"), Some("50"));
    }

    #[test]
    fn test_query_decoding() {
        let ctx = ParseContext::get(Uri::from_static("/?source=a%20b+c&empty="));

        assert_eq!(ctx.query("source"), Some("a b c"));
        assert_eq!(ctx.query("empty"), Some(""));
    }

    #[test]
    fn test_duplicate_keys_first_wins() {
        let ctx = ParseContext::get(Uri::from_static("/?format=png&format=gif"));

        assert_eq!(ctx.query("format"), Some("png"));
        assert_eq!(
            ctx.query_pairs().collect::<Vec<_>>(),
            vec![("format", "png"), ("format", "gif")]
        );
    }

    #[test]
    fn test_no_query() {
        let ctx = ParseContext::get(Uri::from_static("http://localhost"));

        assert_eq!(ctx.query_string(), None);
        assert_eq!(ctx.query("source"), None);
        assert_eq!(ctx.query_pairs().count(), 0);
    }

    #[test]
    fn test_from_http_request() {
        let req = http::Request::builder()
            .method(Method::HEAD)
            .uri("http://localhost/foobar?format=jpg")
            .header("accept", "image/webp")
            .body(())
            .unwrap();

        let ctx = ParseContext::from(&req);

        assert_eq!(ctx.method(), &Method::HEAD);
        assert_eq!(ctx.path(), "/foobar");
        assert_eq!(ctx.query("format"), Some("jpg"));
        assert_eq!(ctx.header("accept"), Some("image/webp"));
    }

    #[test]
    fn test_query_invalid_utf8_kept() {
        let ctx = ParseContext::get(Uri::from_static("/?source=%FF.png&quality=80"));

        assert_eq!(ctx.query("source"), Some("\u{FFFD}.png"));
        assert_eq!(ctx.query("quality"), Some("80"));
    }

    #[test]
    fn test_query_malformed_escape_kept() {
        let ctx = ParseContext::get(Uri::from_static("/?source=100%&format=png"));

        assert_eq!(ctx.query("source"), Some("100%"));
        assert_eq!(ctx.query("format"), Some("png"));
    }
}
