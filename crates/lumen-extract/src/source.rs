//! Parsers for the image source.
//!
//! The source lands in the bag under [`SOURCE_PARAM`] as a string, or as a URL
//! once [`SourceUrlParser`] joins it onto a base.

use std::sync::Arc;

use http::uri::{PathAndQuery, Uri};
use lumen_core::{ParamError, ParamResult, Params, SOURCE_PARAM};
use percent_encoding::{percent_encode, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::query::parse_query_string;
use crate::{ParseContext, Parser};

/// Takes the source from the `source` query parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceParser;

impl Parser for SourceParser {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        parse_query_string(SOURCE_PARAM, ctx, params);
        Ok(())
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        (param == SOURCE_PARAM).then_some(SOURCE_PARAM)
    }
}

/// Takes the source from the request path.
///
/// The path is percent-decoded and keeps its leading slash. A path whose
/// decoded bytes are not UTF-8 is stored in canonical escaped form instead,
/// e.g. `/%ff.png` becomes `/%FF.png`. It has no query-string name, so
/// `resolve` never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourcePathParser;

impl Parser for SourcePathParser {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        let raw = ctx.path();
        let path = match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => percent_encode(&urlencoding::decode_binary(raw.as_bytes()), PATH).to_string(),
        };
        tracing::trace!(param = SOURCE_PARAM, value = %path, "path source set");
        params.set(SOURCE_PARAM, path);
        Ok(())
    }

    fn resolve(&self, _param: &str) -> Option<&str> {
        None
    }
}

/// Joins the source found by an inner parser onto a base URL.
///
/// When the inner parser leaves the source unset nothing happens. Otherwise
/// the string source is appended to the path of a copy of the base (scheme,
/// authority and query of the base are kept) and stored back as
/// [`ParamValue::Url`](lumen_core::ParamValue::Url). The base itself is
/// shared and never modified.
///
/// # Example
///
/// ```rust
/// use lumen_core::{Params, SOURCE_PARAM};
/// use lumen_extract::{ParseContext, Parser, SourcePathParser, SourceUrlParser};
/// use http::Uri;
///
/// let parser = SourceUrlParser::new(SourcePathParser, Uri::from_static("http://store/image"));
/// let ctx = ParseContext::get(Uri::from_static("http://localhost/foobar"));
/// let mut params = Params::new();
///
/// parser.parse(&ctx, &mut params).unwrap();
/// assert_eq!(
///     params.get_url(SOURCE_PARAM).unwrap().to_string(),
///     "http://store/image/foobar"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SourceUrlParser<P> {
    inner: P,
    base: Arc<Uri>,
}

impl<P: Parser> SourceUrlParser<P> {
    /// Wraps `inner`, joining its source onto `base`.
    pub fn new(inner: P, base: impl Into<Arc<Uri>>) -> Self {
        Self {
            inner,
            base: base.into(),
        }
    }

    /// Returns the wrapped parser.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Returns the base URL.
    pub fn base(&self) -> &Uri {
        &self.base
    }
}

impl<P: Parser> Parser for SourceUrlParser<P> {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        self.inner.parse(ctx, params)?;
        if !params.has(SOURCE_PARAM) {
            return Ok(());
        }
        let source = params.get_string(SOURCE_PARAM)?;
        let url = join_path(&self.base, source)?;
        tracing::trace!(param = SOURCE_PARAM, url = %url, "source joined onto base url");
        params.set(SOURCE_PARAM, url);
        Ok(())
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        self.inner.resolve(param)
    }
}

fn join_path(base: &Uri, source: &str) -> ParamResult<Uri> {
    // An authority-only base reports "/" as its path.
    let base_path = match base.path() {
        "/" if source.starts_with('/') => "",
        path => path,
    };
    let mut path_and_query = format!("{base_path}{}", encode_path(source));
    if let Some(query) = base.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }

    let mut parts = base.clone().into_parts();
    parts.path_and_query = Some(
        PathAndQuery::try_from(path_and_query)
            .map_err(|e| ParamError::new(SOURCE_PARAM, format!("build url: {e}")))?,
    );
    Uri::from_parts(parts).map_err(|e| ParamError::new(SOURCE_PARAM, format!("build url: {e}")))
}

/// Bytes escaped in a URI path. RFC 3986 `pchar` and `/` stay literal.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

// Escapes what a path cannot carry. Existing `%XX` escapes pass through; a
// stray `%` becomes `%25`.
fn encode_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(pos) = rest.find('%') {
        let (head, tail) = rest.split_at(pos);
        encoded.extend(utf8_percent_encode(head, PATH));
        if is_escape(tail) {
            encoded.push_str(&tail[..3]);
            rest = &tail[3..];
        } else {
            encoded.push_str("%25");
            rest = &tail[1..];
        }
    }
    encoded.extend(utf8_percent_encode(rest, PATH));
    encoded
}

fn is_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}
