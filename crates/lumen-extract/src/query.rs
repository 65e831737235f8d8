//! Query string coercion helpers.
//!
//! Every helper follows the same policy: an empty or absent value writes
//! nothing and succeeds; a present value is coerced and written under the
//! same name, or reported as a [`ParamError`] naming the parameter.

use lumen_core::{ParamError, ParamResult, Params};

use crate::{ParseContext, Parser};

fn query_value<'a>(param: &str, ctx: &'a ParseContext) -> Option<&'a str> {
    ctx.query(param).filter(|value| !value.is_empty())
}

/// Copies `param` from the query string into `params` as a string.
pub fn parse_query_string(param: &str, ctx: &ParseContext, params: &mut Params) {
    if let Some(value) = query_value(param, ctx) {
        tracing::trace!(param, value, "query parameter set");
        params.set(param, value);
    }
}

/// Parses `param` from the query string as a signed integer.
///
/// # Example
///
/// ```rust
/// use lumen_core::Params;
/// use lumen_extract::{parse_query_int, ParseContext};
/// use http::Uri;
///
/// let ctx = ParseContext::get(Uri::from_static("/?width=-12&height=tall"));
/// let mut params = Params::new();
///
/// parse_query_int("width", &ctx, &mut params).unwrap();
/// assert_eq!(params.get_int("width").unwrap(), -12);
///
/// let err = parse_query_int("height", &ctx, &mut params).unwrap_err();
/// assert_eq!(err.param(), "height");
/// assert!(err.message().starts_with("parse int: "));
/// ```
pub fn parse_query_int(param: &str, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
    let Some(value) = query_value(param, ctx) else {
        return Ok(());
    };
    let parsed: i64 = value
        .parse()
        .map_err(|e| ParamError::parse_type(param, "int", e))?;
    tracing::trace!(param, value = parsed, "query parameter set");
    params.set(param, parsed);
    Ok(())
}

/// Parses `param` from the query string as a 64-bit float.
pub fn parse_query_float(param: &str, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
    let Some(value) = query_value(param, ctx) else {
        return Ok(());
    };
    let parsed: f64 = value
        .parse()
        .map_err(|e| ParamError::parse_type(param, "float", e))?;
    tracing::trace!(param, value = parsed, "query parameter set");
    params.set(param, parsed);
    Ok(())
}

/// Parses `param` from the query string as a boolean.
///
/// Accepted literals are `1`, `t`, `T`, `TRUE`, `true`, `True` and
/// `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_query_bool(param: &str, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
    let Some(value) = query_value(param, ctx) else {
        return Ok(());
    };
    let parsed = parse_bool(value).ok_or_else(|| {
        ParamError::parse_type(param, "bool", format!("invalid syntax {value:?}"))
    })?;
    tracing::trace!(param, value = parsed, "query parameter set");
    params.set(param, parsed);
    Ok(())
}

/// Parses a boolean literal, returning `None` for anything else.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Target type of a [`QueryParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Kept as a string.
    String,
    /// Coerced to a signed integer.
    Int,
    /// Coerced to a float.
    Float,
    /// Coerced to a boolean.
    Bool,
}

/// Parser for a single query parameter whose internal and external names
/// are the same.
///
/// # Example
///
/// ```rust
/// use lumen_core::Params;
/// use lumen_extract::{ParseContext, Parser, QueryParser};
/// use http::Uri;
///
/// let parser = QueryParser::float("ratio");
/// let ctx = ParseContext::get(Uri::from_static("/?ratio=1.5"));
/// let mut params = Params::new();
///
/// parser.parse(&ctx, &mut params).unwrap();
/// assert_eq!(params.get_float("ratio").unwrap(), 1.5);
/// assert_eq!(parser.resolve("ratio"), Some("ratio"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParser {
    name: String,
    kind: QueryKind,
}

impl QueryParser {
    /// Creates a parser for `name` coerced to `kind`.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: QueryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a string parser.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, QueryKind::String)
    }

    /// Creates an integer parser.
    #[must_use]
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, QueryKind::Int)
    }

    /// Creates a float parser.
    #[must_use]
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, QueryKind::Float)
    }

    /// Creates a boolean parser.
    #[must_use]
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, QueryKind::Bool)
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the target kind.
    #[must_use]
    pub fn kind(&self) -> QueryKind {
        self.kind
    }
}

impl Parser for QueryParser {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        match self.kind {
            QueryKind::String => {
                parse_query_string(&self.name, ctx, params);
                Ok(())
            }
            QueryKind::Int => parse_query_int(&self.name, ctx, params),
            QueryKind::Float => parse_query_float(&self.name, ctx, params),
            QueryKind::Bool => parse_query_bool(&self.name, ctx, params),
        }
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        (param == self.name).then_some(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Uri;
    use proptest::prelude::*;

    fn ctx(uri: &str) -> ParseContext {
        ParseContext::get(uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn test_parse_query_string() {
        let mut params = Params::new();
        parse_query_string("string", &ctx("http://localhost/?string=foo"), &mut params);

        assert_eq!(params.get_string("string").unwrap(), "foo");
    }

    #[test]
    fn test_parse_query_string_undefined() {
        let mut params = Params::new();
        parse_query_string("string", &ctx("http://localhost"), &mut params);

        assert!(!params.has("string"));
    }

    #[test]
    fn test_parse_query_int() {
        let mut params = Params::new();
        parse_query_int("int", &ctx("http://localhost/?int=42"), &mut params).unwrap();

        assert_eq!(params.get_int("int").unwrap(), 42);
    }

    #[test]
    fn test_parse_query_int_undefined() {
        let mut params = Params::new();
        parse_query_int("int", &ctx("http://localhost"), &mut params).unwrap();

        assert!(!params.has("int"));
    }

    #[test]
    fn test_parse_query_int_empty_is_absent() {
        let mut params = Params::new();
        parse_query_int("int", &ctx("http://localhost/?int="), &mut params).unwrap();

        assert!(params.is_empty());
    }

    #[test]
    fn test_parse_query_int_error() {
        let mut params = Params::new();
        let err = parse_query_int("int", &ctx("http://localhost/?int=invalid"), &mut params)
            .unwrap_err();

        assert_eq!(err.param(), "int");
        assert!(err.message().starts_with("parse int: "));
        assert!(params.is_empty());
    }

    #[test]
    fn test_parse_query_float() {
        let mut params = Params::new();
        parse_query_float("float", &ctx("http://localhost/?float=12.34"), &mut params).unwrap();

        assert!((params.get_float("float").unwrap() - 12.34).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_query_float_undefined() {
        let mut params = Params::new();
        parse_query_float("float", &ctx("http://localhost"), &mut params).unwrap();

        assert!(!params.has("float"));
    }

    #[test]
    fn test_parse_query_float_error() {
        let mut params = Params::new();
        let err = parse_query_float("float", &ctx("http://localhost/?float=invalid"), &mut params)
            .unwrap_err();

        assert_eq!(err.param(), "float");
        assert!(err.message().starts_with("parse float: "));
    }

    #[test]
    fn test_parse_query_bool() {
        let mut params = Params::new();
        parse_query_bool("bool", &ctx("http://localhost/?bool=true"), &mut params).unwrap();

        assert!(params.get_bool("bool").unwrap());
    }

    #[test]
    fn test_parse_query_bool_undefined() {
        let mut params = Params::new();
        parse_query_bool("bool", &ctx("http://localhost"), &mut params).unwrap();

        assert!(!params.has("bool"));
    }

    #[test]
    fn test_parse_query_bool_error() {
        let mut params = Params::new();
        let err = parse_query_bool("bool", &ctx("http://localhost/?bool=invalid"), &mut params)
            .unwrap_err();

        assert_eq!(err.param(), "bool");
        assert_eq!(err.message(), "parse bool: invalid syntax \"invalid\"");
    }

    #[test]
    fn test_bool_literals() {
        for literal in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(literal), Some(true), "{literal}");
        }
        for literal in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(literal), Some(false), "{literal}");
        }
        for literal in ["yes", "no", "tRuE", " true", ""] {
            assert_eq!(parse_bool(literal), None, "{literal}");
        }
    }

    #[test]
    fn test_query_parser_resolve() {
        let parser = QueryParser::int("width");

        assert_eq!(parser.name(), "width");
        assert_eq!(parser.kind(), QueryKind::Int);
        assert_eq!(parser.resolve("width"), Some("width"));
        assert_eq!(parser.resolve("height"), None);
    }

    #[test]
    fn test_query_parser_kinds() {
        let ctx = ctx("http://localhost/?s=abc&i=7&f=0.25&b=F");
        let parser = crate::ParserList::new()
            .with(QueryParser::string("s"))
            .with(QueryParser::int("i"))
            .with(QueryParser::float("f"))
            .with(QueryParser::bool("b"));

        let mut params = Params::new();
        parser.parse(&ctx, &mut params).unwrap();

        assert_eq!(params.get_string("s").unwrap(), "abc");
        assert_eq!(params.get_int("i").unwrap(), 7);
        assert!((params.get_float("f").unwrap() - 0.25).abs() < f64::EPSILON);
        assert!(!params.get_bool("b").unwrap());
    }

    proptest! {
        #[test]
        fn int_literals_round_trip(value in any::<i64>()) {
            let ctx = ctx(&format!("http://localhost/?n={value}"));
            let mut params = Params::new();
            parse_query_int("n", &ctx, &mut params).unwrap();
            prop_assert_eq!(params.get_int("n").unwrap(), value);
        }

        #[test]
        fn float_literals_round_trip(value in -1.0e12_f64..1.0e12) {
            let ctx = ctx(&format!("http://localhost/?x={value}"));
            let mut params = Params::new();
            parse_query_float("x", &ctx, &mut params).unwrap();
            prop_assert_eq!(params.get_float("x").unwrap(), value);
        }

        #[test]
        fn bool_literals_round_trip(value in any::<bool>()) {
            let ctx = ctx(&format!("http://localhost/?b={value}"));
            let mut params = Params::new();
            parse_query_bool("b", &ctx, &mut params).unwrap();
            prop_assert_eq!(params.get_bool("b").unwrap(), value);
        }

        #[test]
        fn non_numeric_int_is_rejected(value in "[a-zA-Z]{1,12}") {
            let ctx = ctx(&format!("http://localhost/?quality={value}"));
            let mut params = Params::new();
            let err = parse_query_int("quality", &ctx, &mut params).unwrap_err();
            prop_assert_eq!(err.param(), "quality");
            prop_assert!(!params.has("quality"));
        }

        #[test]
        fn absent_key_never_writes(value in any::<i64>()) {
            let ctx = ctx(&format!("http://localhost/?other={value}"));
            let mut params = Params::new();
            parse_query_int("n", &ctx, &mut params).unwrap();
            parse_query_float("n", &ctx, &mut params).unwrap();
            parse_query_bool("n", &ctx, &mut params).unwrap();
            parse_query_string("n", &ctx, &mut params);
            prop_assert!(params.is_empty());
        }
    }
}
