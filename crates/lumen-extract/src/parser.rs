//! Core parser trait and the ordered parser list.
//!
//! The [`Parser`] trait is the foundation for all extractors.

use std::fmt;
use std::sync::Arc;

use lumen_core::{ParamResult, Params};

use crate::ParseContext;

/// An extractor that fills [`Params`] from a request and can answer the
/// reverse question of which request parameter feeds a given internal name.
///
/// Parsers are immutable once built and are shared across concurrent
/// requests; each call gets its own `Params`.
///
/// # Implementing `Parser`
///
/// ```rust
/// use lumen_core::{ParamError, ParamResult, Params};
/// use lumen_extract::{ParseContext, Parser};
///
/// // Reads the `w` query parameter into the internal `width` key.
/// #[derive(Debug)]
/// struct WidthParser;
///
/// impl Parser for WidthParser {
///     fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
///         let Some(raw) = ctx.query("w").filter(|s| !s.is_empty()) else {
///             return Ok(());
///         };
///         let width: i64 = raw
///             .parse()
///             .map_err(|e| ParamError::parse_type("width", "int", e))?;
///         params.set("width", width);
///         Ok(())
///     }
///
///     fn resolve(&self, param: &str) -> Option<&str> {
///         (param == "width").then_some("w")
///     }
/// }
/// ```
pub trait Parser: fmt::Debug + Send + Sync {
    /// Reads the request and writes any parameter it finds into `params`.
    ///
    /// An absent request parameter is not an error and leaves `params`
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamError`](lumen_core::ParamError) naming the internal
    /// parameter when a present value cannot be coerced.
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()>;

    /// Returns the request parameter name that populates `param`, or `None`
    /// if this parser does not own `param`.
    fn resolve(&self, param: &str) -> Option<&str>;
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        (**self).parse(ctx, params)
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        (**self).resolve(param)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        (**self).parse(ctx, params)
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        (**self).resolve(param)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        (**self).parse(ctx, params)
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        (**self).resolve(param)
    }
}

/// An ordered list of parsers applied one after another.
///
/// `parse` stops at the first failing member and returns its error
/// unchanged; values written by earlier members stay in the bag. `resolve`
/// returns the first member's answer. Members are shared, so the same parser
/// may appear in several lists.
///
/// # Example
///
/// ```rust
/// use lumen_core::Params;
/// use lumen_extract::{FormatParser, ParseContext, Parser, ParserList, QualityParser, SourceParser};
/// use http::Uri;
///
/// let parser = ParserList::new()
///     .with(SourceParser)
///     .with(FormatParser)
///     .with(QualityParser);
///
/// let ctx = ParseContext::get(Uri::from_static("/?source=cat.png&format=jpg&quality=75"));
/// let mut params = Params::new();
/// parser.parse(&ctx, &mut params).unwrap();
///
/// assert_eq!(params.to_string(), "format=jpeg&quality=75&source=cat.png");
/// assert_eq!(parser.resolve("quality"), Some("quality"));
/// assert_eq!(parser.resolve("width"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParserList {
    parsers: Vec<Arc<dyn Parser>>,
}

impl ParserList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `parser` and returns the list.
    #[must_use]
    pub fn with(mut self, parser: impl Parser + 'static) -> Self {
        self.push(parser);
        self
    }

    /// Appends `parser`.
    pub fn push(&mut self, parser: impl Parser + 'static) {
        self.parsers.push(Arc::new(parser));
    }

    /// Appends an already shared parser.
    pub fn push_shared(&mut self, parser: Arc<dyn Parser>) {
        self.parsers.push(parser);
    }

    /// Returns the number of parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if the list has no parsers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Returns the parsers in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Parser>> {
        self.parsers.iter()
    }
}

impl FromIterator<Arc<dyn Parser>> for ParserList {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Parser>>>(iter: I) -> Self {
        Self {
            parsers: iter.into_iter().collect(),
        }
    }
}

impl Parser for ParserList {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        for (index, parser) in self.parsers.iter().enumerate() {
            if let Err(err) = parser.parse(ctx, params) {
                tracing::debug!(
                    index,
                    param = err.param(),
                    error = %err,
                    "parameter parsing stopped"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        self.parsers
            .iter()
            .find_map(|parser| parser.resolve(param).filter(|name| !name.is_empty()))
    }
}
