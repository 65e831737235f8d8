//! # Lumen Extract
//!
//! Composable parsers that turn an HTTP request into the [`Params`] bag read
//! by the Lumen image pipeline.
//!
//! Each parser owns one logical parameter. It can read that parameter from a
//! request and, in reverse, tell which request parameter feeds a given
//! internal name. Parsers are combined into a [`ParserList`], which applies
//! them in order and stops at the first error.
//!
//! ## Parsers
//!
//! | Parser | Source | Internal key | Value |
//! |--------|--------|--------------|-------|
//! | [`SourceParser`] | `?source=` | `source` | string |
//! | [`SourcePathParser`] | URL path | `source` | string |
//! | [`SourceUrlParser`] | inner parser | `source` | URL joined onto a base |
//! | [`FormatParser`] | `?format=` | `format` | string, `jpg` becomes `jpeg` |
//! | [`QualityParser`] | `?quality=` | `quality` | integer |
//! | [`GammaCorrectionParser`] | `?gamma_correction=` | `gamma_correction` | boolean |
//! | [`QueryParser`] | `?<name>=` | `<name>` | string, integer, float or boolean |
//!
//! An absent or empty query parameter is never an error: the key is simply
//! left unset.
//!
//! ## Example
//!
//! ```rust
//! use lumen_core::{Params, SOURCE_PARAM};
//! use lumen_extract::{
//!     FormatParser, GammaCorrectionParser, ParseContext, Parser, ParserList,
//!     QualityParser, SourcePathParser, SourceUrlParser,
//! };
//! use http::Uri;
//!
//! let parser = ParserList::new()
//!     .with(SourceUrlParser::new(SourcePathParser, Uri::from_static("http://store/image")))
//!     .with(FormatParser)
//!     .with(QualityParser)
//!     .with(GammaCorrectionParser);
//!
//! let ctx = ParseContext::get(Uri::from_static("/cat.png?format=jpg&quality=80"));
//! let mut params = Params::new();
//! parser.parse(&ctx, &mut params).unwrap();
//!
//! assert_eq!(params.get_url(SOURCE_PARAM).unwrap().to_string(), "http://store/image/cat.png");
//! assert_eq!(params.get_string("format").unwrap(), "jpeg");
//! assert_eq!(params.get_int("quality").unwrap(), 80);
//! assert!(!params.has("gamma_correction"));
//!
//! // The path source has no query-string name.
//! assert_eq!(parser.resolve(SOURCE_PARAM), None);
//! assert_eq!(parser.resolve("quality"), Some("quality"));
//! ```
//!
//! ## Error Handling
//!
//! Parsers return [`ParamError`](lumen_core::ParamError) naming the internal
//! parameter:
//!
//! ```rust
//! use lumen_core::Params;
//! use lumen_extract::{ParseContext, Parser, QualityParser};
//! use http::Uri;
//!
//! let ctx = ParseContext::get(Uri::from_static("/?quality=foobar"));
//! let err = QualityParser.parse(&ctx, &mut Params::new()).unwrap_err();
//!
//! assert_eq!(err.param(), "quality");
//! assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
//! ```

#![doc(html_root_url = "https://docs.rs/lumen-extract/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod image;
mod parser;
mod query;
mod source;

pub use context::ParseContext;
pub use image::{FormatParser, GammaCorrectionParser, QualityParser};
pub use parser::{Parser, ParserList};
pub use query::{
    parse_bool, parse_query_bool, parse_query_float, parse_query_int, parse_query_string,
    QueryKind, QueryParser,
};
pub use source::{SourceParser, SourcePathParser, SourceUrlParser};

// Re-export the bag types parsers operate on
pub use lumen_core::{
    ParamError, ParamResult, ParamValue, Params, FORMAT_PARAM, GAMMA_CORRECTION_PARAM,
    QUALITY_PARAM, SOURCE_PARAM,
};
