//! # Lumen
//!
//! **Composable HTTP image-parameter extraction**
//!
//! Lumen turns an incoming HTTP request into a typed, validated parameter bag
//! for an image-processing pipeline:
//!
//! - **One parser per parameter** – each reads a single query or path value
//! - **Fail-fast chains** – parsers run in order and stop at the first error
//! - **Reverse lookup** – ask a chain which request parameter feeds an
//!   internal name, for cache keys and link generation
//! - **Configurable** – assemble a chain from TOML, JSON or environment
//!   variables
//!
//! ## Quick Start
//!
//! ```rust
//! use lumen::{build_parser, ConfigLoader, ParseContext, Parser, Params};
//! use http::Request;
//!
//! let config = ConfigLoader::new()
//!     .with_string(
//!         r#"
//!         [source]
//!         mode = "path"
//!         base_url = "http://store/image"
//!         "#,
//!         "toml",
//!     )
//!     .unwrap()
//!     .load()
//!     .unwrap();
//! let parser = build_parser(&config).unwrap();
//!
//! let request = Request::get("/cat.png?format=jpg&quality=75").body(()).unwrap();
//! let mut params = Params::new();
//! parser.parse(&ParseContext::from(&request), &mut params).unwrap();
//!
//! assert_eq!(
//!     params.get_url("source").unwrap().to_string(),
//!     "http://store/image/cat.png"
//! );
//! assert_eq!(
//!     params.to_string(),
//!     "format=jpeg&quality=75&source=http%3A%2F%2Fstore%2Fimage%2Fcat.png"
//! );
//! ```
//!
//! ## Crates
//!
//! ```text
//! lumen-core     Params, ParamValue, ParamError
//! lumen-extract  ParseContext, Parser, ParserList and the built-in parsers
//! lumen-config   LumenConfig and ConfigLoader
//! lumen          chain assembly and logging setup
//! ```

#![doc(html_root_url = "https://docs.rs/lumen/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chain;
mod error;
pub mod logging;

pub use chain::build_parser;
pub use error::{BuildError, LoggingError};
pub use logging::init_logging;

// Re-export core types
pub use lumen_core as core;

// Re-export extraction types
pub use lumen_extract as extract;

// Re-export configuration types
pub use lumen_config as config;

pub use lumen_config::{ConfigError, ConfigLoader, LumenConfig};
pub use lumen_core::{ParamError, ParamResult, ParamValue, Params};
pub use lumen_extract::{ParseContext, Parser, ParserList};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use lumen::prelude::*;
///
/// let parser = ParserList::new().with(SourceParser).with(QualityParser);
/// assert_eq!(parser.resolve(QUALITY_PARAM), Some(QUALITY_PARAM));
/// ```
pub mod prelude {
    pub use crate::{build_parser, init_logging, BuildError, LoggingError};
    pub use lumen_config::{ConfigLoader, LumenConfig, SourceMode};
    pub use lumen_core::{
        ParamError, ParamKind, ParamResult, ParamValue, Params, FORMAT_PARAM,
        GAMMA_CORRECTION_PARAM, QUALITY_PARAM, SOURCE_PARAM,
    };
    pub use lumen_extract::{
        FormatParser, GammaCorrectionParser, ParseContext, Parser, ParserList, QualityParser,
        QueryKind, QueryParser, SourceParser, SourcePathParser, SourceUrlParser,
    };
}
