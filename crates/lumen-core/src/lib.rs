//! # Lumen Core
//!
//! Core types shared by every stage of the Lumen image parameter chain.
//!
//! This crate provides:
//!
//! - [`Params`] - Order-insensitive parameter bag handed to the image pipeline
//! - [`ParamValue`] - Dynamically-typed value stored in the bag
//! - [`ParamKind`] - The kind tag of a [`ParamValue`]
//! - [`ParamError`] - Error naming the offending parameter
//!
//! ## Example
//!
//! ```rust
//! use lumen_core::{Params, ParamValue};
//!
//! let mut params = Params::new();
//! params.set("format", "jpeg");
//! params.set("quality", 85_i64);
//!
//! assert_eq!(params.get_string("format").unwrap(), "jpeg");
//! assert_eq!(params.get_int("quality").unwrap(), 85);
//! assert!(params.get_bool("quality").is_err());
//! assert_eq!(params.to_string(), "format=jpeg&quality=85");
//! ```

#![doc(html_root_url = "https://docs.rs/lumen-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod params;
mod value;

pub use error::{ParamError, ParamResult};
pub use params::Params;
pub use value::{ParamKind, ParamValue};

/// Name of the parameter carrying the image source.
///
/// Depending on how the chain is assembled the value is either a string
/// (query or path source) or a [`ParamValue::Url`] (source joined onto a
/// base URL).
pub const SOURCE_PARAM: &str = "source";

/// Name of the output format parameter.
pub const FORMAT_PARAM: &str = "format";

/// Name of the output quality parameter.
pub const QUALITY_PARAM: &str = "quality";

/// Name of the gamma correction flag.
pub const GAMMA_CORRECTION_PARAM: &str = "gamma_correction";
