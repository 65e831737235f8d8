//! Chain assembly from configuration.

use std::sync::Arc;

use http::Uri;
use lumen_config::{ExtraParamKind, LumenConfig, SourceMode};
use lumen_extract::{
    FormatParser, GammaCorrectionParser, ParserList, QualityParser, QueryKind, QueryParser,
    SourceParser, SourcePathParser, SourceUrlParser,
};

use crate::BuildError;

/// Assembles the parser chain described by `config`.
///
/// Members are added in a fixed order: the source parser (wrapped in
/// [`SourceUrlParser`] when `source.base_url` is set), then `format`,
/// `quality` and `gamma_correction` when enabled, then the extra parameters
/// in declaration order.
///
/// # Errors
///
/// Returns [`BuildError::Config`] if the configuration fails validation and
/// [`BuildError::InvalidBaseUrl`] if the base URL cannot be parsed.
///
/// # Example
///
/// ```rust
/// use lumen::{build_parser, LumenConfig, ParseContext, Parser, Params};
/// use http::Uri;
///
/// let parser = build_parser(&LumenConfig::default()).unwrap();
/// let ctx = ParseContext::get(Uri::from_static("/?source=cat.png&quality=90"));
///
/// let mut params = Params::new();
/// parser.parse(&ctx, &mut params).unwrap();
///
/// assert_eq!(params.get_string("source").unwrap(), "cat.png");
/// assert_eq!(params.get_int("quality").unwrap(), 90);
/// ```
pub fn build_parser(config: &LumenConfig) -> Result<ParserList, BuildError> {
    config.validate()?;

    let base = config
        .source
        .base_url
        .as_deref()
        .map(parse_base_url)
        .transpose()?;

    let mut chain = ParserList::new();

    match (config.source.mode, base) {
        (SourceMode::Query, None) => chain.push(SourceParser),
        (SourceMode::Query, Some(base)) => chain.push(SourceUrlParser::new(SourceParser, base)),
        (SourceMode::Path, None) => chain.push(SourcePathParser),
        (SourceMode::Path, Some(base)) => {
            chain.push(SourceUrlParser::new(SourcePathParser, base));
        }
    }

    if config.params.format {
        chain.push(FormatParser);
    }
    if config.params.quality {
        chain.push(QualityParser);
    }
    if config.params.gamma_correction {
        chain.push(GammaCorrectionParser);
    }

    for extra in &config.params.extra {
        chain.push(QueryParser::new(extra.name.clone(), query_kind(extra.kind)));
    }

    tracing::debug!(
        source_mode = ?config.source.mode,
        base_url = config.source.base_url.as_deref().unwrap_or(""),
        parsers = chain.len(),
        "parser chain assembled"
    );

    Ok(chain)
}

fn parse_base_url(url: &str) -> Result<Arc<Uri>, BuildError> {
    url.parse::<Uri>()
        .map(Arc::new)
        .map_err(|e| BuildError::InvalidBaseUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

const fn query_kind(kind: ExtraParamKind) -> QueryKind {
    match kind {
        ExtraParamKind::String => QueryKind::String,
        ExtraParamKind::Int => QueryKind::Int,
        ExtraParamKind::Float => QueryKind::Float,
        ExtraParamKind::Bool => QueryKind::Bool,
    }
}
