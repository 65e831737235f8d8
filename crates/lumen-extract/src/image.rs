//! Parsers for image output options.

use lumen_core::{ParamResult, Params, FORMAT_PARAM, GAMMA_CORRECTION_PARAM, QUALITY_PARAM};

use crate::query::{parse_query_bool, parse_query_int, parse_query_string};
use crate::{ParseContext, Parser};

/// Takes the output format from the `format` query parameter.
///
/// `jpg` is normalized to `jpeg`; every other value is kept as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatParser;

impl Parser for FormatParser {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        parse_query_string(FORMAT_PARAM, ctx, params);
        if !params.has(FORMAT_PARAM) {
            return Ok(());
        }
        if params.get_string(FORMAT_PARAM)? == "jpg" {
            params.set(FORMAT_PARAM, "jpeg");
        }
        Ok(())
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        (param == FORMAT_PARAM).then_some(FORMAT_PARAM)
    }
}

/// Takes the output quality from the `quality` query parameter as an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityParser;

impl Parser for QualityParser {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        parse_query_int(QUALITY_PARAM, ctx, params)
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        (param == QUALITY_PARAM).then_some(QUALITY_PARAM)
    }
}

/// Takes the gamma correction flag from the `gamma_correction` query parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GammaCorrectionParser;

impl Parser for GammaCorrectionParser {
    fn parse(&self, ctx: &ParseContext, params: &mut Params) -> ParamResult<()> {
        parse_query_bool(GAMMA_CORRECTION_PARAM, ctx, params)
    }

    fn resolve(&self, param: &str) -> Option<&str> {
        (param == GAMMA_CORRECTION_PARAM).then_some(GAMMA_CORRECTION_PARAM)
    }
}
