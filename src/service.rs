//! Compile, analyze and transform operations
//!
//! Each operation is a pure function of its request and the compiler
//! configuration. The request/response types are the JSON bodies the HTTP
//! adapter exchanges; the CLI reuses them for `--format json`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CompilerConfig;
use crate::directive;
use crate::error::{EmojicError, Result};
use crate::mapping::Mapping;
use crate::postprocess;
use crate::substitution::{self, Direction};
use crate::synthesizer;
use crate::vocabulary;

pub const STATUS_SUCCESS: &str = "success";
pub const COMPILE_MESSAGE: &str = "Transpilation successful.";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileRequest {
    /// Emojic source, `#define` lines included
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileResponse {
    pub status: String,
    pub c_code: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// C source
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformRequest {
    /// C source
    #[serde(default)]
    pub code: Option<String>,
    /// C token → glyph, e.g. `{"int": "😒"}`
    #[serde(default)]
    pub mapping: Mapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResponse {
    pub status: String,
    pub emojic_code: String,
}

fn required_code(code: Option<&str>) -> Result<&str> {
    match code {
        Some(code) if !code.is_empty() => Ok(code),
        _ => Err(EmojicError::missing_code()),
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Emojic → C: expand the `#define` block embedded in the source
pub fn compile(request: &CompileRequest, config: &CompilerConfig) -> Result<CompileResponse> {
    let code = required_code(request.code.as_deref())?;
    let c_code = compile_source(code, config)?;

    Ok(CompileResponse {
        status: STATUS_SUCCESS.to_string(),
        c_code,
        message: COMPILE_MESSAGE.to_string(),
    })
}

/// Expand definitions in `source` without request wrapping
pub fn compile_source(source: &str, config: &CompilerConfig) -> Result<String> {
    let extraction = directive::extract(source);
    let mut c_code = substitution::substitute(
        &extraction.body,
        &extraction.mapping,
        Direction::GlyphToSymbol,
        config.substitution_mode,
    )?;

    if config.inject_std_include {
        c_code = postprocess::ensure_std_include(c_code);
    }

    info!(
        "Compiled {} bytes with {} definitions",
        source.len(),
        extraction.mapping.len()
    );

    Ok(c_code)
}

/// List the interesting C tokens that could be given a glyph
pub fn analyze(request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
    let code = required_code(request.code.as_deref())?;
    let tokens = vocabulary::scan_tokens(code);

    info!("Analyzed {} bytes, found {} tokens", code.len(), tokens.len());

    Ok(AnalyzeResponse {
        status: STATUS_SUCCESS.to_string(),
        tokens,
    })
}

/// C → Emojic: rewrite tokens as glyphs and prepend the matching header
pub fn transform(request: &TransformRequest, config: &CompilerConfig) -> Result<TransformResponse> {
    let code = required_code(request.code.as_deref())?;
    let emojic_code = transform_source(code, &request.mapping, config)?;

    Ok(TransformResponse {
        status: STATUS_SUCCESS.to_string(),
        emojic_code,
    })
}

/// Rewrite `source` with a token → glyph mapping, header included
pub fn transform_source(
    source: &str,
    token_to_glyph: &Mapping,
    config: &CompilerConfig,
) -> Result<String> {
    let active = token_to_glyph.without_blank_values();
    let header = synthesizer::synthesize_header(&active);
    let body = substitution::substitute(
        source,
        &active,
        Direction::SymbolToGlyph,
        config.substitution_mode,
    )?;

    info!(
        "Transformed {} bytes with {} of {} mapped tokens",
        source.len(),
        active.len(),
        token_to_glyph.len()
    );

    Ok(header + &body)
}
