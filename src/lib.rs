//! Emojic - `#define`-based substitution between C and emoji
//!
//! Three operations share one substitution core:
//!
//! - **compile**: expand the glyph `#define` block embedded in Emojic
//!   source back into C
//! - **analyze**: list the C keywords and punctuation that could be given
//!   a glyph
//! - **transform**: rewrite C with a caller-supplied token → glyph mapping
//!   and prepend the `#define` header that inverts it
//!
//! ## Quick Start
//!
//! ```rust
//! use emojic::{compile_source, transform_source, CompilerConfig, Mapping};
//!
//! let config = CompilerConfig::default();
//! let mapping: Mapping = [("int", "😒"), (";", "😍")].into_iter().collect();
//!
//! let emojic = transform_source("int x;", &mapping, &config).unwrap();
//! assert_eq!(emojic, "#define 😍 ;\n#define 😒 int\n\n😒 x😍");
//!
//! let c = compile_source(&emojic, &config).unwrap();
//! assert_eq!(c, "\nint x;");
//! ```

// Core error handling
pub mod error;

// Configuration
pub mod config;

// Substitution core
pub mod directive;
pub mod mapping;
pub mod substitution;
pub mod vocabulary;

// Header synthesis and output normalization
pub mod postprocess;
pub mod synthesizer;

// Operations exposed to adapters
pub mod service;

pub use config::CompilerConfig;
pub use directive::{extract, Definition, Extraction, DIRECTIVE_MARKER};
pub use error::{EmojicError, Result};
pub use mapping::Mapping;
pub use service::{
    analyze, compile, compile_source, transform, transform_source, AnalyzeRequest,
    AnalyzeResponse, CompileRequest, CompileResponse, TransformRequest, TransformResponse,
};
pub use substitution::{substitute, Direction, MatchStrategy, SubstitutionMode};
pub use vocabulary::{classify, scan_tokens, TokenCategory};
