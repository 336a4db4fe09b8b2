//! Token vocabulary for the symbolic (C) side
//!
//! Two closed vocabularies decide which substrings are worth offering as
//! substitution candidates: reserved words, matched on word boundaries,
//! and single-character punctuation, matched anywhere.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Primitive types, control flow, entry point, I/O routines, preprocessor
/// directive names and the record keyword.
pub const RESERVED_WORDS: &[&str] = &[
    "int", "float", "char", "double", "void", "return", "if", "else", "while", "for", "main",
    "printf", "scanf", "include", "define", "struct",
];

/// Structural characters: braces, parens, semicolon, quote, hash, angles.
pub const PUNCTUATION: &[char] = &['{', '}', '(', ')', ';', '"', '#', '<', '>'];

static RESERVED_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = RESERVED_WORDS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b({})\b", alternation)).unwrap()
});

/// Category of an interesting token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Keyword or identifier-like word, matched on whole-word boundaries
    ReservedWord,
    /// Single structural character, matched literally
    Punctuation,
}

/// Classify a single token against the fixed vocabularies
pub fn classify(token: &str) -> Option<TokenCategory> {
    if RESERVED_WORDS.contains(&token) {
        return Some(TokenCategory::ReservedWord);
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if PUNCTUATION.contains(&c) => Some(TokenCategory::Punctuation),
        _ => None,
    }
}

/// Scan C code and return the distinct interesting tokens, sorted
///
/// Sorting is plain string order (code point order, case-sensitive).
/// Digits, identifiers outside the vocabulary and any other characters
/// are never reported.
pub fn scan_tokens(code: &str) -> Vec<String> {
    let mut found: BTreeSet<String> = RESERVED_WORD_RE
        .find_iter(code)
        .map(|m| m.as_str().to_string())
        .collect();

    found.extend(
        code.chars()
            .filter(|c| PUNCTUATION.contains(c))
            .map(String::from),
    );

    found.into_iter().collect()
}
