//! Ordered substitution engine
//!
//! Applies every key of a [`Mapping`] to a body of text, longest key
//! first. How a key is matched depends on the direction:
//!
//! | Direction | Key | Strategy |
//! |-----------|-----|----------|
//! | glyph → symbol | any | literal substring |
//! | symbol → glyph | all letters/digits | whole word (`\b…\b`) |
//! | symbol → glyph | anything else | literal substring |
//!
//! In the default [`SubstitutionMode::Cascading`] mode keys are applied
//! one at a time over the whole body, so a replacement produced by a
//! longer key can be rewritten again by a shorter key that occurs inside
//! it. [`SubstitutionMode::Isolated`] replaces in a single scan and never
//! revisits replacement text.

use std::str::FromStr;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EmojicError, Result};
use crate::mapping::Mapping;

/// Which way the mapping points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Keys are glyphs, values are C tokens (compile)
    GlyphToSymbol,
    /// Keys are C tokens, values are glyphs (transform)
    SymbolToGlyph,
}

/// How a single key is located in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Plain substring match
    Literal,
    /// Match only where not touching a letter, digit or underscore
    WholeWord,
}

impl Direction {
    /// Pick the match strategy for a key in this direction
    pub fn strategy_for(self, key: &str) -> MatchStrategy {
        match self {
            Direction::GlyphToSymbol => MatchStrategy::Literal,
            Direction::SymbolToGlyph if is_word(key) => MatchStrategy::WholeWord,
            Direction::SymbolToGlyph => MatchStrategy::Literal,
        }
    }
}

/// Replacement scheduling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionMode {
    /// One pass per key, each pass seeing the previous pass's output
    #[default]
    Cascading,
    /// One pass for all keys; replacement text is never rescanned
    Isolated,
}

impl FromStr for SubstitutionMode {
    type Err = EmojicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cascading" => Ok(SubstitutionMode::Cascading),
            "isolated" => Ok(SubstitutionMode::Isolated),
            other => Err(EmojicError::Config {
                key: "substitution_mode".to_string(),
                message: format!("unknown mode '{}', expected cascading or isolated", other),
            }),
        }
    }
}

/// True when the key is non-empty and made only of letters and digits
fn is_word(key: &str) -> bool {
    !key.is_empty() && key.chars().all(char::is_alphanumeric)
}

fn pattern_for(key: &str, strategy: MatchStrategy) -> String {
    match strategy {
        MatchStrategy::Literal => regex::escape(key),
        MatchStrategy::WholeWord => format!(r"\b{}\b", regex::escape(key)),
    }
}

/// Apply `mapping` to `body` in the given direction and mode
pub fn substitute(
    body: &str,
    mapping: &Mapping,
    direction: Direction,
    mode: SubstitutionMode,
) -> Result<String> {
    if mapping.is_empty() {
        return Ok(body.to_string());
    }

    let output = match mode {
        SubstitutionMode::Cascading => substitute_cascading(body, mapping, direction)?,
        SubstitutionMode::Isolated => substitute_isolated(body, mapping, direction)?,
    };

    debug!(
        "Applied {} keys ({:?}, {:?}): {} -> {} bytes",
        mapping.len(),
        direction,
        mode,
        body.len(),
        output.len()
    );

    Ok(output)
}

fn substitute_cascading(body: &str, mapping: &Mapping, direction: Direction) -> Result<String> {
    let mut text = body.to_string();

    for key in mapping.ordered_keys() {
        let Some(value) = mapping.get(key) else {
            continue;
        };

        text = match direction.strategy_for(key) {
            MatchStrategy::Literal => text.replace(key, value),
            MatchStrategy::WholeWord => {
                let re = Regex::new(&pattern_for(key, MatchStrategy::WholeWord))?;
                re.replace_all(&text, NoExpand(value)).into_owned()
            }
        };
    }

    Ok(text)
}

fn substitute_isolated(body: &str, mapping: &Mapping, direction: Direction) -> Result<String> {
    let keys = mapping.ordered_keys();
    if keys.is_empty() {
        return Ok(body.to_string());
    }

    // Leftmost-first alternation: at any position the longest key wins.
    let alternation = keys
        .iter()
        .map(|key| pattern_for(key, direction.strategy_for(key)))
        .collect::<Vec<_>>()
        .join("|");
    let re = Regex::new(&alternation)?;

    let replaced = re.replace_all(body, |caps: &regex::Captures<'_>| {
        let matched = &caps[0];
        mapping.get(matched).unwrap_or(matched).to_string()
    });

    Ok(replaced.into_owned())
}
