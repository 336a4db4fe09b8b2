//! Key → replacement mappings
//!
//! A mapping is used in both directions: glyph → C token when expanding
//! `#define` blocks, and C token → glyph when a caller asks for a
//! transform. Keys are unique; inserting an existing key overwrites it.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Set of unique key → replacement pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<String, String>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning the replacement it overwrote
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get the replacement for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    /// Check if mapping is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get count of pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keep only the pairs whose replacement has visible content
    ///
    /// Used for caller-supplied mappings, where an untouched form field
    /// arrives as an empty or whitespace-only glyph.
    pub fn without_blank_values(&self) -> Self {
        self.entries
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Keys in application order: longest first, ties in lexicographic order
    ///
    /// Length is counted in Unicode scalar values so that multi-codepoint
    /// glyphs (e.g. `❤️`) outrank single-codepoint ones. Empty keys are
    /// skipped since they would match between every pair of characters.
    pub fn ordered_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .entries
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !k.is_empty())
            .collect();
        keys.sort_by(|a, b| longest_first(a, b));
        keys
    }
}

fn longest_first(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Mapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl From<BTreeMap<String, String>> for Mapping {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}
