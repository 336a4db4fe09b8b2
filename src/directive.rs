//! `#define` extraction
//!
//! Splits mixed source text into the definitions it declares and the
//! remaining body. Matching is lenient: any line that does not fit the
//! grammar exactly is kept as ordinary content, with no diagnostic.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mapping::Mapping;

/// The directive marker opening every definition statement
pub const DIRECTIVE_MARKER: &str = "#define";

/// `#define NAME VALUE` on an already-trimmed line. The value part is
/// optional; a bare `#define NAME` defines an empty replacement.
static DEFINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#define\s+(\S+)(?:\s+(.*))?$").unwrap());

/// A captured definition statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Name position: the text to look for (a glyph when compiling)
    pub name: String,
    /// Value position, trimmed
    pub value: String,
    /// 1-based line number in the source text
    pub line: usize,
}

impl Definition {
    /// Parse one source line, returning `None` for content lines
    pub fn parse(line: &str, line_number: usize) -> Option<Self> {
        let caps = DEFINE_RE.captures(line.trim())?;
        let name = caps.get(1)?.as_str().to_string();
        let value = caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        Some(Self {
            name,
            value,
            line: line_number,
        })
    }

    /// Render as a directive line (without trailing newline)
    pub fn to_line(&self) -> String {
        format!("{} {} {}", DIRECTIVE_MARKER, self.name, self.value)
    }
}

/// Result of splitting text into definitions and body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Every definition statement, in source order (redefinitions included)
    pub definitions: Vec<Definition>,
    /// name → value, later definitions overwriting earlier ones
    pub mapping: Mapping,
    /// Content lines joined with `\n`
    pub body: String,
}

/// Pull the definition statements out of `source`
pub fn extract(source: &str) -> Extraction {
    let mut definitions = Vec::new();
    let mut mapping = Mapping::new();
    let mut content_lines = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        match Definition::parse(line, idx + 1) {
            Some(def) => {
                if let Some(previous) = mapping.insert(def.name.clone(), def.value.clone()) {
                    debug!(
                        "Line {}: '{}' redefined (was '{}')",
                        def.line, def.name, previous
                    );
                }
                definitions.push(def);
            }
            None => content_lines.push(line),
        }
    }

    debug!(
        "Extracted {} definitions ({} distinct), {} content lines",
        definitions.len(),
        mapping.len(),
        content_lines.len()
    );

    Extraction {
        definitions,
        mapping,
        body: content_lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_separates_definitions() {
        let source = "#define 😒 int\n#define 😊 main\n😒 😊() {}";
        let extraction = extract(source);

        assert_eq!(extraction.definitions.len(), 2);
        assert_eq!(extraction.mapping.get("😒"), Some("int"));
        assert_eq!(extraction.mapping.get("😊"), Some("main"));
        assert_eq!(extraction.body, "😒 😊() {}");
    }

    #[test]
    fn test_extract_keeps_content_order() {
        let source = "a\n#define X y\nb\n\nc";
        let extraction = extract(source);
        assert_eq!(extraction.body, "a\nb\n\nc");
    }

    #[test]
    fn test_value_is_rest_of_line_trimmed() {
        let extraction = extract("   #define   🔁   while (1)   ");
        assert_eq!(extraction.mapping.get("🔁"), Some("while (1)"));
        assert_eq!(extraction.body, "");
    }

    #[test]
    fn test_redefinition_last_wins_and_both_removed() {
        let source = "#define X first\nbody X\n#define X second";
        let extraction = extract(source);

        assert_eq!(extraction.definitions.len(), 2);
        assert_eq!(extraction.mapping.len(), 1);
        assert_eq!(extraction.mapping.get("X"), Some("second"));
        assert_eq!(extraction.body, "body X");
    }

    #[test]
    fn test_empty_value_accepted() {
        let extraction = extract("#define NOTHING\nx");
        assert_eq!(extraction.mapping.get("NOTHING"), Some(""));
        assert_eq!(extraction.body, "x");
    }

    #[test]
    fn test_malformed_lines_are_content() {
        let source = "#define\n#defineX y\n# define X y\n#include <stdio.h>\nint #define X y";
        let extraction = extract(source);

        assert!(extraction.mapping.is_empty());
        assert!(extraction.definitions.is_empty());
        assert_eq!(extraction.body, source);
    }

    #[test]
    fn test_line_numbers() {
        let extraction = extract("x\n#define A b\ny\n#define C d");
        let lines: Vec<usize> = extraction.definitions.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn test_trailing_newline_not_reproduced() {
        let extraction = extract("int x;\n");
        assert_eq!(extraction.body, "int x;");
    }

    #[test]
    fn test_definition_to_line() {
        let def = Definition::parse("#define 👌 {", 1).unwrap();
        assert_eq!(def.to_line(), "#define 👌 {");
    }
}
