//! `#define` header synthesis for transformed code
//!
//! Writes the glyph in the name position and the C token in the value
//! position, so compiling the transformed output maps each glyph back to
//! its token.

use tracing::debug;

use crate::directive::Definition;
use crate::mapping::Mapping;

/// Key that is never written to the header: redefining the directive
/// marker's own character cannot be expressed as a `#define`.
pub const UNMAPPABLE_TOKEN: &str = "#";

/// Build one definition per token → glyph pair that can be synthesized
pub fn header_definitions(token_to_glyph: &Mapping) -> Vec<Definition> {
    token_to_glyph
        .iter()
        .filter(|(_, glyph)| !glyph.trim().is_empty())
        .filter(|(token, _)| {
            if *token == UNMAPPABLE_TOKEN {
                debug!("Skipping header definition for '{}'", UNMAPPABLE_TOKEN);
                return false;
            }
            true
        })
        .enumerate()
        .map(|(idx, (token, glyph))| Definition {
            name: glyph.to_string(),
            value: token.to_string(),
            line: idx + 1,
        })
        .collect()
}

/// Render the header block: one directive line per definition and a
/// trailing blank line
pub fn synthesize_header(token_to_glyph: &Mapping) -> String {
    let mut header = String::new();
    for def in header_definitions(token_to_glyph) {
        header.push_str(&def.to_line());
        header.push('\n');
    }
    header.push('\n');
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lines_glyph_first() {
        let mapping: Mapping = [("int", "😒"), (";", "😍")].into_iter().collect();
        assert_eq!(
            synthesize_header(&mapping),
            "#define 😍 ;\n#define 😒 int\n\n"
        );
    }

    #[test]
    fn test_blank_glyphs_dropped() {
        let mapping: Mapping = [("int", "😒"), ("main", " "), ("for", "")]
            .into_iter()
            .collect();
        let defs = header_definitions(&mapping);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "😒");
        assert_eq!(defs[0].value, "int");
    }

    #[test]
    fn test_hash_key_skipped() {
        let mapping: Mapping = [("#", "🔥"), ("int", "😒")].into_iter().collect();
        assert_eq!(synthesize_header(&mapping), "#define 😒 int\n\n");
    }

    #[test]
    fn test_empty_mapping_yields_blank_line() {
        assert_eq!(synthesize_header(&Mapping::new()), "\n");
    }

    #[test]
    fn test_header_parses_back() {
        let mapping: Mapping = [("{", "👌"), ("return", "🙌")].into_iter().collect();
        let extraction = crate::directive::extract(&synthesize_header(&mapping));
        assert_eq!(extraction.mapping.get("👌"), Some("{"));
        assert_eq!(extraction.mapping.get("🙌"), Some("return"));
        assert_eq!(extraction.body, "");
    }
}
