//! Transform → compile round trips
//!
//! A transform writes a `#define` header whose glyph → token mapping
//! inverts the body rewrite, so compiling the transformed output must give
//! back the original C (plus the blank separator line and, when `printf`
//! is used, the injected include).

use emojic::{
    analyze, compile, transform, AnalyzeRequest, CompileRequest, CompilerConfig, Mapping,
    SubstitutionMode, TransformRequest,
};

const HELLO: &str = "int main() { printf(\"hi\"); return 0; }";

fn hello_mapping() -> Mapping {
    [
        ("int", "😒"),
        ("main", "😊"),
        ("(", "😂"),
        (")", "🤣"),
        ("{", "👌"),
        ("}", "😘"),
        ("printf", "❤️"),
        (";", "😍"),
        ("return", "🙌"),
    ]
    .into_iter()
    .collect()
}

fn round_trip(code: &str, mapping: Mapping, config: &CompilerConfig) -> (String, String) {
    let transformed = transform(
        &TransformRequest {
            code: Some(code.to_string()),
            mapping,
        },
        config,
    )
    .expect("transform should succeed")
    .emojic_code;

    let compiled = compile(
        &CompileRequest {
            code: Some(transformed.clone()),
        },
        config,
    )
    .expect("compile should succeed")
    .c_code;

    (transformed, compiled)
}

#[test]
fn test_hello_world_round_trip() {
    let (transformed, compiled) = round_trip(HELLO, hello_mapping(), &CompilerConfig::default());

    assert!(transformed.ends_with("😒 😊😂🤣 👌 ❤️😂\"hi\"🤣😍 🙌 0😍 😘"));
    assert!(transformed.contains("#define ❤️ printf\n"));
    let body = transformed.lines().last().unwrap();
    assert!(!body.contains("int"));

    assert_eq!(compiled, format!("#include <stdio.h>\n\n{}", HELLO));
}

#[test]
fn test_round_trip_without_include_injection() {
    let config = CompilerConfig {
        inject_std_include: false,
        ..CompilerConfig::default()
    };
    let (_, compiled) = round_trip(HELLO, hello_mapping(), &config);

    assert_eq!(compiled.trim_start(), HELLO);
}

#[test]
fn test_round_trip_isolated_mode() {
    let config = CompilerConfig {
        substitution_mode: SubstitutionMode::Isolated,
        inject_std_include: false,
    };
    let (_, compiled) = round_trip(HELLO, hello_mapping(), &config);

    assert_eq!(compiled, format!("\n{}", HELLO));
}

#[test]
fn test_round_trip_preserves_identifiers_containing_keywords() {
    let code = "int point = 0;\nint printer;\nreturn point;";
    let mapping: Mapping = [("int", "🔢"), ("return", "↩️"), (";", "🛑")]
        .into_iter()
        .collect();
    let (transformed, compiled) = round_trip(code, mapping, &CompilerConfig::default());

    assert!(transformed.contains("🔢 point = 0🛑"));
    assert!(transformed.contains("🔢 printer🛑"));
    assert_eq!(compiled, format!("\n{}", code));
}

#[test]
fn test_analyze_then_transform_every_token() {
    let code = "#include <stdio.h>\nint main() { printf(\"%d\", 1); return 0; }";
    let tokens = analyze(&AnalyzeRequest {
        code: Some(code.to_string()),
    })
    .unwrap()
    .tokens;

    // Give each discovered token a distinct glyph, skipping '#'.
    let glyphs = ["🅰", "🅱", "🅲", "🅳", "🅴", "🅵", "🅶", "🅷", "🅸", "🅹", "🅺", "🅻", "🅼"];
    let mapping: Mapping = tokens
        .iter()
        .filter(|t| t.as_str() != "#")
        .zip(glyphs.iter())
        .map(|(t, g)| (t.clone(), g.to_string()))
        .collect();
    assert_eq!(mapping.len(), tokens.len() - 1);

    let config = CompilerConfig {
        inject_std_include: false,
        ..CompilerConfig::default()
    };
    let (_, compiled) = round_trip(code, mapping, &config);

    assert_eq!(compiled, format!("\n{}", code));
}

#[test]
fn test_cascading_hazard_is_preserved() {
    // The glyph for "int" contains ";", which is rewritten afterwards.
    let mapping: Mapping = [("int", "I;"), (";", "😍")].into_iter().collect();
    let transformed = transform(
        &TransformRequest {
            code: Some("int x;".to_string()),
            mapping,
        },
        &CompilerConfig::default(),
    )
    .unwrap()
    .emojic_code;

    assert!(transformed.ends_with("I😍 x😍"));
}
