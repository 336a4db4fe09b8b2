//! Emojic Command Line Interface
//!
//! Runs the compile, analyze and transform operations on local files.
//!
//! # Usage
//!
//! ```bash
//! # Emojic -> C
//! emojic_cli compile --file hello.emojic
//!
//! # List tokens worth mapping
//! echo 'int main(){return 0;}' | emojic_cli analyze
//!
//! # C -> Emojic with a token -> glyph mapping
//! emojic_cli transform --file hello.c --mapping mapping.json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use emojic::{
    analyze, compile, extract, transform, AnalyzeRequest, CompileRequest, CompilerConfig,
    Mapping, SubstitutionMode, TransformRequest,
};

#[derive(Parser)]
#[command(name = "emojic_cli")]
#[command(version)]
#[command(about = "Compile Emojic to C, analyze C tokens, or transform C into Emojic")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: json, text, or pretty (default)
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,

    /// Substitution scheduling (overrides EMOJIC_SUBSTITUTION_MODE)
    #[arg(long, global = true, value_enum)]
    mode: Option<ModeArg>,

    /// Do not prepend #include <stdio.h> to compiled code
    #[arg(long, global = true)]
    no_include: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
    Pretty,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Cascading,
    Isolated,
}

impl From<ModeArg> for SubstitutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Cascading => SubstitutionMode::Cascading,
            ModeArg::Isolated => SubstitutionMode::Isolated,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Expand the #define block of Emojic source into C
    Compile {
        /// Input file (reads stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List the C keywords and punctuation found in the source
    Analyze {
        /// Input file (reads stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Rewrite C source into Emojic
    Transform {
        /// Input file (reads stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// JSON object of C token -> glyph
        #[arg(short, long)]
        mapping: Option<PathBuf>,
    },
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emojic=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = build_config(&cli).and_then(|config| match cli.command {
        Commands::Compile { ref file } => cmd_compile(file.clone(), &config, cli.format),
        Commands::Analyze { ref file } => cmd_analyze(file.clone(), cli.format),
        Commands::Transform {
            ref file,
            ref mapping,
        } => cmd_transform(file.clone(), mapping.clone(), &config, cli.format),
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "error": e }));
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<CompilerConfig, String> {
    let mut config = CompilerConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(mode) = cli.mode {
        config.substitution_mode = mode.into();
    }
    if cli.no_include {
        config.inject_std_include = false;
    }
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_compile(
    file: Option<PathBuf>,
    config: &CompilerConfig,
    format: OutputFormat,
) -> Result<(), String> {
    let source = read_input(file)?;
    let request = CompileRequest {
        code: Some(source.clone()),
    };
    let response = compile(&request, config).map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Text => println!("{}", response.c_code),
        OutputFormat::Pretty => {
            let definitions = extract(&source).definitions;
            eprintln!(
                "{} Expanded {} definition(s)",
                "OK".green(),
                definitions.len()
            );
            for def in &definitions {
                eprintln!(
                    "  {:>4}: {} {} {}",
                    def.line,
                    def.name,
                    "->".dimmed(),
                    def.value
                );
            }
            println!("{}", response.c_code);
        }
    }

    Ok(())
}

fn cmd_analyze(file: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let source = read_input(file)?;
    let response = analyze(&AnalyzeRequest { code: Some(source) }).map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Text => {
            for token in &response.tokens {
                println!("{}", token);
            }
        }
        OutputFormat::Pretty => {
            println!(
                "{} Found {} token(s)",
                "OK".green(),
                response.tokens.len()
            );
            for token in &response.tokens {
                let category = match emojic::classify(token) {
                    Some(emojic::TokenCategory::ReservedWord) => "word".cyan(),
                    Some(emojic::TokenCategory::Punctuation) => "punct".yellow(),
                    None => "?".normal(),
                };
                println!("  {:<8} {}", token, category);
            }
        }
    }

    Ok(())
}

fn cmd_transform(
    file: Option<PathBuf>,
    mapping: Option<PathBuf>,
    config: &CompilerConfig,
    format: OutputFormat,
) -> Result<(), String> {
    let source = read_input(file)?;
    let mapping = match mapping {
        Some(path) => read_mapping(&path)?,
        None => Mapping::new(),
    };

    let request = TransformRequest {
        code: Some(source),
        mapping,
    };
    let response = transform(&request, config).map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Text | OutputFormat::Pretty => println!("{}", response.emojic_code),
    }

    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

fn read_input(file: Option<PathBuf>) -> Result<String, String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e)),
        None => {
            // Check if stdin has data
            if atty::is(atty::Stream::Stdin) {
                return Err("No input provided. Use --file or pipe input via stdin.".to_string());
            }
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

fn read_mapping(path: &Path) -> Result<Mapping, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Invalid mapping in '{}': {}", path.display(), e))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|e| format!("JSON serialization failed: {}", e))?;
    println!("{}", output);
    Ok(())
}
