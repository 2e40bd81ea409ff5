//! Spiral Parser Command Line Interface
//!
//! # Usage
//!
//! ```bash
//! # Parse a glyph sequence with the bundled English grammar
//! spiral_cli parse LOGOS
//!
//! # Multi-character glyphs, explicit data files, JSON output
//! spiral_cli parse "ka ra ta" --split " " --glyph-set Runic \
//!     --grammar data/grammar_registry.json --glyphs data/glyphs.json -o json
//!
//! # Show the spiral index groups for a length
//! spiral_cli groups 9 --raw
//!
//! # List glyph-sets and their execution order
//! spiral_cli glyph-sets
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use spiral_parser::{
    raw_spiral_groups, spiral_index_groups, DataLoader, GlyphSource, ParseResult, SpiralParser,
};

#[derive(Parser)]
#[command(name = "spiral_cli")]
#[command(version)]
#[command(about = "Spiral glyph parser: spiral ordering, DAM annotation and execution order")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: json or pretty (default)
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,

    /// Grammar registry file (JSON or YAML)
    #[arg(long, global = true, env = "SPIRAL_GRAMMAR_FILE")]
    grammar: Option<PathBuf>,

    /// Glyph lookup table file (JSON or YAML)
    #[arg(long, global = true, env = "SPIRAL_GLYPHS_FILE")]
    glyphs: Option<PathBuf>,

    /// Directory holding grammar_registry.* and glyphs.*
    #[arg(long, global = true, env = "SPIRAL_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a glyph sequence into a spiral stack and execution sequence
    Parse {
        /// Input sequence; one glyph per character unless --split is given
        #[arg(default_value = "LOGOS")]
        input: String,

        /// Glyph-set (language) whose grammar applies
        #[arg(long, short = 'g', default_value = "English")]
        glyph_set: String,

        /// Split the input into multi-character glyphs on this separator
        #[arg(long)]
        split: Option<String>,
    },

    /// Show spiral index groups for a sequence length
    Groups {
        /// Sequence length
        length: usize,

        /// Show the literal group stream, repeats included
        #[arg(long)]
        raw: bool,
    },

    /// List glyph-sets in the grammar registry
    GlyphSets,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let loader = build_loader(&cli);

    let result = match cli.command {
        Commands::Parse {
            input,
            glyph_set,
            split,
        } => cmd_parse(&loader, input, &glyph_set, split, cli.format),
        Commands::Groups { length, raw } => cmd_groups(length, raw, cli.format),
        Commands::GlyphSets => cmd_glyph_sets(&loader, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "error": format!("{:#}", e) }));
            } else {
                eprintln!("{}: {:#}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn build_loader(cli: &Cli) -> DataLoader {
    let to_string = |p: &PathBuf| p.to_string_lossy().into_owned();
    DataLoader::from_overrides(
        cli.grammar.as_ref().map(to_string),
        cli.glyphs.as_ref().map(to_string),
        cli.data_dir.as_ref().map(to_string),
    )
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_parse(
    loader: &DataLoader,
    input: String,
    glyph_set: &str,
    split: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let parser = SpiralParser::load(loader).context("Failed to load parser data")?;

    let source = match split {
        Some(sep) => GlyphSource::split(&input, &sep),
        None => GlyphSource::Text(input),
    };

    if parser.grammar().get(glyph_set).is_none() {
        tracing::warn!(glyph_set, "Unknown glyph-set; using empty grammar");
    }

    let result = parser.parse(source, glyph_set);

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&result).context("JSON serialization failed")?;
            println!("{}", json);
        }
        OutputFormat::Pretty => print_parse_result(&result),
    }

    Ok(())
}

fn print_parse_result(result: &ParseResult) {
    println!(
        "{} {} glyph(s), glyph-set {}",
        "OK".green().bold(),
        result.parsed_stack.len(),
        result.glyph_set.cyan()
    );

    println!("\n{}", "Parsed stack".bold());
    for entry in &result.parsed_stack {
        let [l1, l2, l3] = entry.dam.layers();
        println!(
            "  {:<10} {:>3}  #{:<3} {} | {} | {}",
            entry.role.yellow(),
            entry.glyph.bold(),
            entry.original_index,
            l1,
            l2,
            l3
        );
    }

    println!("\n{}", "Execution sequence".bold());
    println!("  {}", result.execution_sequence.join(" "));
}

fn cmd_groups(length: usize, raw: bool, format: OutputFormat) -> Result<()> {
    let groups = if raw {
        raw_spiral_groups(length)
    } else {
        spiral_index_groups(length)
    };

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&groups).context("JSON serialization failed")?;
            println!("{}", json);
        }
        OutputFormat::Pretty => {
            println!(
                "{} {} group(s) for length {}{}",
                "OK".green().bold(),
                groups.len(),
                length,
                if raw { " (raw)" } else { "" }
            );
            for group in &groups {
                println!("  {}", group);
            }
        }
    }

    Ok(())
}

fn cmd_glyph_sets(loader: &DataLoader, format: OutputFormat) -> Result<()> {
    let grammar = loader
        .load_grammar()
        .context("Failed to load grammar registry")?;

    match format {
        OutputFormat::Json => {
            let sets: Vec<_> = grammar
                .glyph_sets()
                .map(|(name, fragment)| {
                    serde_json::json!({
                        "glyph_set": name,
                        "execution_order": fragment.execution_order(),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&sets).context("JSON serialization failed")?;
            println!("{}", json);
        }
        OutputFormat::Pretty => {
            println!(
                "{} {} glyph-set(s) in {}",
                "OK".green().bold(),
                grammar.len(),
                loader.grammar_path().display()
            );
            for (name, fragment) in grammar.glyph_sets() {
                println!("  {:<16} {}", name.cyan(), fragment.execution_order());
            }
        }
    }

    Ok(())
}
