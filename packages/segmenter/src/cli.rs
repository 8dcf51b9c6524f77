//! Command-line interface for the segmenter.
//!
//! Thin wrapper over the library: reads a document, runs the requested
//! pipeline, and writes JSON to stdout or a file. All file I/O and
//! decoding failures live here, not in the core.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, SegmenterError};
use crate::output::{clauses_to_json, contract_to_json, modules_to_json, save_json};
use crate::{detect_style, parse, parse_clauses, segment_modules};

/// Contract Segmenter - split plain-text contracts into clauses and modules.
#[derive(Parser)]
#[command(name = "contract-segmenter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the clause hierarchy as a JSON array of {path, clause}.
    Clauses {
        /// Input text file (UTF-8)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract semantic modules as a JSON array of {type, text}.
    Modules {
        /// Input text file (UTF-8)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run both pipelines and emit the combined result.
    Parse {
        /// Input text file (UTF-8)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report the dominant heading style of a document.
    DetectStyle {
        /// Input text file (UTF-8)
        input: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clauses { input, output } => {
            let text = read_input(&input)?;
            let json = clauses_to_json(&parse_clauses(&text))?;
            write_output(&json, output.as_deref())
        }
        Commands::Modules { input, output } => {
            let text = read_input(&input)?;
            let json = modules_to_json(&segment_modules(&text))?;
            write_output(&json, output.as_deref())
        }
        Commands::Parse { input, output } => {
            let text = read_input(&input)?;
            let json = contract_to_json(&parse(&text))?;
            write_output(&json, output.as_deref())
        }
        Commands::DetectStyle { input } => {
            let text = read_input(&input)?;
            println!("{}", detect_style(&text).as_str());
            Ok(())
        }
    }
}

/// Read an input document and normalize it to NFC.
///
/// Contract sources mix composed and decomposed CJK/fullwidth forms; the
/// pattern tables assume composed forms.
fn read_input(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|source| SegmenterError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(raw.nfc().collect())
}

/// Print JSON to stdout, or save it and confirm.
fn write_output(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            save_json(path, json)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
            Ok(())
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
