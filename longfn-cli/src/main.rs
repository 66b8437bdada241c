//! Longfn CLI - reports the longest functions in a Rust source tree

#![deny(warnings)]

// Global invariants enforced:
// - The files-scanned line and the table always print, even for empty scans
// - Per-file parse failures are diagnostics, never fatal

use anyhow::Context;
use clap::Parser;
use longfn_core::{render_json, render_text, scan, ScanOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "longfn")]
#[command(about = "Find the longest functions in a Rust source tree")]
#[command(version)]
struct Cli {
    /// Directory to scan (defaults to the current directory)
    directory: Option<PathBuf>,

    /// Maximum number of functions to report (non-positive falls back to 20)
    num_results: Option<i64>,

    /// Filename glob matched against file names
    #[arg(long, default_value = "*.rs")]
    pattern: String,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let directory = match cli.directory {
        Some(path) => path,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };

    // Normalize path to absolute
    let normalized_path = if directory.is_relative() {
        std::env::current_dir()?.join(&directory)
    } else {
        directory
    };

    // Validate path exists
    if !normalized_path.is_dir() {
        anyhow::bail!("Directory does not exist: {}", normalized_path.display());
    }

    let options = ScanOptions {
        pattern: cli.pattern,
        limit: cli
            .num_results
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n > 0),
    };

    let report = scan(&normalized_path, &options)?;

    println!("{} files", report.files_scanned);
    match cli.format {
        OutputFormat::Text => {
            print!("{}", render_text(&report.functions, &normalized_path));
        }
        OutputFormat::Json => {
            println!("{}", render_json(&report.functions));
        }
    }

    Ok(())
}
