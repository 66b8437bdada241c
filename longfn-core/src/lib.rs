//! Longfn core library - finds the longest functions in a Rust source tree

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Measurement is strictly per-function
// - No global mutable state
// - A function's size is the non-empty line count of its canonical
//   re-serialization; formatting and comments must not affect results
// - One unreadable or unparsable file never aborts a scan

pub mod extract;
pub mod locate;
pub mod measure;
pub mod rank;
pub mod report;

pub use extract::{extract_functions, FunctionRecord};
pub use rank::DEFAULT_LIMIT;
pub use report::{render_json, render_text};

use anyhow::Result;
use rayon::prelude::*;
use std::path::Path;

pub struct ScanOptions {
    /// Filename glob matched against file names, case-sensitively
    pub pattern: String,
    /// Maximum number of ranked results; `None` or zero means the default
    pub limit: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            pattern: "*.rs".to_string(),
            limit: None,
        }
    }
}

/// Outcome of one scan: how many files were visited and the ranked records
pub struct ScanReport {
    pub files_scanned: usize,
    pub functions: Vec<FunctionRecord>,
}

/// Scan a directory tree and rank its largest top-level functions
///
/// Files are extracted in parallel; the order-preserving collect keeps
/// tie-break stability identical to sequential discovery order. Files that
/// fail to read or parse are logged and contribute zero records.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScanReport> {
    let matcher = locate::compile_pattern(&options.pattern)?;
    let files = locate::locate(root, &matcher);
    let files_scanned = files.len();

    let per_file: Vec<Result<Vec<FunctionRecord>, ()>> = files
        .par_iter()
        .map(|path| {
            extract::extract_functions(path).map_err(|e| {
                eprintln!("warning: skipping file {}: {:#}", path.display(), e);
            })
        })
        .collect();

    let mut all_records = Vec::new();
    let mut skipped_files: usize = 0;
    for result in per_file {
        match result {
            Ok(records) => all_records.extend(records),
            Err(()) => skipped_files += 1,
        }
    }
    if skipped_files > 0 {
        eprintln!("Skipped {} file(s) due to parse errors", skipped_files);
    }

    let limit = rank::effective_limit(options.limit);
    Ok(ScanReport {
        files_scanned,
        functions: rank::rank(all_records, limit),
    })
}
