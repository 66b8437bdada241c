//! Function extraction from parsed Rust source
//!
//! Only top-level function definitions (direct children of the file root)
//! are extracted. Nested functions, impl methods, trait methods, and
//! closures are excluded.

use crate::measure;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use syn::spanned::Spanned;
use syn::Item;

/// One discovered top-level function
///
/// Created once at extraction time and immutable thereafter. The
/// (`file`, `start_line`, `name`) triple identifies the record's origin
/// even when two functions share a name.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    pub file: PathBuf,
    pub start_line: usize,
    /// Canonical re-serialization of the function, not the raw file text
    #[serde(skip)]
    pub rendered: String,
    pub line_count: usize,
}

/// Extract all top-level functions from one source file
///
/// Read and parse failures are returned as errors; the caller decides
/// whether to abort or skip.
pub fn extract_functions(path: &Path) -> Result<Vec<FunctionRecord>> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let file = syn::parse_file(&src)
        .with_context(|| format!("Failed to parse Rust file: {}", path.display()))?;
    Ok(functions_in_file(&file, path))
}

/// Collect records from an already-parsed file, in definition order
pub fn functions_in_file(file: &syn::File, path: &Path) -> Vec<FunctionRecord> {
    let mut records = Vec::new();

    // File items are already in top-to-bottom source order
    for item in &file.items {
        if let Item::Fn(item_fn) = item {
            // Line of the `fn` token, not of any attributes above it
            let start_line = item_fn.sig.fn_token.span().start().line;
            let rendered = measure::render_function(item_fn);
            let line_count = measure::count_source_lines(&rendered);

            records.push(FunctionRecord {
                name: item_fn.sig.ident.to_string(),
                file: path.to_path_buf(),
                start_line,
                rendered,
                line_count,
            });
        }
    }

    records
}
