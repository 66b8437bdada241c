//! Reporting and output generation
//!
//! Global invariants enforced:
//! - The header row always prints, even for an empty result
//! - Locations are rendered relative to the scanned root

use crate::extract::FunctionRecord;
use std::path::Path;

/// Render ranked records as an aligned text table
pub fn render_text(records: &[FunctionRecord], root: &Path) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "{:<6} {:<30} {}\n",
        "Lines", "Function", "Location"
    ));

    // Rows
    for record in records {
        output.push_str(&format!(
            "{:<6} {:<30} {}\n",
            record.line_count,
            truncate_or_pad(&record.name, 30),
            location(record, root),
        ));
    }

    output
}

/// Render ranked records as JSON output
pub fn render_json(records: &[FunctionRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}

/// Format a record's origin as `<path relative to root>:<start line>`
fn location(record: &FunctionRecord, root: &Path) -> String {
    let relative = record.file.strip_prefix(root).unwrap_or(&record.file);
    format!("{}:{}", relative.display(), record.start_line)
}

/// Truncate or pad string to fixed width
///
/// Counts and cuts in characters, not bytes; names may contain non-ASCII
/// identifiers.
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let truncated: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        format!("{:<width$}", s, width = width)
    }
}
