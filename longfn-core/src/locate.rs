//! Source file location
//!
//! Global invariants enforced:
//! - Traversal errors are contained (skip and continue), never fatal
//! - Symlinks are not followed

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};

/// Compile a filename glob pattern into a matcher
///
/// Matching is case-sensitive. An invalid pattern is an error the caller
/// must surface to the user.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    let glob = Glob::new(pattern)
        .with_context(|| format!("invalid filename pattern: {}", pattern))?;
    Ok(glob.compile_matcher())
}

/// Locate all files under `root` whose file name matches the glob
///
/// Walks `root` and every subdirectory recursively, in traversal order
/// (not sorted). A non-existent or unreadable root yields an empty vector;
/// unreadable subdirectories are skipped with a warning.
pub fn locate(root: &Path, matcher: &GlobMatcher) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(root, matcher, &mut files);
    files
}

/// Process one directory entry, pushing matching files or recursing into dirs
fn process_dir_entry(
    path: PathBuf,
    metadata: std::fs::Metadata,
    matcher: &GlobMatcher,
    files: &mut Vec<PathBuf>,
) {
    if metadata.is_symlink() {
        return;
    }

    if metadata.is_dir() {
        walk(&path, matcher, files);
    } else if metadata.is_file() {
        if let Some(name) = path.file_name() {
            if matcher.is_match(name) {
                files.push(path);
            }
        }
    }
}

/// Recursively collect matching files from a directory
fn walk(dir: &Path, matcher: &GlobMatcher, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("warning: skipping directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("warning: skipping entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let metadata = match std::fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                eprintln!("warning: skipping entry {}: {}", path.display(), e);
                continue;
            }
        };
        process_dir_entry(path, metadata, matcher, files);
    }
}
