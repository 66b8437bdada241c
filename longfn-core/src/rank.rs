//! Ranking of measured functions
//!
//! Global invariants enforced:
//! - Sort is stable: equal line counts keep production order
//!   (file discovery order, then definition order within a file)

use crate::extract::FunctionRecord;

/// Result count used when the caller does not request one
pub const DEFAULT_LIMIT: usize = 20;

/// Resolve the requested result count; missing or zero falls back to the default
pub fn effective_limit(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => DEFAULT_LIMIT,
    }
}

/// Sort records by line count descending and keep the first `limit`
pub fn rank(mut records: Vec<FunctionRecord>, limit: usize) -> Vec<FunctionRecord> {
    records.sort_by(|a, b| b.line_count.cmp(&a.line_count));
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(name: &str, line_count: usize) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            file: PathBuf::from("test.rs"),
            start_line: 1,
            rendered: String::new(),
            line_count,
        }
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(vec![record("a", 3), record("b", 10), record("c", 1)], 20);

        let counts: Vec<usize> = ranked.iter().map(|r| r.line_count).collect();
        assert_eq!(counts, vec![10, 3, 1]);
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let ranked = rank(vec![record("a", 3), record("b", 10), record("c", 1)], 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "b");
        assert_eq!(ranked[1].name, "a");
    }

    #[test]
    fn test_rank_keeps_fewer_than_limit() {
        let ranked = rank(vec![record("only", 5)], 20);

        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_ties_keep_production_order() {
        let ranked = rank(
            vec![record("first", 4), record("second", 4), record("third", 4)],
            20,
        );

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_effective_limit_defaults() {
        assert_eq!(effective_limit(None), DEFAULT_LIMIT);
        assert_eq!(effective_limit(Some(0)), DEFAULT_LIMIT);
        assert_eq!(effective_limit(Some(7)), 7);
    }
}
