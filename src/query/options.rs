//! Option-list handling for the prize widgets.
//!
//! Option lists arrive as newline-delimited text, either typed into the
//! page or loaded from a file. Lines are whitespace-normalized and
//! de-duplicated case-insensitively, keeping the first spelling seen.

use std::collections::HashSet;

/// How a freshly loaded list combines with the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Discard the current list.
    #[default]
    Replace,
    /// Keep the current list and add new lines after it.
    Append,
}

/// Collapse interior whitespace runs to single spaces and trim.
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize lines and drop blanks and case-insensitive duplicates,
/// preserving first-seen order and spelling.
pub fn dedupe_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for line in lines {
        let normalized = normalize_line(line.as_ref());
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.to_lowercase()) {
            result.push(normalized);
        }
    }
    result
}

/// Parse a newline-delimited option block into a clean list.
pub fn parse_options(text: &str) -> Vec<String> {
    dedupe_lines(text.lines())
}

/// Merge newly loaded lines into the current list per the mode.
pub fn merge_options(current: &[String], incoming: &[String], mode: MergeMode) -> Vec<String> {
    match mode {
        MergeMode::Replace => dedupe_lines(incoming.iter()),
        MergeMode::Append => dedupe_lines(current.iter().chain(incoming.iter())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_line("  Alice \t  Smith  "), "Alice Smith");
        assert_eq!(normalize_line("\t\n "), "");
    }

    #[test]
    fn test_dedupe_is_case_insensitive_first_wins() {
        let lines = ["Alice", "alice", "  ALICE ", "Bob"];
        assert_eq!(dedupe_lines(lines), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_options_drops_blank_lines() {
        let parsed = parse_options("one\n\n  \ntwo\none");
        assert_eq!(parsed, vec!["one", "two"]);
    }

    #[test]
    fn test_merge_replace() {
        let current = vec!["old".to_string()];
        let incoming = vec!["new".to_string(), "New".to_string()];
        assert_eq!(
            merge_options(&current, &incoming, MergeMode::Replace),
            vec!["new"]
        );
    }

    #[test]
    fn test_merge_append_dedupes_across_both() {
        let current = vec!["Alice".to_string(), "Bob".to_string()];
        let incoming = vec!["bob".to_string(), "Cleo".to_string()];
        assert_eq!(
            merge_options(&current, &incoming, MergeMode::Append),
            vec!["Alice", "Bob", "Cleo"]
        );
    }
}
