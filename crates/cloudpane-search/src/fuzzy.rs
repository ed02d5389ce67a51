//! Client-side fuzzy matching over the in-memory file tree
//!
//! Scores every entry's name against the query with nucleo and returns the
//! best matches, bounded. This is what powers the instant results in the
//! search popup while the full-text request is still in flight.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use cloudpane_core::models::FileEntry;

use crate::query::normalize_keywords;

/// Default bound on fuzzy results
pub const MAX_RESULTS: usize = 50;

/// Fuzzy-match `entries` against `query`, best matches first, bounded by
/// [`MAX_RESULTS`]. Empty or whitespace-only queries match nothing.
#[must_use]
pub fn search(entries: &[FileEntry], query: &str) -> Vec<FileEntry> {
    search_limited(entries, query, MAX_RESULTS)
}

/// [`search`] with an explicit result bound (configuration-driven callers).
#[must_use]
pub fn search_limited(entries: &[FileEntry], query: &str, limit: usize) -> Vec<FileEntry> {
    let needle = normalize_keywords(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(&needle, CaseMatching::Ignore, Normalization::Smart);

    let mut scored: Vec<(u32, &FileEntry)> = entries
        .iter()
        .filter_map(|entry| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&entry.name, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| (score, entry))
        })
        .collect();

    // Best matches first; the sort is stable, so ties keep tree order.
    scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));

    tracing::debug!(
        query = %needle,
        candidates = entries.len(),
        matched = scored.len(),
        limit,
        "fuzzy search scored"
    );

    scored
        .into_iter()
        .take(limit)
        .map(|(_, entry)| entry.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudpane_core::models::FileKind;

    fn tree(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| FileEntry::new(format!("f-{i}"), *name, FileKind::File))
            .collect()
    }

    #[test]
    fn exact_name_ranks_first() {
        let entries = tree(&["deeply/nested/config.toml", "config.toml", "settings.rs"]);
        let results = search(&entries, "config.toml");
        assert!(!results.is_empty());
        assert_eq!(results[0].name, "config.toml");
    }

    #[test]
    fn subsequence_matches() {
        let entries = tree(&["main.rs", "notes.md", "Makefile"]);
        let results = search(&entries, "mn");
        assert!(results.iter().any(|e| e.name == "main.rs"));
    }

    #[test]
    fn case_is_ignored() {
        let entries = tree(&["README.md"]);
        let results = search(&entries, "readme");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn nonsense_query_matches_nothing() {
        let entries = tree(&["report.pdf", "photo.jpg"]);
        assert!(search(&entries, "zqxwv999").is_empty());
    }

    #[test]
    fn empty_and_blank_queries_match_nothing() {
        let entries = tree(&["report.pdf"]);
        assert!(search(&entries, "").is_empty());
        assert!(search(&entries, "   ").is_empty());
    }

    #[test]
    fn result_count_is_bounded() {
        let names: Vec<String> = (0..200).map(|i| format!("invoice-{i}.pdf")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let entries = tree(&refs);
        let results = search(&entries, "invoice");
        assert_eq!(results.len(), MAX_RESULTS);

        let results = search_limited(&entries, "invoice", 5);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn repeated_whitespace_in_query_is_collapsed() {
        let entries = tree(&["annual report.docx"]);
        let spaced = search(&entries, "  annual   report ");
        let clean = search(&entries, "annual report");
        assert_eq!(spaced, clean);
        assert_eq!(spaced.len(), 1);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        assert!(search(&[], "anything").is_empty());
    }
}
