//! Search query model and gating
//!
//! [`SearchQuery`] carries the keywords plus pagination for a full-text
//! request; [`normalize_keywords`] is the shared cleanup both the fuzzy and
//! full-text paths apply before doing anything with user input.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use cloudpane_core::error::{Error, Result};

/// Queries below this many characters never trigger a search
pub const MIN_QUERY_CHARS: usize = 2;

/// Normalize user keywords: NFC, then whitespace-tokenize and re-join with
/// single spaces (collapsing repeated whitespace and trimming the ends).
#[must_use]
pub fn normalize_keywords(query: &str) -> String {
    let composed: String = query.nfc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a query is long enough to search at all.
#[must_use]
pub fn is_searchable(query: &str) -> bool {
    normalize_keywords(query).chars().count() >= MIN_QUERY_CHARS
}

/// Gate a query against a configured minimum length.
pub fn ensure_searchable(query: &str, min_chars: usize) -> Result<()> {
    if normalize_keywords(query).chars().count() < min_chars {
        return Err(Error::QueryTooShort { min: min_chars });
    }
    Ok(())
}

/// A full-text search request with pagination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The raw keywords as typed
    pub keywords: String,
    /// Maximum number of hits per page
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of hits to skip (the load-more cursor)
    #[serde(default)]
    pub offset: usize,
}

const fn default_limit() -> usize {
    20
}

impl SearchQuery {
    /// Create a query with default pagination
    #[must_use]
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            limit: default_limit(),
            offset: 0,
        }
    }

    /// Set the page size
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the pagination offset
    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// The normalized form of the keywords actually sent to matching
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize_keywords(&self.keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Normalization ───────────────────────────────────────────────────

    #[test]
    fn repeated_whitespace_collapses() {
        assert_eq!(normalize_keywords("  a   b "), "a b");
        assert_eq!(normalize_keywords("a\tb\n c"), "a b c");
    }

    #[test]
    fn already_clean_query_unchanged() {
        assert_eq!(normalize_keywords("annual report"), "annual report");
    }

    #[test]
    fn empty_and_blank_normalize_to_empty() {
        assert_eq!(normalize_keywords(""), "");
        assert_eq!(normalize_keywords("   "), "");
    }

    #[test]
    fn decomposed_accents_compose() {
        // "e" + combining acute accent composes to a single scalar
        assert_eq!(normalize_keywords("re\u{301}sume\u{301}"), "résumé");
    }

    // ── Gating ──────────────────────────────────────────────────────────

    #[test]
    fn single_character_is_not_searchable() {
        assert!(!is_searchable("a"));
        assert!(!is_searchable(" a "));
        assert!(!is_searchable(""));
    }

    #[test]
    fn two_characters_are_searchable() {
        assert!(is_searchable("ab"));
        assert!(is_searchable(" a b "));
    }

    #[test]
    fn ensure_searchable_reports_minimum() {
        let err = ensure_searchable("x", MIN_QUERY_CHARS).unwrap_err();
        assert_eq!(err.error_type(), "QUERY_TOO_SHORT");
        assert!(ensure_searchable("xy", MIN_QUERY_CHARS).is_ok());
        // A stricter configured minimum applies as-is
        assert!(ensure_searchable("xy", 3).is_err());
    }

    // ── SearchQuery ─────────────────────────────────────────────────────

    #[test]
    fn query_builder_defaults() {
        let q = SearchQuery::new("hello world");
        assert_eq!(q.keywords, "hello world");
        assert_eq!(q.limit, 20);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn query_builder_chained() {
        let q = SearchQuery::new("test").with_limit(50).with_offset(10);
        assert_eq!(q.limit, 50);
        assert_eq!(q.offset, 10);
    }

    #[test]
    fn query_normalized_applies_cleanup() {
        let q = SearchQuery::new("  tax   returns ");
        assert_eq!(q.normalized(), "tax returns");
    }

    #[test]
    fn query_deserialize_minimal_json() {
        let json = r#"{"keywords": "test"}"#;
        let q: SearchQuery = serde_json::from_str(json).unwrap();
        assert_eq!(q.keywords, "test");
        assert_eq!(q.limit, 20);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn query_serde_roundtrip() {
        let q = SearchQuery::new("quarterly numbers")
            .with_limit(5)
            .with_offset(2);
        let json = serde_json::to_string(&q).unwrap();
        let back: SearchQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keywords, "quarterly numbers");
        assert_eq!(back.limit, 5);
        assert_eq!(back.offset, 2);
    }
}
