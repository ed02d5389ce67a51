//! Full-text results model and load-more accumulation
//!
//! [`FullTextResults`] is one page as the backend returns it; the
//! [`ResultsAccumulator`] is the pure merge the search popup performs when
//! the user asks for more: append the page, remember the total, and expose
//! the next offset. Request plumbing (debounce, cancellation) stays with the
//! caller.

use serde::{Deserialize, Serialize};

use cloudpane_core::models::FileEntry;

use crate::highlight::{Segment, parse_segments};
use crate::snippet::trim_content;

/// A single full-text hit: the file plus its raw marked-up content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullTextHit {
    /// The file the match was found in
    pub file: FileEntry,
    /// Raw hit content with inline highlight markers
    pub content: String,
}

impl FullTextHit {
    /// The rendered excerpt for this hit: trimmed around the first highlight
    /// and split into highlighted/plain segments.
    #[must_use]
    pub fn excerpt_segments(&self) -> Vec<Segment> {
        parse_segments(&trim_content(&self.content))
    }
}

/// One page of full-text results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullTextResults {
    /// Hits on this page
    #[serde(default)]
    pub hits: Vec<FullTextHit>,
    /// Total hits the backend knows about across all pages
    #[serde(default)]
    pub total: usize,
}

impl FullTextResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Accumulated full-text results across load-more pages
#[derive(Debug, Clone, Default)]
pub struct ResultsAccumulator {
    hits: Vec<FullTextHit>,
    total: usize,
}

impl ResultsAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page and adopt its total.
    pub fn extend(&mut self, page: FullTextResults) {
        self.hits.extend(page.hits);
        self.total = page.total;
    }

    /// Whether the backend has hits beyond what has been accumulated.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.hits.len() < self.total
    }

    /// The offset for the next page request.
    #[must_use]
    pub fn next_offset(&self) -> usize {
        self.hits.len()
    }

    /// Hits accumulated so far, in arrival order.
    #[must_use]
    pub fn hits(&self) -> &[FullTextHit] {
        &self.hits
    }

    /// Backend-reported total across all pages.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Drop everything (the popup resets on close and on a new query).
    pub fn clear(&mut self) {
        self.hits.clear();
        self.total = 0;
    }
}
