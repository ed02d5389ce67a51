//! Search presentation core for Cloudpane
//!
//! This crate turns raw search responses into what the file-manager UI
//! renders:
//! - [`snippet::trim_content`] — bounded excerpt around the first highlight
//! - [`highlight::parse_segments`] — highlighted/plain segment runs
//! - [`fuzzy`] — instant client-side matching over the in-memory file tree
//! - [`query`] / [`results`] — request/response models and load-more state
//!
//! Everything here is pure and synchronous; networking, debounce, and
//! rendering belong to the caller.

#![forbid(unsafe_code)]

pub mod fuzzy;
pub mod highlight;
pub mod query;
pub mod results;
pub mod snippet;

// Re-export key types
pub use fuzzy::MAX_RESULTS;
pub use highlight::{MARK_CLOSE, MARK_OPEN, Segment, parse_segments};
pub use query::{
    MIN_QUERY_CHARS, SearchQuery, ensure_searchable, is_searchable, normalize_keywords,
};
pub use results::{FullTextHit, FullTextResults, ResultsAccumulator};
pub use snippet::{CONTEXT_CHARS, ELLIPSIS, trim_content};
