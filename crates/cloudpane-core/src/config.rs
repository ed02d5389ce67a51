//! Configuration for the Cloudpane search layer
//!
//! Values are loaded from environment variables with sensible defaults, the
//! same surface the admin full-text-search settings page writes: an enable
//! flag, indexer connection details, and the page/result bounds the search
//! popup uses.
//!
//! Note: In Rust 2024, `std::env::set_var` is `unsafe` and this workspace
//! forbids `unsafe_code`, so tests exercise the parsing helpers on plain
//! strings instead of mutating process-wide env.

use std::env;

use crate::error::{Error, Result};

/// Search-layer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Whether full-text search is offered at all
    pub full_text_enabled: bool,
    /// Hits per full-text results page
    pub page_size: usize,
    /// Minimum query length before any search fires
    pub min_query_chars: usize,
    /// Result bound for client-side fuzzy matching
    pub fuzzy_max_results: usize,
    /// Full-text indexer endpoint (admin-configured; `None` = backend default)
    pub indexer_endpoint: Option<String>,
    /// API key for the indexer endpoint
    pub indexer_api_key: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            full_text_enabled: true,
            page_size: 20,
            min_query_chars: 2,
            fuzzy_max_results: 50,
            indexer_endpoint: None,
            indexer_api_key: None,
        }
    }
}

impl SearchConfig {
    /// Load configuration from `CLOUDPANE_*` environment variables,
    /// falling back to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.full_text_enabled = env_bool("CLOUDPANE_FTS_ENABLED", config.full_text_enabled);
        config.page_size = env_usize("CLOUDPANE_FTS_PAGE_SIZE", config.page_size);
        config.min_query_chars = env_usize("CLOUDPANE_MIN_QUERY_CHARS", config.min_query_chars);
        config.fuzzy_max_results =
            env_usize("CLOUDPANE_FUZZY_MAX_RESULTS", config.fuzzy_max_results);
        config.indexer_endpoint = env_opt("CLOUDPANE_FTS_ENDPOINT");
        config.indexer_api_key = env_opt("CLOUDPANE_FTS_API_KEY");

        config
    }

    /// Check the bounds that must hold for the search layer to behave.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig("page_size must be at least 1".into()));
        }
        if self.min_query_chars == 0 {
            return Err(Error::InvalidConfig(
                "min_query_chars must be at least 1".into(),
            ));
        }
        if self.fuzzy_max_results == 0 {
            return Err(Error::InvalidConfig(
                "fuzzy_max_results must be at least 1".into(),
            ));
        }
        if self.indexer_api_key.is_some() && self.indexer_endpoint.is_none() {
            return Err(Error::InvalidConfig(
                "indexer_api_key is set but indexer_endpoint is not".into(),
            ));
        }
        Ok(())
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_opt(key: &str) -> Option<String> {
    env_value(key).and_then(|v| non_blank(&v))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" => true,
        "0" | "false" | "f" | "no" | "n" => false,
        _ => default,
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env_value(key).map_or(default, |v| parse_bool(&v, default))
}

fn parse_usize(key: &str, value: &str, default: usize) -> usize {
    value.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(key, value, "unparseable integer in environment, using default");
        default
    })
}

fn env_usize(key: &str, default: usize) -> usize {
    env_value(key).map_or(default, |v| parse_usize(key, &v, default))
}
