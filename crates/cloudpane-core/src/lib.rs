//! Core types, configuration, and models for Cloudpane
//!
//! This crate provides:
//! - File-tree models the search layer consumes (`FileEntry`, `FileKind`)
//! - Search-layer configuration (`SearchConfig`, environment parsing)
//! - Common error types
//!
//! Everything else (the search pipeline itself) lives in `cloudpane-search`.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod models;

// Re-export key types for convenience
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use models::{FileEntry, FileKind, METADATA_SHARE_REDIRECT, format_size};
