//! Data models for Cloudpane
//!
//! These models mirror the explorer API objects the search layer consumes.
//! All datetime fields use naive UTC (the backend serializes without zone
//! info).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// File entries
// =============================================================================

/// Metadata key marking an entry as a redirect to a shared file.
pub const METADATA_SHARE_REDIRECT: &str = "sys:share_redirect";

/// What kind of filesystem object an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// A regular file
    #[default]
    File,
    /// A directory
    Folder,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// A single entry of the user's file tree, as returned by the explorer API.
///
/// # Constraints
/// - `id`: opaque backend identifier, unique per user.
/// - `name`: display name; the field fuzzy search scores against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub size: u64,
    pub updated_at: NaiveDateTime,
    /// URI of the entry within its filesystem, when known
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<String>,
    /// Backend-assigned metadata key/value pairs
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub metadata: HashMap<String, String>,
}

impl Default for FileEntry {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            kind: FileKind::File,
            size: 0,
            updated_at: chrono::Utc::now().naive_utc(),
            path: None,
            metadata: HashMap::new(),
        }
    }
}

impl FileEntry {
    /// Create an entry with the fields search cares about; the rest default.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FileKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    /// Whether this entry redirects to a shared file (rendered with a
    /// distinct subtitle instead of its size).
    #[must_use]
    pub fn is_share_redirect(&self) -> bool {
        self.metadata.contains_key(METADATA_SHARE_REDIRECT)
    }
}

// =============================================================================
// Size formatting
// =============================================================================

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count for result subtitles (`"1.5 MB"` style).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(size: u64) -> String {
    const UNIT: f64 = 1024.0;
    if size < 1024 {
        return format!("{size} B");
    }

    let mut value = size as f64;
    let mut exp = 0;
    while value >= UNIT && exp < SIZE_UNITS.len() - 1 {
        value /= UNIT;
        exp += 1;
    }
    format!("{value:.1} {}", SIZE_UNITS[exp])
}
