//! Error types for Cloudpane
//!
//! The snippet and highlight pipeline is infallible by design; errors exist
//! only at the configuration and query-validation boundary.

use thiserror::Error;

/// Result type alias for Cloudpane operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Cloudpane
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The query is below the minimum searchable length
    #[error("Query too short: at least {min} characters required")]
    QueryTooShort { min: usize },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error type string (for JSON responses)
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::QueryTooShort { .. } => "QUERY_TOO_SHORT",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
