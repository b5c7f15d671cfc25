//! Error types for the search crate.
//!
//! Errors only surface while corpora are being loaded. Scoring and
//! selection never fail.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while building a corpus.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Scope tag that is not a known role
    #[error("Unknown role '{0}', expected one of rider, driver, admin, super_admin, director, general")]
    UnknownRole(String),

    /// Two documents share the same id
    #[error("Duplicate document id: {0}")]
    DuplicateId(String),

    /// Article references a category that was never declared
    #[error("Article {article} references unknown category {category}")]
    UnknownCategory {
        /// Offending article id
        article: String,
        /// Category id it points at
        category: String,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with zibra-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Unknown role
    UnknownRole = 11001,
    /// Duplicate document id
    DuplicateId = 11002,
    /// Unknown help category
    UnknownCategory = 11003,
    /// TOML parsing error
    TomlParsing = 11004,
    /// JSON parsing error
    JsonParsing = 11005,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::UnknownRole(_) => SearchErrorCode::UnknownRole,
            SearchError::DuplicateId(_) => SearchErrorCode::DuplicateId,
            SearchError::UnknownCategory { .. } => SearchErrorCode::UnknownCategory,
            SearchError::Toml(_) => SearchErrorCode::TomlParsing,
            SearchError::Json(_) => SearchErrorCode::JsonParsing,
        }
    }
}
