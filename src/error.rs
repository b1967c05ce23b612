//! Error types for `bratviz`.

use thiserror::Error;

/// Result type for `bratviz` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for `bratviz` operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Visualization mode outside the closed `dep`/`ner`/`pos` set.
    #[error("Invalid mode: '{0}' (expected one of: dep, ner, pos)")]
    InvalidMode(String),

    /// The external NLP pipeline failed to load or to annotate.
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// Pre-annotated input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Page template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a pipeline error.
    pub fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
