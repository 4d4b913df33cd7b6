//! Error types for the Sprig engine.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, SprigError>;

/// Errors raised while reading the design document.
#[derive(Debug, Error)]
pub enum SprigError {
    /// A requested node id is absent from the retrieved document.
    #[error("Node {id} not found")]
    MissingNode { id: String },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
