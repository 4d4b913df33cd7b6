//! Error types for code generation.

use sprig_core::SprigError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Error reading the design document.
    #[error(transparent)]
    Document(#[from] SprigError),

    /// Platform name not recognised, or its backend compiled out.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Lowering a node tree panicked.
    #[error("Lowering failed: {0}")]
    LoweringFailed(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// Code formatting error.
    #[error("Code formatting error: {0}")]
    FormattingError(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
