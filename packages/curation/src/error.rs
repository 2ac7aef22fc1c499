//! Typed errors for the curation library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during curation operations.
#[derive(Debug, Error)]
pub enum CurationError {
    /// Generation capability unavailable or failed after its own retries
    #[error("LLM error: {0}")]
    Llm(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {reason}")]
    Config { reason: String },
}

impl CurationError {
    /// Wrap an arbitrary error as a generation-capability failure.
    pub fn llm(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Llm(Box::new(err))
    }
}

/// Result type alias for curation operations.
pub type Result<T> = std::result::Result<T, CurationError>;
