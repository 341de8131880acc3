//! Error types for the hanviet alignment library.

use thiserror::Error;

/// Primary error type for span ingestion and alignment.
#[derive(Error, Debug)]
pub enum AlignError {
    #[error("malformed bounding box {raw:?}: {reason}")]
    MalformedBBox { raw: String, reason: &'static str },

    #[error("span dump decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for AlignError.
pub type Result<T> = std::result::Result<T, AlignError>;
