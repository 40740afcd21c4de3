//! Error types
//!
//! Rendering never fails. Errors only come from malformed input at the
//! edges: image groups, JSON configuration and request URLs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetaError {
    /// An image group must be a bare URL or exactly `[url, width, height]`
    #[error("image group must have 1 or 3 elements, got {0}")]
    ImageArity(usize),

    #[error("image must be a URL string or [url, width, height], got {0}")]
    ImageShape(String),

    #[error("image dimension is not a non-negative integer: {0}")]
    ImageDimension(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid request URL '{url}': {reason}")]
    InvalidRequestUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MetaError>;
