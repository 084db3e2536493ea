//! Unified error type exposed by **`seoforge-core`**.
//!
//! Adapter crates convert their internal errors into one of these variants
//! before bubbling them up to the [`SeoForgeClient`]. This keeps the public
//! API small while still conveying rich diagnostic information.
//!
//! [`SeoForgeClient`]: crate::client::SeoForgeClient

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SeoForgeError>;

#[derive(Debug, Error)]
pub enum SeoForgeError {
    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the LLM provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit
    /// another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),
}
