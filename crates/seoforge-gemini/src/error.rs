use reqwest::StatusCode;
use seoforge_core::error::SeoForgeError;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t parse body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Gemini returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Gemini blocked the prompt: {0}")]
    Blocked(String),

    #[error("Gemini format error: {0}")]
    Format(String),
}

impl From<GeminiError> for SeoForgeError {
    fn from(value: GeminiError) -> Self {
        SeoForgeError::Backend(Box::new(value))
    }
}
