use serde::{Deserialize, Serialize};

/// A single piece of a [`Content`]. Text-only: this crate never sends or
/// expects inline media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Response-only marker: thinking models label their thought summaries
    /// with `"thought": true`. Such parts are never part of the answer text.
    #[serde(default, skip_serializing)]
    pub thought: bool,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: false,
        }
    }
}

/// An ordered list of parts attributed to one producer.
///
/// Gemini recognises the roles `"user"` and `"model"`; the `systemInstruction`
/// content of a request carries no role at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Role-less content, as used for `systemInstruction`.
    pub fn system(parts: Vec<Part>) -> Self {
        Self { role: None, parts }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_owned()),
            parts: vec![Part::text(text)],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_owned()),
            parts: vec![Part::text(text)],
        }
    }
}

/// Token accounting attached to a response.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: i64,
    #[serde(default)]
    pub candidates_token_count: i64,
    #[serde(default)]
    pub total_token_count: i64,
}
