use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The metadata record the model must reply with.
///
/// The doc comments below are not just for human readers: they end up as
/// `description` fields in the derived JSON Schema, which is rendered into
/// the prompt as the response contract. The tag-count range is therefore an
/// obligation placed on the model, not something validated after parsing.
#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeoMetadata {
    /// The optimized title.
    pub title: String,
    /// The optimized description, respecting the platform's length limit.
    pub description: String,
    /// 10-15 relevant tags.
    pub tags: Vec<String>,
}

impl SeoMetadata {
    /// Comma-separated tag list for display.
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_expected_reply_shape() {
        let json = r#"{
            "title": "Perfect Sourdough in 10 Minutes",
            "description": "A quick tutorial on baking the perfect sourdough bread.",
            "tags": ["sourdough", "baking", "tutorial"]
        }"#;

        let meta: SeoMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.title, "Perfect Sourdough in 10 Minutes");
        assert_eq!(meta.tags.len(), 3);
        assert_eq!(meta.tags_joined(), "sourdough, baking, tutorial");
    }

    #[test]
    fn rejects_unknown_keys() {
        let json = r#"{"title": "t", "description": "d", "tags": [], "score": 1}"#;
        assert!(serde_json::from_str::<SeoMetadata>(json).is_err());
    }

    #[test]
    fn schema_carries_the_tag_count_contract() {
        let schema = seoforge_core::schema_util::derive_response_schema::<SeoMetadata>();
        let rendered = schema.to_string();
        assert!(rendered.contains("10-15 relevant tags"));
        assert!(rendered.contains("\"title\""));
    }
}
