use seoforge_core::generic::{GenericMessage, GenericRole};
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;

use super::common::{Content, Part, UsageMetadata};

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            system_instruction: None,
            contents,
            generation_config: None,
        }
    }

    /// Split provider-agnostic messages into Gemini's request shape: system
    /// messages become `systemInstruction` parts, user messages keep the
    /// `"user"` role and assistant messages map onto `"model"`.
    pub fn from_messages(messages: Vec<GenericMessage>) -> Self {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in messages {
            match message.role {
                GenericRole::System => system_parts.push(Part::text(message.content)),
                GenericRole::User => contents.push(Content::user(message.content)),
                GenericRole::Assistant => contents.push(Content::model(message.content)),
            }
        }

        let mut request = Self::new(contents);
        if !system_parts.is_empty() {
            request.system_instruction = Some(Content::system(system_parts));
        }
        request
    }
}

impl_builder_methods!(
    GenerateContentRequest,
    generation_config: GenerationConfig
);

/// Sampling and output controls of a request. Everything is optional; unset
/// fields are omitted on the wire so the API applies its own defaults.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

impl_builder_methods!(
    GenerationConfig,
    temperature: f64,
    top_p: f64,
    top_k: i64,
    max_output_tokens: i64,
    candidate_count: i64,
    stop_sequences: Vec<String>
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<FinishReason>,
    #[serde(default)]
    pub index: i64,
}

impl Candidate {
    /// Concatenated text of all non-thought parts.
    pub fn text(&self) -> String {
        self.content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Why the model stopped producing tokens. Unknown future values collapse
/// into `Other` instead of failing deserialization.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    #[serde(other)]
    Other,
}

/// Present when the API refused to answer the prompt at all.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use seoforge_core::generic::{GenericMessage, GenericRole};
    use serde_json::json;

    use super::*;

    #[test]
    fn request_splits_system_messages_into_system_instruction() {
        let request = GenerateContentRequest::from_messages(vec![
            GenericMessage::new("Act as an expert SEO specialist.".into(), GenericRole::System),
            GenericMessage::new("Describe my bread tutorial.".into(), GenericRole::User),
        ]);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["systemInstruction"]["parts"][0]["text"],
            "Act as an expert SEO specialist."
        );
        assert_eq!(value["contents"][0]["role"], "user");
        // unset generation config stays off the wire
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn assistant_messages_map_onto_the_model_role() {
        let request = GenerateContentRequest::from_messages(vec![GenericMessage::new(
            "Previous draft".into(),
            GenericRole::Assistant,
        )]);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "model");
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn generation_config_serializes_camel_case_and_omits_unset() {
        let config = GenerationConfig::default().temperature(0.7).top_k(40);
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value, json!({"temperature": 0.7, "topK": 40}));
    }

    #[test]
    fn parses_a_generate_content_response() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "{\"title\": \"t\"}"}]
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": 118,
                "candidatesTokenCount": 73,
                "totalTokenCount": 191
            },
            "modelVersion": "gemini-2.5-flash"
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.candidates[0].text(), "{\"title\": \"t\"}");
        assert_eq!(response.usage_metadata.unwrap().total_token_count, 191);
    }

    #[test]
    fn thought_parts_are_excluded_from_candidate_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "planning the reply", "thought": true},
                        {"text": "{\"title\": \"t\"}"}
                    ]
                },
                "finishReason": "STOP"
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.candidates[0].text(), "{\"title\": \"t\"}");
    }

    #[test]
    fn unknown_finish_reasons_collapse_into_other() {
        let candidate: Candidate = serde_json::from_value(json!({
            "finishReason": "MALFORMED_FUNCTION_CALL"
        }))
        .unwrap();
        assert_eq!(candidate.finish_reason, Some(FinishReason::Other));
        assert_eq!(candidate.text(), "");
    }
}
