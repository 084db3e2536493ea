use std::{future::Future, pin::Pin, sync::Arc};

use seoforge_core::{
    error::{Result, SeoForgeError},
    generic::{GenericCompletionResponse, GenericMessage, GenericUsageReport},
    provider::PromptExecutionProvider,
    template::{IntoPrompt, PromptTemplate},
};

use crate::{
    GeminiAdapter,
    api::{FinishReason, GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
    model_map::map_model,
    sanitize::strip_code_fences,
};

impl PromptExecutionProvider for GeminiAdapter {
    type Message = GenericMessage;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> Pin<Box<dyn Future<Output = Result<GenericCompletionResponse<P::Output>>> + Send + 'p>>
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message>,
    {
        let client = Arc::clone(&self.client);
        let config = self.generation_config.clone();

        Box::pin(async move {
            let model = map_model(&P::MODEL);
            let messages: Vec<GenericMessage> =
                prompt.into_prompt().into_iter().map(Into::into).collect();

            let mut request = GenerateContentRequest::from_messages(messages);
            if request.contents.is_empty() {
                return Err(SeoForgeError::InvalidRequest(
                    "prompt contains no user or assistant messages".into(),
                ));
            }
            if let Some(config) = config {
                request = request.generation_config(config);
            }

            let response = client.generate_content(model.as_ref(), request).await?;

            let usage = response.usage_metadata.map(|usage| GenericUsageReport {
                prompt_tokens: usage.prompt_token_count,
                completion_tokens: usage.candidates_token_count,
                total_tokens: usage.total_token_count,
            });

            let text = extract_reply_text(response)?;
            let content: P::Output = serde_json::from_str(strip_code_fences(&text))?;

            Ok(GenericCompletionResponse { content, usage })
        })
    }
}

/// Reduce a raw API response to the reply text, rejecting everything that
/// cannot carry a full answer: blocked prompts, empty candidate lists,
/// truncation and safety stops.
fn extract_reply_text(response: GenerateContentResponse) -> std::result::Result<String, GeminiError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref())
    {
        return Err(GeminiError::Blocked(reason.to_owned()));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GeminiError::Format("response has no candidates".into()));
    };

    match candidate.finish_reason {
        None | Some(FinishReason::Stop) => {}
        Some(FinishReason::MaxTokens) => {
            return Err(GeminiError::Format(
                "response truncated: output token limit reached".into(),
            ));
        }
        Some(other) => {
            return Err(GeminiError::Format(format!(
                "unhandled finish reason on API: {other:?}"
            )));
        }
    }

    let text = candidate.text();
    if text.is_empty() {
        return Err(GeminiError::Format("candidate contains no text".into()));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(body: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn extracts_text_from_a_stopped_candidate() {
        let text = extract_reply_text(response(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"ok\": true}"}]},
                "finishReason": "STOP"
            }]
        })))
        .unwrap();

        assert_eq!(text, "{\"ok\": true}");
    }

    #[test]
    fn blocked_prompts_surface_the_block_reason() {
        let err = extract_reply_text(response(json!({
            "candidates": [],
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .unwrap_err();

        assert!(matches!(err, GeminiError::Blocked(reason) if reason == "SAFETY"));
    }

    #[test]
    fn empty_candidate_lists_are_rejected() {
        let err = extract_reply_text(response(json!({"candidates": []}))).unwrap_err();
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn truncated_replies_are_rejected() {
        let err = extract_reply_text(response(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"partial"}]},
                "finishReason": "MAX_TOKENS"
            }]
        })))
        .unwrap_err();

        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn safety_stops_are_rejected() {
        let err = extract_reply_text(response(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .unwrap_err();

        assert!(err.to_string().contains("finish reason"));
    }
}
