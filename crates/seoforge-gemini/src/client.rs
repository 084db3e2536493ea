use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api::{GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Minimal HTTP client for Gemini’s *generateContent* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api` request / response structs defined in
///   this crate.
/// * Shares a single `reqwest::Client`, so cloning `GeminiClient` is cheap.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl GeminiClient {
    /// Convenience constructor building a default `reqwest` client:
    /// 30 s timeout, Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Perform a **non-streaming** `generateContent` call against `model`.
    pub async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        // Build headers once.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| GeminiError::Format("API key is not a valid header value".into()))?,
        );

        let url = format!("{}/models/{}:generateContent", self.base, model);

        #[cfg(feature = "tracing")]
        tracing::debug!(model, "sending generateContent request");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            candidates = parsed.candidates.len(),
            "received generateContent response"
        );

        Ok(parsed)
    }
}
