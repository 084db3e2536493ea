use std::{env, sync::Arc};

use seoforge_core::error::{Result, SeoForgeError};

use crate::{api::GenerationConfig, client::GeminiClient};

/// Thin wrapper that wires the HTTP client [`GeminiClient`] into a value that
/// implements [`seoforge_core::provider::PromptExecutionProvider`].
///
/// Think of it as the **service locator** for the Gemini back-end:
///
/// * stores the API key (and optionally a custom base URL),
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * carries the default [`GenerationConfig`] applied to every request,
/// * provides a fluent [`GeminiAdapterBuilder`] so callers don’t have to
///   juggle `Option<String>` manually.
///
/// The type itself purposefully exposes **no additional methods**—all user-
/// facing functionality sits on the generic
/// [`seoforge_core::SeoForgeClient`] once the adapter is plugged in.
pub struct GeminiAdapter {
    pub(crate) client: Arc<GeminiClient>,
    pub(crate) generation_config: Option<GenerationConfig>,
}

/// Builder for [`GeminiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use seoforge_gemini::GeminiAdapterBuilder;
///
/// let backend = GeminiAdapterBuilder::new_from_env()
///     .build()
///     .expect("GEMINI_API_KEY must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, project ID, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct GeminiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) generation_config: Option<GenerationConfig>,
}

impl GeminiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `GEMINI_API_KEY`
    /// environment variable.
    ///
    /// # Panics
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            base_url: None,
            generation_config: None,
        }
    }

    /// Supply an API key explicitly, overriding anything read from the
    /// environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Default generation config applied to every request.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`SeoForgeError::Invalid`] – if the API key is missing.
    pub fn build(self) -> Result<GeminiAdapter> {
        let api_key = self.api_key.ok_or(SeoForgeError::Invalid(
            "missing env variable: `GEMINI_API_KEY`".into(),
        ))?;

        let client = match self.base_url {
            Some(base) => GeminiClient::with_http(
                api_key,
                reqwest::Client::builder()
                    .timeout(std::time::Duration::from_secs(30))
                    .build()
                    .expect("building reqwest client"),
                Some(base),
            ),
            None => GeminiClient::new(api_key),
        };

        Ok(GeminiAdapter {
            client: Arc::new(client),
            generation_config: self.generation_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fails_without_an_api_key() {
        let err = GeminiAdapterBuilder::new().build().err().unwrap();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
