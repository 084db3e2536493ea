//! Generic, lightweight client that executes a [`PromptTemplate`] against a
//! single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that:
//! * The prompt’s `Message` type matches what the backend expects.
//! * No dynamic dispatch or object-safety hurdles appear in user code.
//!
//! Any backend crate (e.g. `seoforge-gemini`) just implements
//! [`PromptExecutionProvider`] and the same client works out of the box.

use std::sync::Arc;

use crate::{
    error::Result,
    generic::GenericCompletionResponse,
    provider::PromptExecutionProvider,
    template::{IntoPrompt, PromptTemplate},
};

/// A client bound to a single provider.
///
/// Clone the client if you need to share it across tasks—the backend sits
/// behind an `Arc`, so clones are cheap.
#[derive(Debug, Clone)]
pub struct SeoForgeClient<B> {
    backend: Arc<B>,
}

impl<B> SeoForgeClient<B>
where
    B: PromptExecutionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific
    /// settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: PromptExecutionProvider> PromptExecutionProvider for SeoForgeClient<B> {
    type Message = B::Message;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> std::pin::Pin<
        Box<
            dyn std::future::Future<Output = Result<GenericCompletionResponse<P::Output>>>
                + Send
                + 'p,
        >,
    >
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message>,
    {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.prompt_execute(prompt).await })
    }
}
