//! # Blog Post Metadata – Minimal end-to-end run
//!
//! This example is the “smallest viable program” that
//!
//! 1. **Builds** a Gemini backend (`GeminiAdapter`).
//! 2. **Creates** a [`SeoPrompt`] from a content description, a platform and
//!    a tone.
//! 3. **Asks** the model to respond with JSON that deserialises into the
//!    typed [`SeoMetadata`](seoforge::types::outputs::SeoMetadata) struct.
//! 4. **Prints** the formatted result sections.
//!
//! ## How to run
//!
//! ```bash
//! export GEMINI_API_KEY=…             # your key
//! cargo run -p seoforge --example blog_post_meta
//! ```
//!
//! You should see output similar to:
//!
//! ```text
//! Optimized Title
//!   Bake Perfect Sourdough in Just 10 Minutes a Day
//! …
//! ```

use anyhow::Result;
use seoforge::SeoForgeClient;
use seoforge::gemini::GeminiAdapterBuilder;
use seoforge::provider::PromptExecutionProvider as _;
use seoforge::render::format_metadata;
use seoforge::seo::SeoPrompt;
use seoforge::types::content::{ContentType, Tone};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Build the backend from the environment (needs GEMINI_API_KEY).
    let backend = GeminiAdapterBuilder::new_from_env().build()?;

    // 2. Wrap it inside the generic client.
    let client = SeoForgeClient::new(backend);

    // 3. Describe the content.
    let prompt = SeoPrompt::new(
        ContentType::BlogPost,
        Tone::Professional,
        "A 10-minute tutorial on how to bake the perfect sourdough bread",
    );

    // 4. Run the prompt and await the typed result.
    let response = client.prompt_execute(prompt).await?;

    print!("{}", format_metadata(&response.content));
    Ok(())
}
