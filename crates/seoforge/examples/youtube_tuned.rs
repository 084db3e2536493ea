//! # Tuned YouTube Metadata
//!
//! Same flow as `blog_post_meta`, with two twists:
//!
//! * a default [`GenerationConfig`] on the adapter (higher temperature for
//!   punchier titles),
//! * the raw metadata JSON on stdout instead of the formatted sections.
//!
//! ```bash
//! export GEMINI_API_KEY=…
//! cargo run -p seoforge --example youtube_tuned
//! ```

use anyhow::Result;
use seoforge::SeoForgeClient;
use seoforge::gemini::GeminiAdapterBuilder;
use seoforge::gemini::api::GenerationConfig;
use seoforge::provider::PromptExecutionProvider as _;
use seoforge::seo::SeoPrompt;
use seoforge::types::content::{ContentType, Tone};

#[tokio::main]
async fn main() -> Result<()> {
    let backend = GeminiAdapterBuilder::new_from_env()
        .with_generation_config(GenerationConfig::default().temperature(0.9))
        .build()?;
    let client = SeoForgeClient::new(backend);

    let prompt = SeoPrompt::new(
        ContentType::YouTubeVideo,
        Tone::Clickbait,
        "A 10-minute tutorial on how to bake the perfect sourdough bread",
    );

    let response = client.prompt_execute(prompt).await?;

    println!("{}", serde_json::to_string_pretty(&response.content)?);

    if let Some(usage) = response.usage {
        eprintln!("({} tokens total)", usage.total_tokens);
    }

    Ok(())
}
