use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;

use seoforge::SeoForgeClient;
use seoforge::gemini::GeminiAdapterBuilder;
use seoforge::gemini::api::GenerationConfig;
use seoforge::provider::PromptExecutionProvider as _;
use seoforge::render::format_metadata;
use seoforge::seo::SeoPrompt;
use seoforge::types::content::{ContentType, Tone};

/// Generate SEO titles, descriptions and tags in seconds.
///
/// Reads the Gemini API key from `GEMINI_API_KEY` (a local `.env` file is
/// picked up automatically).
#[derive(Parser)]
#[command(name = "seoforge", version)]
struct Cli {
    /// What the content is about.
    description: String,

    /// Where the content will be published: blog-post, youtube-video,
    /// social-media-post, product-description or website-page.
    #[arg(long, default_value = "blog-post")]
    content_type: ContentType,

    /// Tone of the generated title and description: catchy, clickbait,
    /// serious, casual, professional or humorous.
    #[arg(long, default_value = "catchy")]
    tone: Tone,

    /// Sampling temperature forwarded to the model.
    #[arg(long)]
    temperature: Option<f64>,

    /// Print the raw metadata JSON instead of the formatted sections.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GEMINI_API_KEY from a local .env, if present.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("seoforge=info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.description.trim().is_empty() {
        bail!("please enter a description to get started");
    }

    let mut builder = GeminiAdapterBuilder::new_from_env();
    if let Some(temperature) = cli.temperature {
        builder =
            builder.with_generation_config(GenerationConfig::default().temperature(temperature));
    }
    let backend = builder.build()?;
    let client = SeoForgeClient::new(backend);

    debug!(content_type = %cli.content_type, tone = %cli.tone, "generating SEO metadata");

    let prompt = SeoPrompt::new(cli.content_type, cli.tone, cli.description);
    let response = client
        .prompt_execute(prompt)
        .await
        .context("error generating content")?;

    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "token usage"
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response.content)?);
    } else {
        print!("{}", format_metadata(&response.content));
    }

    Ok(())
}
