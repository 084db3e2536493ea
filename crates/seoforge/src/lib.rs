//! # `seoforge` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                 | What it provides                                                                |
//! |-----------------------|----------------------------------------------------------------------------------|
//! | **`seoforge-core`**   | Provider-agnostic traits (`IntoPrompt`, `PromptTemplate`), generic client, errors |
//! | **`seoforge-prompt`** | Ergonomic helpers for building and chaining prompt fragments                      |
//! | **`seoforge-types`**  | Domain types (`ContentType`, `Tone`, `SeoMetadata`) and reusable fragments        |
//! | **`seoforge-gemini`** | Thin HTTP client that talks to the Gemini *v1beta* API *(optional)*               |
//!
//! On top of the re-exports it contributes the application layer: the
//! [`seo::SeoPrompt`] template that turns a content description, a platform
//! and a tone into a full prompt, and the [`render`] module that formats the
//! generated metadata for the terminal. The `seoforge` binary (feature
//! `cli`, enabled by default) wires those together.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use seoforge::SeoForgeClient;
//! use seoforge::gemini::GeminiAdapterBuilder;
//! use seoforge::provider::PromptExecutionProvider as _;
//! use seoforge::seo::SeoPrompt;
//! use seoforge::types::content::{ContentType, Tone};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = GeminiAdapterBuilder::new_from_env().build()?;
//! let client = SeoForgeClient::new(backend);
//!
//! let prompt = SeoPrompt::new(
//!     ContentType::BlogPost,
//!     Tone::Catchy,
//!     "A 10-minute tutorial on how to bake the perfect sourdough bread",
//! );
//!
//! let response = client.prompt_execute(prompt).await?;
//! println!("{}", response.content.title);
//! # Ok(())
//! # }
//! ```

pub use seoforge_core::*;
pub use seoforge_prompt as prompt;
pub use seoforge_types as types;

#[cfg(feature = "gemini")]
pub use seoforge_gemini as gemini;

pub mod render;
pub mod seo;
