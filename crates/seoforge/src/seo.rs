//! The prompt template of the program: content details in, SEO metadata out.
//!
//! [`SeoPrompt`] composes three fragments, in a fixed order:
//!
//! 1. the SEO-specialist role description (system),
//! 2. the content details and platform instructions (user),
//! 3. the response contract derived from [`SeoMetadata`]'s schema (system).
//!
//! Binding the template to `SeoMetadata` means the compiler guarantees the
//! reply the backend parses is exactly the shape the rest of the program
//! consumes.

use seoforge_core::{
    generic::{GenericMessage, GenericRole},
    model::{GeminiModel, Model},
    template::{IntoPrompt, PromptTemplate},
};
use seoforge_prompt::{builder::PromptBuilder, chain::PromptChain};
use seoforge_types::{
    content::{ContentType, Tone},
    fragments::{ResponseContractFragment, StaticFragment},
    outputs::SeoMetadata,
};

/// Role description shared by every generation request.
const SEO_SPECIALIST_ROLE: &str = include_str!("data/seo_specialist.md");

/// A single generation request: what the content is, where it will be
/// published and how it should sound.
pub struct SeoPrompt {
    content_type: ContentType,
    tone: Tone,
    description: String,
}

impl SeoPrompt {
    pub fn new(content_type: ContentType, tone: Tone, description: impl Into<String>) -> Self {
        Self {
            content_type,
            tone,
            description: description.into(),
        }
    }

    /// The user-role message carrying the content details and the
    /// platform-specific instructions.
    fn details(&self) -> String {
        PromptBuilder::new()
            .add_line("I have a piece of content with the following details:")
            .add_blank_line()
            .add_key_value("Content Type", self.content_type.label())
            .add_key_value("Description", &self.description)
            .add_key_value("Target Tone", self.tone.label())
            .add_blank_line()
            .add_line("Instructions:")
            .add_bullet(self.content_type.guideline())
            .add_bullet(format!(
                "Ensure the Title and Description strictly match the \"{}\" tone.",
                self.tone.label()
            ))
            .finalize()
    }
}

impl IntoPrompt for SeoPrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let details = self.details();

        PromptChain::new()
            .with(StaticFragment::from(SEO_SPECIALIST_ROLE))
            .with(GenericMessage::new(details, GenericRole::User))
            .with(ResponseContractFragment::<SeoMetadata>::new())
            .build()
    }
}

impl PromptTemplate for SeoPrompt {
    type Output = SeoMetadata;
    const MODEL: Model = Model::Gemini(GeminiModel::Flash25);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> Vec<GenericMessage> {
        SeoPrompt::new(
            ContentType::YouTubeVideo,
            Tone::Clickbait,
            "A 10-minute tutorial on how to bake the perfect sourdough bread",
        )
        .into_prompt()
    }

    #[test]
    fn fragments_arrive_in_role_details_contract_order() {
        let messages = messages();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, GenericRole::System);
        assert!(messages[0].content.contains("expert SEO specialist"));
        assert_eq!(messages[1].role, GenericRole::User);
        assert_eq!(messages[2].role, GenericRole::System);
        assert!(messages[2].content.contains("Output Format"));
    }

    #[test]
    fn details_carry_platform_guideline_and_tone() {
        let messages = messages();
        let details = &messages[1].content;

        assert!(details.contains("**Content Type**: YouTube Video"));
        assert!(details.contains("sourdough"));
        assert!(details.contains("like, share, and subscribe"));
        assert!(details.contains("strictly match the \"Clickbait\" tone"));
    }

    #[test]
    fn contract_pins_the_metadata_schema() {
        let messages = messages();
        let contract = &messages[2].content;

        assert!(contract.contains("10-15 relevant tags"));
        assert!(contract.contains("Just the raw JSON string."));
    }
}
