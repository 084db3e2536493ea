//! A fragment that spells out the **response contract**: the JSON shape the
//! caller will try to deserialize the model's reply into.
//!
//! The schema is derived from the output type with
//! [`derive_response_schema`], so the prompt can never drift from the Rust
//! struct that parses the reply. Field doc comments on the output type show
//! up as `description` entries in the rendered schema, which is how
//! constraints like tag counts reach the model.
//!
//! # What it adds
//!
//! One system message: an "Output Format:" preamble, the inline schema in a
//! fenced json block, and the instruction to reply with the raw JSON string
//! only, without markdown fences or explanations.

use std::marker::PhantomData;

use schemars::JsonSchema;
use seoforge_core::{
    generic::{GenericMessage, GenericRole},
    schema_util::derive_response_schema,
    template::IntoPrompt,
};
use seoforge_prompt::builder::PromptBuilder;

/// Renders the expected reply shape of `T` as a system message.
///
/// The fragment is stateless; `T` only exists at the type level.
pub struct ResponseContractFragment<T: JsonSchema>(PhantomData<T>);

impl<T: JsonSchema> Default for ResponseContractFragment<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JsonSchema> ResponseContractFragment<T> {
    /// Convenience constructor (equivalent to `Self::default()`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: JsonSchema + 'static> IntoPrompt for ResponseContractFragment<T> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let schema = derive_response_schema::<T>();
        let schema_json =
            serde_json::to_string_pretty(&schema).expect("schema value is valid JSON");

        let builder = PromptBuilder::new()
            .add_line("Output Format:")
            .add_line("Provide the output strictly as a single valid JSON object matching this schema:")
            .add_text_json(schema_json)
            .add_line(
                "Do not include any markdown formatting (like ```json fences) or explanations. \
                 Just the raw JSON string.",
            );

        vec![GenericMessage::new(builder.finalize(), GenericRole::System)]
    }
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, JsonSchema)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct Sample {
        /// A short headline.
        headline: String,
    }

    #[test]
    fn renders_schema_and_raw_json_instruction() {
        let messages = ResponseContractFragment::<Sample>::new().into_prompt();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, GenericRole::System);
        assert!(messages[0].content.contains("A short headline"));
        assert!(messages[0].content.contains("raw JSON string"));
    }
}
