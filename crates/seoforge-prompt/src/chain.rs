//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](seoforge_core::template::IntoPrompt).
//!
//! # Motivation
//!
//! In real-world prompts you often want to **compose** smaller, reusable
//! *fragments*—for example:
//!
//! * a static role description,
//! * the task-specific details,
//! * the expected response contract.
//!
//! `PromptChain` lets you line up these fragments in a clear, linear fashion
//! **without** mutable vectors or verbose `extend()` calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seoforge_prompt::chain::PromptChain;
//! use seoforge_types::fragments::StaticFragment;
//! use seoforge_core::generic::{GenericMessage, GenericRole};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(StaticFragment::new("Act as an expert SEO specialist.", GenericRole::System))
//!     .with(StaticFragment::new("Suggest a title for my bread tutorial.", GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
//!
//! The generic parameter `Message` allows back-ends to plug in their own,
//! richer message types while reusing the same chaining logic.

use seoforge_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the
/// result is through [`Self::build`], ensuring the builder API remains
/// fluent.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    ///
    /// The method takes `self` **by value** to encourage concise
    /// call-chaining:
    ///
    /// ```rust
    /// # use seoforge_prompt::chain::PromptChain;
    /// # use seoforge_core::generic::{GenericMessage, GenericRole};
    /// #
    /// # let msg = GenericMessage::new("hi".into(), GenericRole::User);
    /// let vec = PromptChain::new()
    ///     .with(msg)
    ///     .build();
    /// ```
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use seoforge_core::generic::{GenericMessage, GenericRole};

    use super::*;

    #[test]
    fn fragments_are_appended_in_order() {
        let messages = PromptChain::new()
            .with(GenericMessage::new("first".into(), GenericRole::System))
            .with(GenericMessage::new("second".into(), GenericRole::User))
            .build();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].role, GenericRole::User);
    }
}
