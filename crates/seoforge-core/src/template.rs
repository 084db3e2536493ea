//! Abstractions that tie a **prompt** to a concrete **model** and a **typed
//! response**.
//!
//! The seoforge workspace purposely keeps the public surface small. A
//! developer usually needs only two traits to go from “some string fragments”
//! to “ready-to-send payload”:
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds metadata such as the target model and the
//!    expected JSON response shape.
//!
//! Provider back-ends (e.g. `seoforge-gemini`) accept *any* `P` that
//! implements **both** traits. Thanks to Rust’s type system the compiler
//! guarantees at compile time that
//!
//! * the message type produced by the prompt matches what the back-end expects,
//! * the JSON returned by the provider can be deserialised into `P::Output`.
//!
//! ```rust
//! use seoforge_core::template::{IntoPrompt, PromptTemplate};
//! use seoforge_core::generic::{GenericMessage, GenericRole};
//! use seoforge_core::model::{GeminiModel, Model};
//! use schemars::JsonSchema;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, JsonSchema)]
//! #[serde(deny_unknown_fields)]
//! struct Headline { title: String }
//!
//! struct HeadlinePrompt;
//!
//! impl IntoPrompt for HeadlinePrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Suggest a headline!".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for HeadlinePrompt {
//!     type Output = Headline;
//!     const MODEL: Model = Model::Gemini(GeminiModel::Flash25);
//! }
//! ```

use std::any::Any;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::model::Model;

/// High-level description of a prompt.
///
/// Implement this trait **in addition** to [`IntoPrompt`] to specify:
///
/// * `Output` – the strongly-typed Rust struct you expect from the LLM.
/// * `MODEL`  – the identifier of the model that should handle the request.
///
/// The blanket constraints on `Output` (`JsonSchema + Deserialize + Any`)
/// enable the adapter to derive a JSON Schema for the prompt contract and to
/// down-cast the erased type if necessary.
pub trait PromptTemplate: IntoPrompt {
    /// Type produced by the LLM and returned to the caller.
    type Output: JsonSchema + for<'de> Deserialize<'de> + Any;

    /// Logical model identifier. The back-end will map this to its own naming
    /// scheme (`"gemini-2.5-flash"`, …).
    const MODEL: Model;
}

/// Converts a value into a series of chat messages.
///
/// Provider crates typically use [`crate::generic::GenericMessage`], but a
/// back-end can require its own richer struct. By making the `Message` type
/// an **associated type** we keep the trait flexible without resorting to
/// dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// Convenience implementation so a single [`crate::generic::GenericMessage`]
/// can be passed directly to a chain without wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
