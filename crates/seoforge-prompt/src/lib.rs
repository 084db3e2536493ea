//! # `seoforge-prompt`
//!
//! Ergonomic helpers for building and chaining prompt fragments: the
//! [`builder::PromptBuilder`] for assembling markdown text and the
//! [`chain::PromptChain`] for composing message lists out of reusable
//! fragments.

pub mod builder;
pub mod chain;
