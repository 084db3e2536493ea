//! # `seoforge-core`
//!
//! Provider-agnostic building blocks of the seoforge workspace: the
//! [`template::PromptTemplate`] / [`template::IntoPrompt`] traits that tie a
//! prompt to a typed JSON response, the [`provider::PromptExecutionProvider`]
//! trait implemented by backend adapters, the generic [`SeoForgeClient`] and
//! the shared error type.
//!
//! Nothing in this crate knows about HTTP or any concrete model API; that
//! lives in adapter crates such as `seoforge-gemini`.

pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;

pub use client::SeoForgeClient;
