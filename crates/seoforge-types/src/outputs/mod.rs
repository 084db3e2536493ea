//! Typed shapes the model is asked to reply with.

pub mod metadata;

pub use metadata::SeoMetadata;
