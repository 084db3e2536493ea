mod adapter;
mod model_map;
mod provider_impl;
mod sanitize;

pub use adapter::{GeminiAdapter, GeminiAdapterBuilder};
pub use model_map::{GEMINI_2_5_FLASH, GEMINI_2_5_FLASH_LITE, GEMINI_2_5_PRO};

pub mod api;
mod client;
pub mod error;
