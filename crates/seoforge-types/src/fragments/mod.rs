//! Reusable prompt fragments. Each fragment implements
//! [`IntoPrompt`](seoforge_core::template::IntoPrompt) so it can be lined up
//! in a [`PromptChain`](seoforge_prompt::chain::PromptChain).

pub mod response_contract;
pub mod static_fragment;

pub use response_contract::ResponseContractFragment;
pub use static_fragment::StaticFragment;
