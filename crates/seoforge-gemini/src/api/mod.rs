//! Wire types for the Gemini `v1beta` REST API.
//!
//! Only the surface this crate actually calls is modelled:
//! `models/{model}:generateContent`, non-streaming.

mod common;
mod generate_content;

pub use common::*;
pub use generate_content::*;

#[macro_export]
macro_rules! impl_builder_methods {
    ($builder:ident, $($field:ident: $field_type:ty),*) => {
        impl $builder {
            $(
                pub fn $field(mut self, $field: $field_type) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }
    };
}
