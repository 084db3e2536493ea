use std::borrow::Cow;

use seoforge_core::model::{GeminiModel, Model};

pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
pub const GEMINI_2_5_FLASH_LITE: &str = "gemini-2.5-flash-lite";
pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => (*custom).into(),
        Model::Gemini(gemini) => match gemini {
            GeminiModel::Flash25 => GEMINI_2_5_FLASH.into(),
            GeminiModel::FlashLite25 => GEMINI_2_5_FLASH_LITE.into(),
            GeminiModel::Pro25 => GEMINI_2_5_PRO.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_models_and_passes_custom_through() {
        assert_eq!(
            map_model(&Model::Gemini(GeminiModel::Flash25)),
            GEMINI_2_5_FLASH
        );
        assert_eq!(
            map_model(&Model::Custom("gemini-exp-1206")),
            "gemini-exp-1206"
        );
    }
}
