use std::borrow::Cow;

use fabula_core::model::{GeminiModel, Model};

pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
pub const GEMINI_2_5_FLASH_LITE: &str = "gemini-2.5-flash-lite";
pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) if !custom.is_empty() => Some(Cow::Borrowed(*custom)),
        Model::Custom(_) => None,
        Model::Gemini(GeminiModel::Gemini25Flash) => Some(GEMINI_2_5_FLASH.into()),
        Model::Gemini(GeminiModel::Gemini25FlashLite) => Some(GEMINI_2_5_FLASH_LITE.into()),
        Model::Gemini(GeminiModel::Gemini25Pro) => Some(GEMINI_2_5_PRO.into()),
    }
}
