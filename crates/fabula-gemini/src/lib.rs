mod adapter;
mod model_map;
mod provider_impl_generate;
mod provider_impl_prompt;

pub use adapter::{
    API_KEY_ENV, API_KEY_FALLBACK_ENV, BASE_URL_ENV, GeminiAdapter, GeminiAdapterBuilder,
};
pub use client::GeminiClient;
pub use model_map::{GEMINI_2_5_FLASH, GEMINI_2_5_FLASH_LITE, GEMINI_2_5_PRO};
pub mod api_v1;
mod client;
pub mod error;
