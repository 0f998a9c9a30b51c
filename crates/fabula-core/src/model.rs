//! Model identifiers used throughout the **fabula** workspace.
//!
//! Provider crates map the variants onto their own naming scheme, so
//! application code never types literal strings such as `"gemini-2.5-flash"`.
//!
//! ```rust
//! use fabula_core::model::{GeminiModel, Model};
//! assert_eq!(Model::from(GeminiModel::Gemini25Flash),
//!            Model::Gemini(GeminiModel::Gemini25Flash));
//! ```

/// Universal identifier for an LLM model.
///
/// * `Gemini` – models officially supported by the Gemini back-end.
/// * `Custom` – any model name not covered by a dedicated enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini(GeminiModel),
    Custom(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    Gemini25Flash,
    Gemini25FlashLite,
    Gemini25Pro,
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}
