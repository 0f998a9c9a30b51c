//! Generic message and role types used by the *fabula-core* crate.
//!
//! They mirror the concepts exposed by most provider APIs ("system", "user",
//! "assistant") and convert into provider-specific structs via `From`/`Into`.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single message independent of any specific LLM provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
}

impl GenericMessage {
    /// ```rust
    /// use fabula_core::generic::{GenericMessage, GenericRole};
    ///
    /// let msg = GenericMessage::new("Write a poem.".into(), GenericRole::User);
    /// assert_eq!(msg.role.to_string(), "user");
    /// ```
    pub fn new(content: String, role: GenericRole) -> Self {
        Self { content, role }
    }
}

/// High-level chat roles recognised by most LLM providers.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Global behaviour and style guidelines.
    System,
    /// Messages produced by the model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// Text returned by a provider for one generation request.
#[derive(Debug, Clone)]
pub struct GenericGenerationResponse {
    pub text: String,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
