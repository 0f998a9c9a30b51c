//! Abstractions that tie a **prompt** to a concrete **model**.
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the target model.
//!
//! ```rust
//! use fabula_core::template::{IntoPrompt, PromptTemplate};
//! use fabula_core::generic::{GenericMessage, GenericRole};
//! use fabula_core::model::{GeminiModel, Model};
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for HelloPrompt {
//!     const MODEL: Model = Model::Gemini(GeminiModel::Gemini25Flash);
//! }
//! ```
use crate::model::Model;

/// High-level description of a prompt: which model should handle it.
pub trait PromptTemplate: IntoPrompt {
    /// Logical model identifier. The back-end maps it to its own naming
    /// scheme.
    const MODEL: Model;
}

/// Converts a value into a series of chat messages.
///
/// The `Message` type is an associated type so a back-end can require its
/// own richer struct without dynamic dispatch.
pub trait IntoPrompt {
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
