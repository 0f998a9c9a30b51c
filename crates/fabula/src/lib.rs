//! # `fabula` – The umbrella crate
//!
//! One-stop import for the grammar-aware story generator:
//!
//! | Crate             | What it provides                                                   |
//! |-------------------|--------------------------------------------------------------------|
//! | **`fabula-core`** | Provider traits, generic client, model ids, errors                 |
//! | **`fabula-prompt`** | Fluent `PromptBuilder`                                           |
//! | **`fabula-story`** | Form fields, prompt assembly, state reducer, invoker, view        |
//! | **`fabula-gemini`** | Gemini `generateContent` adapter *(feature `gemini`, default)*   |
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use fabula::gemini::GeminiAdapterBuilder;
//! use fabula::story::{FieldEdit, StoryController};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = GeminiAdapterBuilder::new_from_env().build()?;
//!     let controller = StoryController::new(backend);
//!
//!     controller.edit(FieldEdit::Plot("Two cousins open a tea shop.".into()));
//!     controller.trigger().await;
//!
//!     println!("{}", controller.view());
//!     Ok(())
//! }
//! ```
pub use fabula_core::*;
pub use fabula_prompt as prompt;
pub use fabula_story as story;

#[cfg(feature = "gemini")]
pub use fabula_gemini as gemini;
