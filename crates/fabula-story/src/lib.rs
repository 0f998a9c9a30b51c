//! Grammar-aware story form: field model, prompt assembly, state reducer,
//! generation invoker and a framework-agnostic view.
//!
//! ```rust
//! use fabula_story::{form::FieldEdit, state::{reduce, StoryEvent, StoryState}};
//!
//! let state = StoryState::default();
//! assert!(!state.can_generate());
//!
//! let state = reduce(&state, StoryEvent::Edit(FieldEdit::Plot("A lost kite.".into())));
//! assert!(state.can_generate());
//! ```
pub mod controller;
pub mod defaults;
pub mod form;
pub mod generator;
pub mod prompt;
pub mod state;
pub mod view;

pub use controller::{StoryController, TriggerResult};
pub use form::{AgeGroup, FieldEdit, FieldId, Proficiency, StoryForm, WritingType};
pub use generator::{GENERATION_FAILED_MESSAGE, GenerationError, StoryGenerator};
pub use prompt::{StoryPrompt, assemble_prompt};
pub use state::{GenerationOutcome, GenerationStatus, StoryEvent, StoryState, reduce};
pub use view::{StoryView, render};
