//! Immutable state snapshot and the pure reducer that advances it.
//!
//! ```text
//!  Idle ──request──► InProgress ──finished──► Completed
//!                        ▲                        │
//!                        └────────request─────────┘
//! ```
//!
//! A request is only honoured when the plot is non-empty and nothing is in
//! progress. There is no way back to `Idle`.
use crate::form::{FieldEdit, StoryForm};

/// Settled result of one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Text returned by the service.
    Story(String),
    /// User-facing failure message.
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    InProgress,
    Completed(GenerationOutcome),
}

impl GenerationStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GenerationStatus::InProgress)
    }

    /// Generated text, if the last run succeeded.
    pub fn story(&self) -> Option<&str> {
        match self {
            GenerationStatus::Completed(GenerationOutcome::Story(text)) => Some(text),
            _ => None,
        }
    }

    /// Failure message, if the last run failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationStatus::Completed(GenerationOutcome::Failed(message)) => Some(message),
            _ => None,
        }
    }
}

/// Everything the view needs, as one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryState {
    pub form: StoryForm,
    pub generation: GenerationStatus,
}

impl StoryState {
    /// Whether the trigger is enabled.
    pub fn can_generate(&self) -> bool {
        self.form.has_plot() && !self.generation.is_in_progress()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryEvent {
    Edit(FieldEdit),
    GenerationRequested,
    GenerationFinished(GenerationOutcome),
}

/// Pure transition function: `(snapshot, event) -> snapshot`.
pub fn reduce(state: &StoryState, event: StoryEvent) -> StoryState {
    match event {
        StoryEvent::Edit(edit) => StoryState {
            form: state.form.with_edit(edit),
            generation: state.generation.clone(),
        },
        StoryEvent::GenerationRequested if state.can_generate() => StoryState {
            form: state.form.clone(),
            generation: GenerationStatus::InProgress,
        },
        StoryEvent::GenerationRequested => state.clone(),
        // a stray outcome with no run outstanding is dropped
        StoryEvent::GenerationFinished(outcome) if state.generation.is_in_progress() => {
            StoryState {
                form: state.form.clone(),
                generation: GenerationStatus::Completed(outcome),
            }
        }
        StoryEvent::GenerationFinished(_) => state.clone(),
    }
}
