//! Holds the latest [`StoryState`] snapshot and runs generations.
//!
//! Every change goes through [`reduce`]; the controller only stores the
//! result. The snapshot lock is never held across the backend call, so
//! edits keep flowing while a generation is outstanding.
use std::sync::{Mutex, MutexGuard, PoisonError};

use fabula_core::{generic::GenericMessage, provider::PromptExecutionProvider};
use tracing::{debug, warn};

use crate::{
    form::FieldEdit,
    generator::{GENERATION_FAILED_MESSAGE, StoryGenerator},
    state::{GenerationOutcome, StoryEvent, StoryState, reduce},
    view::{StoryView, render},
};

/// What a trigger did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerResult {
    /// Plot empty or a generation already running; nothing was sent.
    Ignored,
    Completed(GenerationOutcome),
}

fn lock_state(state: &Mutex<StoryState>) -> MutexGuard<'_, StoryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An in-progress run that has not settled yet. Dropping it unsettled (the
/// trigger future was cancelled) records a failure so the form is usable
/// again.
struct PendingRun<'a> {
    state: &'a Mutex<StoryState>,
    settled: bool,
}

impl PendingRun<'_> {
    fn finish(&mut self, outcome: GenerationOutcome) {
        self.settled = true;
        let mut state = lock_state(self.state);
        *state = reduce(&state, StoryEvent::GenerationFinished(outcome));
    }
}

impl Drop for PendingRun<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("generation abandoned before it settled");
            self.finish(GenerationOutcome::Failed(GENERATION_FAILED_MESSAGE.to_owned()));
        }
    }
}

pub struct StoryController<B> {
    state: Mutex<StoryState>,
    generator: StoryGenerator<B>,
}

impl<B> StoryController<B>
where
    B: PromptExecutionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B) -> Self {
        Self::with_state(backend, StoryState::default())
    }

    pub fn with_state(backend: B, state: StoryState) -> Self {
        Self {
            state: Mutex::new(state),
            generator: StoryGenerator::new(backend),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoryState> {
        lock_state(&self.state)
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> StoryState {
        self.lock().clone()
    }

    /// Render the current snapshot.
    pub fn view(&self) -> StoryView {
        render(&self.lock())
    }

    /// Apply `event` and return the new snapshot.
    pub fn dispatch(&self, event: StoryEvent) -> StoryState {
        let mut state = self.lock();
        let next = reduce(&state, event);
        *state = next.clone();
        next
    }

    pub fn edit(&self, edit: FieldEdit) -> StoryState {
        self.dispatch(StoryEvent::Edit(edit))
    }

    /// Button activation: run one generation cycle for the current form.
    ///
    /// Cancel-safe: if the returned future is dropped mid-run, the snapshot
    /// settles as a failure instead of staying in progress.
    pub async fn trigger(&self) -> TriggerResult {
        let form = {
            let mut state = self.lock();
            if !state.can_generate() {
                debug!(
                    in_progress = state.generation.is_in_progress(),
                    "generation trigger ignored"
                );
                return TriggerResult::Ignored;
            }
            *state = reduce(&state, StoryEvent::GenerationRequested);
            state.form.clone()
        };
        let mut pending = PendingRun {
            state: &self.state,
            settled: false,
        };

        let outcome = match self.generator.generate(&form).await {
            Ok(text) => GenerationOutcome::Story(text),
            Err(err) => GenerationOutcome::Failed(err.user_message().to_owned()),
        };

        pending.finish(outcome.clone());
        TriggerResult::Completed(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Notify;

    use super::*;
    use crate::{
        form::{AgeGroup, FieldId, Proficiency, WritingType},
        generator::testing::{Reply, ScriptedBackend},
        state::GenerationStatus,
        view::OutputView,
    };

    fn controller(reply: Reply) -> (StoryController<ScriptedBackend>, ScriptedBackend) {
        let backend = ScriptedBackend::new(reply);
        (StoryController::new(backend.clone()), backend)
    }

    #[tokio::test]
    async fn empty_plot_never_calls_the_backend() {
        let (controller, backend) = controller(Reply::Text("unused"));

        assert_eq!(controller.trigger().await, TriggerResult::Ignored);
        assert_eq!(backend.calls(), 0);
        assert_eq!(controller.snapshot().generation, GenerationStatus::Idle);
    }

    #[tokio::test]
    async fn success_shows_exactly_the_story() {
        let (controller, _) = controller(Reply::Text("Chapter One: ..."));
        controller.edit(FieldEdit::Plot("A fox learns to read.".into()));

        let result = controller.trigger().await;

        assert_eq!(
            result,
            TriggerResult::Completed(GenerationOutcome::Story("Chapter One: ...".into()))
        );
        let view = controller.view();
        assert_eq!(view.output, OutputView::Story("Chapter One: ...".into()));
        assert_eq!(view.error, None);
        assert!(!view.button.disabled);
    }

    #[tokio::test]
    async fn failure_shows_generic_message_and_placeholder() {
        let (controller, _) = controller(Reply::Fail("network down"));
        controller.edit(FieldEdit::Plot("A fox learns to read.".into()));

        controller.trigger().await;

        let view = controller.view();
        assert_eq!(view.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert!(matches!(view.output, OutputView::Placeholder(_)));
        assert!(!view.to_string().contains("network down"));
    }

    #[tokio::test]
    async fn missing_credential_takes_the_failure_path() {
        let (controller, backend) = controller(Reply::NoCredential);
        controller.edit(FieldEdit::Plot("A fox learns to read.".into()));

        let result = controller.trigger().await;

        assert_eq!(
            result,
            TriggerResult::Completed(GenerationOutcome::Failed(
                GENERATION_FAILED_MESSAGE.into()
            ))
        );
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn second_trigger_while_running_is_ignored_and_edits_still_apply() {
        let gate = Arc::new(Notify::new());
        let backend = ScriptedBackend::gated(Reply::Text("done"), Arc::clone(&gate));
        let controller = StoryController::new(backend.clone());
        controller.edit(FieldEdit::Plot("A fox learns to read.".into()));

        let first = controller.trigger();
        let second = async {
            tokio::task::yield_now().await;

            let view = controller.view();
            assert_eq!(view.output, OutputView::Loading);
            assert!(view.button.disabled);
            assert_eq!(view.button.label, "Generating...");

            let ignored = controller.trigger().await;
            controller.edit(FieldEdit::Tone("Gentle".into()));
            gate.notify_one();
            ignored
        };

        let (first, second) = tokio::join!(first, second);

        assert_eq!(second, TriggerResult::Ignored);
        assert_eq!(
            first,
            TriggerResult::Completed(GenerationOutcome::Story("done".into()))
        );
        assert_eq!(backend.calls(), 1);
        let state = controller.snapshot();
        assert_eq!(state.form.tone, "Gentle");
        assert_eq!(state.generation.story(), Some("done"));
    }

    #[tokio::test]
    async fn cancelled_trigger_leaves_the_form_usable() {
        let gate = Arc::new(Notify::new());
        let backend = ScriptedBackend::gated(Reply::Text("never seen"), Arc::clone(&gate));
        let controller = StoryController::new(backend.clone());
        controller.edit(FieldEdit::Plot("A fox learns to read.".into()));

        tokio::select! {
            biased;
            _ = controller.trigger() => panic!("run should still be waiting on the backend"),
            _ = tokio::task::yield_now() => {}
        }

        let state = controller.snapshot();
        assert!(!state.generation.is_in_progress());
        assert_eq!(state.generation.error(), Some(GENERATION_FAILED_MESSAGE));
        assert!(state.can_generate());
        assert!(!controller.generator.is_busy());
        assert_eq!(backend.calls(), 1);

        let view = controller.view();
        assert!(!view.button.disabled);
        assert_eq!(view.button.label, "Generate Story");
    }

    #[tokio::test]
    async fn next_run_replaces_previous_outcome() {
        let state = StoryState {
            generation: GenerationStatus::Completed(GenerationOutcome::Failed("old".into())),
            ..StoryState::default()
        };
        let controller = StoryController::with_state(ScriptedBackend::new(Reply::Text("again")), state);
        controller.edit(FieldEdit::Plot("A fox learns to read.".into()));

        controller.trigger().await;

        assert_eq!(controller.snapshot().generation.story(), Some("again"));
        assert_eq!(controller.view().error, None);
    }

    #[tokio::test]
    async fn selected_options_reach_the_prompt_verbatim() {
        let (controller, backend) = controller(Reply::Text("ok"));
        for (field, raw) in [
            (FieldId::Plot, "A fox learns to read."),
            (FieldId::WritingType, WritingType::Essay.value()),
            (FieldId::AgeGroup, AgeGroup::University.value()),
            (FieldId::Proficiency, Proficiency::Beginner.value()),
        ] {
            controller.edit(FieldEdit::from_input(field, raw).unwrap());
        }

        controller.trigger().await;

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("Type of Writing: essay\n"));
        assert!(prompts[0].contains("Target Reader Age Group: university\n"));
        assert!(prompts[0].contains("Reader Proficiency Level: beginner\n"));
    }
}
