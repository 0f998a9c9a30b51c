//! Drives one generation end to end: assemble the prompt, call the backend
//! once, classify and log failures.
//!
//! The generator owns an atomic busy flag. A call made while another is
//! outstanding is rejected with [`GenerationError::Busy`] without touching
//! the backend, whatever the UI did or did not disable.
use std::sync::atomic::{AtomicBool, Ordering};

use fabula_core::{
    FabulaClient, error::FabulaError, generic::GenericMessage,
    provider::PromptExecutionProvider,
};
use tracing::{debug, error, info, warn};

use crate::{form::StoryForm, prompt::StoryPrompt};

/// The only failure text ever shown to the user.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate story. Please check the console for details.";

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The credential is missing; no request was sent.
    #[error("generation is not configured: {0}")]
    Configuration(#[source] FabulaError),

    /// The request failed in transport or on the service side.
    #[error("generation failed: {0}")]
    Generation(#[source] FabulaError),

    #[error("a generation is already in progress")]
    Busy,
}

impl GenerationError {
    /// Text for the error region. Detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

impl From<FabulaError> for GenerationError {
    fn from(value: FabulaError) -> Self {
        if value.is_configuration() {
            GenerationError::Configuration(value)
        } else {
            GenerationError::Generation(value)
        }
    }
}

/// Clears the busy flag on every exit path.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct StoryGenerator<B> {
    client: FabulaClient<B>,
    busy: AtomicBool,
}

impl<B> StoryGenerator<B>
where
    B: PromptExecutionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B) -> Self {
        Self::with_client(FabulaClient::new(backend))
    }

    pub fn with_client(client: FabulaClient<B>) -> Self {
        Self {
            client,
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Generate a story for `form` with exactly one backend call.
    ///
    /// # Errors
    ///
    /// * [`GenerationError::Busy`] – another call is outstanding.
    /// * [`GenerationError::Configuration`] – the credential is missing.
    /// * [`GenerationError::Generation`] – anything else went wrong.
    pub async fn generate(&self, form: &StoryForm) -> Result<String, GenerationError> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            warn!("story generation already in progress, rejecting overlapping call");
            return Err(GenerationError::Busy);
        };

        let prompt = StoryPrompt::from_form(form);
        debug!(
            writing_type = %form.writing_type,
            age_group = %form.age_group,
            proficiency = %form.proficiency,
            prompt_len = prompt.text().len(),
            "assembled story prompt"
        );

        match self.client.prompt_execute(prompt).await {
            Ok(response) => {
                if let Some(usage) = response.usage {
                    info!(total_tokens = usage.total_tokens, "story generated");
                } else {
                    info!("story generated");
                }
                Ok(response.text)
            }
            Err(err) => {
                let err = GenerationError::from(err);
                error!(error = ?err, "story generation failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{
        future::Future,
        pin::Pin,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use fabula_core::{
        error::{FabulaError, Result},
        generic::{GenericGenerationResponse, GenericMessage},
        provider::PromptExecutionProvider,
        template::{IntoPrompt, PromptTemplate},
    };
    use tokio::sync::Notify;

    #[derive(Clone)]
    pub(crate) enum Reply {
        Text(&'static str),
        Fail(&'static str),
        NoCredential,
    }

    /// Backend double that records prompts and answers with a fixed reply,
    /// optionally waiting on a gate first.
    #[derive(Clone)]
    pub(crate) struct ScriptedBackend {
        reply: Reply,
        gate: Option<Arc<Notify>>,
        pub(crate) calls: Arc<AtomicUsize>,
        pub(crate) prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedBackend {
        pub(crate) fn new(reply: Reply) -> Self {
            Self {
                reply,
                gate: None,
                calls: Arc::default(),
                prompts: Arc::default(),
            }
        }

        pub(crate) fn gated(reply: Reply, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(reply)
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PromptExecutionProvider for ScriptedBackend {
        type Message = GenericMessage;

        fn prompt_execute<'a, 'p, P>(
            &'a self,
            prompt: P,
        ) -> Pin<Box<dyn Future<Output = Result<GenericGenerationResponse>> + Send + 'p>>
        where
            'a: 'p,
            P: PromptTemplate + Send + Sync + 'p,
            <P as IntoPrompt>::Message: Into<GenericMessage>,
        {
            let reply = self.reply.clone();
            let gate = self.gate.clone();
            let calls = Arc::clone(&self.calls);
            let prompts = Arc::clone(&self.prompts);
            let messages: Vec<GenericMessage> =
                prompt.into_prompt().into_iter().map(Into::into).collect();

            Box::pin(async move {
                if let Reply::NoCredential = reply {
                    return Err(FabulaError::CredentialMissing {
                        provider: "scripted",
                        variable: "API_KEY",
                    });
                }

                calls.fetch_add(1, Ordering::SeqCst);
                if let Ok(mut seen) = prompts.lock() {
                    seen.extend(messages.into_iter().map(|m| m.content));
                }
                if let Some(gate) = gate {
                    gate.notified().await;
                }

                match reply {
                    Reply::Text(text) => Ok(GenericGenerationResponse {
                        text: text.to_owned(),
                        usage: None,
                    }),
                    Reply::Fail(reason) => Err(FabulaError::Backend(reason.into())),
                    Reply::NoCredential => unreachable!(),
                }
            })
        }
    }
}
