use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::GenericGenerationResponse, model::Model};

/// A **backend** turns a list of messages into a network call to a concrete
/// provider (Gemini, …) and returns the generated text.
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One method** – `generate`, a *single* non-streaming round-trip.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so the trait stays
/// object-safe without `async_trait`.
pub trait TextGenerationProvider: Send + Sync {
    /// Message type consumed by this backend.
    type Message: Send + Sync + 'static;

    fn generate<'p, M>(
        &self,
        params: GenerateParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericGenerationResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Send + Sync + 'p;
}

#[derive(Debug, Clone)]
pub struct GenerateParameters<M> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
}

impl<M> GenerateParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            max_output_tokens: None,
        }
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}
