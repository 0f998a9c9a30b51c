//! Generic, lightweight client that executes a [`PromptTemplate`] against a
//! single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that the prompt's `Message` type matches what the backend
//! expects, without dynamic dispatch in user code.
//!
//! Any backend crate (e.g. `fabula-gemini`) implements the provider traits
//! and the same client works out of the box.
use std::{future::Future, pin::Pin, sync::Arc};

use crate::{
    error::Result,
    generic::GenericGenerationResponse,
    provider::{GenerateParameters, PromptExecutionProvider, TextGenerationProvider},
    template::{IntoPrompt, PromptTemplate},
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct FabulaClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for FabulaClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> FabulaClient<B> {
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: PromptExecutionProvider> PromptExecutionProvider for FabulaClient<B> {
    type Message = B::Message;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> Pin<Box<dyn Future<Output = Result<GenericGenerationResponse>> + Send + 'p>>
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<B::Message>,
    {
        self.backend.prompt_execute(prompt)
    }
}

impl<B: TextGenerationProvider> TextGenerationProvider for FabulaClient<B> {
    type Message = B::Message;

    fn generate<'p, M>(
        &self,
        params: GenerateParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericGenerationResponse>> + Send + 'p>>
    where
        M: Into<B::Message> + Send + Sync + 'p,
    {
        self.backend.generate(params)
    }
}
