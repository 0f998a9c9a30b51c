use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::GenericGenerationResponse,
    template::{IntoPrompt, PromptTemplate},
};

/// Runs a complete [`PromptTemplate`] against a backend.
///
/// The constraint `<P as IntoPrompt>::Message: Into<Self::Message>` guarantees
/// at **compile time** that callers only feed the backend messages it
/// understands.
pub trait PromptExecutionProvider: Send + Sync {
    /// Message type consumed by this backend.
    type Message: Send + Sync + 'static;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> Pin<Box<dyn Future<Output = Result<GenericGenerationResponse>> + Send + 'p>>
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message>;
}
