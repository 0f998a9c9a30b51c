use std::{future::Future, pin::Pin};

use fabula_core::{
    error::Result,
    generic::{GenericGenerationResponse, GenericMessage},
    provider::{GenerateParameters, PromptExecutionProvider, TextGenerationProvider},
    template::{IntoPrompt, PromptTemplate},
};

use crate::GeminiAdapter;

impl PromptExecutionProvider for GeminiAdapter {
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
        let messages: Vec<GenericMessage> =
            prompt.into_prompt().into_iter().map(Into::into).collect();

        self.generate(GenerateParameters::new(messages, P::MODEL))
    }
}
