use std::{future::Future, pin::Pin, sync::Arc};

use fabula_core::{
    error::{FabulaError, Result},
    generic::{GenericGenerationResponse, GenericMessage},
    provider::{GenerateParameters, TextGenerationProvider},
};

use crate::{
    GeminiAdapter,
    adapter::PROVIDER,
    api_v1::{GenerateContentRequest, GenerationConfig},
    error::GeminiError,
    model_map::map_model,
};

impl TextGenerationProvider for GeminiAdapter {
    type Message = GenericMessage;

    fn generate<'p, M>(
        &self,
        params: GenerateParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericGenerationResponse>> + Send + 'p>>
    where
        M: Into<GenericMessage> + Send + Sync + 'p,
    {
        let client = self.client.as_ref().map(Arc::clone);

        Box::pin(async move {
            let Some(client) = client else {
                return Err(GeminiAdapter::credential_missing());
            };

            let model = map_model(&params.model).ok_or_else(|| FabulaError::ModelNotSupported {
                provider: PROVIDER,
                model: format!("{:?}", params.model),
            })?;

            let config = GenerationConfig::from_options(params.temperature, params.max_output_tokens);
            let mut request =
                GenerateContentRequest::from_messages(params.into_messages().into_iter().map(Into::into));
            if let Some(config) = config {
                request = request.generation_config(config);
            }

            let response = client.generate_content(&model, request).await?;

            let Some(text) = response.text() else {
                if let Some(reason) = response.block_reason() {
                    return Err(GeminiError::Blocked(reason.to_owned()).into());
                }
                return Err(GeminiError::Format("response has no text candidate".into()).into());
            };

            Ok(GenericGenerationResponse {
                text,
                usage: response.usage_metadata.map(Into::into),
            })
        })
    }
}
