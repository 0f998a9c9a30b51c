use fabula_core::error::FabulaError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Gemini returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Gemini blocked the prompt: {0}")]
    Blocked(String),

    #[error("Gemini format error: {0}")]
    Format(String),
}

impl From<GeminiError> for FabulaError {
    fn from(value: GeminiError) -> Self {
        match value {
            GeminiError::Serde(err) => FabulaError::Serialization(err),
            other => FabulaError::Backend(Box::new(other)),
        }
    }
}
