//! Unified error type exposed by **`fabula-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`FabulaClient`](crate::FabulaClient).

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FabulaError>;

#[derive(Debug, Error)]
pub enum FabulaError {
    /// The access credential for `provider` is not configured. Raised before
    /// any network traffic happens.
    #[error("credential for provider `{provider}` is not configured (set `{variable}`)")]
    CredentialMissing {
        provider: &'static str,
        variable: &'static str,
    },

    /// The selected backend does not recognise the requested `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },

    /// Failure while serialising or deserialising JSON payloads.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl FabulaError {
    /// `true` for errors caused by missing local configuration rather than by
    /// the remote service.
    pub fn is_configuration(&self) -> bool {
        matches!(self, FabulaError::CredentialMissing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_a_configuration_error() {
        let err = FabulaError::CredentialMissing {
            provider: "gemini",
            variable: "API_KEY",
        };
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "credential for provider `gemini` is not configured (set `API_KEY`)"
        );
    }

    #[test]
    fn backend_errors_are_not_configuration_errors() {
        let err = FabulaError::Backend("network down".into());
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "backend returned an error: network down");
    }
}
