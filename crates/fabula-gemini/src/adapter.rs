use std::{env, sync::Arc, time::Duration};

use fabula_core::error::{FabulaError, Result};
use reqwest::Client as HttpClient;

use crate::{client::GeminiClient, error::GeminiError};

/// Environment variable holding the access key.
pub const API_KEY_ENV: &str = "API_KEY";
/// Checked when [`API_KEY_ENV`] is unset.
pub const API_KEY_FALLBACK_ENV: &str = "GEMINI_API_KEY";
/// Optional override of the API base URL.
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

pub(crate) const PROVIDER: &str = "gemini";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wires the HTTP client [`GeminiClient`] into a value that implements the
/// `fabula-core` provider traits.
///
/// The adapter may be built **without** a credential. Every generation call
/// then fails with [`FabulaError::CredentialMissing`] before any request is
/// sent, so a missing key is a recoverable per-call error rather than a
/// startup failure.
#[derive(Debug)]
pub struct GeminiAdapter {
    pub(crate) client: Option<Arc<GeminiClient>>,
}

impl GeminiAdapter {
    /// `true` when an access key was supplied.
    pub fn has_credential(&self) -> bool {
        self.client.is_some()
    }

    pub(crate) fn credential_missing() -> FabulaError {
        FabulaError::CredentialMissing {
            provider: PROVIDER,
            variable: API_KEY_ENV,
        }
    }
}

/// Builder for [`GeminiAdapter`].
///
/// ```rust,no_run
/// use fabula_gemini::GeminiAdapterBuilder;
///
/// let backend = GeminiAdapterBuilder::new_from_env()
///     .build()
///     .expect("HTTP client should build");
/// ```
#[derive(Default)]
pub struct GeminiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl GeminiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `API_KEY` (or `GEMINI_API_KEY`) and `GEMINI_BASE_URL` from the
    /// environment. Empty values count as unset.
    pub fn new_from_env() -> Self {
        let non_empty = |name: &str| env::var(name).ok().filter(|value| !value.is_empty());

        Self {
            api_key: non_empty(API_KEY_ENV).or_else(|| non_empty(API_KEY_FALLBACK_ENV)),
            base_url: non_empty(BASE_URL_ENV),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout. Defaults to 30 s.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder.
    ///
    /// # Errors
    ///
    /// * [`FabulaError::Backend`] – if the HTTP client cannot be constructed.
    ///
    /// A missing API key is **not** an error here.
    pub fn build(self) -> Result<GeminiAdapter> {
        let Some(api_key) = self.api_key else {
            #[cfg(feature = "tracing")]
            tracing::warn!("no Gemini API key configured; generation requests will fail");
            return Ok(GeminiAdapter { client: None });
        };

        let http = HttpClient::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(GeminiError::from)?;

        Ok(GeminiAdapter {
            client: Some(Arc::new(GeminiClient::with_http(
                api_key,
                http,
                self.base_url,
            ))),
        })
    }
}
