//! OpenAI API client configuration.

use std::fmt;

use crate::CompletionError;

pub(crate) const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Connection settings for the chat-completions endpoint. Sampling
/// parameters live in `GenerationConfig`, owned by the session.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    /// Read the API key from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, CompletionError> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) => Ok(Self::new(key)),
            Err(_) => Err(CompletionError::Api(
                "OpenAI API not configured. Set OPENAI_API_KEY.".into(),
            )),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
