//! OpenAI client struct, request building, and response parsing.

use crate::{CompletionError, GenerationConfig, Message, Role};

use super::config::OpenAiConfig;

/// Chat-completions API client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub(crate) fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body for the chat completions API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        config: &GenerationConfig,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": config.model,
            "messages": messages,
            "temperature": config.temperature,
            "max_tokens": config.max_tokens,
            "top_p": config.top_p,
            "frequency_penalty": config.frequency_penalty,
            "presence_penalty": config.presence_penalty,
        })
    }

    /// Extract the first candidate's text from a response body.
    pub(crate) fn parse_response(
        &self,
        json: serde_json::Value,
    ) -> Result<Message, CompletionError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                CompletionError::Parse(format!("no message content in response: {json}"))
            })?;
        Ok(Message::new(Role::Assistant, content))
    }
}
