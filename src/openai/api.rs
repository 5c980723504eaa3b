//! CompletionClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{CompletionClient, CompletionError, GenerationConfig, Message};

use super::client::OpenAiClient;

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        messages: &[Message],
        config: &GenerationConfig,
    ) -> Result<Message, CompletionError> {
        let body = self.build_request_body(messages, config);

        debug!(model = %config.model, "chat completions request");

        let response = self
            .http
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(CompletionError::Api(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
