//! Conversation-state management for turn-based chat APIs.
//!
//! Provides:
//! - `Session`: an ordered transcript of role-tagged messages with
//!   append/reset operations and a completion round-trip
//! - `CompletionClient`: the boundary trait for the remote completion
//!   service
//! - `OpenAiClient`: a chat-completions implementation of that boundary

pub mod openai;
pub mod session;

use async_trait::async_trait;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::Session;

/// Boundary to a remote completion service. Given the ordered transcript
/// and a generation configuration, returns a single assistant reply.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        config: &GenerationConfig,
    ) -> Result<Message, CompletionError>;
}

/// One turn in a conversation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Sampling and length parameters sent with every completion request.
/// Set at session construction, immutable thereafter.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl GenerationConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 1.0,
            max_tokens: 1024,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_frequency_penalty(mut self, frequency_penalty: f64) -> Self {
        self.frequency_penalty = frequency_penalty;
        self
    }

    pub fn with_presence_penalty(mut self, presence_penalty: f64) -> Self {
        self.presence_penalty = presence_penalty;
        self
    }
}

/// Failures at the completion-service boundary.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("API error: {0}")]
    Api(String),
    #[error("rate limited")]
    RateLimited,
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Validation failures surfaced directly to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("index {index} out of range for a transcript of {len} messages")]
    IndexOutOfRange { index: usize, len: usize },
}
