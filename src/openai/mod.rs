//! OpenAI chat-completions client.
//!
//! Implements the `CompletionClient` trait against
//! `POST {base_url}/chat/completions`. The API key is owned by the
//! client and injected at construction; it is never process-global.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
