//! Session struct, transcript bookkeeping, and accessors.

use crate::{GenerationConfig, Message, Role, SessionError};

/// A conversation session: an ordered transcript plus the fixed
/// generation configuration sent with every completion request.
pub struct Session {
    /// Conversation message history, insertion order significant.
    pub(super) messages: Vec<Message>,
    /// Seed instruction, reseeded on every `clear_history`.
    pub(super) system_context: String,
    /// Sampling parameters, fixed at construction.
    pub(super) config: GenerationConfig,
}

impl Session {
    /// Create a session seeded with a system message. The transcript is
    /// never empty from this point on.
    pub fn new(system_context: impl Into<String>, config: GenerationConfig) -> Self {
        let system_context = system_context.into();
        let messages = vec![Message::new(Role::System, system_context.clone())];
        Self {
            messages,
            system_context,
            config,
        }
    }

    /// Discard all turns and reseed the system message.
    pub fn clear_history(&mut self) {
        self.messages.clear();
        self.messages
            .push(Message::new(Role::System, self.system_context.clone()));
    }

    /// Append a user turn. Empty input is rejected and leaves the
    /// transcript unchanged.
    pub fn push_user(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        let text = text.into();
        if text.is_empty() {
            return Err(SessionError::InvalidInput("user message is empty".into()));
        }
        self.push(Role::User, text);
        Ok(())
    }

    /// Append an assistant turn. Unlike `push_user` this performs no
    /// validation; replies recorded by `request_completion` take this
    /// path too.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(Role::Assistant, text.into());
    }

    // Single append path shared by every entry point.
    pub(super) fn push(&mut self, role: Role, content: String) {
        self.messages.push(Message { role, content });
    }

    /// Content of the message at `index`.
    pub fn content_at(&self, index: usize) -> Result<&str, SessionError> {
        self.messages
            .get(index)
            .map(|m| m.content.as_str())
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: self.messages.len(),
            })
    }

    /// Content of the most recent message.
    pub fn last_content(&self) -> &str {
        // The transcript always holds at least the system message.
        &self.messages[self.last_index()].content
    }

    /// Index of the most recent message.
    pub fn last_index(&self) -> usize {
        self.messages.len() - 1
    }

    /// The full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn system_context(&self) -> &str {
        &self.system_context
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}
