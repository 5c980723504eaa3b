//! Tests for transcript bookkeeping and the completion round-trip.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{CompletionClient, CompletionError, GenerationConfig, Message, Role, SessionError};

use super::Session;

fn session() -> Session {
    Session::new("You are helpful.", GenerationConfig::new("gpt-4o"))
}

/// Test double that replies with a fixed string and records every
/// transcript it was sent.
struct FixedReply {
    reply: &'static str,
    seen: Mutex<Vec<Vec<Message>>>,
}

impl FixedReply {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionClient for FixedReply {
    async fn complete(
        &self,
        messages: &[Message],
        _config: &GenerationConfig,
    ) -> Result<Message, CompletionError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        Ok(Message::new(Role::Assistant, self.reply))
    }
}

/// Test double that always fails at the service boundary.
struct AlwaysFails;

#[async_trait]
impl CompletionClient for AlwaysFails {
    async fn complete(
        &self,
        _messages: &[Message],
        _config: &GenerationConfig,
    ) -> Result<Message, CompletionError> {
        Err(CompletionError::Api("HTTP 500: upstream exploded".into()))
    }
}

#[test]
fn new_session_seeds_the_system_message() {
    let session = session();

    assert_eq!(session.message_count(), 1);
    assert_eq!(session.messages()[0].role, Role::System);
    assert_eq!(session.messages()[0].content, "You are helpful.");
    assert_eq!(session.last_index(), 0);
}

#[test]
fn clear_history_resets_to_the_system_message() {
    let mut session = session();
    session.push_user("Hi").unwrap();
    session.push_assistant("Hello!");
    assert_eq!(session.message_count(), 3);

    session.clear_history();

    assert_eq!(session.message_count(), 1);
    assert_eq!(session.messages()[0].role, Role::System);
    assert_eq!(session.messages()[0].content, session.system_context());
    assert_eq!(session.last_index(), 0);
}

#[test]
fn pushes_grow_the_transcript_one_at_a_time() {
    let mut session = session();

    session.push_user("one").unwrap();
    assert_eq!(session.message_count(), 2);
    assert_eq!(session.last_index(), 1);

    session.push_assistant("two");
    assert_eq!(session.message_count(), 3);
    assert_eq!(session.last_index(), 2);

    session.push_user("three").unwrap();
    assert_eq!(session.message_count(), 4);
    assert_eq!(session.last_index(), 3);
}

#[test]
fn empty_user_message_is_rejected() {
    let mut session = session();

    let err = session.push_user("").unwrap_err();

    assert!(matches!(err, SessionError::InvalidInput(_)));
    assert_eq!(session.message_count(), 1);
}

#[test]
fn assistant_append_is_unconditional() {
    let mut session = session();

    session.push_assistant("hello");
    session.push_assistant("");

    assert_eq!(session.message_count(), 3);
    assert_eq!(session.messages()[1].role, Role::Assistant);
    assert_eq!(session.messages()[1].content, "hello");
    assert_eq!(session.messages()[2].content, "");
}

#[test]
fn content_lookup_by_index() {
    let mut session = session();
    session.push_user("Hi").unwrap();
    session.push_assistant("Hello!");

    assert_eq!(session.content_at(0).unwrap(), "You are helpful.");
    assert_eq!(session.content_at(2).unwrap(), "Hello!");
    assert_eq!(session.last_content(), "Hello!");

    let err = session.content_at(99).unwrap_err();
    assert!(matches!(
        err,
        SessionError::IndexOutOfRange { index: 99, len: 3 }
    ));
}

#[tokio::test]
async fn completion_appends_the_reply() {
    let mut session = session();
    session.push_user("Hi").unwrap();
    let client = FixedReply::new("Hello!");

    let reply = session.request_completion(&client).await.unwrap();

    assert_eq!(reply, "Hello!");
    assert_eq!(session.message_count(), 3);
    assert_eq!(session.messages()[2].role, Role::Assistant);
    assert_eq!(session.messages()[2].content, "Hello!");
    assert_eq!(session.last_index(), 2);

    // The full transcript was forwarded in order.
    let seen = client.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].len(), 2);
    assert_eq!(seen[0][0].role, Role::System);
    assert_eq!(seen[0][1].role, Role::User);
    assert_eq!(seen[0][1].content, "Hi");
}

#[tokio::test]
async fn failed_completion_leaves_the_transcript_unchanged() {
    let mut session = session();
    session.push_user("Hi").unwrap();
    let before = session.messages().to_vec();

    let err = session.request_completion(&AlwaysFails).await.unwrap_err();

    assert!(matches!(err, CompletionError::Api(_)));
    assert_eq!(session.messages(), &before[..]);
    assert_eq!(session.last_index(), 1);
}

#[test]
fn generation_config_defaults_match_the_documented_values() {
    let config = GenerationConfig::new("gpt-4o");

    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.temperature, 1.0);
    assert_eq!(config.max_tokens, 1024);
    assert_eq!(config.top_p, 1.0);
    assert_eq!(config.frequency_penalty, 0.0);
    assert_eq!(config.presence_penalty, 0.0);
}
