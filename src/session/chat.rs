//! The completion round-trip for `Session`.

use tracing::{debug, warn};

use crate::{CompletionClient, CompletionError, Role};

use super::manager::Session;

impl Session {
    /// Send the current transcript to the completion service and record
    /// the reply as an assistant turn.
    ///
    /// On failure the transcript is left untouched and the error is
    /// logged and returned, so the caller decides whether to retry or
    /// surface it. One call per invocation, no retries.
    pub async fn request_completion(
        &mut self,
        client: &dyn CompletionClient,
    ) -> Result<String, CompletionError> {
        debug!(
            model = %self.config.model,
            messages = self.messages.len(),
            "requesting completion"
        );

        match client.complete(&self.messages, &self.config).await {
            Ok(reply) => {
                self.push(Role::Assistant, reply.content.clone());
                Ok(reply.content)
            }
            Err(err) => {
                warn!(error = %err, "completion request failed; transcript unchanged");
                Err(err)
            }
        }
    }
}
