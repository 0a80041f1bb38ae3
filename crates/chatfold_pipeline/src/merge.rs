use chatfold_domain::{Message, MergeMessageRuns, parse_messages};
use serde_json::Value;
use tracing::debug;

use crate::Stage;

/// Running the merge handle as a stage merges synchronously; the returned
/// future is ready on first poll, so a downstream stage starts right after.
impl Stage for MergeMessageRuns {
    type In = Vec<Message>;
    type Out = Vec<Message>;

    async fn run(&self, messages: Self::In) -> anyhow::Result<Self::Out> {
        Ok(self.invoke(&messages))
    }
}

/// Converts loosely shaped JSON messages into [`Message`]s. A malformed
/// element fails the whole batch with a [`chatfold_domain::Error`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseMessages;

impl Stage for ParseMessages {
    type In = Vec<Value>;
    type Out = Vec<Message>;

    async fn run(&self, values: Self::In) -> anyhow::Result<Self::Out> {
        let messages = parse_messages(values)?;
        debug!(count = messages.len(), "Parsed messages");
        Ok(messages)
    }
}
