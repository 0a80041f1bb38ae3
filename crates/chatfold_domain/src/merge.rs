use derive_setters::Setters;
use serde_json::Value;
use tracing::debug;

use crate::{Message, Result, Transformer, parse_messages};

/// Collapses runs of adjacent same-role messages into single messages.
///
/// Content of a run is joined with [`crate::Content::join`]; combinable
/// fields follow [`crate::Role::combination`]; everything else is taken from
/// the first message of the run. Any two adjacent messages with equal roles
/// merge, whatever the role. An empty string merged next to blocks is
/// dropped rather than promoted to an empty text block.
///
/// The value is a reusable handle: call [`MergeMessageRuns::invoke`] directly,
/// or compose it with further steps through [`Transformer::pipe`].
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct MergeMessageRuns {
    /// Inserted between two non-empty text contents of the same run.
    pub separator: String,
}

impl Default for MergeMessageRuns {
    fn default() -> Self {
        Self { separator: "\n".to_string() }
    }
}

/// Returns the merge step as a deferred handle with the default separator.
pub fn merge_message_runs() -> MergeMessageRuns {
    MergeMessageRuns::default()
}

/// Immediate form of [`merge_message_runs`].
pub fn merge_runs(messages: &[Message]) -> Vec<Message> {
    merge_message_runs().invoke(messages)
}

impl MergeMessageRuns {
    /// Merges `messages` into a new sequence; the input is left untouched.
    pub fn invoke(&self, messages: &[Message]) -> Vec<Message> {
        let mut merged: Vec<Message> = Vec::with_capacity(messages.len());

        for message in messages {
            match merged.last_mut() {
                Some(run) if run.has_role(message.role()) => {
                    run.absorb(message.clone(), &self.separator)
                }
                _ => merged.push(message.clone()),
            }
        }

        debug!(
            input = messages.len(),
            output = merged.len(),
            "Merged message runs"
        );
        merged
    }

    /// Parses loosely shaped messages and merges them. Nothing is returned
    /// unless every element parses.
    pub fn try_invoke(&self, values: impl IntoIterator<Item = Value>) -> Result<Vec<Message>> {
        let messages = parse_messages(values)?;
        Ok(self.invoke(&messages))
    }
}

impl Transformer for MergeMessageRuns {
    type Value = Vec<Message>;

    fn transform(&mut self, messages: Self::Value) -> Self::Value {
        self.invoke(&messages)
    }
}
