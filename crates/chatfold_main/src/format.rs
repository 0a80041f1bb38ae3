use anyhow::Context;
use chatfold_domain::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::Display;

/// Encoding of message lists on the command line.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Decodes a list of loosely shaped messages; element shapes are checked
    /// later by the parse stage.
    pub fn decode(self, input: &str) -> anyhow::Result<Vec<Value>> {
        match self {
            Format::Json => serde_json::from_str(input)
                .with_context(|| format!("Failed to decode {self} message list")),
            Format::Yaml => serde_yml::from_str(input)
                .with_context(|| format!("Failed to decode {self} message list")),
        }
    }

    pub fn encode(self, messages: &[Message]) -> anyhow::Result<String> {
        let encoded = match self {
            Format::Json => serde_json::to_string_pretty(messages)?,
            Format::Yaml => serde_yml::to_string(messages)?,
        };
        Ok(encoded)
    }
}
