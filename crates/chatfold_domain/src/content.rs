use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// One structured unit of message content.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
    ToolUse {
        id: String,
        name: String,
        #[serde(default)]
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
}

impl ContentBlock {
    pub fn text(text: impl ToString) -> Self {
        Self::Text { text: text.to_string() }
    }

    pub fn image(url: impl ToString) -> Self {
        Self::Image { url: url.to_string(), mime_type: None }
    }
}

/// Message content: either plain text or an ordered sequence of blocks,
/// never both.
///
/// Deserialization goes through [`Content::try_from`], so malformed content
/// is reported as [`Error::ContentFormat`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged, try_from = "Value")]
pub enum Content {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl Content {
    /// Appends `other` after `self`.
    ///
    /// Two texts are joined with `separator`, which is only inserted when
    /// both sides are non-empty. When exactly one side is text it is
    /// promoted to a single text block at its original position; an empty
    /// string promotes to nothing. Blocks are concatenated as-is.
    pub fn join(self, other: Content, separator: &str) -> Content {
        match (self, other) {
            (Content::Text(mut head), Content::Text(tail)) => {
                if !head.is_empty() && !tail.is_empty() {
                    head.push_str(separator);
                }
                head.push_str(&tail);
                Content::Text(head)
            }
            (Content::Blocks(mut head), Content::Blocks(tail)) => {
                head.extend(tail);
                Content::Blocks(head)
            }
            (Content::Text(head), Content::Blocks(tail)) => {
                Content::Blocks(promote(head).into_iter().chain(tail).collect())
            }
            (Content::Blocks(mut head), Content::Text(tail)) => {
                head.extend(promote(tail));
                Content::Blocks(head)
            }
        }
    }
}

fn promote(text: String) -> Option<ContentBlock> {
    (!text.is_empty()).then(|| ContentBlock::Text { text })
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<Vec<ContentBlock>> for Content {
    fn from(value: Vec<ContentBlock>) -> Self {
        Content::Blocks(value)
    }
}

impl TryFrom<Value> for Content {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Content::Text(text)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| block_from_value(index, item))
                .collect::<Result<Vec<_>>>()
                .map(Content::Blocks),
            other => Err(Error::content_format(format!(
                "expected a string or an array of content blocks, found {}",
                kind(&other)
            ))),
        }
    }
}

fn block_from_value(index: usize, value: Value) -> Result<ContentBlock> {
    match value {
        Value::String(text) => Ok(ContentBlock::Text { text }),
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| Error::content_format(format!("block {index}: {e}"))),
        other => Err(Error::content_format(format!(
            "block {index}: expected an object or a string, found {}",
            kind(&other)
        ))),
    }
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
