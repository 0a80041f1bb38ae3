use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool invocation requested by a model reply.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
#[serde(rename_all = "snake_case")]
pub struct ToolCall {
    /// NOTE: Not every provider assigns call ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl ToString) -> Self {
        Self { id: None, name: name.to_string(), arguments: Value::default() }
    }
}
