use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Content, Role, ToolCall, Usage};

/// One turn of a conversation.
///
/// The role is fixed at construction; everything else can be adjusted with
/// the generated setters. Deserialization accepts the same loose shapes as
/// `Message::try_from(Value)`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
#[serde(rename_all = "snake_case", try_from = "Value")]
pub struct Message {
    #[setters(skip)]
    role: Role,
    #[serde(default)]
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Opaque provider data, carried through untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<Content>) -> Self {
        Self {
            role,
            content: content.into(),
            name: None,
            id: None,
            tool_call_id: None,
            tool_calls: Vec::new(),
            usage: None,
            metadata: Map::new(),
        }
    }

    pub fn system(content: impl Into<Content>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn human(content: impl Into<Content>) -> Self {
        Self::new(Role::Human, content)
    }

    pub fn ai(content: impl Into<Content>) -> Self {
        Self::new(Role::Ai, content)
    }

    pub fn tool(content: impl Into<Content>, tool_call_id: impl ToString) -> Self {
        Self::new(Role::Tool, content).tool_call_id(tool_call_id.to_string())
    }

    pub fn generic(tag: impl ToString, content: impl Into<Content>) -> Self {
        Self::new(Role::generic(tag), content)
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn has_role(&self, role: &Role) -> bool {
        &self.role == role
    }

    /// Folds a later message of the same run into this one.
    ///
    /// Content is joined; tool calls and usage are combined when the role
    /// allows it. Every other field keeps the value of the first message.
    pub(crate) fn absorb(&mut self, other: Message, separator: &str) {
        let content = std::mem::take(&mut self.content);
        self.content = content.join(other.content, separator);

        let combination = self.role.combination();
        if combination.tool_calls {
            self.tool_calls.extend(other.tool_calls);
        }
        if combination.usage {
            self.usage = match (self.usage.take(), other.usage) {
                (Some(head), Some(tail)) => Some(head + tail),
                (head, tail) => head.or(tail),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{ContentBlock, Error};

    #[test]
    fn test_tool_constructor_sets_call_id() {
        let actual = Message::tool("42", "call_1");
        assert_eq!(actual.role(), &Role::Tool);
        assert_eq!(actual.tool_call_id.as_deref(), Some("call_1"));
    }

    #[test]
    fn test_absorb_ai_combines_tool_calls_and_usage() {
        let mut fixture = Message::ai("a")
            .tool_calls(vec![ToolCall::new("search")])
            .usage(Usage::new(10, 2));
        let other = Message::ai("b")
            .tool_calls(vec![ToolCall::new("fetch")])
            .usage(Usage::new(4, 1));

        fixture.absorb(other, "\n");

        let expected = Message::ai("a\nb")
            .tool_calls(vec![ToolCall::new("search"), ToolCall::new("fetch")])
            .usage(Usage::new(14, 3));
        assert_eq!(fixture, expected);
    }

    #[test]
    fn test_absorb_usage_treats_missing_as_zero() {
        let mut fixture = Message::ai("a");
        fixture.absorb(Message::ai("b").usage(Usage::new(1, 1)), "\n");
        assert_eq!(fixture.usage, Some(Usage::new(1, 1)));
    }

    #[test]
    fn test_absorb_keeps_first_message_fields() {
        let mut fixture = Message::tool("first", "call_1").name("calculator");
        fixture
            .metadata
            .insert("source".to_string(), json!("first"));
        let mut other = Message::tool("second", "call_2").name("other");
        other.metadata.insert("source".to_string(), json!("second"));
        other.tool_calls.push(ToolCall::new("ignored"));

        fixture.absorb(other, "\n");

        assert_eq!(fixture.content, Content::from("first\nsecond"));
        assert_eq!(fixture.name.as_deref(), Some("calculator"));
        assert_eq!(fixture.tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(fixture.metadata.get("source"), Some(&json!("first")));
        assert_eq!(fixture.tool_calls, Vec::<ToolCall>::new());
    }

    #[test]
    fn test_serializes_without_empty_fields() {
        let fixture = Message::human(vec![ContentBlock::text("hi")]);
        let actual = serde_json::to_value(fixture).unwrap();
        let expected = json!({"role": "human", "content": [{"type": "text", "text": "hi"}]});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_deserialize_reports_content_format() {
        let actual =
            serde_json::from_value::<Message>(json!({"role": "human", "content": 42})).unwrap_err();
        let expected = Error::content_format(
            "expected a string or an array of content blocks, found a number",
        );
        assert_eq!(actual.to_string(), expected.to_string());
    }

    #[test]
    fn test_deserialize_reads_serialized_message() {
        let fixture = Message::ai(vec![ContentBlock::text("hi")])
            .id("msg_1")
            .tool_calls(vec![ToolCall::new("search").id("call_1")])
            .usage(Usage::new(3, 1));
        let actual: Message =
            serde_json::from_value(serde_json::to_value(&fixture).unwrap()).unwrap();
        assert_eq!(actual, fixture);
    }
}
