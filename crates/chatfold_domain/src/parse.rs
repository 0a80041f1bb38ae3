use serde_json::{Map, Value};

use crate::content::kind;
use crate::{Content, Error, Message, Result, Role, ToolCall, Usage};

/// Converts loosely shaped JSON into a [`Message`].
///
/// Accepted shapes:
/// - `{"role": "...", "content": ...}` (`type` is accepted in place of
///   `role`); keys that are not message fields end up in `metadata`
/// - `["role", content]`
/// - `"text"`, read as a human message
impl TryFrom<Value> for Message {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Message::human(text)),
            Value::Array(pair) => from_pair(pair),
            Value::Object(object) => from_object(object),
            other => Err(Error::message_format(format!(
                "expected an object, a [role, content] pair or a string, found {}",
                kind(&other)
            ))),
        }
    }
}

/// Parses every value before returning, so a malformed element anywhere in
/// the input yields an error and no messages.
pub fn parse_messages(values: impl IntoIterator<Item = Value>) -> Result<Vec<Message>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| Message::try_from(value).map_err(|e| e.at_position(index)))
        .collect()
}

fn from_pair(pair: Vec<Value>) -> Result<Message> {
    let [role, content]: [Value; 2] = pair.try_into().map_err(|pair: Vec<Value>| {
        Error::message_format(format!(
            "expected a [role, content] pair, found {} elements",
            pair.len()
        ))
    })?;

    let role = match role {
        Value::String(role) => Role::try_from(role)?,
        other => {
            return Err(Error::message_format(format!(
                "role must be a string, found {}",
                kind(&other)
            )));
        }
    };

    Ok(Message::new(role, Content::try_from(content)?))
}

fn from_object(mut object: Map<String, Value>) -> Result<Message> {
    let role = match take_string(&mut object, "role")? {
        Some(role) => {
            // `type` only names the role when `role` is absent
            object.remove("type");
            role
        }
        None => take_string(&mut object, "type")?
            .ok_or_else(|| Error::message_format("missing `role`"))?,
    };
    let role = Role::try_from(role)?;

    let content = object
        .remove("content")
        .ok_or_else(|| Error::content_format("missing `content`"))
        .and_then(Content::try_from)?;

    let mut message = Message::new(role, content);
    message.name = take_string(&mut object, "name")?;
    message.id = take_string(&mut object, "id")?;
    message.tool_call_id = take_string(&mut object, "tool_call_id")?;

    if let Some(tool_calls) = object.remove("tool_calls") {
        message.tool_calls = serde_json::from_value::<Vec<ToolCall>>(tool_calls)
            .map_err(|e| Error::message_format(format!("`tool_calls`: {e}")))?;
    }

    if let Some(usage) = object.remove("usage") {
        message.usage = serde_json::from_value::<Option<Usage>>(usage)
            .map_err(|e| Error::message_format(format!("`usage`: {e}")))?;
    }

    match object.remove("metadata") {
        Some(Value::Object(metadata)) => message.metadata = metadata,
        Some(Value::Null) | None => {}
        Some(other) => {
            return Err(Error::message_format(format!(
                "`metadata` must be an object, found {}",
                kind(&other)
            )));
        }
    }

    for (key, value) in object {
        message.metadata.entry(key).or_insert(value);
    }

    Ok(message)
}

fn take_string(object: &mut Map<String, Value>, key: &str) -> Result<Option<String>> {
    match object.remove(key) {
        Some(Value::String(value)) => Ok(Some(value)),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(Error::message_format(format!(
            "`{key}` must be a string, found {}",
            kind(&other)
        ))),
    }
}
