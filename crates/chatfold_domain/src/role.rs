use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::Error;

/// Sender category of a message.
///
/// Parsing accepts the common aliases (`user`, `assistant`) and is case
/// insensitive. Any other non-empty tag becomes [`Role::Generic`], which
/// keeps the tag verbatim and compares equal only to the same tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Role {
    #[strum(serialize = "system")]
    #[display("system")]
    System,
    #[strum(serialize = "human", serialize = "user")]
    #[display("human")]
    Human,
    #[strum(serialize = "ai", serialize = "assistant")]
    #[display("ai")]
    Ai,
    #[strum(serialize = "tool")]
    #[display("tool")]
    Tool,
    #[strum(default)]
    #[display("{_0}")]
    Generic(String),
}

/// Auxiliary message fields that are combined across a run instead of being
/// taken from its first message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Combination {
    /// Tool calls of later messages are appended.
    pub tool_calls: bool,
    /// Token usage of later messages is summed.
    pub usage: bool,
}

impl Role {
    pub fn generic(tag: impl ToString) -> Self {
        Role::Generic(tag.to_string())
    }

    /// Parses a role tag, rejecting blank tags.
    pub fn parse(value: &str) -> crate::Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::message_format("role must not be empty"));
        }
        Role::from_str(value).map_err(|e| Error::message_format(format!("{value}: {e}")))
    }

    /// Per-role table of combinable fields. Only model replies carry tool
    /// calls and usage that belong together; every other role keeps the
    /// values of the first message in a run.
    pub fn combination(&self) -> Combination {
        match self {
            Role::Ai => Combination { tool_calls: true, usage: true },
            Role::System | Role::Human | Role::Tool | Role::Generic(_) => Combination::default(),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.to_string()
    }
}

impl TryFrom<String> for Role {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parses_aliases() {
        let fixture = ["system", "user", "Human", "assistant", "AI", "tool"];
        let actual: Vec<Role> = fixture
            .iter()
            .map(|tag| Role::parse(tag).unwrap())
            .collect();
        let expected = vec![
            Role::System,
            Role::Human,
            Role::Human,
            Role::Ai,
            Role::Ai,
            Role::Tool,
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_unknown_tag_is_generic() {
        let actual = Role::parse("critic").unwrap();
        let expected = Role::generic("critic");
        assert_eq!(actual, expected);
        assert_eq!(actual.to_string(), "critic");
    }

    #[test]
    fn test_generic_roles_compare_by_tag() {
        assert_eq!(Role::generic("critic"), Role::generic("critic"));
        assert_ne!(Role::generic("critic"), Role::generic("editor"));
    }

    #[test]
    fn test_empty_role_is_rejected() {
        let actual = Role::parse("  ");
        assert!(matches!(actual, Err(Error::MessageFormat { .. })));
    }

    #[test]
    fn test_serde_uses_canonical_tag() {
        let actual = serde_json::to_value(Role::Ai).unwrap();
        assert_eq!(actual, serde_json::json!("ai"));

        let actual: Role = serde_json::from_value(serde_json::json!("assistant")).unwrap();
        assert_eq!(actual, Role::Ai);
    }

    #[test]
    fn test_only_ai_combines_fields() {
        assert_eq!(
            Role::Ai.combination(),
            Combination { tool_calls: true, usage: true }
        );
        assert_eq!(Role::Tool.combination(), Combination::default());
        assert_eq!(Role::generic("critic").combination(), Combination::default());
    }
}
