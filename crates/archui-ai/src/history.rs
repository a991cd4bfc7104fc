//! Conversation history assembled from streamed chunks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chunk::ToolCall;

/// Speaker of a history entry.
///
/// Roles outside the four the UI knows about are kept verbatim in `Other`
/// so they still open their own entry and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
            Role::Other(name) => name,
        }
    }

    pub fn is_assistant(&self) -> bool {
        *self == Role::Assistant
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "tool" => Role::Tool,
            _ => Role::Other(name),
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the conversation.
///
/// `content` stays `None` until a chunk carries a content fragment, so
/// tool-call-only turns serialize without a `content` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl HistoryEntry {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            model: None,
            content: None,
            tool_calls: None,
        }
    }

    pub fn with_content(role: Role, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::new(role)
        }
    }
}

/// Ordered, append-only conversation log. Owned by the caller.
pub type History = Vec<HistoryEntry>;

/// Content of the most recent assistant turn, if any.
pub fn assistant_text(history: &[HistoryEntry]) -> Option<&str> {
    history
        .iter()
        .rev()
        .find(|entry| entry.role.is_assistant())
        .and_then(|entry| entry.content.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let role: Role = serde_json::from_str("\"tool\"").unwrap();
        assert_eq!(role, Role::Tool);
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn unknown_roles_are_kept_verbatim() {
        let role: Role = serde_json::from_str("\"developer\"").unwrap();
        assert_eq!(role, Role::Other("developer".into()));
        assert!(!role.is_assistant());
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"developer\"");
        assert_eq!(Role::from("function").as_str(), "function");
    }

    #[test]
    fn seed_entry_omits_unset_fields() {
        let entry = HistoryEntry::with_content(Role::User, "hello");
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({"role": "user", "content": "hello"})
        );
    }

    #[test]
    fn assistant_text_picks_latest_assistant_turn() {
        let history = vec![
            HistoryEntry::with_content(Role::User, "hi"),
            HistoryEntry::with_content(Role::Assistant, "first"),
            HistoryEntry::with_content(Role::Tool, "{}"),
            HistoryEntry::with_content(Role::Assistant, "second"),
            HistoryEntry::new(Role::User),
        ];
        assert_eq!(assistant_text(&history), Some("second"));
        assert_eq!(assistant_text(&history[..1]), None);
    }
}
