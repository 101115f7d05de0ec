use std::fmt;

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The player.
    User,
    /// The narrator or character replying to the player.
    Assistant,
    /// Framing text injected by the application.
    System,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        };
        write!(f, "{s}")
    }
}

/// A single entry in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a message with the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a player message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a narrator message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// Find the most recent message not written by the player.
pub fn last_non_user(history: &[ChatMessage]) -> Option<&ChatMessage> {
    history.iter().rev().find(|m| m.role != Role::User)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_non_user_skips_trailing_user_messages() {
        let history = vec![
            ChatMessage::system("intro"),
            ChatMessage::assistant("Thread X"),
            ChatMessage::user("go north"),
        ];
        assert_eq!(last_non_user(&history).map(|m| m.content.as_str()), Some("Thread X"));
    }

    #[test]
    fn last_non_user_accepts_system_messages() {
        let history = vec![ChatMessage::assistant("old"), ChatMessage::system("new")];
        assert_eq!(last_non_user(&history).map(|m| m.role), Some(Role::System));
    }

    #[test]
    fn last_non_user_empty_or_only_user() {
        assert!(last_non_user(&[]).is_none());
        assert!(last_non_user(&[ChatMessage::user("hi")]).is_none());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("hello")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hello"}"#);
        let back: ChatMessage = serde_json::from_str(r#"{"role":"system","content":"x"}"#).unwrap();
        assert_eq!(back.role, Role::System);
    }
}
