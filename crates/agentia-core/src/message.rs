//! Chat Messages
//!
//! Wire format shared by the chat widget and the `/api/chat` proxy.
//!
//! The request body is always `{"messages": [...]}` carrying the widget's full
//! local history; the proxy answers with a single [`ChatMessage`] whose role is
//! `assistant`.

use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Visitor input
    User,
    /// Reply from the site's assistant
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in a conversation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Body of `POST /api/chat`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Content of the most recent user message, if any
    pub fn latest_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_value(ChatMessage::assistant("Hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "Hi"}));
    }

    #[test]
    fn test_latest_user_message_skips_trailing_assistant() {
        let request = ChatRequest::new(vec![
            ChatMessage::assistant("Welcome!"),
            ChatMessage::user("first"),
            ChatMessage::assistant("reply"),
            ChatMessage::user("second"),
            ChatMessage::assistant("stray"),
        ]);
        assert_eq!(request.latest_user_message(), Some("second"));
    }

    #[test]
    fn test_missing_messages_field_is_empty_history() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.latest_user_message().is_none());
    }
}
