//! Chat Widget Session
//!
//! Local, in-memory conversation kept by the floating chat widget. A turn is
//! split in two halves so a UI can render the visitor's message before the
//! proxy call resolves:
//!
//! 1. [`ChatSession::begin_turn`] appends the user message and yields the
//!    request to send.
//! 2. [`ChatSession::complete_turn`] appends the assistant reply, or the
//!    apology when the call failed.
//!
//! The caller owns the [`ChatTransport`] and sends the request in between, so
//! no borrow of the session is held across the await.

use async_trait::async_trait;

use crate::error::Result;
use crate::message::{ChatMessage, ChatRequest};

/// First message shown when the widget opens
pub const GREETING: &str =
    "Welcome to Agentia World! I'm your AI assistant. How can I help you today?";

/// Reply appended when the proxy could not be reached
pub const APOLOGY: &str =
    "I apologize, but I'm having trouble connecting. Please try again later.";

/// Anything able to deliver a [`ChatRequest`] to the proxy endpoint.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, request: ChatRequest) -> Result<ChatMessage>;
}

/// Why a submit was refused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnRejected {
    /// Input was empty after trimming
    Blank,
    /// A previous turn has not resolved yet
    Busy,
}

/// Whether a turn is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnState {
    #[default]
    Idle,
    Pending,
}

/// Conversation history plus the in-flight flag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    state: TurnState,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// New session opened with the greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            state: TurnState::Idle,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub const fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == TurnState::Pending
    }

    /// Append the visitor's message and build the request carrying the history.
    pub fn begin_turn(&mut self, input: &str) -> std::result::Result<ChatRequest, TurnRejected> {
        if self.is_pending() {
            return Err(TurnRejected::Busy);
        }
        let text = input.trim();
        if text.is_empty() {
            return Err(TurnRejected::Blank);
        }

        self.messages.push(ChatMessage::user(text));
        self.state = TurnState::Pending;
        Ok(ChatRequest::new(self.messages.clone()))
    }

    /// Append the outcome of the in-flight turn.
    pub fn complete_turn(&mut self, outcome: Result<ChatMessage>) {
        let reply = match outcome {
            Ok(reply) => ChatMessage::assistant(reply.content),
            Err(e) => {
                tracing::warn!("Chat turn failed: {}", e);
                ChatMessage::assistant(APOLOGY)
            }
        };
        self.messages.push(reply);
        self.state = TurnState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::AgentiaError;
    use crate::message::Role;

    struct Scripted {
        reply: Option<&'static str>,
        seen: RefCell<Vec<ChatRequest>>,
    }

    impl Scripted {
        fn answering(reply: &'static str) -> Self {
            Self {
                reply: Some(reply),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatTransport for Scripted {
        async fn send(&self, request: ChatRequest) -> Result<ChatMessage> {
            self.seen.borrow_mut().push(request);
            self.reply
                .map(ChatMessage::assistant)
                .ok_or_else(|| AgentiaError::Transport("connection refused".into()))
        }
    }

    /// One whole turn, the way the widget drives it
    async fn run_turn(
        session: &mut ChatSession,
        transport: &Scripted,
        input: &str,
    ) -> std::result::Result<(), TurnRejected> {
        let request = session.begin_turn(input)?;
        let outcome = transport.send(request).await;
        session.complete_turn(outcome);
        Ok(())
    }

    #[test]
    fn test_new_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages(), &[ChatMessage::assistant(GREETING)]);
        assert_eq!(session.state(), TurnState::Idle);
    }

    #[test]
    fn test_user_message_appended_before_resolution() {
        let mut session = ChatSession::new();
        let request = session.begin_turn("  What do you build?  ").unwrap();

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1], ChatMessage::user("What do you build?"));
        assert!(session.is_pending());
        assert_eq!(request.messages, session.messages());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(session.begin_turn("   "), Err(TurnRejected::Blank));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let mut session = ChatSession::new();
        session.begin_turn("one").unwrap();
        assert_eq!(session.begin_turn("two"), Err(TurnRejected::Busy));
        assert_eq!(session.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_successful_turn_appends_reply() {
        let transport = Scripted::answering("We build AI agents.");
        let mut session = ChatSession::new();

        run_turn(&mut session, &transport, "What do you build?").await.unwrap();

        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(session.messages()[2].content, "We build AI agents.");
        assert_eq!(session.state(), TurnState::Idle);
    }

    #[tokio::test]
    async fn test_failed_turn_appends_apology() {
        let transport = Scripted::failing();
        let mut session = ChatSession::new();

        run_turn(&mut session, &transport, "Hello?").await.unwrap();

        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2], ChatMessage::assistant(APOLOGY));
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_turns_preserve_arrival_order() {
        let transport = Scripted::answering("ack");
        let mut session = ChatSession::new();

        run_turn(&mut session, &transport, "first").await.unwrap();
        run_turn(&mut session, &transport, "second").await.unwrap();

        let contents: Vec<&str> = session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec![GREETING, "first", "ack", "second", "ack"]);

        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].latest_user_message(), Some("second"));
    }
}
