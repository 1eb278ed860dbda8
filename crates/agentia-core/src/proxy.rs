//! Chat Proxy
//!
//! Turns a raw `/api/chat` body into exactly one assistant reply. Every failure
//! along the way (unreadable body, no user turn, upstream trouble) collapses
//! into a fixed reply; nothing here ever yields an error to the HTTP layer.

use crate::error::AgentiaError;
use crate::message::{ChatMessage, ChatRequest};
use crate::provider::{GenerationOptions, TextGenerator};

/// Reply used whenever the request or the upstream call fails
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble processing your request. Please try again later.";

/// Reply used when the upstream succeeds but produces no text
pub const EMPTY_COMPLETION_REPLY: &str = "I'm here to help. What would you like to know?";

/// Forward the latest user message to `generator` and normalize the outcome.
pub async fn relay_chat(
    generator: &dyn TextGenerator,
    options: &GenerationOptions,
    body: &[u8],
) -> ChatMessage {
    match try_relay(generator, options, body).await {
        Ok(content) => ChatMessage::assistant(content),
        Err(AgentiaError::EmptyCompletion) => {
            tracing::debug!("Upstream returned no text; using idle reply");
            ChatMessage::assistant(EMPTY_COMPLETION_REPLY)
        }
        Err(e) => {
            tracing::warn!("Chat relay failed: {}", e);
            ChatMessage::assistant(FALLBACK_REPLY)
        }
    }
}

async fn try_relay(
    generator: &dyn TextGenerator,
    options: &GenerationOptions,
    body: &[u8],
) -> crate::Result<String> {
    let request: ChatRequest = serde_json::from_slice(body)?;
    let prompt = request
        .latest_user_message()
        .ok_or_else(|| AgentiaError::InvalidRequest("no user message in history".into()))?;

    let text = generator.generate(prompt, options).await?;
    if text.trim().is_empty() {
        return Err(AgentiaError::EmptyCompletion);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::message::Role;
    use crate::provider::GeneratorInfo;

    /// Generator returning a canned outcome and recording the prompts it saw
    struct Canned {
        outcome: fn() -> crate::Result<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(outcome: fn() -> crate::Result<String>) -> Self {
            Self {
                outcome,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for Canned {
        fn info(&self) -> GeneratorInfo {
            GeneratorInfo {
                name: "canned".into(),
                model: "none".into(),
            }
        }

        async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> crate::Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.outcome)()
        }
    }

    fn body(json: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&json).unwrap()
    }

    #[tokio::test]
    async fn test_relays_generated_text() {
        let generator = Canned::new(|| Ok("Hello".into()));
        let reply = relay_chat(
            &generator,
            &GenerationOptions::default(),
            &body(serde_json::json!({"messages": [{"role": "user", "content": "Hi"}]})),
        )
        .await;

        assert_eq!(reply, ChatMessage::assistant("Hello"));
        assert_eq!(*generator.prompts.lock().unwrap(), vec!["Hi".to_string()]);
    }

    #[tokio::test]
    async fn test_forwards_only_latest_user_message() {
        let generator = Canned::new(|| Ok("ok".into()));
        relay_chat(
            &generator,
            &GenerationOptions::default(),
            &body(serde_json::json!({"messages": [
                {"role": "assistant", "content": "Welcome!"},
                {"role": "user", "content": "older"},
                {"role": "assistant", "content": "answer"},
                {"role": "user", "content": "newest"},
            ]})),
        )
        .await;

        assert_eq!(*generator.prompts.lock().unwrap(), vec!["newest".to_string()]);
    }

    #[tokio::test]
    async fn test_upstream_error_becomes_fallback() {
        let generator = Canned::new(|| Err(AgentiaError::Upstream("Model is loading".into())));
        let reply = relay_chat(
            &generator,
            &GenerationOptions::default(),
            &body(serde_json::json!({"messages": [{"role": "user", "content": "Hi"}]})),
        )
        .await;

        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_blank_completion_uses_idle_reply() {
        let generator = Canned::new(|| Ok("   ".into()));
        let reply = relay_chat(
            &generator,
            &GenerationOptions::default(),
            &body(serde_json::json!({"messages": [{"role": "user", "content": "Hi"}]})),
        )
        .await;

        assert_eq!(reply.content, EMPTY_COMPLETION_REPLY);
    }

    #[tokio::test]
    async fn test_unreadable_body_never_reaches_upstream() {
        let generator = Canned::new(|| Ok("unused".into()));
        let reply = relay_chat(&generator, &GenerationOptions::default(), b"not json").await;

        assert_eq!(reply.content, FALLBACK_REPLY);
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_without_user_turn_is_fallback() {
        let generator = Canned::new(|| Ok("unused".into()));
        let reply = relay_chat(
            &generator,
            &GenerationOptions::default(),
            &body(serde_json::json!({"messages": [{"role": "assistant", "content": "Welcome!"}]})),
        )
        .await;

        assert_eq!(reply.content, FALLBACK_REPLY);
        assert!(generator.prompts.lock().unwrap().is_empty());
    }
}
