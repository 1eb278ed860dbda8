//! HTTP Handlers

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::State,
};
use serde::Serialize;

use agentia_core::{ChatMessage, GeneratorInfo, proxy};

/// Largest chat body read before answering with the fallback reply
pub const MAX_CHAT_BODY_BYTES: usize = 16 * 1024 * 1024;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub generator: GeneratorInfo,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        generator: state.generator.info(),
    })
}

/// Chat proxy endpoint.
///
/// Reads the raw body itself so that neither unreadable JSON nor an oversized
/// history turns into an extractor rejection: both get the fallback with a 200.
pub async fn chat_handler(State(state): State<AppState>, body: Body) -> Json<ChatMessage> {
    let bytes = match to_bytes(body, MAX_CHAT_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Chat body unreadable: {}", e);
            return Json(ChatMessage::assistant(proxy::FALLBACK_REPLY));
        }
    };

    let reply = proxy::relay_chat(state.generator.as_ref(), &state.generation, &bytes).await;
    Json(reply)
}
