//! Agentia World HTTP Server
//!
//! Axum router serving the chat proxy, a health probe, and the built WASM
//! frontend.

pub mod config;
pub mod handlers;
pub mod state;

use std::path::Path;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{chat_handler, health_check};
pub use crate::config::ServerConfig;
pub use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(chat_handler))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
