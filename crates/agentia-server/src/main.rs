//! Agentia World server binary

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agentia_runtime::HuggingFaceGenerator;
use agentia_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if config.huggingface.access_token.is_none() {
        tracing::warn!("⚠ HF_ACCESS_TOKEN not set - chat replies will fall back");
    }

    let generator = Arc::new(HuggingFaceGenerator::from_config(config.huggingface.clone()));
    tracing::info!("✓ Text generation via {}", config.huggingface.model_url);

    let state = AppState {
        generator,
        generation: config.generation.clone(),
    };

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "⚠ Static directory {} missing - run `trunk build` in crates/agentia-web",
            config.static_dir.display()
        );
    }

    let app = router(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Agentia World running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health   - Health check");
    tracing::info!("  POST /api/chat - Chat proxy");
    tracing::info!("  GET  /*        - Site ({})", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
