use std::sync::Arc;

use anyhow::Context;
use cbe_chat_backend::{config::AppConfig, routes, state::AppState};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if !config.gemini.is_configured() {
        tracing::warn!("GEMINI_API_KEY is not set, /chat will return service errors");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr().context("failed to read listen address")?;

    let state = Arc::new(AppState::new(config).context("failed to build HTTP client")?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .with_state(state)
        .layer(cors);

    tracing::info!("CBE chat backend running at http://{}", addr);
    tracing::info!("Chat: POST http://{}/chat", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
