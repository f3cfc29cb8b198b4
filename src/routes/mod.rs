// src/routes/mod.rs
pub mod chat;
pub mod status;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use status::{debug_handler, health_handler, root_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/debug", get(debug_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}
