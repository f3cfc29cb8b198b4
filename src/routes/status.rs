use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

pub const ENDPOINTS: [&str; 4] = ["/", "/health", "/chat", "/debug"];

#[derive(Debug, Serialize, Deserialize)]
pub struct RootStatus {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DebugInfo {
    pub gemini_api_configured: bool,
    pub gemini_api_key_length: usize,
    pub endpoints: Vec<String>,
    pub cors_enabled: bool,
}

pub async fn root_handler() -> Json<RootStatus> {
    Json(RootStatus {
        message: "CBE Chat API is running".to_string(),
        status: "active".to_string(),
    })
}

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

// Reports whether a key is present, never the key itself.
pub async fn debug_handler(State(state): State<SharedState>) -> Json<DebugInfo> {
    let gemini = state.gemini.config();
    Json(DebugInfo {
        gemini_api_configured: gemini.is_configured(),
        gemini_api_key_length: gemini.api_key.len(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        cors_enabled: true,
    })
}
