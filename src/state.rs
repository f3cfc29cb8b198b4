// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: AppConfig,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> reqwest::Result<Self> {
        let gemini = GeminiClient::new(config.gemini.clone())?;
        Ok(Self { config, gemini })
    }
}
