use axum::{
    extract::State,
    Json,
};
use chrono::Utc;

use crate::{
    error::{AppError, AppJson},
    message::{ChatRequest, ChatResponse},
    services::prompt::{Language, build_prompt, preview},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.message.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    tracing::info!(
        message = %preview(trimmed, 50),
        language = %payload.language,
        "Received chat request"
    );

    let language = Language::from_code(&payload.language);
    let prompt = build_prompt(language, trimmed);

    let reply = state.gemini.generate(&prompt).await?;
    tracing::info!(chars = reply.chars().count(), "Got Gemini response");

    Ok(Json(ChatResponse {
        response: reply,
        timestamp: Utc::now(),
    }))
}
