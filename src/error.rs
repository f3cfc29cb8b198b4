// src/error.rs
use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::gemini::GeminiError;

pub const SERVICE_ERROR_DETAIL: &str = "AI service error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("AI service error: {0}")]
    Service(#[from] GeminiError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// `Json` extractor whose rejections use the `{"detail": ...}` error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Service(err) => {
                tracing::error!(error = %err, "Chat request failed upstream");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVICE_ERROR_DETAIL.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
