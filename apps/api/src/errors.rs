use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::validation::ValidationErrors;
use crate::llm_client::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Single user-facing message; never includes upstream bodies or credentials.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Input validation failed. Please correct the errors below.",
            AppError::InvalidBody(_) => "Request body is not a valid content submission.",
            AppError::Generation(GenerationError::Unauthorized { .. }) => {
                "Content generation failed: the generation service rejected its credentials."
            }
            AppError::Generation(GenerationError::RateLimited { .. }) => {
                "Content generation failed: the generation service quota was exceeded. Try again later."
            }
            AppError::Generation(_) => "Content generation failed. Please try again.",
            AppError::Internal(_) => "An internal server error occurred",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.user_message();
        let (status, body) = match &self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": message,
                        "details": errors.errors,
                    }
                }),
            ),
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                json!({
                    "error": {
                        "code": "INVALID_BODY",
                        "message": message,
                        "details": rejection.body_text(),
                    }
                }),
            ),
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": { "code": "GENERATION_ERROR", "message": message } }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": { "code": "INTERNAL_ERROR", "message": message } }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
