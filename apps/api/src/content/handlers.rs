//! Axum route handlers for content generation.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Form, Json,
};

use crate::content::generator::generate_post;
use crate::content::models::{GeneratedPost, RawSubmission};
use crate::content::page::{default_form, render_page, PageOutcome};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/content/generate
///
/// JSON API: validates, generates and post-processes one post.
/// Bodies that fail to deserialize get the same error envelope as validation failures.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<RawSubmission>, JsonRejection>,
) -> Result<Json<GeneratedPost>, AppError> {
    let Json(submission) = payload?;
    let post = generate_post(
        state.generator.as_ref(),
        &state.generation,
        state.format,
        &submission,
    )
    .await?;

    Ok(Json(post))
}

/// GET /
pub async fn handle_form_page() -> Html<String> {
    Html(render_page(&default_form(), &PageOutcome::Blank))
}

/// POST /generate
///
/// Form submission. Re-renders the page with either the post or the errors.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(submission): Form<RawSubmission>,
) -> impl IntoResponse {
    let result = generate_post(
        state.generator.as_ref(),
        &state.generation,
        state.format,
        &submission,
    )
    .await;

    let (status, outcome) = match result {
        Ok(post) => (StatusCode::OK, PageOutcome::Post(post)),
        Err(err) => {
            let message = err.user_message();
            match err {
                AppError::Validation(errors) => (
                    StatusCode::BAD_REQUEST,
                    PageOutcome::Invalid { message, errors },
                ),
                // Form bodies never produce a JSON rejection.
                AppError::InvalidBody(_) => {
                    (StatusCode::BAD_REQUEST, PageOutcome::Failed(message))
                }
                AppError::Generation(e) => {
                    tracing::error!("Generation error: {e}");
                    (StatusCode::BAD_GATEWAY, PageOutcome::Failed(message))
                }
                AppError::Internal(e) => {
                    tracing::error!("Internal error: {e:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        PageOutcome::Failed(message),
                    )
                }
            }
        }
    };

    (status, Html(render_page(&submission, &outcome)))
}
