pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower::limit::GlobalConcurrencyLimitLayer;

use crate::content::handlers;
use crate::state::AppState;

/// Submissions are processed one at a time across all submission routes.
const MAX_CONCURRENT_SUBMISSIONS: usize = 1;

pub fn build_router(state: AppState) -> Router {
    let submissions = Router::new()
        .route("/generate", post(handlers::handle_form_submit))
        .route("/api/v1/content/generate", post(handlers::handle_generate))
        .layer(GlobalConcurrencyLimitLayer::new(MAX_CONCURRENT_SUBMISSIONS));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_form_page))
        .merge(submissions)
        .with_state(state)
}
