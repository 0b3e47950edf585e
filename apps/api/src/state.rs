use std::sync::Arc;

use crate::content::formatting::FormatOptions;
use crate::llm_client::{GenerationParams, TextGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `LlmClient` in production, a stub in tests.
    pub generator: Arc<dyn TextGenerator>,
    /// Model parameters sent with every generation call.
    pub generation: GenerationParams,
    pub format: FormatOptions,
}
