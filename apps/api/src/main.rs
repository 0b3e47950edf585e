mod config;
mod content;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::formatting::FormatOptions;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting contentgen v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generation client (API key is never logged)
    let llm = LlmClient::new(
        config.cohere_api_key.clone(),
        config.cohere_api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!(
        "Generation client initialized (endpoint: {}, model: {}, max_tokens: {}, temperature: {})",
        llm.api_url(),
        config.generation.model,
        config.generation.max_tokens,
        config.generation.temperature
    );

    if !config.sanitize_output {
        info!("Output sanitization disabled: generated markup is rendered as-is");
    }

    // Build app state
    let state = AppState {
        generator: Arc::new(llm),
        generation: config.generation.clone(),
        format: FormatOptions {
            sanitize: config.sanitize_output,
        },
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the form is served behind a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
