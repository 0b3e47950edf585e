use std::fmt;

use anyhow::{bail, Context, Result};

use crate::llm_client::{GenerationParams, DEFAULT_API_URL};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Clone)]
pub struct Config {
    pub cohere_api_key: String,
    pub cohere_api_url: String,
    pub generation: GenerationParams,
    pub request_timeout_secs: u64,
    /// HTML-escape generated text before header emphasis.
    pub sanitize_output: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let temperature = optional_env("GENERATION_TEMPERATURE", "0.7")
            .parse::<f32>()
            .context("GENERATION_TEMPERATURE must be a number")?;
        if !(0.0..=5.0).contains(&temperature) {
            bail!("GENERATION_TEMPERATURE must be between 0.0 and 5.0, got {temperature}");
        }

        Ok(Config {
            cohere_api_key: require_env("COHERE_API_KEY")?,
            cohere_api_url: optional_env("COHERE_API_URL", DEFAULT_API_URL),
            generation: GenerationParams {
                model: optional_env("GENERATION_MODEL", "command-xlarge"),
                max_tokens: optional_env("GENERATION_MAX_TOKENS", "150")
                    .parse::<u32>()
                    .context("GENERATION_MAX_TOKENS must be a positive integer")?,
                temperature,
            },
            request_timeout_secs: optional_env("GENERATION_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            sanitize_output: parse_bool(&optional_env("SANITIZE_OUTPUT", "false"))
                .context("SANITIZE_OUTPUT must be true or false")?,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

// Keeps the API key out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("cohere_api_key", &"<redacted>")
            .field("cohere_api_url", &self.cohere_api_url)
            .field("generation", &self.generation)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("sanitize_output", &self.sanitize_output)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognised boolean '{other}'"),
    }
}
