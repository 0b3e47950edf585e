/// LLM Client — the single point of entry for text-generation API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Cohere API directly.
/// Everything goes through the `TextGenerator` trait, which `LlmClient`
/// implements and tests replace with a stub.
///
/// One call per submission. There is deliberately no retry loop here:
/// a failure surfaces to the user as a single error.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.cohere.ai/v1/generate";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("generation service rejected the credentials (status {status})")]
    Unauthorized { status: u16 },

    #[error("generation service rate limit or quota exceeded: {message}")]
    RateLimited { message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Model parameters owned by the caller and passed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "command-xlarge".to_string(),
            max_tokens: 150,
            temperature: 0.7,
        }
    }
}

/// The generation boundary. Implement this to swap backends without
/// touching the pipeline or handlers.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the first candidate's text, trimmed.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Cohere `generate` client. Connection parameters are fixed at construction.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_url,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        let request_body = GenerateRequest {
            model: &params.model,
            prompt,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        let text = first_generation(&body)?;
        debug!(
            "Generation succeeded: model={}, chars={}",
            params.model,
            text.chars().count()
        );
        Ok(text)
    }
}

/// Maps a non-2xx response to the matching `GenerationError`.
fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    // Try to parse error message
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Unauthorized {
            status: status.as_u16(),
        },
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited { message },
        _ => GenerationError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Extracts and trims the first candidate from a successful response body.
fn first_generation(body: &str) -> Result<String, GenerationError> {
    let parsed: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    parsed
        .generations
        .into_iter()
        .next()
        .map(|g| g.text.trim().to_string())
        .ok_or_else(|| GenerationError::MalformedResponse("no generations returned".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_generation_takes_first_candidate_trimmed() {
        let body = r#"{"id":"abc","generations":[{"id":"1","text":"  Growth:\nStay strong.\n "},{"id":"2","text":"second"}]}"#;
        assert_eq!(first_generation(body).unwrap(), "Growth:\nStay strong.");
    }

    #[test]
    fn test_first_generation_empty_list_is_malformed() {
        let err = first_generation(r#"{"generations":[]}"#).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn test_first_generation_bad_json_is_malformed() {
        let err = first_generation("<html>gateway</html>").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn test_classify_unauthorized() {
        let err = classify_failure(StatusCode::UNAUTHORIZED, r#"{"message":"invalid api token"}"#);
        assert!(matches!(err, GenerationError::Unauthorized { status: 401 }));
    }

    #[test]
    fn test_classify_rate_limited_keeps_message() {
        let err = classify_failure(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"message":"trial key limit reached"}"#,
        );
        match err {
            GenerationError::RateLimited { message } => {
                assert_eq!(message, "trial key limit reached")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_other_status_falls_back_to_raw_body() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, "upstream down");
        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_params_match_service_constants() {
        let params = GenerationParams::default();
        assert_eq!(params.model, "command-xlarge");
        assert_eq!(params.max_tokens, 150);
        assert!((params.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_request_body_shape() {
        let params = GenerationParams::default();
        let body = GenerateRequest {
            model: &params.model,
            prompt: "hello",
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "command-xlarge");
        assert_eq!(value["prompt"], "hello");
        assert_eq!(value["max_tokens"], 150);
    }
}
