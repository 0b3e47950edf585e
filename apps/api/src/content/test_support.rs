//! Shared fixtures for pipeline and handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::content::models::RawSubmission;
use crate::llm_client::{GenerationError, GenerationParams, TextGenerator};

/// `TextGenerator` stand-in that records every call.
pub struct StubGenerator {
    reply: Result<String, fn() -> GenerationError>,
    calls: AtomicUsize,
    last: Mutex<Option<(String, GenerationParams)>>,
}

impl StubGenerator {
    pub fn returning(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(make_error: fn() -> GenerationError) -> Self {
        Self::with_reply(Err(make_error))
    }

    fn with_reply(reply: Result<String, fn() -> GenerationError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last.lock().unwrap().as_ref().map(|(p, _)| p.clone())
    }

    pub fn last_params(&self) -> Option<GenerationParams> {
        self.last.lock().unwrap().as_ref().map(|(_, p)| p.clone())
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((prompt.to_string(), params.clone()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}

pub fn jane_submission() -> RawSubmission {
    RawSubmission {
        name: Some("Jane".to_string()),
        industry: Some("Fitness".to_string()),
        tone: Some("Inspiring".to_string()),
        target_audience: Some("young professionals".to_string()),
        prompt: Some("new year fitness challenge".to_string()),
        trending_topic: Some(String::new()),
    }
}
