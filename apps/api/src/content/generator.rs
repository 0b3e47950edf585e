//! Content generation — runs one submission through the pipeline.
//!
//! Flow: validate → compose prompt → one generation call → post-process.
//! Validation failure returns before the generator is touched.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::content::formatting::{format_post, FormatOptions};
use crate::content::models::{GeneratedPost, RawSubmission};
use crate::content::prompts::compose_prompt;
use crate::content::validation::validate_submission;
use crate::errors::AppError;
use crate::llm_client::{GenerationParams, TextGenerator};

/// Runs the full pipeline for one submission.
///
/// Either the whole post-processed post is returned, or an error. There is
/// no partial result.
pub async fn generate_post(
    generator: &dyn TextGenerator,
    params: &GenerationParams,
    options: FormatOptions,
    raw: &RawSubmission,
) -> Result<GeneratedPost, AppError> {
    let request_id = Uuid::new_v4();

    // Step 1: Validate
    let request = validate_submission(raw).map_err(|e| {
        warn!("Submission {request_id} rejected: {e}");
        e
    })?;

    info!(
        "Generating post {request_id}: tone={}, trending_topic={}",
        request.profile.tone,
        request.trending_topic.is_some()
    );

    // Step 2: Compose
    let prompt = compose_prompt(
        &request.prompt,
        request.profile.tone.as_str(),
        &request.profile.target_audience,
        request.trending_topic.as_deref(),
    );

    // Step 3: Generate (single call, no retry)
    let raw_text = generator.generate(&prompt, params).await?;

    // Step 4: Post-process
    let content = format_post(&raw_text, options);
    info!(
        "Post {request_id} ready: {} chars (sanitized={})",
        content.chars().count(),
        options.sanitize
    );

    Ok(GeneratedPost {
        request_id,
        generated_at: Utc::now(),
        content,
    })
}
