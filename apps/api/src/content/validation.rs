//! Submission validation. All-or-nothing: either every field passes and a
//! `ContentRequest` is built, or every failing field is reported.

use serde::Serialize;
use thiserror::Error;

use crate::content::models::{ContentRequest, Profile, RawSubmission, Tone};

pub const REASON_MISSING: &str = "required field missing";
pub const REASON_NOT_ALLOWED: &str = "value not in allowed set";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} invalid field(s): {}", .errors.len(), field_list(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[cfg(test)]
    pub fn names(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn field_list(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.field).collect::<Vec<_>>().join(", ")
}

/// Validates a raw submission. Accepted values are kept verbatim.
pub fn validate_submission(raw: &RawSubmission) -> Result<ContentRequest, ValidationErrors> {
    let mut errors = Vec::new();

    let name = required("name", &raw.name, &mut errors);
    let industry = required("industry", &raw.industry, &mut errors);
    let tone = parse_tone(&raw.tone, &mut errors);
    let target_audience = required("target_audience", &raw.target_audience, &mut errors);
    let prompt = required("prompt", &raw.prompt, &mut errors);

    match (name, industry, tone, target_audience, prompt) {
        (Some(name), Some(industry), Some(tone), Some(target_audience), Some(prompt))
            if errors.is_empty() =>
        {
            Ok(ContentRequest {
                prompt,
                trending_topic: raw.trending_topic.clone().filter(|t| !t.is_empty()),
                profile: Profile {
                    name,
                    industry,
                    tone,
                    target_audience,
                },
            })
        }
        _ => Err(ValidationErrors { errors }),
    }
}

/// Absent or empty. Whitespace-only values are accepted as given.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn required(
    field: &'static str,
    value: &Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if is_blank(value) {
        errors.push(FieldError {
            field,
            reason: REASON_MISSING,
        });
        return None;
    }
    value.clone()
}

fn parse_tone(value: &Option<String>, errors: &mut Vec<FieldError>) -> Option<Tone> {
    if is_blank(value) {
        errors.push(FieldError {
            field: "tone",
            reason: REASON_MISSING,
        });
        return None;
    }
    let parsed = value.as_deref().and_then(|v| v.parse::<Tone>().ok());
    if parsed.is_none() {
        errors.push(FieldError {
            field: "tone",
            reason: REASON_NOT_ALLOWED,
        });
    }
    parsed
}
