//! Server-rendered form page. Everything the user typed is escaped on the
//! way back out; the generated post is inserted as markup.

use crate::content::formatting::escape_html;
use crate::content::models::{GeneratedPost, RawSubmission, Tone};
use crate::content::validation::ValidationErrors;

pub const DEFAULT_PROMPT: &str = "Generate content for a new business idea or product.";
pub const DEFAULT_TRENDING_TOPIC: &str = "#BusinessGrowth";

/// What to show under the form.
#[derive(Debug)]
pub enum PageOutcome {
    Blank,
    Post(GeneratedPost),
    Invalid {
        message: &'static str,
        errors: ValidationErrors,
    },
    Failed(&'static str),
}

/// Initial form values, matching what a first-time visitor sees.
pub fn default_form() -> RawSubmission {
    RawSubmission {
        tone: Some(Tone::Professional.as_str().to_string()),
        prompt: Some(DEFAULT_PROMPT.to_string()),
        trending_topic: Some(DEFAULT_TRENDING_TOPIC.to_string()),
        ..Default::default()
    }
}

pub fn render_page(values: &RawSubmission, outcome: &PageOutcome) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>LinkedIn Content Generator</title>
<style>
body {{ font-family: sans-serif; max-width: 46rem; margin: 2rem auto; }}
label {{ display: block; margin-top: .75rem; }}
input, select, textarea {{ width: 100%; }}
.post {{ white-space: pre-wrap; border: 1px solid #ccc; padding: 1rem; margin-top: 1.5rem; }}
.error {{ color: #a00; margin-top: 1.5rem; }}
</style>
</head>
<body>
<h1>LinkedIn Content Generator</h1>
<form method="post" action="/generate">
<h2>Input SME Profile</h2>
<label>Name of SME or Content Creator<input name="name" value="{name}"></label>
<label>Industry or Niche<input name="industry" value="{industry}"></label>
<label>Tone of Content<select name="tone">{tone_options}</select></label>
<label>Target Audience Description<input name="target_audience" value="{target_audience}"></label>
<h2>Content Details</h2>
<label>Content Prompt<textarea name="prompt" rows="4">{prompt}</textarea></label>
<label>Trending Topic (Optional)<input name="trending_topic" value="{trending_topic}"></label>
<p><button type="submit">Generate Content</button></p>
</form>
{outcome}
</body>
</html>
"#,
        name = field(&values.name),
        industry = field(&values.industry),
        tone_options = tone_options(values.tone.as_deref()),
        target_audience = field(&values.target_audience),
        prompt = field(&values.prompt),
        trending_topic = field(&values.trending_topic),
        outcome = render_outcome(outcome),
    )
}

fn field(value: &Option<String>) -> String {
    escape_html(value.as_deref().unwrap_or_default())
}

fn tone_options(selected: Option<&str>) -> String {
    Tone::ALL
        .iter()
        .map(|tone| {
            let name = tone.as_str();
            let marker = if selected == Some(name) { " selected" } else { "" };
            format!(r#"<option value="{name}"{marker}>{name}</option>"#)
        })
        .collect()
}

fn render_outcome(outcome: &PageOutcome) -> String {
    match outcome {
        PageOutcome::Blank => String::new(),
        PageOutcome::Post(post) => format!(r#"<div class="post">{}</div>"#, post.content),
        PageOutcome::Invalid { message, errors } => {
            let details = serde_json::to_string_pretty(&errors.errors).unwrap_or_default();
            format!(
                r#"<div class="error"><p>{}</p><pre>{}</pre></div>"#,
                escape_html(message),
                escape_html(&details)
            )
        }
        PageOutcome::Failed(message) => {
            format!(r#"<div class="error"><p>{}</p></div>"#, escape_html(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::validation::{FieldError, REASON_MISSING};
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_default_form_prefills_prompt_and_topic() {
        let html = render_page(&default_form(), &PageOutcome::Blank);
        assert!(html.contains(DEFAULT_PROMPT));
        assert!(html.contains(r##"value="#BusinessGrowth""##));
        assert!(html.contains(r#"<option value="Professional" selected>"#));
        for tone in Tone::ALL {
            assert!(html.contains(&format!(">{}</option>", tone.as_str())));
        }
    }

    #[test]
    fn test_submitted_values_are_escaped() {
        let values = RawSubmission {
            name: Some(r#""><script>x</script>"#.to_string()),
            ..Default::default()
        };
        let html = render_page(&values, &PageOutcome::Blank);
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_post_content_rendered_as_markup() {
        let post = GeneratedPost {
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            content: "<b>Growth:</b>\nStay strong.".to_string(),
        };
        let html = render_page(&default_form(), &PageOutcome::Post(post));
        assert!(html.contains(r#"<div class="post"><b>Growth:</b>"#));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_validation_errors_listed_without_post() {
        let outcome = PageOutcome::Invalid {
            message: "Input validation failed. Please correct the errors below.",
            errors: ValidationErrors {
                errors: vec![FieldError {
                    field: "industry",
                    reason: REASON_MISSING,
                }],
            },
        };
        let html = render_page(&RawSubmission::default(), &outcome);
        assert!(html.contains("Input validation failed."));
        assert!(html.contains("industry"));
        assert!(html.contains(REASON_MISSING));
        assert!(!html.contains(r#"class="post""#));
    }
}
