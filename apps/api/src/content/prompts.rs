// Prompt template for LinkedIn post generation.
// Field values are substituted verbatim; nothing is escaped.

/// Fixed stylistic instruction appended to every prompt.
pub const STYLE_INSTRUCTION: &str = "Include **bold text** only for headers \
    (e.g., **Product Launch**), relevant emojis (like 🎯, 🚀), and symbols where appropriate.\n\
    Make it concise, engaging, and provide a clear call to action (CTA).";

/// Builds the generation prompt. A non-empty `trending_topic` adds exactly
/// one trailing line.
pub fn compose_prompt(
    prompt: &str,
    tone: &str,
    audience: &str,
    trending_topic: Option<&str>,
) -> String {
    let mut full_prompt = format!(
        "Generate a LinkedIn post with the following details:\n\n\
        Prompt: {prompt}\n\
        Tone: {tone}\n\
        Audience: {audience}\n\
        {STYLE_INSTRUCTION}"
    );

    if let Some(topic) = trending_topic.filter(|t| !t.is_empty()) {
        full_prompt.push_str("\nTrending Topic: ");
        full_prompt.push_str(topic);
    }

    full_prompt
}
