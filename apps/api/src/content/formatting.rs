//! Post-processing of generated text: optional HTML escaping, header
//! emphasis, then the fixed hashtag block.
//!
//! Header detection is a line heuristic, not a parser. A line that happens
//! to be all upper-case (an acronym on its own line, a shouted sentence) is
//! wrapped too. That matches the observable behavior users already rely on.

/// Appended to every post, regardless of topic.
pub const HASHTAGS: &str =
    "#Innovation #Growth #BusinessSuccess #Marketing #BrandAwareness #ContentCreation";

/// Separator placed between the post body and `HASHTAGS`.
pub const HASHTAG_SEPARATOR: &str = "\n\n";

/// Options for the post-processing pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Escape HTML in the generated text before adding emphasis markup.
    pub sanitize: bool,
}

/// Runs the full post-processing pass over raw generated text.
pub fn format_post(raw: &str, options: FormatOptions) -> String {
    let body = if options.sanitize {
        emphasize_headers(&escape_html(raw))
    } else {
        emphasize_headers(raw)
    };
    append_hashtags(&body)
}

/// Wraps header-like lines in `<b>` tags. Line count and order are preserved.
pub fn emphasize_headers(content: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            if is_header(line) {
                format!("<b>{line}</b>")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_header(line: &str) -> bool {
    line.trim().ends_with(':') || is_all_upper(line)
}

/// True when the line has at least one upper-case character and none are
/// lower-case or titlecase.
fn is_all_upper(line: &str) -> bool {
    line.chars().any(char::is_uppercase)
        && !line.chars().any(|c| c.is_lowercase() || is_titlecase(c))
}

/// Unicode general category Lt. `char` has no predicate for it.
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

pub fn append_hashtags(content: &str) -> String {
    format!("{content}{HASHTAG_SEPARATOR}{HASHTAGS}")
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
