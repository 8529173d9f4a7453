use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_LENGTH: usize = 160;

static BOT_TOKEN_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/bot[^/]+/").expect("bot token pattern must compile"));

/// Sanitizes a source URL for safe logging: query and fragment are dropped and
/// `/bot<token>/` path segments are masked.
pub fn sanitize_url(url: &str) -> String {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let without_query = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
    let redacted = BOT_TOKEN_SEGMENT.replace(without_query, "/bot[REDACTED]/");

    let total_chars = redacted.chars().count();
    if total_chars > MAX_VISIBLE_LENGTH {
        let visible: String = redacted.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        redacted.into_owned()
    }
}
