pub const PREVIEW_CHAR_LIMIT: usize = 2024;
const ELLIPSIS: &str = "...";

/// Inline excerpt of a transcript, counted in characters rather than bytes.
pub fn build_preview(transcript: &str) -> String {
    match transcript.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        None => transcript.to_string(),
        Some((cut, _)) => format!("{}{}", &transcript[..cut], ELLIPSIS),
    }
}
