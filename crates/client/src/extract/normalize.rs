//! Normalization of extraction-service output.
//!
//! The service returns the page text with the source document's blank
//! lines and padding intact; normalization reduces it to the dense form
//! the cache stores.

/// Normalize extracted text.
///
/// When `ascii_only` is set, characters outside ASCII are dropped first
/// (lossy coercion kept for compatibility with caches written by older
/// tooling). Lines that are empty or whitespace-only after that step are
/// discarded, and the rest are rejoined with `\n`. The operation is
/// idempotent.
pub fn clean_text(text: &str, ascii_only: bool) -> String {
    let coerced: std::borrow::Cow<'_, str> = if ascii_only {
        text.chars().filter(char::is_ascii).collect::<String>().into()
    } else {
        text.into()
    };

    coerced
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
