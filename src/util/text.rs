//! Display text helpers.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Length used by page scripts that call `truncateText` without one.
pub const DEFAULT_TRUNCATE_LEN: usize = 100;

const ELLIPSIS: &str = "...";

/// Cut `text` to `max_chars` characters and append `...`.
///
/// Text at or under the limit is returned unchanged. Counting is by `char`,
/// so multi-byte text is never split inside a code point.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Upper-case the first character and leave the rest untouched.
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
