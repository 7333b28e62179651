//! HTML escaping for text placed into markup.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Escape `&`, `<`, `>`, `"` and `'` so `text` renders literally in element
/// content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize `text` the way a browser serializes a text node's content.
///
/// Only `&`, `<`, `>` and no-break spaces are replaced; quotes pass through,
/// so the result is safe in element content but not in attributes.
#[must_use]
pub fn sanitize_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}
