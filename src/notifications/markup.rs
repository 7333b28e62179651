//! Toast element markup.
//!
//! The message is inserted verbatim so callers can pass trusted markup;
//! untrusted text must go through `util::html::escape_html` first.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use super::model::Severity;

/// Selector of the close button inside a rendered toast.
pub const CLOSE_BUTTON_SELECTOR: &str = ".btn-close";

/// Render one toast as a Bootstrap-compatible fragment.
#[must_use]
pub fn render_toast(dom_id: &str, severity: Severity, message: &str) -> String {
    format!(
        concat!(
            "<div id=\"{id}\" class=\"toast toast-{kind}\" role=\"alert\" aria-live=\"assertive\" aria-atomic=\"true\">",
            "<div class=\"toast-header\">",
            "<i class=\"{icon}\"></i>",
            "<strong class=\"me-auto ms-2\">{label}</strong>",
            "<button type=\"button\" class=\"btn-close\" aria-label=\"Close\"></button>",
            "</div>",
            "<div class=\"toast-body\">{message}</div>",
            "</div>",
        ),
        id = dom_id,
        kind = severity.as_str(),
        icon = severity.icon_class(),
        label = severity.label(),
        message = message,
    )
}
