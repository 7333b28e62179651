//! Shape of the `window.AppUtils` object page templates call into.
//!
//! `bindings` installs one function per member at module start; the list is
//! kept here so it builds and tests without a browser.

#[cfg(test)]
#[path = "app_utils_test.rs"]
mod app_utils_test;

/// Global the helpers are installed under.
pub const APP_UTILS_GLOBAL: &str = "AppUtils";

/// Member names, in the order templates have always seen them.
pub const APP_UTILS_MEMBERS: [&str; 13] = [
    "formatFileSize",
    "validateFileType",
    "previewImage",
    "showToast",
    "handleApiError",
    "debounce",
    "throttle",
    "getCsrfToken",
    "sanitizeHtml",
    "escapeHtml",
    "truncateText",
    "capitalizeFirst",
    "generateRandomString",
];
