//! API failure reporting.
//!
//! ERROR HANDLING
//! ==============
//! Page requests fail in three ways: the server answered with an error
//! status, nothing answered, or the request could not be built. Each maps to
//! one [`ApiFailure`] variant and then to a single user-facing sentence shown
//! as an error toast. Server text is escaped before display.

#[cfg(test)]
#[path = "api_error_test.rs"]
mod api_error_test;

use serde_json::Value;

use crate::notifications::{NotificationCenter, NotificationId, Severity, ToastDom};

use super::html::escape_html;

/// Message shown when nothing more specific is known.
pub const DEFAULT_API_ERROR: &str = "An error occurred";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiFailure {
    /// The server responded with a non-success status.
    #[error("server responded with status {status}")]
    Response { status: u16, body: Option<Value> },
    /// The request went out but no response arrived.
    #[error("no response from server")]
    NoResponse,
    /// The request could not be sent.
    #[error("request setup failed: {0}")]
    Setup(String),
}

impl ApiFailure {
    /// `error` field of a JSON response body, when it carries text.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        let Self::Response { body: Some(body), .. } = self else {
            return None;
        };
        body.get("error")
            .and_then(Value::as_str)
            .filter(|msg| !msg.is_empty())
    }
}

/// Resolve the sentence shown for `failure`.
///
/// Precedence: the body's `error` field, then well-known statuses, then the
/// transport condition, then `fallback`.
#[must_use]
pub fn api_error_message(failure: &ApiFailure, fallback: &str) -> String {
    if let Some(msg) = failure.server_message() {
        return msg.to_owned();
    }
    match failure {
        ApiFailure::Response { status: 404, .. } => "Service not found".to_owned(),
        ApiFailure::Response { status: 500, .. } => "Internal server error".to_owned(),
        ApiFailure::NoResponse => "No response from server".to_owned(),
        ApiFailure::Setup(msg) if !msg.is_empty() => msg.clone(),
        _ => fallback.to_owned(),
    }
}

/// Log `failure` and raise an error toast describing it.
pub fn handle_api_error<D: ToastDom + 'static>(
    center: &NotificationCenter<D>,
    failure: &ApiFailure,
    fallback: &str,
) -> NotificationId {
    leptos::logging::error!("API error: {failure:?}");
    let message = api_error_message(failure, fallback);
    center.notify(&escape_html(&message), Severity::Error)
}
