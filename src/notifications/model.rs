//! Toast identity, severity, and lifecycle phase.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a toast, issued from a process-wide counter.
///
/// Wall-clock time is never part of the id, so two toasts raised within the
/// same millisecond still get distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }

    /// Element id used in the page, e.g. `toast-12`.
    #[must_use]
    pub fn dom_id(self, prefix: &str) -> String {
        format!("{prefix}{}", self.0)
    }
}

/// Message classification driving the toast's icon and label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Parse a page-supplied kind string. Unknown kinds fall back to `Info`.
    #[must_use]
    pub fn from_kind(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Header label shown next to the icon.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }

    /// Font Awesome icon plus Bootstrap text color.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Info => "fas fa-info-circle text-info",
            Self::Success => "fas fa-check-circle text-success",
            Self::Error => "fas fa-exclamation-circle text-danger",
        }
    }
}

impl From<&str> for Severity {
    fn from(kind: &str) -> Self {
        Self::from_kind(kind)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a single toast.
///
/// `Created → Shown → Hiding → Removed`. `Removed` is terminal and is also
/// reported for ids the center no longer tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted into the container, not yet shown.
    Created,
    /// Visible and dismissible.
    Shown,
    /// Dismissal requested; waiting for the hide transition to finish.
    Hiding,
    /// Element destroyed and listeners released.
    Removed,
}
