//! Toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`NotificationCenter`] owns the toast lifecycle; it renders through a
//! [`ToastDom`] and defers through a `Timer`, so the same code runs against
//! the page (`hydrate`) and against [`MemoryDom`] in tests.

pub mod center;
pub mod config;
pub mod context;
pub mod dom;
pub mod markup;
pub mod memory_dom;
pub mod model;

#[cfg(feature = "hydrate")]
pub mod browser_dom;

pub use center::NotificationCenter;
pub use config::{ConfigError, ToastConfig};
pub use dom::{ToastDom, ToastHandlers};
pub use memory_dom::MemoryDom;
pub use model::{NotificationId, Severity, ToastPhase};
pub use context::{Toasts, provide_notifications, use_notifications, use_toast};
