//! Page-wide notification center and its Leptos hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page scripts (through `bindings`) and Leptos components must share one
//! center so they share one container and one id sequence. The center lives
//! in a thread-local `OnceCell`, initialized on first use. Components reach
//! it through [`use_notifications`].

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

#[cfg(feature = "hydrate")]
use std::cell::OnceCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use super::browser_dom::BrowserDom;
#[cfg(feature = "hydrate")]
use super::center::NotificationCenter;
#[cfg(feature = "hydrate")]
use super::config::ToastConfig;
use super::model::{NotificationId, Severity};
#[cfg(feature = "hydrate")]
use crate::timing::GlooTimer;

#[cfg(feature = "hydrate")]
pub type PageCenter = NotificationCenter<BrowserDom>;

#[cfg(feature = "hydrate")]
thread_local! {
    static PAGE_CENTER: OnceCell<PageCenter> = const { OnceCell::new() };
}

/// The page's notification center, created on first call.
#[cfg(feature = "hydrate")]
pub fn page_center() -> PageCenter {
    PAGE_CENTER.with(|cell| {
        cell.get_or_init(|| {
            let config = ToastConfig::load();
            let dom = BrowserDom::new(config.hide_fade());
            NotificationCenter::with_config(dom, Rc::new(GlooTimer::new()), config)
        })
        .clone()
    })
}

/// Callback raising a toast on the page center.
///
/// Without `hydrate` the toast is only logged and a fresh id is returned.
pub fn use_toast() -> Callback<(String, Severity), NotificationId> {
    Callback::new(|(message, severity): (String, Severity)| {
        #[cfg(feature = "hydrate")]
        {
            page_center().notify(&message, severity)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("[{severity}] {message}");
            NotificationId::next()
        }
    })
}

/// Toast handle shared with components through Leptos context.
///
/// The center itself is `!Send`, so context carries this `Copy` wrapper
/// around a callback that reaches the thread-local page center.
#[derive(Clone, Copy)]
pub struct Toasts {
    notify: Callback<(String, Severity), NotificationId>,
}

impl Toasts {
    #[must_use]
    pub fn new(notify: Callback<(String, Severity), NotificationId>) -> Self {
        Self { notify }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notify.run((message.into(), severity))
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Error)
    }
}

/// Provide [`Toasts`] for descendants of the current owner.
pub fn provide_notifications() -> Toasts {
    let toasts = Toasts::new(use_toast());
    provide_context(toasts);
    toasts
}

/// [`Toasts`] from context, or a page-center handle when none was provided.
pub fn use_notifications() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(|| Toasts::new(use_toast()))
}
