//! Toast notification center.
//!
//! DESIGN
//! ======
//! `NotificationCenter` is a cheap clonable handle over `Rc<RefCell<..>>`
//! state: one lazily created container, the live toasts in display order, and
//! the DOM/timer collaborators. DOM listeners and timer callbacks hold a
//! `Weak` reference and re-enter through state methods that are all
//! idempotent, so late, duplicate, or racing events become no-ops.
//!
//! TRADE-OFFS
//! ==========
//! `notify` never schedules a timer; auto-dismiss is the separate
//! `notify_with_timeout` policy. The pending timer handle is kept on the toast
//! so an earlier dismissal cancels it, and the timer callback is itself a
//! guarded dismiss in case cancellation loses a race.

#[cfg(test)]
#[path = "center_test.rs"]
mod center_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::timing::{Timer, TimerHandle};

use super::config::ToastConfig;
use super::dom::{ToastDom, ToastHandlers};
use super::markup::render_toast;
use super::model::{NotificationId, Severity, ToastPhase};

/// Displays toasts and guarantees their cleanup.
pub struct NotificationCenter<D: ToastDom + 'static> {
    inner: Rc<RefCell<CenterInner<D>>>,
}

impl<D: ToastDom + 'static> Clone for NotificationCenter<D> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

struct CenterInner<D: ToastDom> {
    dom: D,
    timer: Rc<dyn Timer>,
    config: ToastConfig,
    container: Option<D::Node>,
    /// Live toasts, oldest first (matches document order).
    toasts: Vec<ToastEntry<D>>,
}

struct ToastEntry<D: ToastDom> {
    id: NotificationId,
    severity: Severity,
    phase: ToastPhase,
    node: D::Node,
    binding: Option<D::Binding>,
    timer: Option<TimerHandle>,
}

impl<D: ToastDom + 'static> NotificationCenter<D> {
    pub fn new(dom: D, timer: Rc<dyn Timer>) -> Self {
        Self::with_config(dom, timer, ToastConfig::default())
    }

    pub fn with_config(dom: D, timer: Rc<dyn Timer>, config: ToastConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CenterInner {
                dom,
                timer,
                config,
                container: None,
                toasts: Vec::new(),
            })),
        }
    }

    /// Show `message` with the given severity.
    ///
    /// `message` is inserted as markup without escaping. New toasts are
    /// appended after existing ones. The returned id stays valid for
    /// [`NotificationCenter::dismiss`] until the toast is removed.
    pub fn notify(&self, message: &str, severity: Severity) -> NotificationId {
        let id = NotificationId::next();
        let handlers = handlers_for(Rc::downgrade(&self.inner), id);
        let shown = self.inner.borrow_mut().insert(id, message, severity, handlers);
        if !shown {
            leptos::logging::warn!("toast {} could not be displayed", id.sequence());
        }
        id
    }

    /// Show `message` using a page-supplied kind string (`"success"`, ...).
    pub fn notify_kind(&self, message: &str, kind: &str) -> NotificationId {
        self.notify(message, Severity::from_kind(kind))
    }

    /// Show `message` and dismiss it automatically after `delay`.
    pub fn notify_with_timeout(&self, message: &str, severity: Severity, delay: Duration) -> NotificationId {
        let id = self.notify(message, severity);
        let timer = Rc::clone(&self.inner.borrow().timer);
        let weak = Rc::downgrade(&self.inner);
        let handle = timer.schedule(
            delay,
            Box::new(move || {
                with_inner(&weak, |inner| inner.timeout_elapsed(id));
            }),
        );
        self.inner.borrow_mut().attach_timer(id, handle);
        id
    }

    /// Show `message` and dismiss it after the configured default delay.
    pub fn notify_auto(&self, message: &str, severity: Severity) -> NotificationId {
        let delay = self.inner.borrow().config.auto_dismiss();
        self.notify_with_timeout(message, severity, delay)
    }

    /// Request dismissal. Returns `false` if the toast is already hiding or gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.inner.borrow_mut().dismiss(id)
    }

    /// Request dismissal of every visible toast. Returns how many started hiding.
    pub fn dismiss_all(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        let ids = inner.toasts.iter().map(|t| t.id).collect::<Vec<_>>();
        ids.into_iter().filter(|id| inner.dismiss(*id)).count()
    }

    /// Finish the hide transition: remove the element and release its listeners.
    ///
    /// Normally driven by the DOM's hidden event; safe to call again.
    pub fn complete_hide(&self, id: NotificationId) -> bool {
        self.inner.borrow_mut().complete_hide(id)
    }

    #[must_use]
    pub fn phase(&self, id: NotificationId) -> ToastPhase {
        self.inner
            .borrow()
            .toasts
            .iter()
            .find(|t| t.id == id)
            .map_or(ToastPhase::Removed, |t| t.phase)
    }

    #[must_use]
    pub fn severity(&self, id: NotificationId) -> Option<Severity> {
        self.inner
            .borrow()
            .toasts
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.severity)
    }

    /// Ids of live toasts in display order.
    #[must_use]
    pub fn live_ids(&self) -> Vec<NotificationId> {
        self.inner.borrow().toasts.iter().map(|t| t.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().toasts.is_empty()
    }

    #[must_use]
    pub fn has_container(&self) -> bool {
        self.inner.borrow().container.is_some()
    }

    /// Element id the toast `id` was rendered with.
    #[must_use]
    pub fn dom_id(&self, id: NotificationId) -> String {
        id.dom_id(&self.inner.borrow().config.id_prefix)
    }
}

impl<D: ToastDom> CenterInner<D> {
    /// Return the cached container, else the page's, else a new one.
    fn ensure_container(&mut self) -> Option<D::Node> {
        if let Some(container) = &self.container {
            return Some(container.clone());
        }
        // Another center (or the server render) may already have mounted one.
        let container = match self.dom.find_container(&self.config.container_id) {
            Some(existing) => existing,
            None => self
                .dom
                .create_container(&self.config.container_id, &self.config.container_class)?,
        };
        self.container = Some(container.clone());
        Some(container)
    }

    fn insert(&mut self, id: NotificationId, message: &str, severity: Severity, handlers: ToastHandlers) -> bool {
        let Some(container) = self.ensure_container() else {
            return false;
        };
        let dom_id = id.dom_id(&self.config.id_prefix);
        let markup = render_toast(&dom_id, severity, message);
        let node = match self.dom.append_toast(&container, &dom_id, &markup) {
            Some(node) => node,
            None => {
                // The page may have replaced the cached container; look it up again once.
                self.container = None;
                let Some(container) = self.ensure_container() else {
                    return false;
                };
                let Some(node) = self.dom.append_toast(&container, &dom_id, &markup) else {
                    return false;
                };
                node
            }
        };

        let mut entry = ToastEntry {
            id,
            severity,
            phase: ToastPhase::Created,
            node,
            binding: None,
            timer: None,
        };
        self.dom.show(&entry.node);
        entry.phase = ToastPhase::Shown;
        entry.binding = Some(self.dom.bind(&entry.node, handlers));
        self.toasts.push(entry);
        true
    }

    fn attach_timer(&mut self, id: NotificationId, handle: TimerHandle) {
        match self
            .toasts
            .iter_mut()
            .find(|t| t.id == id && t.phase == ToastPhase::Shown)
        {
            Some(entry) => {
                if let Some(previous) = entry.timer.replace(handle) {
                    self.timer.cancel(previous);
                }
            }
            None => {
                self.timer.cancel(handle);
            }
        }
    }

    fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(entry) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if entry.phase != ToastPhase::Shown {
            return false;
        }
        entry.phase = ToastPhase::Hiding;
        if let Some(handle) = entry.timer.take() {
            self.timer.cancel(handle);
        }
        self.dom.hide(&entry.node);
        true
    }

    fn timeout_elapsed(&mut self, id: NotificationId) -> bool {
        // The handle already fired; forget it so dismiss does not cancel it.
        if let Some(entry) = self.toasts.iter_mut().find(|t| t.id == id) {
            entry.timer = None;
        }
        self.dismiss(id)
    }

    fn complete_hide(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.toasts.iter().position(|t| t.id == id) else {
            return false;
        };
        let mut entry = self.toasts.remove(pos);
        if let Some(binding) = entry.binding.take() {
            self.dom.unbind(&entry.node, binding);
        }
        if let Some(handle) = entry.timer.take() {
            self.timer.cancel(handle);
        }
        self.dom.remove(&entry.node);
        true
    }
}

// =============================================================================
// CALLBACK PLUMBING
// =============================================================================

fn handlers_for<D: ToastDom + 'static>(weak: Weak<RefCell<CenterInner<D>>>, id: NotificationId) -> ToastHandlers {
    let dismiss_ref = weak.clone();
    ToastHandlers {
        on_dismiss: Rc::new(move || {
            with_inner(&dismiss_ref, |inner| inner.dismiss(id));
        }),
        on_hidden: Rc::new(move || {
            with_inner(&weak, |inner| inner.complete_hide(id));
        }),
    }
}

/// Run `f` against live center state; dropped centers and re-entrant events
/// are ignored.
fn with_inner<D: ToastDom, R>(
    weak: &Weak<RefCell<CenterInner<D>>>,
    f: impl FnOnce(&mut CenterInner<D>) -> R,
) -> Option<R> {
    let inner = weak.upgrade()?;
    let Ok(mut guard) = inner.try_borrow_mut() else {
        leptos::logging::warn!("notification center busy; dropping toast event");
        return None;
    };
    Some(f(&mut guard))
}
