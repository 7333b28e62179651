//! DOM-like environment the notification center renders into.
//!
//! DESIGN
//! ======
//! The center only needs a handful of element operations, so they sit behind
//! [`ToastDom`]. `MemoryDom` implements it for tests and headless use;
//! `BrowserDom` implements it over `web-sys` in the `hydrate` build.

use std::rc::Rc;

/// Callbacks a toast element forwards to the center.
#[derive(Clone)]
pub struct ToastHandlers {
    /// User pressed the close button.
    pub on_dismiss: Rc<dyn Fn()>,
    /// Hide transition finished.
    pub on_hidden: Rc<dyn Fn()>,
}

/// Element operations needed to display toasts.
///
/// Implementations must deliver handler callbacks asynchronously (from the
/// event loop or a test driver), never from inside one of these methods.
pub trait ToastDom {
    /// Element handle.
    type Node: Clone;
    /// Listener registration for one toast; released by [`ToastDom::unbind`].
    type Binding;

    /// Query the page for an element with `id`.
    fn find_container(&self, id: &str) -> Option<Self::Node>;

    /// Create the container element and mount it on the page.
    fn create_container(&mut self, id: &str, class: &str) -> Option<Self::Node>;

    /// Append toast `markup` as the last child of `container`.
    fn append_toast(&mut self, container: &Self::Node, dom_id: &str, markup: &str) -> Option<Self::Node>;

    /// Start the show transition.
    fn show(&mut self, toast: &Self::Node);

    /// Start the hide transition; `on_hidden` fires once it completes.
    fn hide(&mut self, toast: &Self::Node);

    /// Detach the element from the page.
    fn remove(&mut self, toast: &Self::Node);

    /// Register the close-button and hidden-transition listeners.
    fn bind(&mut self, toast: &Self::Node, handlers: ToastHandlers) -> Self::Binding;

    /// Unregister everything [`ToastDom::bind`] registered.
    fn unbind(&mut self, toast: &Self::Node, binding: Self::Binding);
}
