//! [`ToastDom`] over the real page via `web-sys`.
//!
//! The hide transition is CSS driven (`.toast` without `.show` fades out);
//! after the configured fade a `hidden.bs.toast` event is dispatched on the
//! element, which is the single completion signal the center listens for.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event};

use super::dom::{ToastDom, ToastHandlers};
use super::markup::CLOSE_BUTTON_SELECTOR;

/// Event fired on a toast element when its hide transition completes.
pub const HIDDEN_EVENT: &str = "hidden.bs.toast";

const SHOW_CLASS: &str = "show";

pub struct BrowserDom {
    document: Option<Document>,
    hide_fade: Duration,
}

impl BrowserDom {
    #[must_use]
    pub fn new(hide_fade: Duration) -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
            hide_fade,
        }
    }
}

/// Listeners bound to one toast; dropping it unregisters them.
pub struct BrowserBinding {
    target: Element,
    close_button: Option<Element>,
    on_hidden: Closure<dyn FnMut(Event)>,
    on_close: Closure<dyn FnMut(Event)>,
}

impl Drop for BrowserBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(HIDDEN_EVENT, self.on_hidden.as_ref().unchecked_ref());
        if let Some(button) = &self.close_button {
            let _ = button.remove_event_listener_with_callback("click", self.on_close.as_ref().unchecked_ref());
        }
    }
}

impl ToastDom for BrowserDom {
    type Node = Element;
    type Binding = BrowserBinding;

    fn find_container(&self, id: &str) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(id)
    }

    fn create_container(&mut self, id: &str, class: &str) -> Option<Element> {
        let document = self.document.as_ref()?;
        let container = document.create_element("div").ok()?;
        container.set_id(id);
        container.set_class_name(class);
        if let Err(e) = document.body()?.append_child(&container) {
            log::warn!("toast container mount failed: {e:?}");
            return None;
        }
        Some(container)
    }

    fn append_toast(&mut self, container: &Element, dom_id: &str, markup: &str) -> Option<Element> {
        if let Err(e) = container.insert_adjacent_html("beforeend", markup) {
            log::warn!("toast insert failed: {e:?}");
            return None;
        }
        self.document.as_ref()?.get_element_by_id(dom_id)
    }

    fn show(&mut self, toast: &Element) {
        let _ = toast.class_list().add_1(SHOW_CLASS);
    }

    fn hide(&mut self, toast: &Element) {
        let _ = toast.class_list().remove_1(SHOW_CLASS);
        let target = toast.clone();
        let fade_ms = u32::try_from(self.hide_fade.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(fade_ms, move || {
            if let Ok(event) = Event::new(HIDDEN_EVENT) {
                let _ = target.dispatch_event(&event);
            }
        })
        .forget();
    }

    fn remove(&mut self, toast: &Element) {
        toast.remove();
    }

    fn bind(&mut self, toast: &Element, handlers: ToastHandlers) -> BrowserBinding {
        let ToastHandlers { on_dismiss, on_hidden } = handlers;

        let on_hidden = Closure::wrap(Box::new(move |_ev: Event| on_hidden()) as Box<dyn FnMut(Event)>);
        let _ = toast.add_event_listener_with_callback(HIDDEN_EVENT, on_hidden.as_ref().unchecked_ref());

        let on_close = Closure::wrap(Box::new(move |_ev: Event| on_dismiss()) as Box<dyn FnMut(Event)>);
        let close_button = toast.query_selector(CLOSE_BUTTON_SELECTOR).ok().flatten();
        if let Some(button) = &close_button {
            let _ = button.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
        }

        BrowserBinding { target: toast.clone(), close_button, on_hidden, on_close }
    }

    fn unbind(&mut self, _toast: &Element, binding: BrowserBinding) {
        drop(binding);
    }
}
