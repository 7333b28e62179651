//! In-memory [`ToastDom`] with test-driver hooks.
//!
//! Clones share one element tree, so a test keeps a handle while the center
//! owns another and then plays user clicks and transition ends through it.

#[cfg(test)]
#[path = "memory_dom_test.rs"]
mod memory_dom_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::dom::{ToastDom, ToastHandlers};

/// Element handle inside a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoryNode(usize);

/// Listener registration inside a [`MemoryDom`].
#[derive(Debug)]
pub struct MemoryBinding(u64);

/// Shared, single-threaded element tree.
#[derive(Clone, Default)]
pub struct MemoryDom {
    state: Rc<RefCell<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    next_node: usize,
    next_binding: u64,
    containers_created: usize,
    toasts_created: usize,
    elements: HashMap<usize, MemoryElement>,
    bindings: HashMap<u64, (usize, ToastHandlers)>,
}

struct MemoryElement {
    dom_id: String,
    class: String,
    markup: String,
    children: Vec<usize>,
    parent: Option<usize>,
    visible: bool,
    hiding: bool,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page that already contains a server-rendered container.
    #[must_use]
    pub fn with_container(id: &str, class: &str) -> Self {
        let dom = Self::new();
        dom.state.borrow_mut().insert(id, class, String::new(), None);
        dom
    }

    /// Containers created through [`ToastDom::create_container`].
    #[must_use]
    pub fn containers_created(&self) -> usize {
        self.state.borrow().containers_created
    }

    /// Toast elements ever appended.
    #[must_use]
    pub fn toasts_created(&self) -> usize {
        self.state.borrow().toasts_created
    }

    /// Child element ids of the container `container_id`, in document order.
    #[must_use]
    pub fn children_of(&self, container_id: &str) -> Vec<String> {
        let state = self.state.borrow();
        state
            .find(container_id)
            .and_then(|key| state.elements.get(&key))
            .map(|container| {
                container
                    .children
                    .iter()
                    .filter_map(|child| state.elements.get(child))
                    .map(|child| child.dom_id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, dom_id: &str) -> bool {
        self.state.borrow().find(dom_id).is_some()
    }

    #[must_use]
    pub fn is_visible(&self, dom_id: &str) -> bool {
        let state = self.state.borrow();
        state
            .find(dom_id)
            .and_then(|key| state.elements.get(&key))
            .is_some_and(|el| el.visible)
    }

    #[must_use]
    pub fn class_of(&self, dom_id: &str) -> Option<String> {
        let state = self.state.borrow();
        let key = state.find(dom_id)?;
        state.elements.get(&key).map(|el| el.class.clone())
    }

    #[must_use]
    pub fn markup_of(&self, dom_id: &str) -> Option<String> {
        let state = self.state.borrow();
        let key = state.find(dom_id)?;
        state.elements.get(&key).map(|el| el.markup.clone())
    }

    /// Toasts with registered listeners (close click and hidden event each).
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.state.borrow().bindings.len()
    }

    /// Detach `dom_id` and its subtree, as a page re-render would.
    pub fn detach(&self, dom_id: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(key) = state.find(dom_id) else {
            return false;
        };
        state.remove_subtree(key);
        true
    }

    /// Simulate a click on the toast's close button.
    ///
    /// Returns `false` when nothing is listening.
    pub fn click_close(&self, dom_id: &str) -> bool {
        // Handlers are cloned out so no borrow is held while the center runs.
        let Some(handlers) = self.handlers_for(dom_id) else {
            return false;
        };
        (handlers.on_dismiss)();
        true
    }

    /// Fire the hidden event on `dom_id`, whether or not it was hiding.
    pub fn fire_hidden(&self, dom_id: &str) -> bool {
        let Some(handlers) = self.handlers_for(dom_id) else {
            return false;
        };
        (handlers.on_hidden)();
        true
    }

    /// Complete every pending hide transition.
    ///
    /// Returns the number of hidden events delivered.
    pub fn finish_transitions(&self) -> usize {
        let pending = {
            let state = self.state.borrow();
            let mut hiding = state
                .bindings
                .iter()
                .filter(|(_, (node, _))| state.elements.get(node).is_some_and(|el| el.hiding))
                .map(|(binding, (_, handlers))| (*binding, Rc::clone(&handlers.on_hidden)))
                .collect::<Vec<_>>();
            hiding.sort_by_key(|(binding, _)| *binding);
            hiding
        };
        for (_, run) in &pending {
            run();
        }
        pending.len()
    }

    fn handlers_for(&self, dom_id: &str) -> Option<ToastHandlers> {
        let state = self.state.borrow();
        let node = state.find(dom_id)?;
        state
            .bindings
            .values()
            .find(|(bound, _)| *bound == node)
            .map(|(_, handlers)| handlers.clone())
    }
}

impl MemoryState {
    fn insert(&mut self, dom_id: &str, class: &str, markup: String, parent: Option<usize>) -> usize {
        let key = self.next_node;
        self.next_node += 1;
        self.elements.insert(
            key,
            MemoryElement {
                dom_id: dom_id.to_owned(),
                class: class.to_owned(),
                markup,
                children: Vec::new(),
                parent,
                visible: false,
                hiding: false,
            },
        );
        if let Some(parent) = parent.and_then(|p| self.elements.get_mut(&p)) {
            parent.children.push(key);
        }
        key
    }

    fn remove_subtree(&mut self, key: usize) {
        let Some(el) = self.elements.remove(&key) else {
            return;
        };
        if let Some(parent) = el.parent.and_then(|p| self.elements.get_mut(&p)) {
            parent.children.retain(|child| *child != key);
        }
        for child in el.children {
            self.remove_subtree(child);
        }
    }

    fn find(&self, dom_id: &str) -> Option<usize> {
        let mut matches = self
            .elements
            .iter()
            .filter(|(_, el)| el.dom_id == dom_id)
            .map(|(key, _)| *key)
            .collect::<Vec<_>>();
        // `getElementById` returns the first element in document order.
        matches.sort_unstable();
        matches.first().copied()
    }
}

impl ToastDom for MemoryDom {
    type Node = MemoryNode;
    type Binding = MemoryBinding;

    fn find_container(&self, id: &str) -> Option<MemoryNode> {
        self.state.borrow().find(id).map(MemoryNode)
    }

    fn create_container(&mut self, id: &str, class: &str) -> Option<MemoryNode> {
        let mut state = self.state.borrow_mut();
        state.containers_created += 1;
        Some(MemoryNode(state.insert(id, class, String::new(), None)))
    }

    fn append_toast(&mut self, container: &MemoryNode, dom_id: &str, markup: &str) -> Option<MemoryNode> {
        let mut state = self.state.borrow_mut();
        if !state.elements.contains_key(&container.0) {
            return None;
        }
        state.toasts_created += 1;
        Some(MemoryNode(state.insert(dom_id, "toast", markup.to_owned(), Some(container.0))))
    }

    fn show(&mut self, toast: &MemoryNode) {
        if let Some(el) = self.state.borrow_mut().elements.get_mut(&toast.0) {
            el.visible = true;
            el.hiding = false;
        }
    }

    fn hide(&mut self, toast: &MemoryNode) {
        if let Some(el) = self.state.borrow_mut().elements.get_mut(&toast.0) {
            el.visible = false;
            el.hiding = true;
        }
    }

    fn remove(&mut self, toast: &MemoryNode) {
        self.state.borrow_mut().remove_subtree(toast.0);
    }

    fn bind(&mut self, toast: &MemoryNode, handlers: ToastHandlers) -> MemoryBinding {
        let mut state = self.state.borrow_mut();
        let key = state.next_binding;
        state.next_binding += 1;
        state.bindings.insert(key, (toast.0, handlers));
        MemoryBinding(key)
    }

    fn unbind(&mut self, _toast: &MemoryNode, binding: MemoryBinding) {
        self.state.borrow_mut().bindings.remove(&binding.0);
    }
}
