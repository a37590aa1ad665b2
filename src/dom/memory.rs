//! In-memory page model.
//!
//! Mirrors just enough of the DOM for the controller: ordered class lists,
//! text content, click handlers, and `#id` / `.class` / `tag` lookups.
//! Handles are cheap `Rc` clones, so a test can keep one and inspect the
//! node after handing another to the controller.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::{ClassTarget, DocumentHost, PreferenceStore};

#[derive(Default)]
struct ElementInner {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    handlers: Vec<Box<dyn FnMut()>>,
}

/// Shared handle to one element.
#[derive(Clone)]
pub struct MemoryElement {
    inner: Rc<RefCell<ElementInner>>,
}

impl MemoryElement {
    /// New element with `class` split on whitespace, like the `class` attribute.
    pub fn new(tag: &str, class: &str) -> Self {
        let mut inner = ElementInner { tag: tag.to_ascii_lowercase(), ..ElementInner::default() };
        for c in class.split_ascii_whitespace() {
            if !inner.classes.iter().any(|have| have == c) {
                inner.classes.push(c.to_owned());
            }
        }
        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.inner.borrow_mut().id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.inner.borrow_mut().text = text.to_owned();
        self
    }

    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.inner.borrow().id.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    /// Class list serialized the way `element.className` reads.
    pub fn class_name(&self) -> String {
        self.inner.borrow().classes.join(" ")
    }

    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    pub fn handler_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    /// Dispatch a click to every registered handler.
    ///
    /// Handlers are taken out while they run so they may mutate this same
    /// element (the toggle relabels itself).
    pub fn click(&self) {
        let mut handlers = std::mem::take(&mut self.inner.borrow_mut().handlers);
        for handler in &mut handlers {
            handler();
        }
        let mut inner = self.inner.borrow_mut();
        handlers.append(&mut inner.handlers);
        inner.handlers = handlers;
    }

    /// Whether `selector` matches this element. Only `#id`, `.class` and
    /// bare tag names are understood; anything else never matches.
    pub fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        let inner = self.inner.borrow();
        if let Some(id) = selector.strip_prefix('#') {
            inner.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            inner.classes.iter().any(|c| c == class)
        } else if !selector.is_empty() && selector.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            inner.tag.eq_ignore_ascii_case(selector)
        } else {
            false
        }
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &inner.tag)
            .field("id", &inner.id)
            .field("classes", &inner.classes)
            .field("text", &inner.text)
            .field("handlers", &inner.handlers.len())
            .finish()
    }
}

impl ClassTarget for MemoryElement {
    fn add_class(&self, class: &str) {
        let mut inner = self.inner.borrow_mut();
        if !inner.classes.iter().any(|c| c == class) {
            inner.classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.inner.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    fn set_label(&self, text: &str) {
        self.inner.borrow_mut().text = text.to_owned();
    }

    fn on_activate(&self, handler: Box<dyn FnMut()>) {
        self.inner.borrow_mut().handlers.push(handler);
    }
}

/// Flat document: a body plus elements in document order.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    body: Option<MemoryElement>,
    elements: Vec<MemoryElement>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self { body: Some(MemoryElement::new("body", "")), elements: Vec::new() }
    }
}

impl MemoryDocument {
    /// Document whose body is missing, for exercising bind failures.
    pub fn without_body() -> Self {
        Self { body: None, elements: Vec::new() }
    }

    /// Append `element` and return a handle to it.
    pub fn insert(&mut self, element: MemoryElement) -> MemoryElement {
        if !self.elements.iter().any(|e| e.ptr_eq(&element)) {
            self.elements.push(element.clone());
        }
        element
    }

    pub fn body_element(&self) -> Option<MemoryElement> {
        self.body.clone()
    }
}

impl DocumentHost for MemoryDocument {
    type Node = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.iter().find(|e| e.id().as_deref() == Some(id)).cloned()
    }

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        self.body
            .iter()
            .chain(self.elements.iter())
            .find(|e| e.matches(selector))
            .cloned()
    }

    fn body(&self) -> Option<MemoryElement> {
        self.body.clone()
    }
}

/// `localStorage` stand-in. Clones share one map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
