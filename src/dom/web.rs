//! Browser implementations of the DOM seams.
//!
//! `classList` and `localStorage` calls can throw (invalid token, quota,
//! blocked storage); those errors are dropped since nothing upstream can act
//! on them.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Storage, Window};

use super::{BindError, ClassTarget, DocumentHost, PreferenceStore};

impl ClassTarget for Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_label(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn on_activate(&self, handler: Box<dyn FnMut()>) {
        let cb = Closure::wrap(handler);
        let callback: &js_sys::Function = cb.as_ref().unchecked_ref();
        if self.add_event_listener_with_callback("click", callback).is_ok() {
            // Listener lives as long as the page.
            cb.forget();
        }
    }
}

impl DocumentHost for Document {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        Document::query_selector(self, selector).ok().flatten()
    }

    fn body(&self) -> Option<Element> {
        Document::body(self).map(Element::from)
    }
}

/// `localStorage` handle. Private browsing or a sandboxed frame can deny
/// storage entirely; reads then come back empty and writes are dropped.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window(window: &Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Global window and its document.
pub fn window_document() -> Result<(Window, Document), BindError> {
    let window = web_sys::window().ok_or(BindError::MissingWindow)?;
    let document = window.document().ok_or(BindError::MissingDocument)?;
    Ok((window, document))
}
