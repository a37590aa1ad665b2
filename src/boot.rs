//! WASM entry point.
//!
//! Waits for the document to finish parsing, then binds the controller to
//! the live page. Dark is applied as soon as the DOM is ready without
//! waiting for stylesheets, so a brief light frame is possible on slow loads.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::ThemeConfig;
use crate::controller::ThemeToggleController;
use crate::dom::web::{LocalStore, window_document};
use crate::dom::{BindError, RegionSet};

/// Id of an optional `<script type="application/json">` holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "theme-toggle-config";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let (window, document) = window_document().map_err(to_js)?;
    let store = LocalStore::from_window(&window);
    if !store.is_available() {
        log::warn!("localStorage unavailable; theme preference will not persist");
    }

    when_ready(&document, move |document| {
        if let Err(err) = mount(document, store) {
            log::error!("theme toggle not mounted: {err}");
        }
    })
}

/// Resolve regions against `document` and mount a controller for the page.
fn mount(document: &Document, store: LocalStore) -> Result<(), BindError> {
    let config = page_config(document);
    let regions = RegionSet::resolve(document, &config)?;
    // Kept alive by the toggle's click listener.
    let _controller = ThemeToggleController::new(regions, store, config).mount();
    Ok(())
}

/// Defaults, overridden by the page's JSON config element when it parses.
fn page_config(document: &Document) -> ThemeConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let (config, rejected) = ThemeConfig::from_page(raw.as_deref());
    if let Some(err) = rejected {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }
    config
}

/// Run `f` once the DOM is parsed: now if it already is, otherwise on
/// `DOMContentLoaded`.
fn when_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce(&Document) + 'static,
{
    if document.ready_state() != "loading" {
        f(document);
        return Ok(());
    }

    let doc = document.clone();
    let cb = Closure::once_into_js(move || f(&doc));
    document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref::<js_sys::Function>())
}

fn to_js(err: BindError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
