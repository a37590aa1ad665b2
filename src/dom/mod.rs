//! Seams between the controller and the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `web_sys` directly. It works through three
//! small traits so the same logic drives the live document (`web`, behind
//! `hydrate`) and the in-memory page used by tests (`memory`).


pub mod memory;
#[cfg(feature = "hydrate")]
pub mod web;

use crate::config::ThemeConfig;

/// A node whose class membership and label the controller can change.
pub trait ClassTarget: Clone {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Replace the node's visible text.
    fn set_label(&self, text: &str);
    /// Run `handler` on every primary activation (click) of this node.
    fn on_activate(&self, handler: Box<dyn FnMut()>);
}

/// String key-value store that survives page loads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Best-effort write; failures are dropped.
    fn set(&self, key: &str, value: &str);
}

/// Read-only lookups against the parsed document.
pub trait DocumentHost {
    type Node: ClassTarget;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// First element matching `selector`, if any.
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
}

/// Error resolving the page environment.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
}

/// Handles to every themed region, resolved once at startup.
#[derive(Clone, Debug)]
pub struct RegionSet<N> {
    pub toggle: Option<N>,
    pub sidebar: Option<N>,
    pub content: Option<N>,
    pub footer: Option<N>,
    pub body: N,
}

impl<N: ClassTarget> RegionSet<N> {
    /// Look up every region named by `config`. Optional regions that are
    /// missing stay `None`; only a missing body is an error.
    pub fn resolve<H>(host: &H, config: &ThemeConfig) -> Result<Self, BindError>
    where
        H: DocumentHost<Node = N>,
    {
        let body = host.body().ok_or(BindError::MissingBody)?;
        Ok(Self {
            toggle: host.element_by_id(&config.toggle_id),
            sidebar: host.query_selector(&config.sidebar.selector),
            content: host.query_selector(&config.content.selector),
            footer: host.query_selector(&config.footer.selector),
            body,
        })
    }
}
