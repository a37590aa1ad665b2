//! Theme toggle controller.
//!
//! Owns the resolved regions, the preference store, and the page config.
//! `apply_dark` / `apply_light` are the only mutations; both are idempotent
//! and always write the store last so storage and DOM agree afterwards.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{RegionStyle, ThemeConfig};
use crate::dom::{ClassTarget, PreferenceStore, RegionSet};
use crate::theme::Theme;

pub struct ThemeToggleController<N, S> {
    regions: RegionSet<N>,
    store: S,
    config: ThemeConfig,
}

impl<N, S> ThemeToggleController<N, S>
where
    N: ClassTarget,
    S: PreferenceStore,
{
    pub fn new(regions: RegionSet<N>, store: S, config: ThemeConfig) -> Self {
        Self { regions, store, config }
    }

    /// Apply the stored preference.
    ///
    /// Only switches when the store says dark; the shipped markup is already
    /// light, so a light preference leaves the page untouched.
    pub fn initialize(&mut self) -> Theme {
        let stored = Theme::from_stored(self.store.get(&self.config.storage_key).as_deref());
        if stored.is_dark() {
            self.apply_dark();
        }
        stored
    }

    pub fn apply_dark(&mut self) {
        self.apply(Theme::Dark);
    }

    pub fn apply_light(&mut self) {
        self.apply(Theme::Light);
    }

    /// Click handler body: flip based on the body marker.
    pub fn on_toggle_activated(&mut self) {
        self.apply(self.theme().toggled());
    }

    /// Theme currently shown, read from the body marker.
    pub fn theme(&self) -> Theme {
        if self.regions.body.has_class(&self.config.body_dark_class) { Theme::Dark } else { Theme::Light }
    }

    pub fn regions(&self) -> &RegionSet<N> {
        &self.regions
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    fn apply(&mut self, theme: Theme) {
        let cfg = &self.config;
        let regions = &self.regions;

        if theme.is_dark() {
            regions.body.add_class(&cfg.body_dark_class);
        } else {
            regions.body.remove_class(&cfg.body_dark_class);
        }

        for (node, style) in [
            (&regions.sidebar, &cfg.sidebar),
            (&regions.content, &cfg.content),
            (&regions.footer, &cfg.footer),
        ] {
            if let Some(node) = node {
                swap_classes(node, style, theme);
            }
        }

        if let Some(toggle) = &regions.toggle {
            toggle.set_label(cfg.label_for(theme));
        }

        self.store.set(&cfg.storage_key, theme.as_stored());
        log::debug!("theme applied: {theme}");
    }
}

impl<N, S> ThemeToggleController<N, S>
where
    N: ClassTarget + 'static,
    S: PreferenceStore + 'static,
{
    /// Initialize and bind the toggle's click handler.
    ///
    /// The handler holds a strong reference, so the controller lives as long
    /// as the toggle node keeps its listener (the page lifetime in a browser).
    pub fn mount(self) -> Rc<RefCell<Self>> {
        let toggle = self.regions.toggle.clone();
        let shared = Rc::new(RefCell::new(self));
        let theme = shared.borrow_mut().initialize();

        if let Some(toggle) = toggle {
            let handle = Rc::clone(&shared);
            toggle.on_activate(Box::new(move || handle.borrow_mut().on_toggle_activated()));
        }

        log::info!("theme toggle mounted: initial={theme}");
        shared
    }
}

/// Activate `theme`'s class set on `node` and clear the other one.
fn swap_classes<N: ClassTarget>(node: &N, style: &RegionStyle, theme: Theme) {
    let (on, off) = if theme.is_dark() { (&style.dark, &style.light) } else { (&style.light, &style.dark) };
    for class in on {
        node.add_class(class);
    }
    for class in off {
        node.remove_class(class);
    }
}
