//! # theme-toggle
//!
//! WASM light/dark theme switch for server-rendered pages.
//!
//! The page ships in its light state. On DOM-ready the controller reads the
//! stored preference from `localStorage`, swaps the class sets of a few fixed
//! regions (sidebar, content area, footer, body) when it says dark, and binds
//! the toggle button so each click flips and re-persists the theme.
//!
//! Browser glue lives behind the `hydrate` feature. Everything else talks to
//! the page through the traits in [`dom`], so the controller runs natively
//! against [`dom::memory`] in tests.

#[cfg(feature = "hydrate")]
pub mod boot;
pub mod config;
pub mod controller;
pub mod dom;
pub mod theme;

pub use config::{ConfigError, RegionStyle, ThemeConfig};
pub use controller::ThemeToggleController;
pub use dom::{BindError, ClassTarget, DocumentHost, PreferenceStore, RegionSet};
pub use theme::Theme;
