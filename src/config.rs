//! Page bindings: where the regions live and which classes encode a theme.
//!
//! Defaults match the stock page templates. A host page can override any
//! subset through JSON (see [`ThemeConfig::from_json`]); missing fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const DEFAULT_TOGGLE_ID: &str = "darkModeToggle";
pub const DEFAULT_BODY_DARK_CLASS: &str = "dark-mode";
pub const DEFAULT_LABEL_TO_LIGHT: &str = "\u{2600}\u{fe0f} Modo Claro";
pub const DEFAULT_LABEL_TO_DARK: &str = "\u{1f319} Modo Escuro";

/// Error returned by [`ThemeConfig::from_json`] and [`ThemeConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{field}` must not be empty")]
    EmptyField { field: &'static str },
    #[error("region `{region}` has an empty selector")]
    EmptySelector { region: &'static str },
    #[error("region `{region}` has an empty {set} class set")]
    EmptyClassSet { region: &'static str, set: &'static str },
    #[error("region `{region}` has invalid class name {class:?}")]
    InvalidClassName { region: &'static str, class: String },
    #[error("region `{region}` lists class `{class}` in both light and dark sets")]
    OverlappingClass { region: &'static str, class: String },
    #[error("regions `{first}` and `{second}` share a selector but disagree on class `{class}`")]
    ConflictingRegions { first: &'static str, second: &'static str, class: String },
}

/// Selector plus the two mutually exclusive class sets of one region.
///
/// Overrides replace a region wholesale, so all three fields are required.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionStyle {
    pub selector: String,
    pub light: Vec<String>,
    pub dark: Vec<String>,
}

impl RegionStyle {
    fn new(selector: &str, light: &[&str], dark: &[&str]) -> Self {
        Self {
            selector: selector.to_owned(),
            light: light.iter().map(|c| (*c).to_owned()).collect(),
            dark: dark.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    fn validate(&self, region: &'static str) -> Result<(), ConfigError> {
        if self.selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector { region });
        }
        for (set, classes) in [("light", &self.light), ("dark", &self.dark)] {
            if classes.is_empty() {
                return Err(ConfigError::EmptyClassSet { region, set });
            }
            if let Some(bad) = classes.iter().find(|c| !is_class_token(c)) {
                return Err(ConfigError::InvalidClassName { region, class: bad.clone() });
            }
        }
        if let Some(shared) = self.light.iter().find(|c| self.dark.contains(c)) {
            return Err(ConfigError::OverlappingClass { region, class: shared.clone() });
        }
        Ok(())
    }

    /// A class one region turns on for a theme while `other` turns it off.
    /// Only meaningful when both regions land on the same node.
    fn conflict_with(&self, other: &Self) -> Option<&String> {
        self.light
            .iter()
            .find(|c| other.dark.contains(c))
            .or_else(|| self.dark.iter().find(|c| other.light.contains(c)))
    }
}

/// Everything the controller needs to know about the host page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"true"` / `"false"`.
    pub storage_key: String,
    /// Element id of the toggle button.
    pub toggle_id: String,
    /// Single marker class added to `<body>` while dark.
    pub body_dark_class: String,
    pub sidebar: RegionStyle,
    pub content: RegionStyle,
    pub footer: RegionStyle,
    /// Toggle text shown while dark.
    pub label_to_light: String,
    /// Toggle text shown while light.
    pub label_to_dark: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            body_dark_class: DEFAULT_BODY_DARK_CLASS.to_owned(),
            sidebar: RegionStyle::new(".sidebar", &["bg-teal-700"], &["bg-dark", "text-white"]),
            content: RegionStyle::new(".content-area", &["bg-light", "text-dark"], &["bg-dark", "text-white"]),
            footer: RegionStyle::new("footer", &["bg-light", "text-dark"], &["bg-dark", "text-white"]),
            label_to_light: DEFAULT_LABEL_TO_LIGHT.to_owned(),
            label_to_dark: DEFAULT_LABEL_TO_DARK.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// ```
    /// let cfg = theme_toggle::ThemeConfig::from_json(r#"{"storage_key":"theme"}"#).unwrap();
    /// assert_eq!(cfg.storage_key, "theme");
    /// assert_eq!(cfg.toggle_id, "darkModeToggle");
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configs that would break the one-set-active invariant or make
    /// `classList` calls throw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyField { field: "storage_key" });
        }
        if self.toggle_id.is_empty() {
            return Err(ConfigError::EmptyField { field: "toggle_id" });
        }
        if !is_class_token(&self.body_dark_class) {
            return Err(ConfigError::InvalidClassName { region: "body", class: self.body_dark_class.clone() });
        }
        self.sidebar.validate("sidebar")?;
        self.content.validate("content")?;
        self.footer.validate("footer")?;

        let regions = [("sidebar", &self.sidebar), ("content", &self.content), ("footer", &self.footer)];
        for (i, (first, a)) in regions.iter().enumerate() {
            for (second, b) in &regions[i + 1..] {
                if a.selector.trim() != b.selector.trim() {
                    continue;
                }
                if let Some(class) = a.conflict_with(b) {
                    return Err(ConfigError::ConflictingRegions { first: *first, second: *second, class: class.clone() });
                }
            }
        }
        Ok(())
    }

    /// Config for a page that may carry a JSON override.
    ///
    /// Never fails: a missing override yields the defaults, and an invalid
    /// one yields the defaults together with the reason it was rejected.
    pub fn from_page(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        match raw.map(Self::from_json) {
            None => (Self::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (Self::default(), Some(err)),
        }
    }

    /// Label the toggle shows while `theme` is active.
    pub fn label_for(&self, theme: crate::Theme) -> &str {
        if theme.is_dark() { &self.label_to_light } else { &self.label_to_dark }
    }
}

fn is_class_token(class: &str) -> bool {
    !class.is_empty() && !class.chars().any(|c| c.is_ascii_whitespace())
}
