//! The two presentation states and their stored form.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Stored value meaning "dark". Anything else reads as light.
pub const STORED_DARK: &str = "true";
/// Stored value written when switching to light.
pub const STORED_LIGHT: &str = "false";

/// Current page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the persisted flag.
    ///
    /// Only the exact literal `"true"` selects [`Theme::Dark`]. Absent,
    /// empty, or otherwise malformed values fall back to [`Theme::Light`].
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some(STORED_DARK) { Self::Dark } else { Self::Light }
    }

    /// The literal written to storage for this theme.
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => STORED_LIGHT,
            Self::Dark => STORED_DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}
