//! Light/dark theme model and preference persistence.
//!
//! The active theme is written to `<html data-theme>` and stored as a bare
//! string under one `localStorage` key. The toggle icon always advertises
//! the other mode: a sun while dark is active, a moon while light is.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Every icon class the toggle may carry; all but the current one are
    /// removed when applying.
    pub const ICON_CLASSES: [&'static str; 2] = ["fa-sun", "fa-moon"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Unknown strings yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button while `self` is active.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fa-sun",
            Self::Light => "fa-moon",
        }
    }
}

/// A string key/value store holding user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Read the stored theme, falling back to `default` when absent or unknown.
pub fn load_theme(store: &impl PreferenceStore, key: &str, default: Theme) -> Theme {
    store
        .get(key)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or(default)
}

pub fn save_theme(store: &mut impl PreferenceStore, key: &str, theme: Theme) -> Result<(), SiteError> {
    store.set(key, theme.as_str())
}
