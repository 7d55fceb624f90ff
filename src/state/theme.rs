//! Light/dark theme preference and its toggle.
//!
//! The preference lives behind [`PreferenceStore`] so the toggle logic never
//! touches browser storage directly. The browser build backs it with
//! `localStorage`; tests and storage-less browsers use [`MemoryPreferences`].
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort: a store that cannot persist still lets the visible
//! mode flip for the current page view.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use crate::config::ThemeCopy;

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored value. Anything other than `"dark"` is light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Label for the toggle control while this theme is active.
    pub fn toggle_label(self, copy: &ThemeCopy) -> &str {
        match self {
            Self::Light => &copy.to_dark_label,
            Self::Dark => &copy.to_light_label,
        }
    }
}

/// Persistent string key-value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-process preference store.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// User interactions the theme toggle reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    Toggle,
}

/// Current theme bound to the store it persists into.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the stored preference under `key`, defaulting to light.
    pub fn load(store: S, key: &str) -> Self {
        let theme = Theme::from_stored(store.get(key).as_deref());
        Self { store, key: key.to_owned(), theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Apply `event` and persist the resulting theme.
    pub fn handle(&mut self, event: ThemeEvent) -> Theme {
        match event {
            ThemeEvent::Toggle => {
                self.theme = self.theme.toggled();
                self.store.set(&self.key, self.theme.as_str());
            }
        }
        self.theme
    }
}
