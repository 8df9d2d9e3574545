//! In-memory collaborators.
//!
//! Used by the controller tests and by hosts without a DOM (server-side
//! rendering, native previews). Each fake records state so callers can
//! inspect what the controller did.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;

use crate::error::ThemeError;
use crate::host::{PreferenceStore, SystemScheme, ThemeRoot, ToggleControl};

/// Map-backed preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `key = value`.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose every read and write fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    /// Remove `key`, as a user clearing site data would.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// System scheme with a settable answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScheme {
    pub prefers_dark: Option<bool>,
    pub change_events: bool,
}

impl FixedScheme {
    /// Host that answers queries and delivers change notifications.
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark: Some(prefers_dark), change_events: true }
    }

    /// Host with no color-scheme capability at all.
    #[must_use]
    pub fn unsupported() -> Self {
        Self { prefers_dark: None, change_events: false }
    }
}

impl SystemScheme for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn supports_change_events(&self) -> bool {
        self.change_events
    }
}

/// Root element as an attribute map.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    attributes: HashMap<String, String>,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeRoot for MemoryRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Toggle button with an optional glyph child.
#[derive(Debug, Clone, Default)]
pub struct MemoryToggle {
    attributes: HashMap<String, String>,
    glyph_selector: Option<String>,
    glyph: Option<String>,
}

impl MemoryToggle {
    /// Toggle with no glyph child.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle whose glyph child matches `selector`.
    #[must_use]
    pub fn with_glyph(selector: &str) -> Self {
        Self { glyph_selector: Some(selector.to_owned()), ..Self::default() }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Current glyph text, if a glyph child exists and has been written.
    #[must_use]
    pub fn glyph(&self) -> Option<&str> {
        self.glyph.as_deref()
    }
}

impl ToggleControl for MemoryToggle {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_glyph(&mut self, selector: &str, glyph: &str) -> Result<bool, ThemeError> {
        if self.glyph_selector.as_deref() != Some(selector) {
            return Ok(false);
        }
        self.glyph = Some(glyph.to_owned());
        Ok(true)
    }
}
