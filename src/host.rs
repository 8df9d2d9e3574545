//! Collaborator traits the theme controller is generic over.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never reaches for globals. The browser build plugs in
//! web-sys implementations (`browser` module); tests and non-browser hosts
//! plug in the fakes from [`crate::memory`].

use crate::error::ThemeError;

/// Origin-scoped key-value store that survives reloads.
pub trait PreferenceStore {
    /// Read the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unavailable or the read fails.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unavailable or the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Operating-system color-scheme signal.
pub trait SystemScheme {
    /// Whether the OS is currently in dark mode, or `None` when the host
    /// cannot answer.
    fn prefers_dark(&self) -> Option<bool>;

    /// Whether the host can deliver change notifications.
    fn supports_change_events(&self) -> bool;
}

/// The root document element.
pub trait ThemeRoot {
    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the host rejects the attribute.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// The optional toggle button.
pub trait ToggleControl {
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the host rejects the attribute.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Replace the text of the descendant matching `selector`.
    ///
    /// Returns `Ok(false)` when no descendant matches.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the selector lookup fails.
    fn set_glyph(&mut self, selector: &str, glyph: &str) -> Result<bool, ThemeError>;
}
