//! Names and glyphs the controller uses to find and decorate page elements.
//!
//! DESIGN
//! ======
//! Defaults match the markup this crate ships against. Pages with different
//! markup can pass partial JSON overrides; unspecified fields keep defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DARK_SCHEME_QUERY, GLYPH_SELECTOR, MOON_GLYPH, PRESSED_ATTRIBUTE, STORAGE_KEY, SUN_GLYPH, THEME_ATTRIBUTE,
    TOGGLE_ID,
};
use crate::error::ThemeError;
use crate::theme::Theme;

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key for the explicit preference.
    pub storage_key: String,
    /// Root element attribute carrying the active theme.
    pub theme_attribute: String,
    /// Element id of the toggle control.
    pub toggle_id: String,
    /// Toggle attribute set to `"true"` while dark.
    pub pressed_attribute: String,
    /// Selector for the glyph element inside the toggle.
    pub glyph_selector: String,
    /// Glyph shown while the dark theme is active.
    pub dark_glyph: String,
    /// Glyph shown while the light theme is active.
    pub light_glyph: String,
    /// Media query for the OS dark-scheme signal.
    pub dark_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            theme_attribute: THEME_ATTRIBUTE.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
            pressed_attribute: PRESSED_ATTRIBUTE.to_owned(),
            glyph_selector: GLYPH_SELECTOR.to_owned(),
            dark_glyph: SUN_GLYPH.to_owned(),
            light_glyph: MOON_GLYPH.to_owned(),
            dark_query: DARK_SCHEME_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON override object.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON or a blank name.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank names; glyphs may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("toggle_id", &self.toggle_id),
            ("pressed_attribute", &self.pressed_attribute),
            ("glyph_selector", &self.glyph_selector),
            ("dark_query", &self.dark_query),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{field} must not be blank")));
            }
        }
        Ok(())
    }

    /// Glyph to show on the toggle while `theme` is active.
    #[must_use]
    pub fn glyph_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark_glyph,
            Theme::Light => &self.light_glyph,
        }
    }
}
