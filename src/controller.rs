//! Theme resolution and enforcement.
//!
//! DESIGN
//! ======
//! The controller owns its four collaborators and exposes the three page
//! entry points (load, toggle click, OS scheme change) as plain methods, so
//! the whole state machine runs without a DOM or an event loop.
//!
//! Precedence is fixed: an explicit stored preference beats the OS signal,
//! and the OS signal beats the light fallback. Only a toggle click writes the
//! preference. Collaborator failures are logged and skipped; nothing here
//! returns an error to the page.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::host::{PreferenceStore, SystemScheme, ThemeRoot, ToggleControl};
use crate::theme::Theme;

/// Whether [`ThemeController::apply`] writes the theme to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    /// Derived theme; leave the stored preference alone.
    No,
    /// Explicit user choice; store it.
    Yes,
}

/// Keeps the root attribute, toggle state, and stored preference in line.
pub struct ThemeController<S, Q, R, T> {
    config: ThemeConfig,
    store: S,
    scheme: Q,
    root: R,
    toggle: Option<T>,
}

impl<S, Q, R, T> ThemeController<S, Q, R, T>
where
    S: PreferenceStore,
    Q: SystemScheme,
    R: ThemeRoot,
    T: ToggleControl,
{
    /// Build a controller. Nothing is read or written until [`Self::initialize`].
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, scheme: Q, root: R, toggle: Option<T>) -> Self {
        if toggle.is_none() {
            log::debug!("theme: no toggle control, control sync disabled");
        }
        Self { config, store, scheme, root, toggle }
    }

    // --- Entry points ---

    /// Resolve the starting theme and apply it without persisting.
    pub fn initialize(&mut self) -> Theme {
        let theme = self.resolve_initial();
        log::debug!("theme: initial theme {theme}");
        self.apply(theme, Persist::No);
        theme
    }

    /// Flip the active theme and persist the result as the user's choice.
    pub fn on_toggle_click(&mut self) -> Theme {
        let next = self.current_theme().unwrap_or_default().toggled();
        log::debug!("theme: toggled to {next}");
        self.apply(next, Persist::Yes);
        next
    }

    /// Follow an OS scheme change unless the user has chosen explicitly.
    ///
    /// Returns the applied theme, or `None` when a stored preference wins.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if let Some(preference) = self.preference() {
            log::debug!("theme: ignoring system change, preference {preference} is set");
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        log::debug!("theme: following system change to {theme}");
        self.apply(theme, Persist::No);
        Some(theme)
    }

    // --- Apply ---

    /// Write `theme` to the root attribute, the store (when persisting), and
    /// the toggle control.
    pub fn apply(&mut self, theme: Theme, persist: Persist) {
        if let Err(err) = self.root.set_attribute(&self.config.theme_attribute, theme.as_str()) {
            log::warn!("theme: failed to set {}: {err}", self.config.theme_attribute);
        }

        if persist == Persist::Yes {
            if let Err(err) = self.store.set(&self.config.storage_key, theme.as_str()) {
                log::warn!("theme: failed to persist preference: {err}");
            }
        }

        if let Some(toggle) = self.toggle.as_mut() {
            sync_toggle(toggle, &self.config, theme);
        }
    }

    // --- Queries ---

    /// The explicit stored preference, if any.
    ///
    /// Unreadable storage and unrecognized values both count as absent.
    #[must_use]
    pub fn preference(&self) -> Option<Theme> {
        let raw = match self.store.get(&self.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("theme: failed to read preference: {err}");
                return None;
            }
        };
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("theme: ignoring stored preference: {err}");
                None
            }
        }
    }

    /// Theme implied by the OS signal; light when the host cannot answer.
    #[must_use]
    pub fn system_theme(&self) -> Theme {
        match self.scheme.prefers_dark() {
            Some(prefers_dark) => Theme::from_prefers_dark(prefers_dark),
            None => {
                log::debug!("theme: system scheme unavailable, defaulting to light");
                Theme::Light
            }
        }
    }

    /// Preference if present, else the system theme.
    #[must_use]
    pub fn resolve_initial(&self) -> Theme {
        self.preference().unwrap_or_else(|| self.system_theme())
    }

    /// Theme currently on the root element, if it holds a known value.
    #[must_use]
    pub fn current_theme(&self) -> Option<Theme> {
        let raw = self.root.attribute(&self.config.theme_attribute)?;
        let Ok(theme) = raw.parse() else {
            return None;
        };
        Some(theme)
    }

    /// Whether OS scheme changes should be subscribed to.
    #[must_use]
    pub fn follows_system(&self) -> bool {
        self.scheme.supports_change_events()
    }

    #[must_use]
    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    #[must_use]
    pub fn toggle(&self) -> Option<&T> {
        self.toggle.as_ref()
    }
}

fn sync_toggle<T: ToggleControl>(toggle: &mut T, config: &ThemeConfig, theme: Theme) {
    let pressed = if theme.is_dark() { "true" } else { "false" };
    if let Err(err) = toggle.set_attribute(&config.pressed_attribute, pressed) {
        log::warn!("theme: failed to set {}: {err}", config.pressed_attribute);
    }
    match toggle.set_glyph(&config.glyph_selector, config.glyph_for(theme)) {
        Ok(true) => {}
        Ok(false) => log::debug!("theme: toggle has no {} element", config.glyph_selector),
        Err(err) => log::warn!("theme: failed to update glyph: {err}"),
    }
}
