//! Default names for the theme controller's DOM and storage touch points.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the explicit user choice.
pub const STORAGE_KEY: &str = "theme-preference";

// ── Document ────────────────────────────────────────────────────

/// Attribute on the root element that carries the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Element id of the toggle button.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Toggle attribute reflecting whether dark mode is on.
pub const PRESSED_ATTRIBUTE: &str = "aria-pressed";

/// Selector for the glyph element inside the toggle.
pub const GLYPH_SELECTOR: &str = ".theme-toggle__icon";

// ── Glyphs ──────────────────────────────────────────────────────

/// Shown while dark: clicking switches to light.
pub const SUN_GLYPH: &str = "\u{2600}\u{FE0F}";

/// Shown while light: clicking switches to dark.
pub const MOON_GLYPH: &str = "\u{1F319}";

// ── System ──────────────────────────────────────────────────────

/// Media query matching an OS-level dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
