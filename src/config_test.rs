use super::*;

#[test]
fn defaults_match_shipped_markup() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme-preference");
    assert_eq!(config.theme_attribute, "data-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.pressed_attribute, "aria-pressed");
    assert_eq!(config.glyph_selector, ".theme-toggle__icon");
    assert_eq!(config.dark_query, "(prefers-color-scheme: dark)");
}

#[test]
fn glyph_for_shows_sun_when_dark_and_moon_when_light() {
    let config = ThemeConfig::default();
    assert_eq!(config.glyph_for(Theme::Dark), SUN_GLYPH);
    assert_eq!(config.glyph_for(Theme::Light), MOON_GLYPH);
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let config = ThemeConfig::from_json(r#"{ "storage_key": "site-theme" }"#);
    let Ok(config) = config else {
        panic!("expected config to parse: {config:?}");
    };
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.toggle_id, TOGGLE_ID);
    assert_eq!(config.dark_glyph, SUN_GLYPH);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ThemeConfig::from_json("{}"), Ok(ThemeConfig::default()));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(ThemeConfig::from_json("{ nope"), Err(ThemeError::Config(_))));
}

#[test]
fn from_json_rejects_blank_names() {
    let err = ThemeConfig::from_json(r#"{ "toggle_id": "  " }"#);
    assert_eq!(err, Err(ThemeError::Config("toggle_id must not be blank".to_owned())));
}

#[test]
fn blank_glyphs_are_allowed() {
    let config = ThemeConfig::from_json(r#"{ "dark_glyph": "", "light_glyph": "" }"#);
    assert!(config.is_ok());
}
