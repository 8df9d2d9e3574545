use super::*;

#[test]
fn as_str_matches_wire_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn parse_accepts_exact_values() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn parse_rejects_other_values() {
    assert_eq!("Dark".parse::<Theme>(), Err(ThemeError::UnknownTheme("Dark".to_owned())));
    assert_eq!("".parse::<Theme>(), Err(ThemeError::UnknownTheme(String::new())));
    assert!("sepia".parse::<Theme>().is_err());
}

#[test]
fn toggled_flips_between_two_values() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn from_prefers_dark_maps_signal() {
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn display_uses_wire_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap_or_default(), "\"dark\"");
    let parsed: Result<Theme, _> = serde_json::from_str("\"light\"");
    assert_eq!(parsed.ok(), Some(Theme::Light));
}
