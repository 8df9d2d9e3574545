use super::*;

#[test]
fn store_round_trips_values_and_counts_writes() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k"), Ok(None));
    assert_eq!(store.set("k", "dark"), Ok(()));
    assert_eq!(store.get("k"), Ok(Some("dark".to_owned())));
    assert_eq!(store.writes(), 1);
}

#[test]
fn store_remove_clears_entry() {
    let mut store = MemoryStore::with_entry("k", "light");
    store.remove("k");
    assert_eq!(store.value("k"), None);
}

#[test]
fn unavailable_store_fails_reads_and_writes() {
    let mut store = MemoryStore::unavailable();
    assert_eq!(store.get("k"), Err(ThemeError::StorageUnavailable));
    assert_eq!(store.set("k", "dark"), Err(ThemeError::StorageUnavailable));
    assert_eq!(store.writes(), 0);
}

#[test]
fn fixed_scheme_reports_configured_answer() {
    assert_eq!(FixedScheme::new(true).prefers_dark(), Some(true));
    assert!(FixedScheme::new(false).supports_change_events());
    assert_eq!(FixedScheme::unsupported().prefers_dark(), None);
    assert!(!FixedScheme::unsupported().supports_change_events());
}

#[test]
fn toggle_glyph_only_written_for_matching_selector() {
    let mut toggle = MemoryToggle::with_glyph(".icon");
    assert_eq!(toggle.set_glyph(".other", "x"), Ok(false));
    assert_eq!(toggle.glyph(), None);
    assert_eq!(toggle.set_glyph(".icon", "x"), Ok(true));
    assert_eq!(toggle.glyph(), Some("x"));
}

#[test]
fn toggle_without_glyph_child_reports_no_match() {
    let mut toggle = MemoryToggle::new();
    assert_eq!(toggle.set_glyph(".icon", "x"), Ok(false));
    assert_eq!(toggle.set_attribute("aria-pressed", "true"), Ok(()));
    assert_eq!(toggle.attribute("aria-pressed"), Some("true"));
}
