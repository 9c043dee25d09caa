use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// normalize_base_url
// =============================================================

#[test]
fn normalize_strips_exactly_one_trailing_slash() {
    assert_eq!(normalize_base_url("http://h:8000/"), "http://h:8000");
    assert_eq!(normalize_base_url("http://h:8000//"), "http://h:8000/");
    assert_eq!(normalize_base_url("http://h:8000"), "http://h:8000");
}

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(normalize_base_url("  http://h "), "http://h");
}

#[test]
fn normalize_maps_blank_input_to_empty() {
    assert_eq!(normalize_base_url(""), "");
    assert_eq!(normalize_base_url("   "), "");
}

// =============================================================
// is_absolute_url
// =============================================================

#[test]
fn absolute_urls_are_accepted() {
    assert!(is_absolute_url("http://localhost:8000"));
    assert!(is_absolute_url("https://api.example.com/docs"));
}

#[test]
fn malformed_urls_are_rejected() {
    assert!(!is_absolute_url("not a url"));
    assert!(!is_absolute_url("localhost:8000"));
    assert!(!is_absolute_url("http://"));
    assert!(!is_absolute_url("://h"));
    assert!(!is_absolute_url("1http://h"));
}

#[test]
fn default_api_base_is_absolute() {
    assert!(is_absolute_url(DEFAULT_API_BASE));
}

// =============================================================
// resolve_startup_base
// =============================================================

#[test]
fn startup_prefers_the_query_override() {
    let base = SettingsState::resolve_startup_base(Some("http://override:9000/"), Some("http://stored"));
    assert_eq!(base, "http://override:9000");
}

#[test]
fn startup_falls_back_to_the_stored_value() {
    let base = SettingsState::resolve_startup_base(None, Some("http://stored"));
    assert_eq!(base, "http://stored");
}

#[test]
fn startup_defaults_when_nothing_is_saved() {
    let base = SettingsState::resolve_startup_base(None, None);
    assert_eq!(base, normalize_base_url(DEFAULT_API_BASE));
}

#[test]
fn invalid_override_falls_back_to_the_default() {
    let base = SettingsState::resolve_startup_base(Some("not a url"), Some("http://stored"));
    assert_eq!(base, normalize_base_url(DEFAULT_API_BASE));
}

// =============================================================
// set_api_base
// =============================================================

#[test]
fn valid_base_is_applied_and_persisted() {
    let mut state = SettingsState::default();
    let mut store = MemoryStore::new();
    state.set_api_base("http://h:8000/", &mut store).unwrap();
    assert_eq!(state.api_base, "http://h:8000");
    assert_eq!(
        store.get(crate::util::storage::API_BASE_KEY),
        Some("http://h:8000".to_owned())
    );
}

#[test]
fn invalid_base_leaves_previous_configuration_unchanged() {
    let mut state = SettingsState::default();
    let mut store = MemoryStore::new();
    state.set_api_base("http://h:8000", &mut store).unwrap();

    let result = state.set_api_base("not a url", &mut store);
    assert!(result.is_err());
    assert_eq!(state.api_base, "http://h:8000");
    assert_eq!(
        store.get(crate::util::storage::API_BASE_KEY),
        Some("http://h:8000".to_owned())
    );
}

#[test]
fn empty_base_clears_state_and_storage() {
    let mut state = SettingsState::default();
    let mut store = MemoryStore::new();
    state.set_api_base("http://h:8000", &mut store).unwrap();

    state.set_api_base("  ", &mut store).unwrap();
    assert_eq!(state.api_base, "");
    assert_eq!(store.get(crate::util::storage::API_BASE_KEY), None);
}

// =============================================================
// set_project_id
// =============================================================

#[test]
fn project_id_is_trimmed_and_persisted() {
    let mut state = SettingsState::default();
    let mut store = MemoryStore::new();
    state.set_project_id("  p1  ", &mut store);
    assert_eq!(state.project_id, "p1");
    assert_eq!(
        store.get(crate::util::storage::PROJECT_ID_KEY),
        Some("p1".to_owned())
    );
}

#[test]
fn blanked_project_id_removes_the_persisted_key() {
    let mut state = SettingsState::default();
    let mut store = MemoryStore::new();
    state.set_project_id("p1", &mut store);

    state.set_project_id("", &mut store);
    assert_eq!(state.project_id, "");
    assert_eq!(store.get(crate::util::storage::PROJECT_ID_KEY), None);
}
