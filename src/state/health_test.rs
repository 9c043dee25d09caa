use super::*;
use crate::state::status::StatusLevel;

fn snapshot() -> HealthSnapshot {
    HealthSnapshot {
        chroma: true,
        ocr: false,
        embedding_model: Some("BAAI/bge-small-en-v1.5".to_owned()),
        docs_indexed: Some(7),
    }
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn default_view_is_the_unconfigured_hint() {
    let state = HealthState::default();
    match state.view {
        HealthView::Notice(message) => {
            assert_eq!(message.text, "Set API base URL to check status.");
            assert_eq!(message.level, StatusLevel::Info);
        }
        HealthView::Ready(_) => panic!("expected a notice"),
    }
}

#[test]
fn begin_shows_the_pinging_notice() {
    let mut state = HealthState::default();
    let generation = state.begin();
    assert_eq!(generation, 1);
    match state.view {
        HealthView::Notice(message) => assert_eq!(message.text, "Pinging /healthz…"),
        HealthView::Ready(_) => panic!("expected a notice"),
    }
}

#[test]
fn complete_with_current_generation_applies_the_snapshot() {
    let mut state = HealthState::default();
    let generation = state.begin();
    assert!(state.complete(generation, Ok(snapshot())));
    assert_eq!(state.view, HealthView::Ready(snapshot()));
}

#[test]
fn complete_with_stale_generation_is_discarded() {
    let mut state = HealthState::default();
    let stale = state.begin();
    let _current = state.begin();
    assert!(!state.complete(stale, Ok(snapshot())));
    match state.view {
        HealthView::Notice(message) => assert_eq!(message.text, "Pinging /healthz…"),
        HealthView::Ready(_) => panic!("stale snapshot must not render"),
    }
}

#[test]
fn failure_renders_the_error_in_place_of_the_display() {
    let mut state = HealthState::default();
    let generation = state.begin();
    assert!(state.complete(generation, Err("connection refused".to_owned())));
    match state.view {
        HealthView::Notice(message) => {
            assert_eq!(message.text, "Health check failed: connection refused");
            assert_eq!(message.level, StatusLevel::Error);
        }
        HealthView::Ready(_) => panic!("expected an error notice"),
    }
}

#[test]
fn notice_cancels_an_in_flight_refresh() {
    let mut state = HealthState::default();
    let generation = state.begin();
    state.notice(StatusMessage::info("Cleared API base."));
    assert!(!state.complete(generation, Ok(snapshot())));
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn badge_strip_marks_api_reachable_unconditionally() {
    let rows = badge_rows(&HealthSnapshot::default());
    assert_eq!(rows[0], ("API reachable", true));
}

#[test]
fn badge_strip_reflects_chroma_and_ocr() {
    let rows = badge_rows(&snapshot());
    assert_eq!(rows[1], ("Chroma writable", true));
    assert_eq!(rows[2], ("OCR detected", false));
}

#[test]
fn missing_model_and_count_fall_back_to_defaults() {
    let empty = HealthSnapshot::default();
    assert_eq!(embedding_model_label(&empty), "unknown");
    assert_eq!(docs_indexed_label(&empty), "0");
}

#[test]
fn present_model_and_count_are_rendered_verbatim() {
    let snap = snapshot();
    assert_eq!(embedding_model_label(&snap), "BAAI/bge-small-en-v1.5");
    assert_eq!(docs_indexed_label(&snap), "7");
}
