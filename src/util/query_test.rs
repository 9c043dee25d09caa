use super::*;

// =============================================================
// api_override
// =============================================================

#[test]
fn api_override_reads_the_api_parameter() {
    assert_eq!(
        api_override("?api=http://localhost:9000"),
        Some("http://localhost:9000".to_owned())
    );
}

#[test]
fn api_override_accepts_a_query_without_question_mark() {
    assert_eq!(
        api_override("api=http://localhost:9000"),
        Some("http://localhost:9000".to_owned())
    );
}

#[test]
fn api_override_decodes_percent_encoding() {
    assert_eq!(
        api_override("?api=http%3A%2F%2Flocalhost%3A9000"),
        Some("http://localhost:9000".to_owned())
    );
}

#[test]
fn api_override_ignores_unrelated_parameters() {
    assert_eq!(api_override("?theme=dark&debug=1"), None);
}

#[test]
fn api_override_is_none_for_empty_query() {
    assert_eq!(api_override(""), None);
    assert_eq!(api_override("?"), None);
}

#[test]
fn api_override_trims_and_rejects_blank_values() {
    assert_eq!(api_override("?api=%20%20"), None);
    assert_eq!(
        api_override("?api=%20http://h%20"),
        Some("http://h".to_owned())
    );
}

#[test]
fn current_api_override_is_none_without_a_browser() {
    #[cfg(not(feature = "web"))]
    assert_eq!(current_api_override(), None);
}
