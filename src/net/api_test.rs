use super::*;

// =============================================================
// preview_url
// =============================================================

#[test]
fn preview_url_builds_all_query_parameters() {
    let url = preview_url("http://localhost:8000", "doc.pdf", 2, "p1", 123);
    assert_eq!(
        url,
        "http://localhost:8000/page_preview?source=doc.pdf&page=2&project_id=p1&t=123"
    );
}

#[test]
fn preview_url_escapes_source_and_project() {
    let url = preview_url("http://localhost:8000", "site plan.pdf", 4, "job #12", 7);
    assert_eq!(
        url,
        "http://localhost:8000/page_preview?source=site%20plan.pdf&page=4&project_id=job%20%2312&t=7"
    );
}
