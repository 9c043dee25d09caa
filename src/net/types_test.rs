use super::*;

// =============================================================
// HealthSnapshot
// =============================================================

#[test]
fn health_snapshot_parses_full_payload() {
    let snapshot: HealthSnapshot = serde_json::from_str(
        r#"{"chroma": true, "ocr": false, "embedding_model": "BAAI/bge-small-en-v1.5", "docs_indexed": 12}"#,
    )
    .unwrap();
    assert!(snapshot.chroma);
    assert!(!snapshot.ocr);
    assert_eq!(
        snapshot.embedding_model.as_deref(),
        Some("BAAI/bge-small-en-v1.5")
    );
    assert_eq!(snapshot.docs_indexed, Some(12));
}

#[test]
fn health_snapshot_defaults_missing_fields() {
    let snapshot: HealthSnapshot = serde_json::from_str("{}").unwrap();
    assert!(!snapshot.chroma);
    assert!(!snapshot.ocr);
    assert_eq!(snapshot.embedding_model, None);
    assert_eq!(snapshot.docs_indexed, None);
}

#[test]
fn health_snapshot_ignores_unknown_fields() {
    // The live backend also reports an "api" field.
    let snapshot: HealthSnapshot =
        serde_json::from_str(r#"{"api": "ok", "chroma": true, "ocr": true}"#).unwrap();
    assert!(snapshot.chroma);
}

// =============================================================
// ProjectSummary
// =============================================================

#[test]
fn project_summary_parses_listing_entry() {
    let entry: ProjectSummary = serde_json::from_str(
        r#"{"project_id": "p1", "docs": ["contract.pdf", "specs.pdf"], "chunks": 42}"#,
    )
    .unwrap();
    assert_eq!(entry.project_id, "p1");
    assert_eq!(entry.docs.len(), 2);
    assert_eq!(entry.chunks, 42);
}

#[test]
fn project_summary_defaults_docs_and_chunks() {
    let entry: ProjectSummary = serde_json::from_str(r#"{"project_id": "p1"}"#).unwrap();
    assert!(entry.docs.is_empty());
    assert_eq!(entry.chunks, 0);
}

// =============================================================
// IngestReceipt
// =============================================================

#[test]
fn ingest_receipt_parses_response() {
    let receipt: IngestReceipt = serde_json::from_str(
        r#"{"files": 3, "pages": 10, "chunks": 42, "project_id": "p1"}"#,
    )
    .unwrap();
    assert_eq!(receipt.files, 3);
    assert_eq!(receipt.pages, 10);
    assert_eq!(receipt.chunks, 42);
    assert_eq!(receipt.project_id, "p1");
}

// =============================================================
// AskRequest / AnswerPayload
// =============================================================

#[test]
fn ask_request_serializes_wire_fields() {
    let request = AskRequest {
        project_id: "p1".to_owned(),
        question: "When is substantial completion required?".to_owned(),
        top_k: 5,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "project_id": "p1",
            "question": "When is substantial completion required?",
            "top_k": 5
        })
    );
}

#[test]
fn answer_payload_parses_citations() {
    let payload: AnswerPayload = serde_json::from_str(
        r#"{"answer": "By June.", "citations": [{"source": "doc.pdf", "page": 2, "score": 0.8675}], "used_chunks": 4}"#,
    )
    .unwrap();
    assert_eq!(payload.answer.as_deref(), Some("By June."));
    assert_eq!(payload.citations.len(), 1);
    assert_eq!(payload.citations[0].source, "doc.pdf");
    assert_eq!(payload.citations[0].page, 2);
    assert_eq!(payload.used_chunks, Some(4));
}

#[test]
fn answer_payload_defaults_to_no_answer_and_no_citations() {
    let payload: AnswerPayload = serde_json::from_str("{}").unwrap();
    assert_eq!(payload.answer, None);
    assert!(payload.citations.is_empty());
    assert_eq!(payload.used_chunks, None);
}

#[test]
fn citation_without_score_parses_to_none() {
    let citation: Citation =
        serde_json::from_str(r#"{"source": "doc.pdf", "page": 7}"#).unwrap();
    assert_eq!(citation.score, None);
}
