//! Wire types for the backend API.
//!
//! Responses are tolerant of missing optional fields (older backends omit
//! them); unknown fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `GET /healthz` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HealthSnapshot {
    /// Vector store writable.
    #[serde(default)]
    pub chroma: bool,
    /// OCR binary detected on the server.
    #[serde(default)]
    pub ocr: bool,
    #[serde(default)]
    pub embedding_model: Option<String>,
    #[serde(default)]
    pub docs_indexed: Option<u64>,
}

/// One entry of the `GET /projects` listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectSummary {
    pub project_id: String,
    #[serde(default)]
    pub docs: Vec<String>,
    #[serde(default)]
    pub chunks: u64,
}

/// `POST /ingest` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IngestReceipt {
    pub files: u64,
    pub pages: u64,
    pub chunks: u64,
    pub project_id: String,
}

/// `POST /ask` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AskRequest {
    pub project_id: String,
    pub question: String,
    pub top_k: u32,
}

/// `POST /ask` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnswerPayload {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub used_chunks: Option<u64>,
}

/// A source-page reference returned alongside an answer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Citation {
    pub source: String,
    pub page: u64,
    #[serde(default)]
    pub score: Option<f64>,
}
