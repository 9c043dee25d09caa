#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use crate::net::types::IngestReceipt;
use crate::state::status::StatusMessage;

/// What the user put into the ingest form, reduced to the parts validation
/// cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestDraft {
    pub has_file: bool,
    pub folder_path: String,
    pub project_id: String,
    pub ocr: bool,
}

impl IngestDraft {
    /// Local validation: an upload needs a ZIP or a server-side folder path.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when both are missing.
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_file && self.folder_path.is_empty() {
            return Err("Provide a ZIP of PDFs or a server folder path.".to_owned());
        }
        Ok(())
    }
}

/// Ingest form state: Idle → Submitting → (Success | Failed) → Idle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngestState {
    pub submitting: bool,
    pub status: Option<StatusMessage>,
    generation: u64,
}

impl IngestState {
    /// Enter Submitting; returns the generation the in-flight request must
    /// present to [`Self::complete`].
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.submitting = true;
        self.status = Some(StatusMessage::info("Uploading bundle to API…"));
        self.generation
    }

    /// Leave Submitting with the request's outcome. Returns the receipt on
    /// success so the caller can adopt the project id and refresh the
    /// listing; stale generations are discarded.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<IngestReceipt, String>,
    ) -> Option<IngestReceipt> {
        if generation != self.generation {
            return None;
        }
        self.submitting = false;
        match result {
            Ok(receipt) => {
                self.status = Some(StatusMessage::success(success_summary(&receipt)));
                Some(receipt)
            }
            Err(message) => {
                self.status = Some(StatusMessage::error(format!("Ingest failed: {message}")));
                None
            }
        }
    }

    /// Local validation failure: surface the message without entering
    /// Submitting.
    pub fn fail_local(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::error(message));
    }
}

pub fn success_summary(receipt: &IngestReceipt) -> String {
    format!(
        "Ingested {} files / {} pages → {} chunks (project {}).",
        receipt.files, receipt.pages, receipt.chunks, receipt.project_id
    )
}
