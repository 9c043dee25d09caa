#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::types::HealthSnapshot;
use crate::state::status::StatusMessage;

/// What the health area currently shows: either a status notice (idle,
/// pinging, error, cleared) or a rendered snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum HealthView {
    Notice(StatusMessage),
    Ready(HealthSnapshot),
}

/// State behind the health display. Snapshots are never cached; every
/// refresh starts from the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthState {
    pub view: HealthView,
    generation: u64,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            view: HealthView::Notice(StatusMessage::info("Set API base URL to check status.")),
            generation: 0,
        }
    }
}

impl HealthState {
    /// Start a refresh; returns the generation the in-flight request must
    /// present to [`Self::complete`].
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.view = HealthView::Notice(StatusMessage::info("Pinging /healthz…"));
        self.generation
    }

    /// Apply a finished request. Superseded generations are discarded;
    /// returns whether the result was applied.
    pub fn complete(&mut self, generation: u64, result: Result<HealthSnapshot, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.view = match result {
            Ok(snapshot) => HealthView::Ready(snapshot),
            Err(message) => HealthView::Notice(StatusMessage::error(format!(
                "Health check failed: {message}"
            ))),
        };
        true
    }

    /// Replace the display with a notice (invalid URL, cleared base). Bumps
    /// the generation so an in-flight refresh cannot overwrite it.
    pub fn notice(&mut self, message: StatusMessage) {
        self.generation += 1;
        self.view = HealthView::Notice(message);
    }

    /// Back to the unconfigured hint.
    pub fn reset_unconfigured(&mut self) {
        self.notice(StatusMessage::info("Set API base URL to check status."));
    }
}

/// Fixed badge strip for a snapshot. The first badge is always lit: a
/// snapshot only exists when the API answered.
pub fn badge_rows(snapshot: &HealthSnapshot) -> [(&'static str, bool); 3] {
    [
        ("API reachable", true),
        ("Chroma writable", snapshot.chroma),
        ("OCR detected", snapshot.ocr),
    ]
}

pub fn embedding_model_label(snapshot: &HealthSnapshot) -> String {
    snapshot
        .embedding_model
        .clone()
        .unwrap_or_else(|| "unknown".to_owned())
}

pub fn docs_indexed_label(snapshot: &HealthSnapshot) -> String {
    snapshot
        .docs_indexed
        .map_or_else(|| "0".to_owned(), |count| count.to_string())
}
