#[cfg(test)]
#[path = "ask_test.rs"]
mod ask_test;

use crate::net::types::{AnswerPayload, Citation};
use crate::state::status::StatusMessage;

pub const DEFAULT_TOP_K: u32 = 5;
pub const MIN_TOP_K: u32 = 1;
pub const MAX_TOP_K: u32 = 50;

/// Parse the requested result count. Non-numeric or empty input falls back
/// to [`DEFAULT_TOP_K`]; numeric input is clamped to
/// [`MIN_TOP_K`]..=[`MAX_TOP_K`].
pub fn clamp_top_k(raw: &str) -> u32 {
    raw.trim().parse::<i64>().map_or(DEFAULT_TOP_K, |value| {
        u32::try_from(value.clamp(i64::from(MIN_TOP_K), i64::from(MAX_TOP_K)))
            .unwrap_or(DEFAULT_TOP_K)
    })
}

/// Local validation before a question leaves the browser.
///
/// # Errors
///
/// Returns the user-facing message for the first missing field.
pub fn validate_ask(project_id: &str, question: &str) -> Result<(), String> {
    if project_id.is_empty() {
        return Err("Project ID is required.".to_owned());
    }
    if question.is_empty() {
        return Err("Enter a question to query the index.".to_owned());
    }
    Ok(())
}

/// Ask form state: Idle → Submitting → (Success | Failed) → Idle. The
/// previous answer is cleared on submit, so a failure never shows a partial
/// or stale result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AskState {
    pub submitting: bool,
    pub status: Option<StatusMessage>,
    pub answer: Option<AnswerPayload>,
    /// Project the rendered answer belongs to; previews are fetched for it.
    pub answer_project: String,
    pending_project: String,
    generation: u64,
}

impl AskState {
    /// Enter Submitting for `project_id`; clears the rendered answer and
    /// returns the generation the in-flight request must present to
    /// [`Self::complete`].
    pub fn begin(&mut self, project_id: &str) -> u64 {
        self.generation += 1;
        self.submitting = true;
        self.answer = None;
        self.pending_project = project_id.to_owned();
        self.status = Some(StatusMessage::info("Running retrieval…"));
        self.generation
    }

    /// Leave Submitting with the request's outcome. Stale generations are
    /// discarded; returns whether the result was applied as a success.
    pub fn complete(&mut self, generation: u64, result: Result<AnswerPayload, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.submitting = false;
        match result {
            Ok(payload) => {
                self.answer = Some(payload);
                self.answer_project = std::mem::take(&mut self.pending_project);
                self.status = Some(StatusMessage::success("Answer ready."));
                true
            }
            Err(message) => {
                self.status = Some(StatusMessage::error(format!("Query failed: {message}")));
                false
            }
        }
    }

    /// Local validation failure: surface the message without entering
    /// Submitting.
    pub fn fail_local(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::error(message));
    }
}

/// Answer body, defaulting when the backend returned none.
pub fn answer_text(payload: &AnswerPayload) -> &str {
    payload
        .answer
        .as_deref()
        .filter(|answer| !answer.is_empty())
        .unwrap_or("No answer returned.")
}

/// `"{source} p.{page} (score {s:.2})"`, with `n/a` for an absent score.
pub fn citation_label(citation: &Citation) -> String {
    let score = citation
        .score
        .map_or_else(|| "n/a".to_owned(), |score| format!("{score:.2}"));
    format!("{} p.{} (score {score})", citation.source, citation.page)
}

/// Footnote for the retrieval breadth, when the backend reports it.
pub fn used_chunks_label(payload: &AnswerPayload) -> Option<String> {
    payload
        .used_chunks
        .map(|count| format!("Used {count} chunks."))
}
