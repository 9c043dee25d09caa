#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::util::storage::{API_BASE_KEY, KeyValueStore, PROJECT_ID_KEY};

/// Built-in API base used when neither a query override nor a persisted
/// value is present. Overridable at compile time via `DOCPILOT_API_BASE`.
pub const DEFAULT_API_BASE: &str = match option_env!("DOCPILOT_API_BASE") {
    Some(value) => value,
    None => "http://localhost:8000",
};

/// Trim whitespace and strip a single trailing slash. Empty in, empty out.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_owned()
}

/// Accepts `scheme://authority[...]` with an alphabetic-led scheme and a
/// non-empty remainder. Deliberately looser than a full URL parse; it gates
/// obviously malformed input the way the original page's `new URL` check did
/// for http(s) API bases.
pub fn is_absolute_url(candidate: &str) -> bool {
    let Some((scheme, rest)) = candidate.split_once("://") else {
        return false;
    };
    !scheme.is_empty()
        && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
}

/// Process-wide settings shared by every panel. The project id is a single
/// field read and written by both the ingest and ask forms, so the two can
/// never drift apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub api_base: String,
    pub project_id: String,
}

impl SettingsState {
    pub fn has_api_base(&self) -> bool {
        !self.api_base.is_empty()
    }

    /// Resolve the startup API base: query override, then persisted value,
    /// then [`DEFAULT_API_BASE`]. An invalid candidate falls back to the
    /// default instead of failing startup.
    pub fn resolve_startup_base(query_override: Option<&str>, stored: Option<&str>) -> String {
        let candidate = query_override
            .map(normalize_base_url)
            .filter(|base| !base.is_empty())
            .or_else(|| {
                stored
                    .map(normalize_base_url)
                    .filter(|base| !base.is_empty())
            })
            .unwrap_or_else(|| normalize_base_url(DEFAULT_API_BASE));
        if is_absolute_url(&candidate) {
            candidate
        } else {
            normalize_base_url(DEFAULT_API_BASE)
        }
    }

    /// Apply a user-entered API base. Empty input clears the configured base
    /// and its persisted value; invalid input leaves everything unchanged.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the candidate is not an absolute
    /// URL.
    pub fn set_api_base(
        &mut self,
        candidate: &str,
        store: &mut impl KeyValueStore,
    ) -> Result<(), String> {
        let normalized = normalize_base_url(candidate);
        if normalized.is_empty() {
            self.api_base.clear();
            store.remove(API_BASE_KEY);
            return Ok(());
        }
        if !is_absolute_url(&normalized) {
            return Err("Enter a full URL including http(s)://".to_owned());
        }
        store.set(API_BASE_KEY, &normalized);
        self.api_base = normalized;
        Ok(())
    }

    /// Set the shared project id from either form (or an ingest receipt).
    /// A blanked value also removes the persisted key, so a stale id cannot
    /// resurface after a reload.
    pub fn set_project_id(&mut self, value: &str, store: &mut impl KeyValueStore) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            store.remove(PROJECT_ID_KEY);
        } else {
            store.set(PROJECT_ID_KEY, trimmed);
        }
        self.project_id = trimmed.to_owned();
    }
}
