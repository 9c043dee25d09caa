//! Startup query-string parsing.
//!
//! The page accepts an `api` query parameter that overrides the persisted
//! API base for the session, e.g. `index.html?api=http://10.0.0.5:8000`.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct StartupQuery {
    #[serde(default)]
    api: Option<String>,
}

/// Extract the `api` override from a raw query string (with or without the
/// leading `?`). Returns `None` when the parameter is absent or blank.
pub fn api_override(search: &str) -> Option<String> {
    let query: StartupQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query
        .api
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Read the `api` override from the current window location.
/// Returns `None` on the server / native builds.
pub fn current_api_override() -> Option<String> {
    #[cfg(feature = "web")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        api_override(&search)
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}
