//! HTTP helpers for the Docpilot backend API.
//!
//! Browser build (`web`): real requests via `gloo-net`. Native builds get
//! stubs returning an error, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed request degrades to an inline
//! status message instead of a panic. Non-2xx responses carry
//! `"{status} {status text}: {body}"`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnswerPayload, AskRequest, HealthSnapshot, ProjectSummary};
#[cfg(feature = "web")]
use super::types::IngestReceipt;

#[cfg(not(feature = "web"))]
const NOT_BROWSER: &str = "not available outside the browser";

#[cfg(feature = "web")]
async fn read_json<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, String> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!(
            "{} {}: {}",
            response.status(),
            response.status_text(),
            body
        ));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "web")]
async fn get_json<T: serde::de::DeserializeOwned>(base: &str, path: &str) -> Result<T, String> {
    let response = gloo_net::http::Request::get(&format!("{base}{path}"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

/// Fetch the service health snapshot from `GET /healthz`.
///
/// # Errors
///
/// Returns the transport or status error as a display string.
pub async fn fetch_health(base: &str) -> Result<HealthSnapshot, String> {
    #[cfg(feature = "web")]
    {
        get_json(base, "/healthz").await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = base;
        Err(NOT_BROWSER.to_owned())
    }
}

/// Fetch the tracked-project listing from `GET /projects`.
///
/// # Errors
///
/// Returns the transport or status error as a display string.
pub async fn fetch_projects(base: &str) -> Result<Vec<ProjectSummary>, String> {
    #[cfg(feature = "web")]
    {
        get_json(base, "/projects").await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = base;
        Err(NOT_BROWSER.to_owned())
    }
}

/// Submit a question to `POST /ask`.
///
/// # Errors
///
/// Returns the transport or status error as a display string.
pub async fn post_ask(base: &str, request: &AskRequest) -> Result<AnswerPayload, String> {
    #[cfg(feature = "web")]
    {
        let response = gloo_net::http::Request::post(&format!("{base}/ask"))
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (base, request);
        Err(NOT_BROWSER.to_owned())
    }
}

/// Upload an ingestion bundle to `POST /ingest` as multipart form data.
///
/// Parts: optional `zipfile`, optional `folder_path`, optional `project_id`,
/// and the mandatory `ocr` flag stringified as `"true"`/`"false"`.
///
/// # Errors
///
/// Returns the transport error, or the server's error body (falling back to
/// the status text) for non-2xx responses.
#[cfg(feature = "web")]
pub async fn post_ingest(
    base: &str,
    upload: Option<&web_sys::File>,
    folder_path: Option<&str>,
    project_id: Option<&str>,
    ocr: bool,
) -> Result<IngestReceipt, String> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    if let Some(file) = upload {
        form.append_with_blob_and_filename("zipfile", file, &file.name())
            .map_err(js_error)?;
    }
    if let Some(folder) = folder_path {
        form.append_with_str("folder_path", folder).map_err(js_error)?;
    }
    if let Some(project) = project_id {
        form.append_with_str("project_id", project).map_err(js_error)?;
    }
    form.append_with_str("ocr", if ocr { "true" } else { "false" })
        .map_err(js_error)?;

    let response = gloo_net::http::Request::post(&format!("{base}/ingest"))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        if body.is_empty() {
            return Err(response.status_text());
        }
        return Err(body);
    }
    response.json::<IngestReceipt>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "web")]
fn js_error(err: wasm_bindgen::JsValue) -> String {
    format!("{err:?}")
}

/// Build a `GET /page_preview` URL for a citation thumbnail. `cache_buster`
/// defeats intermediary image caching between re-asks.
pub fn preview_url(
    base: &str,
    source: &str,
    page: u64,
    project_id: &str,
    cache_buster: u64,
) -> String {
    format!(
        "{base}/page_preview?source={}&page={page}&project_id={}&t={cache_buster}",
        urlencoding::encode(source),
        urlencoding::encode(project_id),
    )
}
