//! HTTP calls to the detection backend and the reformulation service.
//!
//! Both calls race against a timeout so a hung backend never leaves the UI
//! stuck in a loading state. Errors come back as user-presentable strings:
//! the server's `error` field verbatim when it sends one, otherwise a
//! generic fallback per failure class.

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use shared::{DetectionResult, ErrorResponse, ReformulateRequest};

const DETECT_TIMEOUT_MS: u32 = 60_000;
const REFORMULATE_TIMEOUT_MS: u32 = 30_000;

pub fn detect_base_url() -> &'static str {
    option_env!("DETECT_API_URL").unwrap_or("http://localhost:5000")
}

pub fn reformulate_base_url() -> &'static str {
    option_env!("REFORMULATE_API_URL").unwrap_or("http://127.0.0.1:8081/api")
}

/// Uploads one PDF as multipart field `file` and parses the analysis payload.
pub async fn detect(file: GlooFile) -> Result<DetectionResult, String> {
    let form_data =
        web_sys::FormData::new().map_err(|_| "Failed to build upload form".to_string())?;
    form_data
        .append_with_blob("file", file.as_ref())
        .map_err(|_| "Failed to attach file to upload".to_string())?;

    let request = Request::post(&format!("{}/detect", detect_base_url()))
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {e}"))?;

    let response = with_timeout(DETECT_TIMEOUT_MS, request.send()).await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }

    response
        .json::<DetectionResult>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

/// Wire shape of the reformulation endpoint: either a `reformulations` list
/// or a singular `reformulated` value.
#[derive(Deserialize)]
struct RawReformulateResponse {
    #[serde(default)]
    reformulations: Option<Vec<String>>,
    #[serde(default)]
    reformulated: Option<String>,
}

pub async fn reformulate(sentence: String) -> Result<Vec<String>, String> {
    let request = Request::post(&format!("{}/reformulate", reformulate_base_url()))
        .json(&ReformulateRequest { sentence })
        .map_err(|e| format!("Failed to build request: {e}"))?;

    let response = with_timeout(REFORMULATE_TIMEOUT_MS, request.send()).await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }

    let raw: RawReformulateResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))?;
    Ok(normalize_reformulations(raw.reformulations, raw.reformulated))
}

/// A singular `reformulated` value becomes a one-element list; an explicit
/// `reformulations` list is taken as-is, even when empty.
pub fn normalize_reformulations(
    reformulations: Option<Vec<String>>,
    reformulated: Option<String>,
) -> Vec<String> {
    match reformulations {
        Some(list) => list,
        None => reformulated.into_iter().collect(),
    }
}

async fn with_timeout<T>(
    ms: u32,
    fut: impl Future<Output = Result<T, gloo_net::Error>>,
) -> Result<T, String> {
    let fut = pin!(fut);
    let timeout = pin!(TimeoutFuture::new(ms));
    match select(fut, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| format!("Network error: {e}")),
        Either::Right(_) => Err("The request timed out. Please try again.".to_string()),
    }
}

async fn server_error(response: &Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => format!("Server error: {}", response.status()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_passes_through_in_order() {
        let out = normalize_reformulations(
            Some(vec!["A".into(), "B".into(), "C".into()]),
            None,
        );
        assert_eq!(out, vec!["A", "B", "C"]);
    }

    #[test]
    fn singular_value_normalizes_to_one_entry() {
        let out = normalize_reformulations(None, Some("X".into()));
        assert_eq!(out, vec!["X"]);
    }

    #[test]
    fn explicit_empty_list_stays_empty() {
        let out = normalize_reformulations(Some(vec![]), Some("X".into()));
        assert!(out.is_empty());
    }

    #[test]
    fn neither_field_yields_nothing() {
        assert!(normalize_reformulations(None, None).is_empty());
    }
}
