//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a missing or expired
//! report degrades to a message on the dashboard.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use vision::AnalysisReport;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Analysis not found. It may have expired; please upload the image again.")]
    NotFound,
    #[error("report request failed: {0}")]
    Status(u16),
    #[error("report request failed: {0}")]
    Network(String),
    #[error("reports are only fetched in the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn report_endpoint(id: &str) -> String {
    format!("/api/analyses/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> ApiError {
    if status == 404 { ApiError::NotFound } else { ApiError::Status(status) }
}

/// Fetch a stored report from `/api/analyses/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for an unknown or evicted id, otherwise a
/// status or network error.
pub async fn fetch_report(id: &str) -> Result<AnalysisReport, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&report_endpoint(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<AnalysisReport>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
