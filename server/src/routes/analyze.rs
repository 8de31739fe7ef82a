//! Analysis upload and report routes.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use vision::AnalysisReport;

use crate::services::analysis::{self, AnalyzeError, Upload};
use crate::state::AppState;

/// Multipart field carrying the image.
pub const FILE_FIELD: &str = "file";

/// `POST /analyze`: native form target. Redirects to the dashboard report.
pub async fn analyze_form(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, (StatusCode, String)> {
    let upload = read_upload(&mut multipart).await.map_err(reject)?;
    let report = analysis::analyze_upload(&state, upload)
        .await
        .map_err(reject)?;
    Ok(Redirect::to(&format!("/analyze/{}", report.id)))
}

/// `POST /api/analyze`: same pipeline, report as JSON.
pub async fn analyze_json(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, (StatusCode, String)> {
    let upload = read_upload(&mut multipart).await.map_err(reject)?;
    let report = analysis::analyze_upload(&state, upload)
        .await
        .map_err(reject)?;
    Ok(Json(report))
}

/// `GET /api/analyses/:id`: fetch a stored report.
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisReport>, StatusCode> {
    state
        .reports
        .get(&id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Pull the first `file` part out of the body. Other parts are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AnalyzeError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(Upload { file_name, content_type, bytes: bytes.to_vec() });
    }
    Err(AnalyzeError::NoFilePart)
}

fn multipart_error(err: MultipartError) -> AnalyzeError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AnalyzeError::TooLarge
    } else {
        AnalyzeError::Multipart(err.body_text())
    }
}

fn reject(err: AnalyzeError) -> (StatusCode, String) {
    let status = analyze_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "analysis failed");
    } else {
        tracing::info!(error = %err, %status, "analysis rejected");
    }
    (status, err.to_string())
}

pub(crate) fn analyze_error_to_status(err: &AnalyzeError) -> StatusCode {
    match err {
        AnalyzeError::NoFilePart | AnalyzeError::NoSelectedFile | AnalyzeError::EmptyFile | AnalyzeError::Multipart(_) => {
            StatusCode::BAD_REQUEST
        }
        AnalyzeError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        AnalyzeError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        AnalyzeError::Model(_) | AnalyzeError::Io(_) | AnalyzeError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
