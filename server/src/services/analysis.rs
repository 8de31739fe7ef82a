//! Analysis service: upload → features → diagnosis → guidance → report.
//!
//! DESIGN
//! ======
//! Decoding and feature extraction are CPU-bound and run on the blocking
//! pool. An image that cannot be decoded is not an error: it becomes the
//! `Unprocessable` diagnosis and still produces a report. Only a missing
//! classifier, an invalid upload, or an internal failure reject the request.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uuid::Uuid;
use vision::model::{CentroidModel, ModelError};
use vision::{AnalysisReport, Diagnosis, features, guidance as rules};

use super::guidance;
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("No file part")]
    NoFilePart,
    #[error("No selected file")]
    NoSelectedFile,
    #[error("Uploaded file is empty")]
    EmptyFile,
    #[error("File size must be less than 10MB")]
    TooLarge,
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error("classifier model not loaded")]
    ModelUnavailable,
    #[error("classifier failed: {0}")]
    Model(#[from] ModelError),
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
    #[error("analysis task failed: {0}")]
    Task(String),
}

/// One uploaded file as received from the multipart `file` part.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Run the full pipeline and store the resulting report.
///
/// # Errors
///
/// Returns an error for an invalid upload, a missing classifier, or a
/// storage or classifier failure.
pub async fn analyze_upload(state: &AppState, upload: Upload) -> Result<AnalysisReport, AnalyzeError> {
    validate_upload(&upload)?;
    let model = state
        .classifier
        .clone()
        .ok_or(AnalyzeError::ModelUnavailable)?;

    let id = Uuid::new_v4().to_string();
    let size = upload.bytes.len();
    if let Some(dir) = &state.upload_dir {
        let path = save_upload(dir, &id, &upload).await?;
        info!(report_id = %id, path = %path.display(), "upload stored");
    }

    let Upload { file_name, content_type, bytes } = upload;
    let diagnosis = tokio::task::spawn_blocking(move || classify_bytes(&model, &bytes))
        .await
        .map_err(|e| AnalyzeError::Task(e.to_string()))??;

    let guidance = guidance::generate(state.llm.as_deref(), diagnosis).await;
    let report = build_report(id, file_name, diagnosis, guidance);
    state.reports.insert(report.clone()).await;
    let stored = state.reports.len().await;

    info!(
        report_id = %report.id,
        %diagnosis,
        bytes = size,
        content_type = content_type.as_deref().unwrap_or("unknown"),
        stored,
        "analysis complete"
    );
    Ok(report)
}

/// Check the upload before any work is done.
///
/// # Errors
///
/// Returns the first rule the upload breaks.
pub fn validate_upload(upload: &Upload) -> Result<(), AnalyzeError> {
    if upload.file_name.trim().is_empty() {
        return Err(AnalyzeError::NoSelectedFile);
    }
    if !vision::within_upload_limit(upload.bytes.len() as u64) {
        return Err(AnalyzeError::TooLarge);
    }
    if upload.bytes.is_empty() {
        return Err(AnalyzeError::EmptyFile);
    }
    Ok(())
}

/// Diagnose raw image bytes. Undecodable input yields `Unprocessable`.
///
/// # Errors
///
/// Returns [`ModelError`] if the feature vector does not fit the model.
pub fn classify_bytes(model: &CentroidModel, bytes: &[u8]) -> Result<Diagnosis, ModelError> {
    match features::extract_from_bytes(bytes) {
        Ok(vector) => Ok(model.predict(&vector)?.diagnosis),
        Err(e) => {
            warn!(error = %e, "image could not be processed");
            Ok(Diagnosis::Unprocessable)
        }
    }
}

#[must_use]
pub fn build_report(
    id: String,
    file_name: String,
    diagnosis: Diagnosis,
    guidance: rules::Guidance,
) -> AnalysisReport {
    AnalysisReport {
        id,
        file_name,
        diagnosis,
        nurse_plan: guidance.nurse_plan,
        parent_message: guidance.parent_message,
        video_id: guidance.video_id,
        considerations: rules::considerations(diagnosis)
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Write the upload as `<id>.<ext>` inside `dir`. The client file name only
/// contributes a sanitized extension.
async fn save_upload(dir: &Path, id: &str, upload: &Upload) -> Result<PathBuf, AnalyzeError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(stored_file_name(id, &upload.file_name));
    tokio::fs::write(&path, &upload.bytes).await?;
    Ok(path)
}

#[must_use]
pub fn stored_file_name(id: &str, client_name: &str) -> String {
    let ext = Path::new(client_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 5 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map_or_else(|| "bin".to_owned(), str::to_ascii_lowercase);
    format!("{id}.{ext}")
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
