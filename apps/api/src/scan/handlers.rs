use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::scan::{extract, run_scan, ScanReport};
use crate::state::AppState;

/// POST /api/v1/scan
///
/// Multipart upload: a `resume` file part (PDF) and a `job_description`
/// text part. Unknown parts are ignored.
pub async fn handle_scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanReport>, AppError> {
    let mut resume: Option<(Bytes, String)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        match field.name() {
            Some("resume") => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
                resume = Some((data, content_type));
            }
            Some("job_description") => {
                job_description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Multipart(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let (bytes, content_type) =
        resume.ok_or_else(|| AppError::InvalidInput("missing 'resume' file part".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::InvalidInput("missing 'job_description' part".to_string()))?;

    let resume_text = extract::extract_text(&bytes, &content_type, state.config.max_upload_bytes)?;
    let report = run_scan(&state.taxonomy, &resume_text, &job_description)?;
    info!(
        percentage = report.percentage,
        outdated = report.outdated_tools.len(),
        "scan completed"
    );
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct ScanTextRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// POST /api/v1/scan/text
///
/// Raw-text variant for callers that already have the résumé as plain text.
pub async fn handle_scan_text(
    State(state): State<AppState>,
    Json(req): Json<ScanTextRequest>,
) -> Result<Json<ScanReport>, AppError> {
    let report = run_scan(&state.taxonomy, &req.resume_text, &req.job_description)?;
    info!(percentage = report.percentage, "text scan completed");
    Ok(Json(report))
}
