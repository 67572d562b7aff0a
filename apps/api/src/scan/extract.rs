//! Document Text Extractor — converts an uploaded document into plain text
//! for keyword search.
//!
//! Only PDF is supported. DOCX uploads are recognized and rejected with an
//! explicit message; everything else is a plain `UnsupportedFormat`. The
//! size cap is enforced before any parsing happens.

use std::io::Write;

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extracts UTF-8 text from `bytes` declared as `content_type`.
///
/// The extraction library reads from a path, so the bytes go through a
/// `NamedTempFile`; its `Drop` removes the file on every exit path,
/// including the error ones. The returned text may be empty for image-only
/// PDFs with no text layer — callers treat that as invalid input, not as
/// an extraction failure.
pub fn extract_text(bytes: &[u8], content_type: &str, max_bytes: usize) -> Result<String, AppError> {
    // Strip any parameters (e.g. "; charset=...") before comparing.
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        PDF_MIME => {}
        DOCX_MIME => {
            return Err(AppError::UnsupportedFormat(
                "DOCX résumés are not yet supported; please upload a PDF".to_string(),
            ))
        }
        other => {
            return Err(AppError::UnsupportedFormat(format!(
                "unsupported document type '{other}'; please upload a PDF"
            )))
        }
    }

    if bytes.len() > max_bytes {
        return Err(AppError::SizeLimitExceeded {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let mut tmp = NamedTempFile::new()
        .context("failed to create temp file for extraction")
        .map_err(AppError::Internal)?;
    tmp.write_all(bytes)
        .context("failed to write upload to temp file")
        .map_err(AppError::Internal)?;

    pdf_extract::extract_text(tmp.path())
        .map_err(|e| AppError::Extraction(format!("could not read PDF: {e}")))
}
