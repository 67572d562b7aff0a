// CV/JD matching engine: extraction, keyword taxonomy, scoring, feedback.
// The engine is a pure request/response transformation; it knows nothing
// about users, jobs, or persistence.

pub mod extract;
pub mod feedback;
pub mod handlers;
pub mod scorer;
pub mod taxonomy;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::AppError;
use crate::scan::feedback::{compose_feedback, FeedbackBlock, Resource};
use crate::scan::scorer::score_match;
use crate::scan::taxonomy::KeywordTaxonomy;

/// Canonical scan response returned by both scan entry points.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub percentage: u32,
    pub matched_keywords: BTreeMap<String, Vec<String>>,
    pub missing_keywords: BTreeMap<String, Vec<String>>,
    pub outdated_tools: Vec<String>,
    pub feedback: Vec<FeedbackBlock>,
    pub websites: Vec<Resource>,
    pub suggested_alternatives: BTreeMap<String, String>,
}

/// Runs one scan: validate → score → compose.
///
/// Empty inputs (after trimming) are an `InvalidInput` error, never a zero
/// score. An image-only PDF that extracted to nothing lands here too.
pub fn run_scan(
    taxonomy: &KeywordTaxonomy,
    resume_text: &str,
    job_description: &str,
) -> Result<ScanReport, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "résumé text is empty; the document may have no extractable text layer".to_string(),
        ));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "job description must not be empty".to_string(),
        ));
    }

    let result = score_match(taxonomy, job_description, resume_text);
    let report = compose_feedback(taxonomy, &result);

    Ok(ScanReport {
        percentage: result.percentage,
        matched_keywords: result.matched_keywords,
        missing_keywords: result.missing_keywords,
        outdated_tools: result.outdated_tools,
        feedback: report.feedback,
        websites: report.websites,
        suggested_alternatives: report.suggested_alternatives,
    })
}
