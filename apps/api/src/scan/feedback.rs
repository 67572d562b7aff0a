//! Feedback Composer — turns a `MatchResult` into sectioned prose feedback,
//! learning-resource links, and modern-alternative suggestions.
//!
//! Pure text templating: deterministic given a `MatchResult`, no external
//! calls. A score of 70 or above routes to the strengths branch; anything
//! below gets per-category improvement advice plus the fixed general blocks
//! and the curated résumé-builder resources.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::scan::scorer::MatchResult;
use crate::scan::taxonomy::KeywordTaxonomy;

/// Inclusive threshold for the strengths branch.
pub const STRONG_MATCH_THRESHOLD: u32 = 70;

/// One block of feedback prose, labeled with the section it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackBlock {
    pub section: String,
    pub message: String,
}

/// External learning/résumé-building resource.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

/// Composed feedback for one scan.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackReport {
    pub score: u32,
    pub feedback: Vec<FeedbackBlock>,
    pub websites: Vec<Resource>,
    pub suggested_alternatives: BTreeMap<String, String>,
}

const RESUME_RESOURCES: &[(&str, &str)] = &[
    ("Resume Worded", "https://resumeworded.com"),
    ("Zety Resume Builder", "https://zety.com/resume-builder"),
    ("Canva Resume Templates", "https://www.canva.com/resumes/templates/"),
    ("Jobscan ATS Checker", "https://www.jobscan.co"),
];

const GENERAL_ADVICE: &[(&str, &str)] = &[
    (
        "general",
        "Avoid vague descriptions of your work. Replace phrases like 'worked on' or \
         'helped with' with concrete statements of what you built and what changed \
         because of it.",
    ),
    (
        "general",
        "Recruiters look for proof, not claims. Add a projects section with two or \
         three things you actually built, each with a link and a one-line outcome.",
    ),
    (
        "general",
        "If your experience section is thin, lean on internships, freelance work, \
         open-source contributions, or coursework projects. Relevant unpaid work \
         counts; an empty section does not.",
    ),
];

/// Composes the full feedback report from a scoring result.
pub fn compose_feedback(taxonomy: &KeywordTaxonomy, result: &MatchResult) -> FeedbackReport {
    let mut feedback = Vec::new();
    let mut websites = Vec::new();

    if result.percentage >= STRONG_MATCH_THRESHOLD {
        for (category, keywords) in &result.matched_keywords {
            feedback.push(FeedbackBlock {
                section: format!("strengths:{category}"),
                message: format!(
                    "Strong {category} coverage: your résumé already mentions {}. Keep these \
                     near the top so screening software sees them early.",
                    keywords.join(", ")
                ),
            });
        }
        feedback.push(FeedbackBlock {
            section: "tips".to_string(),
            message: "Quantify your achievements: numbers, percentages, and time saved make \
                      every bullet stronger."
                .to_string(),
        });
        feedback.push(FeedbackBlock {
            section: "tips".to_string(),
            message: "Link a portfolio or GitHub profile so reviewers can verify the skills \
                      you list."
                .to_string(),
        });
        feedback.push(FeedbackBlock {
            section: "tips".to_string(),
            message: "Keep formatting ATS-friendly: single column, standard section headings, \
                      no tables or images."
                .to_string(),
        });
    } else {
        for (category, keywords) in &result.missing_keywords {
            feedback.push(FeedbackBlock {
                section: format!("improvement:{category}"),
                message: improvement_advice(category, keywords),
            });
        }
        for (section, message) in GENERAL_ADVICE {
            feedback.push(FeedbackBlock {
                section: section.to_string(),
                message: message.to_string(),
            });
        }
        websites = RESUME_RESOURCES
            .iter()
            .map(|(name, url)| Resource {
                name: name.to_string(),
                url: url.to_string(),
            })
            .collect();
    }

    // Outdated tooling is called out in both branches.
    let mut suggested_alternatives = BTreeMap::new();
    if !result.outdated_tools.is_empty() {
        for tool in &result.outdated_tools {
            if let Some(alt) = taxonomy.suggested_alternative(tool) {
                suggested_alternatives.insert(tool.clone(), alt.to_string());
            }
        }
        feedback.push(FeedbackBlock {
            section: "outdated".to_string(),
            message: format!(
                "Your résumé leans on dated tooling: {}. Keep the experience listed, but \
                 pair each with a modern equivalent ({}).",
                result.outdated_tools.join(", "),
                suggested_alternatives
                    .iter()
                    .map(|(tool, alt)| format!("{tool} → {alt}"))
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
        });
    }

    FeedbackReport {
        score: result.percentage,
        feedback,
        websites,
        suggested_alternatives,
    }
}

/// Category-specific improvement template for missing keywords.
fn improvement_advice(category: &str, missing: &[String]) -> String {
    let list = missing.join(", ");
    match category {
        "frontend" => format!(
            "The posting asks for frontend skills your résumé does not mention: {list}. \
             Build a small interface with them and link it; MDN and the official docs \
             are enough to get a first project running."
        ),
        "backend" => format!(
            "Backend keywords from the posting are missing: {list}. Add a service or API \
             project that uses them, and mention deployment details, since employers \
             read those as production experience."
        ),
        "ai" => format!(
            "The role expects AI/ML experience you have not listed: {list}. A notebook \
             on a public dataset, pushed to GitHub with a short write-up, is the \
             fastest credible way to show it."
        ),
        "mobile" => format!(
            "Mobile development keywords are missing: {list}. Ship even a small app to \
             a store or an internal test track and describe it; reviewers weight \
             shipped apps heavily."
        ),
        _ => format!(
            "The posting mentions {list}, which your résumé does not. Add concrete \
             experience with them, or a project that demonstrates the same skills."
        ),
    }
}
