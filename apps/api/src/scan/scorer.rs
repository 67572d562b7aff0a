//! Match Scorer — computes the quantitative match between a job description
//! and a résumé over the taxonomy vocabulary.
//!
//! Matching is lowercase substring containment, not word-boundary
//! tokenization. That means `java` also hits inside `javascript`; a known
//! false-positive source, kept because the feedback thresholds and the
//! percentage ladder were tuned against it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::scan::taxonomy::KeywordTaxonomy;

/// Result of scoring one résumé against one job description.
///
/// `matched_keywords` and `missing_keywords` only carry non-empty categories;
/// a keyword in several categories is listed under each of them. All maps and
/// lists are sorted, so identical inputs always produce identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Match percentage on the 5-point ladder: 0 when the job description
    /// contains no taxonomy keywords, otherwise clamped to [10, 100].
    pub percentage: u32,
    pub matched_keywords: BTreeMap<String, Vec<String>>,
    pub missing_keywords: BTreeMap<String, Vec<String>>,
    /// Legacy tools found in the résumé, whether or not the job asks for them.
    pub outdated_tools: Vec<String>,
    pub matched_count: usize,
    pub job_keyword_count: usize,
}

/// Scores `resume_text` against `job_description`. Pure and total: inputs are
/// validated upstream, so there is no failure path here.
pub fn score_match(
    taxonomy: &KeywordTaxonomy,
    job_description: &str,
    resume_text: &str,
) -> MatchResult {
    let job_lower = job_description.to_lowercase();
    let resume_lower = resume_text.to_lowercase();

    let mut matched_keywords: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut missing_keywords: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut matched_count = 0;
    let mut job_keyword_count = 0;

    // all_keywords() is a sorted set, so category lists come out sorted too.
    for keyword in taxonomy.all_keywords() {
        let in_job = job_lower.contains(keyword);
        if !in_job {
            continue;
        }
        job_keyword_count += 1;

        let bucket = if resume_lower.contains(keyword) {
            matched_count += 1;
            &mut matched_keywords
        } else {
            &mut missing_keywords
        };
        for category in taxonomy.categories_of(keyword) {
            bucket
                .entry(category.to_string())
                .or_default()
                .push(keyword.to_string());
        }
    }

    let outdated_tools: Vec<String> = taxonomy
        .legacy_keywords()
        .filter(|k| resume_lower.contains(*k))
        .map(String::from)
        .collect();

    MatchResult {
        percentage: ladder_percentage(matched_count, job_keyword_count),
        matched_keywords,
        missing_keywords,
        outdated_tools,
        matched_count,
        job_keyword_count,
    }
}

/// Rounds the raw match ratio onto the presentation ladder: nearest multiple
/// of 5, clamped to [10, 100]. A job description with no taxonomy keywords
/// scores a hard 0 and never reaches the ladder.
fn ladder_percentage(matched_count: usize, job_keyword_count: usize) -> u32 {
    if job_keyword_count == 0 {
        return 0;
    }
    let raw = matched_count as f64 / job_keyword_count as f64 * 100.0;
    let rounded = (raw / 5.0).round() as u32 * 5;
    rounded.clamp(10, 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::taxonomy::{KeywordTaxonomy, DEFAULT_TAXONOMY_JSON};

    fn taxonomy() -> KeywordTaxonomy {
        KeywordTaxonomy::from_json(DEFAULT_TAXONOMY_JSON).unwrap()
    }

    fn all_listed(result_map: &BTreeMap<String, Vec<String>>) -> Vec<&str> {
        result_map
            .values()
            .flat_map(|v| v.iter().map(String::as_str))
            .collect()
    }

    #[test]
    fn test_scenario_react_matched_node_missing() {
        let tax = taxonomy();
        let result = score_match(
            &tax,
            "We need React and Node.js experience",
            "Built apps with React and Express",
        );

        let matched = all_listed(&result.matched_keywords);
        let missing = all_listed(&result.missing_keywords);
        assert!(matched.contains(&"react"));
        // "Node.js" never appears in the résumé as written, so it is missing.
        assert!(missing.contains(&"node.js"));
        assert!(!matched.contains(&"node.js"));
        assert_eq!(result.job_keyword_count, 2);
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.percentage, 50);
    }

    #[test]
    fn test_matched_and_missing_are_disjoint() {
        let tax = taxonomy();
        let result = score_match(
            &tax,
            "react, vue, docker and flutter experience wanted",
            "shipped a react frontend in docker",
        );
        let matched = all_listed(&result.matched_keywords);
        let missing = all_listed(&result.missing_keywords);
        for k in &matched {
            assert!(!missing.contains(k), "{k} in both matched and missing");
        }
    }

    #[test]
    fn test_no_taxonomy_keywords_in_job_scores_zero() {
        let tax = taxonomy();
        let result = score_match(
            &tax,
            "Looking for a friendly office manager",
            "python react docker kubernetes",
        );
        assert_eq!(result.job_keyword_count, 0);
        assert_eq!(result.percentage, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume_floors_to_lowest_ladder_value() {
        let tax = taxonomy();
        let result = score_match(&tax, "react and vue wanted", "");
        assert_eq!(result.matched_count, 0);
        assert_eq!(result.percentage, 10);
    }

    #[test]
    fn test_percentage_monotonic_in_matched_count() {
        let tax = taxonomy();
        let jd = "We want react, vue, docker and flutter.";
        let resumes = [
            "",
            "react",
            "react and vue",
            "react, vue and docker",
            "react, vue, docker and flutter",
        ];
        let mut last = 0;
        for resume in resumes {
            let result = score_match(&tax, jd, resume);
            assert_eq!(result.job_keyword_count, 4);
            assert!(
                result.percentage >= last,
                "percentage dropped to {} for resume '{resume}'",
                result.percentage
            );
            last = result.percentage;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let tax = taxonomy();
        let jd = "react, python, docker, machine learning";
        let resume = "python and docker, some jquery";
        let first = score_match(&tax, jd, resume);
        let second = score_match(&tax, jd, resume);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let tax = taxonomy();
        let result = score_match(&tax, "REACT developer wanted", "I know React well");
        assert_eq!(result.matched_count, 1);
        assert!(all_listed(&result.matched_keywords).contains(&"react"));
    }

    #[test]
    fn test_outdated_jquery_flagged_even_when_job_wants_it() {
        let tax = taxonomy();
        let result = score_match(
            &tax,
            "Maintain our jQuery widgets",
            "Five years of jQuery plugins",
        );
        assert_eq!(result.outdated_tools, vec!["jquery"]);
        // Still counts toward the match like any other keyword.
        assert!(all_listed(&result.matched_keywords).contains(&"jquery"));
    }

    #[test]
    fn test_outdated_detection_ignores_job_description() {
        let tax = taxonomy();
        let result = score_match(&tax, "react developer", "backbone and bower veteran");
        assert!(result.outdated_tools.contains(&"backbone".to_string()));
        assert!(result.outdated_tools.contains(&"bower".to_string()));
    }

    #[test]
    fn test_shared_keyword_listed_under_every_category() {
        let tax = taxonomy();
        let result = score_match(&tax, "python shop", "python daily");
        assert!(result.matched_keywords["backend"].contains(&"python".to_string()));
        assert!(result.matched_keywords["ai"].contains(&"python".to_string()));
        // One keyword in the job, matched once.
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.job_keyword_count, 1);
    }

    #[test]
    fn test_substring_matching_java_inside_javascript() {
        // Inherited behavior: substring containment, no word boundaries.
        let tax = taxonomy();
        let result = score_match(&tax, "javascript role", "javascript only");
        let matched = all_listed(&result.matched_keywords);
        assert!(matched.contains(&"javascript"));
        assert!(matched.contains(&"java"));
    }

    #[test]
    fn test_ladder_rounds_to_nearest_five() {
        // 1/3 = 33.33 → 35, 2/3 = 66.67 → 65
        assert_eq!(ladder_percentage(1, 3), 35);
        assert_eq!(ladder_percentage(2, 3), 65);
    }

    #[test]
    fn test_ladder_clamps_low_scores_to_ten() {
        assert_eq!(ladder_percentage(0, 8), 10);
        assert_eq!(ladder_percentage(1, 50), 10);
    }

    #[test]
    fn test_ladder_full_match_is_hundred() {
        assert_eq!(ladder_percentage(7, 7), 100);
    }

    #[test]
    fn test_ladder_zero_job_keywords_is_zero() {
        assert_eq!(ladder_percentage(0, 0), 0);
    }
}
