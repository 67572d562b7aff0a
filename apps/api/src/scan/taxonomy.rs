//! Keyword Taxonomy — the categorized keyword dictionary the scorer matches
//! against, plus the legacy-tool mapping used by the feedback composer.
//!
//! The taxonomy is data, not logic: it is loaded once at startup from a JSON
//! resource (embedded default, or `TAXONOMY_PATH` override) and shared
//! read-only via `Arc` in `AppState`. Adding a keyword or category requires
//! no code change.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Default taxonomy shipped with the binary.
pub const DEFAULT_TAXONOMY_JSON: &str = include_str!("taxonomy.json");

/// On-disk / embedded representation of the taxonomy resource.
#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    categories: BTreeMap<String, Vec<String>>,
    legacy: BTreeMap<String, String>,
}

/// Immutable categorized keyword dictionary.
///
/// A keyword may belong to more than one category (e.g. `python` is both
/// `backend` and `ai`). Every keyword is a non-empty lowercase token; this
/// is validated at load time, not assumed.
#[derive(Debug)]
pub struct KeywordTaxonomy {
    categories: BTreeMap<String, BTreeSet<String>>,
    legacy: BTreeMap<String, String>,
}

impl KeywordTaxonomy {
    /// Parses and validates a taxonomy from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: TaxonomyFile =
            serde_json::from_str(raw).context("taxonomy resource is not valid JSON")?;

        let mut categories = BTreeMap::new();
        for (category, keywords) in file.categories {
            let mut set = BTreeSet::new();
            for keyword in keywords {
                validate_keyword(&keyword, &category)?;
                if !set.insert(keyword.clone()) {
                    bail!("duplicate keyword '{keyword}' in category '{category}'");
                }
            }
            categories.insert(category, set);
        }

        for keyword in file.legacy.keys() {
            validate_keyword(keyword, "legacy")?;
        }

        Ok(Self {
            categories,
            legacy: file.legacy,
        })
    }

    /// Loads the taxonomy from `path` when given, otherwise the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read taxonomy file {}", p.display()))?;
                Self::from_json(&raw)
            }
            None => Self::from_json(DEFAULT_TAXONOMY_JSON),
        }
    }

    /// Deduplicated union of keywords across all categories.
    pub fn all_keywords(&self) -> BTreeSet<&str> {
        self.categories
            .values()
            .flat_map(|set| set.iter().map(String::as_str))
            .collect()
    }

    /// Categories a keyword belongs to (may be several, may be none).
    pub fn categories_of(&self, keyword: &str) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|(_, keywords)| keywords.contains(keyword))
            .map(|(category, _)| category.as_str())
            .collect()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Legacy keywords flagged as outdated tooling, in sorted order.
    pub fn legacy_keywords(&self) -> impl Iterator<Item = &str> {
        self.legacy.keys().map(String::as_str)
    }

    /// Suggested modern replacement for a legacy keyword, if it is on the list.
    pub fn suggested_alternative(&self, keyword: &str) -> Option<&str> {
        self.legacy.get(keyword).map(String::as_str)
    }
}

fn validate_keyword(keyword: &str, category: &str) -> Result<()> {
    if keyword.trim().is_empty() {
        bail!("empty keyword in category '{category}'");
    }
    if keyword != keyword.to_lowercase() {
        bail!("keyword '{keyword}' in category '{category}' must be lowercase");
    }
    Ok(())
}
