//! Model-number extraction from free-text listing titles.
//!
//! A pure function of `(text, brand list, registry)`. Boilerplate suffixes
//! are stripped once, then every rule for every requested brand is matched
//! globally and case-insensitively. Absence of a match is an ordinary
//! outcome ([`ExtractionStatus::NoModel`]), never an error.

use std::collections::BTreeSet;

use crate::registry::{Registry, Render};
use crate::{Brand, CoreError};

/// Marketplace boilerplate suffixes stripped before matching, in order.
/// Mercari appends a thumbnail marker to scraped titles.
const SUFFIX_STRIP: [&str; 2] = ["のサムネイル", "サムネイル"];

/// A single pattern match with provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub brand: Brand,
    pub label: &'static str,
    /// The matched text as it appeared in the title.
    pub raw: String,
    /// The rendered, uppercased identifier.
    pub normalized: String,
    /// The title the match came from, after boilerplate stripping.
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStatus {
    Ok,
    NoModel,
}

/// The outcome of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// First match of the first rule (registry order, brand list order) that
    /// produced anything. Ambiguity is resolved by rule ordering, not by
    /// confidence scoring.
    pub extracted_model: Option<String>,
    pub status: ExtractionStatus,
    /// Every match, duplicates across rules included.
    pub candidates: Vec<Candidate>,
    /// Deduplicated, case-normalized identifier set.
    pub models: BTreeSet<String>,
}

impl ExtractionResult {
    fn no_model() -> Self {
        Self {
            extracted_model: None,
            status: ExtractionStatus::NoModel,
            candidates: Vec::new(),
            models: BTreeSet::new(),
        }
    }
}

/// Strips known boilerplate suffixes from a title. Each rule is applied once,
/// in order, not recursively.
#[must_use]
pub fn strip_boilerplate(title: &str) -> &str {
    let mut text = title.trim();
    for suffix in SUFFIX_STRIP {
        if let Some(stripped) = text.strip_suffix(suffix) {
            text = stripped.trim_end();
        }
    }
    text
}

/// Extracts model-number candidates from `text` using the rules of `brands`,
/// in the order given.
///
/// # Errors
///
/// Returns [`CoreError::UnknownBrand`] if a requested brand has no profile in
/// `registry`. No-match conditions are not errors.
pub fn extract(
    text: &str,
    brands: &[Brand],
    registry: &Registry,
) -> Result<ExtractionResult, CoreError> {
    let cleaned = strip_boilerplate(text);
    if cleaned.is_empty() {
        return Ok(ExtractionResult::no_model());
    }

    let mut candidates = Vec::new();
    let mut models = BTreeSet::new();

    for &brand in brands {
        for rule in registry.rules_for(brand)? {
            if let Some(context) = &rule.context {
                if !context.is_match(cleaned) {
                    continue;
                }
            }
            for caps in rule.regex.captures_iter(cleaned) {
                let raw = caps
                    .get(0)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                let normalized = match rule.render {
                    Render::WholeMatch => raw.to_uppercase(),
                    Render::Prefixed(prefix) => {
                        let Some(group) = caps.get(1) else { continue };
                        format!("{prefix}{}", group.as_str().to_uppercase())
                    }
                };
                models.insert(normalized.clone());
                candidates.push(Candidate {
                    brand,
                    label: rule.label,
                    raw,
                    normalized,
                    title: cleaned.to_string(),
                });
            }
        }
    }

    if candidates.is_empty() {
        return Ok(ExtractionResult::no_model());
    }

    let extracted_model = candidates.first().map(|c| c.normalized.clone());
    Ok(ExtractionResult {
        extracted_model,
        status: ExtractionStatus::Ok,
        candidates,
        models,
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
