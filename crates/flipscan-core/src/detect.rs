//! Best-effort brand detection from sample titles.
//!
//! A keyword-frequency heuristic, not a classifier with guarantees: it counts
//! case-insensitive occurrences of each brand's keyword variants across the
//! concatenated sample and picks the strictly-highest count. Ties and
//! all-zero counts return [`Detection::Ambiguous`]; callers then apply every
//! registered brand's patterns rather than guessing.

use crate::registry::Registry;
use crate::Brand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Brand(Brand),
    Ambiguous,
}

/// Detects the dominant brand across `sample_titles`.
#[must_use]
pub fn detect<S: AsRef<str>>(sample_titles: &[S], registry: &Registry) -> Detection {
    let sample = sample_titles
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    let counts: Vec<(Brand, usize)> = registry
        .profiles()
        .iter()
        .map(|profile| {
            let hits = profile
                .keywords
                .iter()
                .map(|keyword| sample.matches(&keyword.to_uppercase()).count())
                .sum();
            (profile.brand, hits)
        })
        .collect();

    let Some(max) = counts.iter().map(|(_, n)| *n).max() else {
        return Detection::Ambiguous;
    };
    if max == 0 {
        return Detection::Ambiguous;
    }

    let mut leaders = counts.iter().filter(|(_, n)| *n == max);
    let Some((leader, _)) = leaders.next() else {
        return Detection::Ambiguous;
    };
    if leaders.next().is_some() {
        return Detection::Ambiguous;
    }
    Detection::Brand(*leader)
}
