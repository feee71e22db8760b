//! The per-brand pattern registry: ordered reference-number matching rules.
//!
//! Rules are data. Adding a brand or a sub-family touches only the tables in
//! [`Registry::builtin`] (and the keyword sets), never the extraction logic in
//! [`crate::extract`]. Ordering within a brand is the tie-break policy:
//! specific sub-family rules come first, the loose catch-alls last, and any
//! "pick one" consumer takes the first rule that produces a match.

use regex::{Regex, RegexBuilder};

use crate::{Brand, CoreError};

/// How a rule's match is rendered into a normalized identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// The whole match, uppercased.
    WholeMatch,
    /// Capture group 1, uppercased, behind a fixed prefix. Used for caliber
    /// numbers, which are written `cal.484` / `Cal 1030` in titles but
    /// normalized to `CAL.<digits>`.
    Prefixed(&'static str),
}

/// A single immutable matching rule for one brand sub-family.
#[derive(Debug)]
pub struct PatternRule {
    pub brand: Brand,
    pub label: &'static str,
    pub regex: Regex,
    pub render: Render,
    /// Whole-title condition. When set, the rule only applies to titles this
    /// regex matches somewhere. Used for loose patterns (bare 4-digit OMEGA
    /// numbers) that would be noise without brand context in the title.
    pub context: Option<Regex>,
}

impl PatternRule {
    fn new(brand: Brand, label: &'static str, pattern: &str) -> Self {
        Self::build(brand, label, pattern, Render::WholeMatch, None)
    }

    fn with_render(brand: Brand, label: &'static str, pattern: &str, render: Render) -> Self {
        Self::build(brand, label, pattern, render, None)
    }

    fn with_context(
        brand: Brand,
        label: &'static str,
        pattern: &str,
        context_pattern: &str,
    ) -> Self {
        Self::build(
            brand,
            label,
            pattern,
            Render::WholeMatch,
            Some(context_pattern),
        )
    }

    fn build(
        brand: Brand,
        label: &'static str,
        pattern: &str,
        render: Render,
        context_pattern: Option<&str>,
    ) -> Self {
        let compile = |p: &str| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("valid builtin pattern")
        };
        Self {
            brand,
            label,
            regex: compile(pattern),
            render,
            context: context_pattern.map(compile),
        }
    }
}

/// Static per-brand configuration: detection keywords plus the ordered rule
/// set. Built once and shared read-only across all extraction calls.
#[derive(Debug)]
pub struct BrandProfile {
    pub brand: Brand,
    pub keywords: &'static [&'static str],
    pub rules: Vec<PatternRule>,
}

/// Ordered collection of [`BrandProfile`]s.
#[derive(Debug)]
pub struct Registry {
    profiles: Vec<BrandProfile>,
}

impl Registry {
    #[must_use]
    pub fn new(profiles: Vec<BrandProfile>) -> Self {
        Self { profiles }
    }

    /// The full builtin rule set for all registered brands.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            bvlgari_profile(),
            grand_seiko_profile(),
            omega_profile(),
        ])
    }

    /// The ordered rules for `brand`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownBrand`] if the registry has no profile for
    /// `brand` — a caller precondition violation, not a recoverable state.
    pub fn rules_for(&self, brand: Brand) -> Result<&[PatternRule], CoreError> {
        self.profiles
            .iter()
            .find(|p| p.brand == brand)
            .map(|p| p.rules.as_slice())
            .ok_or_else(|| CoreError::UnknownBrand(brand.to_string()))
    }

    #[must_use]
    pub fn profiles(&self) -> &[BrandProfile] {
        &self.profiles
    }

    /// Brands registered in this registry, in registry order.
    #[must_use]
    pub fn brands(&self) -> Vec<Brand> {
        self.profiles.iter().map(|p| p.brand).collect()
    }
}

const BVLGARI_KEYWORDS: &[&str] = &["BVLGARI", "BULGARI", "ブルガリ"];
const GRAND_SEIKO_KEYWORDS: &[&str] = &["GRAND SEIKO", "グランドセイコー", "SBGX", "SBGA", "SBGR"];
const OMEGA_KEYWORDS: &[&str] = &[
    "OMEGA",
    "オメガ",
    "SPEEDMASTER",
    "SEAMASTER",
    "DE VILLE",
    "デビル",
];

fn bvlgari_profile() -> BrandProfile {
    let b = Brand::Bvlgari;
    BrandProfile {
        brand: b,
        keywords: BVLGARI_KEYWORDS,
        rules: vec![
            PatternRule::new(b, "bvlgari-bvlgari (BB)", r"\bBB\d{2}[A-Z]{1,8}\b"),
            PatternRule::new(b, "solotempo (ST)", r"\bST\d{2}[A-Z]{1,8}\b"),
            PatternRule::new(b, "b-zero1 (BZ)", r"\bBZ\d{2}[A-Z]{1,5}\b"),
            PatternRule::new(b, "diagono (DG)", r"\bDG\d{2}[A-Z]{1,5}\b"),
            PatternRule::new(b, "ergon (EG)", r"\bEG\d{2}[A-Z]{1,5}\b"),
            PatternRule::new(b, "aluminium (AL)", r"\bAL\d{2}[A-Z]{1,5}\b"),
            PatternRule::new(b, "rettangolo (RT)", r"\bRT\d{2}[A-Z]{1,5}\b"),
            PatternRule::new(b, "assioma (AA)", r"\bAA\d{2}[A-Z]{1,5}\b"),
            PatternRule::new(b, "quadrato (SQ)", r"\bSQ\d{2}[A-Z]{1,5}\b"),
            PatternRule::new(b, "diagono-scuba (SD)", r"\bSD\d{2}[A-Z]{1,5}\b"),
            PatternRule::new(b, "digit-letter catch-all", r"\b\d{3,6}[A-Z]{2,4}\b"),
        ],
    }
}

fn grand_seiko_profile() -> BrandProfile {
    let b = Brand::GrandSeiko;
    BrandProfile {
        brand: b,
        keywords: GRAND_SEIKO_KEYWORDS,
        rules: vec![
            PatternRule::new(b, "quartz (SBGX)", r"\bSBGX\d{3}\b"),
            PatternRule::new(b, "spring-drive (SBGA)", r"\bSBGA\d{3}\b"),
            PatternRule::new(b, "mechanical (SBGR)", r"\bSBGR\d{3}\b"),
            PatternRule::new(b, "gmt (SBGT)", r"\bSBGT\d{3}\b"),
            PatternRule::new(b, "sport (SBGN)", r"\bSBGN\d{3}\b"),
            PatternRule::new(b, "chronograph (SBGC)", r"\bSBGC\d{3}\b"),
            PatternRule::new(b, "elegance (SBGW)", r"\bSBGW\d{3}\b"),
            PatternRule::new(b, "hi-beat gmt (SBGJ)", r"\bSBGJ\d{3}\b"),
            PatternRule::new(b, "spring-drive gmt (SBGE)", r"\bSBGE\d{3}\b"),
            PatternRule::new(b, "vintage (SBGV)", r"\bSBGV\d{3}\b"),
            PatternRule::new(b, "premier (SBGP)", r"\bSBGP\d{3}\b"),
            PatternRule::new(b, "heritage (SBGH)", r"\bSBGH\d{3}\b"),
            PatternRule::new(b, "letter-digit catch-all", r"\b[A-Z]{2,4}\d{3,4}[A-Z]?\b"),
            PatternRule::new(b, "digit-letter catch-all", r"\b\d{3,6}[A-Z]{2,4}\b"),
        ],
    }
}

fn omega_profile() -> BrandProfile {
    let b = Brand::Omega;
    BrandProfile {
        brand: b,
        keywords: OMEGA_KEYWORDS,
        rules: vec![
            PatternRule::new(
                b,
                "long reference",
                r"\b\d{3}\.\d{2}\.\d{2}\.\d{2}\.\d{2}\.\d{3}\b",
            ),
            PatternRule::new(b, "standard reference", r"\b\d{4}\.\d{2}\.\d{2}\b"),
            PatternRule::new(b, "short reference", r"\b\d{3,4}\.\d{2}\b"),
            PatternRule::new(b, "vintage reference", r"\b\d{3}\.\d{3}\b"),
            PatternRule::with_render(
                b,
                "caliber",
                r"\bcal\.?\s*(\d{3,4})\b",
                Render::Prefixed("CAL."),
            ),
            PatternRule::new(b, "swatch collab (SO33M)", r"\bSO33M\d{3}\b"),
            PatternRule::new(b, "hyphenated reference", r"\b\d{4}-\d{4}\b"),
            PatternRule::new(b, "special reference", r"\b03-\d{8}\b"),
            PatternRule::with_context(
                b,
                "bare de ville number",
                r"\b\d{4}\b",
                r"OMEGA|オメガ|DE\s*VILLE|デビル",
            ),
            PatternRule::new(b, "letter-digit catch-all", r"\b[A-Z]{2,4}\d{3,4}[A-Z]?\b"),
            PatternRule::new(b, "digit-letter catch-all", r"\b\d{3,6}[A-Z]{2,4}\b"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registers_all_brands() {
        let registry = Registry::builtin();
        assert_eq!(registry.brands(), Brand::ALL.to_vec());
    }

    #[test]
    fn rules_for_unknown_brand_fails_fast() {
        let registry = Registry::new(vec![]);
        let err = registry.rules_for(Brand::Omega).unwrap_err();
        assert!(
            matches!(err, CoreError::UnknownBrand(ref name) if name == "omega"),
            "expected UnknownBrand(omega), got: {err:?}"
        );
    }

    #[test]
    fn specific_rules_precede_catch_alls() {
        let registry = Registry::builtin();
        for brand in Brand::ALL {
            let rules = registry.rules_for(brand).unwrap();
            let first_catch_all = rules
                .iter()
                .position(|r| r.label.contains("catch-all"))
                .expect("every brand carries a catch-all");
            assert!(
                rules[..first_catch_all]
                    .iter()
                    .all(|r| !r.label.contains("catch-all")),
                "{brand}: specific rules must come before catch-alls"
            );
            assert!(
                rules[first_catch_all..]
                    .iter()
                    .all(|r| r.label.contains("catch-all")),
                "{brand}: catch-alls must be trailing"
            );
        }
    }

    #[test]
    fn rules_match_case_insensitively() {
        let registry = Registry::builtin();
        let rules = registry.rules_for(Brand::GrandSeiko).unwrap();
        assert!(rules[0].regex.is_match("sbgx263"));
        assert!(rules[0].regex.is_match("SBGX263"));
    }

    #[test]
    fn bare_number_rule_is_context_guarded() {
        let registry = Registry::builtin();
        let rules = registry.rules_for(Brand::Omega).unwrap();
        let rule = rules
            .iter()
            .find(|r| r.label == "bare de ville number")
            .expect("bare-number rule registered");
        let context = rule.context.as_ref().expect("context guard present");
        assert!(context.is_match("OMEGA デビル 1377"));
        assert!(context.is_match("de ville 1458 cal.625"));
        assert!(!context.is_match("ヴィンテージ 1377 手巻き"));
    }

    #[test]
    fn caliber_rule_captures_digits() {
        let registry = Registry::builtin();
        let rules = registry.rules_for(Brand::Omega).unwrap();
        let caliber = rules
            .iter()
            .find(|r| r.label == "caliber")
            .expect("caliber rule registered");
        let caps = caliber.regex.captures("OMEGA cal.1030 vintage").unwrap();
        assert_eq!(&caps[1], "1030");
        assert_eq!(caliber.render, Render::Prefixed("CAL."));
    }
}
