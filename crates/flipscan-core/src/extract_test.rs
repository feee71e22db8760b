use super::*;
use crate::registry::Registry;

fn registry() -> Registry {
    Registry::builtin()
}

// ---------------------------------------------------------------------------
// strip_boilerplate
// ---------------------------------------------------------------------------

#[test]
fn strip_removes_thumbnail_suffix() {
    assert_eq!(
        strip_boilerplate("グランドセイコー SBGX263のサムネイル"),
        "グランドセイコー SBGX263"
    );
}

#[test]
fn strip_removes_bare_thumbnail_suffix() {
    assert_eq!(strip_boilerplate("SBGX263 サムネイル"), "SBGX263");
}

#[test]
fn strip_is_not_recursive() {
    // Only one pass per rule: a doubled suffix leaves one behind.
    assert_eq!(
        strip_boilerplate("SBGX263のサムネイルのサムネイル"),
        "SBGX263のサムネイル"
    );
}

#[test]
fn strip_leaves_clean_titles_alone() {
    assert_eq!(strip_boilerplate("OMEGA Speedmaster 3592.50"), "OMEGA Speedmaster 3592.50");
}

// ---------------------------------------------------------------------------
// extract — basics
// ---------------------------------------------------------------------------

#[test]
fn extract_grand_seiko_reference() {
    let result = extract(
        "Grand Seiko SBGX263 クオーツ 美品",
        &[Brand::GrandSeiko],
        &registry(),
    )
    .unwrap();
    assert_eq!(result.status, ExtractionStatus::Ok);
    assert_eq!(result.extracted_model.as_deref(), Some("SBGX263"));
    assert!(result.models.contains("SBGX263"));
}

#[test]
fn extract_bvlgari_reference() {
    let result = extract(
        "BVLGARI ブルガリブルガリ BB23SS レディース",
        &[Brand::Bvlgari],
        &registry(),
    )
    .unwrap();
    assert_eq!(result.extracted_model.as_deref(), Some("BB23SS"));
}

#[test]
fn extract_uppercases_matches() {
    let result = extract("grand seiko sbgx263", &[Brand::GrandSeiko], &registry()).unwrap();
    assert_eq!(result.extracted_model.as_deref(), Some("SBGX263"));
}

#[test]
fn extract_omega_long_reference_beats_shorter_dot_rules() {
    // The short-reference rule also matches a prefix of the long form; the
    // long-reference rule is listed first and wins.
    let result = extract(
        "OMEGA シーマスター 210.30.42.20.03.001",
        &[Brand::Omega],
        &registry(),
    )
    .unwrap();
    assert_eq!(
        result.extracted_model.as_deref(),
        Some("210.30.42.20.03.001")
    );
}

#[test]
fn extract_omega_caliber_is_rendered_with_prefix() {
    let result = extract("OMEGA デビル cal.1030 手巻き", &[Brand::Omega], &registry()).unwrap();
    assert_eq!(result.extracted_model.as_deref(), Some("CAL.1030"));
    let caliber = result
        .candidates
        .iter()
        .find(|c| c.label == "caliber")
        .unwrap();
    assert_eq!(caliber.raw, "cal.1030");
    assert_eq!(caliber.normalized, "CAL.1030");
}

#[test]
fn extract_omega_special_reference() {
    let result = extract("OMEGA 03-12345678 クロノグラフ", &[Brand::Omega], &registry()).unwrap();
    assert_eq!(result.extracted_model.as_deref(), Some("03-12345678"));
}

#[test]
fn bare_omega_number_extracts_when_title_carries_brand_context() {
    let result = extract("OMEGA デビル 1377 レディース", &[Brand::Omega], &registry()).unwrap();
    assert_eq!(result.extracted_model.as_deref(), Some("1377"));

    let result = extract("デビル 1458 手巻き", &[Brand::Omega], &registry()).unwrap();
    assert_eq!(result.extracted_model.as_deref(), Some("1458"));
}

#[test]
fn bare_number_without_brand_context_yields_no_model() {
    // A lone 4-digit run is noise unless the title names the brand; the
    // bare-number rule is context-guarded.
    let result = extract("ヴィンテージ 1377 手巻き", &[Brand::Omega], &registry()).unwrap();
    assert_eq!(result.status, ExtractionStatus::NoModel);
}

#[test]
fn extract_strips_boilerplate_before_matching() {
    let result = extract(
        "Grand Seiko SBGA211のサムネイル",
        &[Brand::GrandSeiko],
        &registry(),
    )
    .unwrap();
    assert_eq!(result.extracted_model.as_deref(), Some("SBGA211"));
}

// ---------------------------------------------------------------------------
// extract — precedence and provenance
// ---------------------------------------------------------------------------

#[test]
fn specific_rule_outranks_catch_all_on_same_substring() {
    // "SBGX263" matches both the quartz (SBGX) rule and the letter-digit
    // catch-all. The specific rule is listed first, so it supplies
    // extracted_model; the catch-all match is still recorded as a candidate.
    let result = extract("Grand Seiko SBGX263", &[Brand::GrandSeiko], &registry()).unwrap();
    assert_eq!(result.extracted_model.as_deref(), Some("SBGX263"));
    assert_eq!(result.candidates[0].label, "quartz (SBGX)");
    assert!(result
        .candidates
        .iter()
        .any(|c| c.label == "letter-digit catch-all" && c.normalized == "SBGX263"));
    // Dedup: one unique identifier despite two matching rules.
    assert_eq!(result.models.len(), 1);
}

#[test]
fn brand_list_order_breaks_cross_brand_ties() {
    // Both brands' catch-alls can match; the first brand in the caller's
    // list supplies the singular best guess.
    let title = "ヴィンテージ SBGX263 BB23SS";
    let gs_first = extract(title, &[Brand::GrandSeiko, Brand::Bvlgari], &registry()).unwrap();
    assert_eq!(gs_first.extracted_model.as_deref(), Some("SBGX263"));
    let bvl_first = extract(title, &[Brand::Bvlgari, Brand::GrandSeiko], &registry()).unwrap();
    assert_eq!(bvl_first.extracted_model.as_deref(), Some("BB23SS"));
}

#[test]
fn candidates_preserve_provenance() {
    let result = extract("Grand Seiko SBGR261", &[Brand::GrandSeiko], &registry()).unwrap();
    let first = &result.candidates[0];
    assert_eq!(first.brand, Brand::GrandSeiko);
    assert_eq!(first.label, "mechanical (SBGR)");
    assert_eq!(first.title, "Grand Seiko SBGR261");
}

// ---------------------------------------------------------------------------
// extract — no-match safety
// ---------------------------------------------------------------------------

#[test]
fn empty_text_yields_no_model() {
    let result = extract("", &Brand::ALL, &registry()).unwrap();
    assert_eq!(result.status, ExtractionStatus::NoModel);
    assert!(result.extracted_model.is_none());
    assert!(result.candidates.is_empty());
}

#[test]
fn boilerplate_only_text_yields_no_model() {
    let result = extract("のサムネイル", &Brand::ALL, &registry()).unwrap();
    assert_eq!(result.status, ExtractionStatus::NoModel);
}

#[test]
fn text_without_identifiers_yields_no_model() {
    let result = extract("美品 腕時計 メンズ 自動巻き", &Brand::ALL, &registry()).unwrap();
    assert_eq!(result.status, ExtractionStatus::NoModel);
    assert!(result.models.is_empty());
}

#[test]
fn unknown_brand_in_subset_registry_fails_fast() {
    let subset = Registry::new(vec![]);
    let err = extract("SBGX263", &[Brand::GrandSeiko], &subset).unwrap_err();
    assert!(matches!(err, CoreError::UnknownBrand(_)));
}

// ---------------------------------------------------------------------------
// extract — determinism
// ---------------------------------------------------------------------------

#[test]
fn extraction_is_deterministic() {
    let reg = registry();
    let title = "OMEGA Speedmaster 3592.50 cal.1152 メンズのサムネイル";
    let first = extract(title, &Brand::ALL, &reg).unwrap();
    let second = extract(title, &Brand::ALL, &reg).unwrap();
    assert_eq!(first, second);
}
