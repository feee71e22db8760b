//! Writing of the results CSV.
//!
//! One output row per input row, in input order, so spreadsheets line up
//! against the source export. Optional columns stay blank when no model was
//! extracted or no profitable listing was found; the verdict column carries
//! `OK` only for a profitable row.

use std::path::Path;

use anyhow::Context;

pub const VERDICT_OK: &str = "OK";

const HEADERS: [&str; 9] = [
    "title",
    "price",
    "model",
    "listing_title",
    "listing_url",
    "foreign_price",
    "converted_price",
    "profit",
    "verdict",
];

/// One fully-rendered results row. All optional fields are already
/// stringified; blanks mean "nothing found at this stage".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub price: String,
    pub model: String,
    pub listing_title: String,
    pub listing_url: String,
    pub foreign_price: String,
    pub converted_price: String,
    pub profit: String,
    pub verdict: String,
}

/// Writes `rows` to `path` as CSV under the fixed header.
///
/// # Errors
///
/// Fails if the file cannot be created or a record cannot be written.
pub fn write_results(path: &Path, rows: &[ResultRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output CSV {}", path.display()))?;

    writer.write_record(HEADERS)?;
    for row in rows {
        writer.write_record([
            row.title.as_str(),
            row.price.as_str(),
            row.model.as_str(),
            row.listing_title.as_str(),
            row.listing_url.as_str(),
            row.foreign_price.as_str(),
            row.converted_price.as_str(),
            row.profit.as_str(),
            row.verdict.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush output CSV {}", path.display()))?;
    Ok(())
}
