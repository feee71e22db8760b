//! Reading of source-marketplace CSV exports.
//!
//! Exports vary: some carry a header with named columns, some are bare
//! position-only dumps. Column resolution tries well-known header names
//! first and falls back to the historical positions (title in column 0,
//! price in column 2).

use std::path::Path;

use anyhow::Context;

/// Header names accepted for the title column, tried in order.
const TITLE_HEADERS: [&str; 3] = ["商品名", "title", "name"];
/// Header names accepted for the price column, tried in order.
const PRICE_HEADERS: [&str; 3] = ["価格", "price", "販売価格"];

const TITLE_FALLBACK_INDEX: usize = 0;
const PRICE_FALLBACK_INDEX: usize = 2;

/// One input row: the listing title and its raw price text.
#[derive(Debug, Clone)]
pub struct InputRow {
    pub title: String,
    pub price_text: String,
}

fn resolve_column(headers: &csv::StringRecord, names: &[&str], fallback: usize) -> usize {
    for name in names {
        if let Some(index) = headers.iter().position(|h| h.trim() == *name) {
            return index;
        }
    }
    fallback
}

/// Reads the input CSV into rows, resolving columns by header name with a
/// positional fallback. Rows too short to carry a price get empty price
/// text rather than failing the whole file.
///
/// # Errors
///
/// Fails if the file cannot be opened or a record cannot be read as CSV.
pub fn read_input(path: &Path) -> anyhow::Result<Vec<InputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open input CSV {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV header from {}", path.display()))?
        .clone();
    let title_index = resolve_column(&headers, &TITLE_HEADERS, TITLE_FALLBACK_INDEX);
    let price_index = resolve_column(&headers, &PRICE_HEADERS, PRICE_FALLBACK_INDEX);

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("failed to read CSV record {} from {}", line + 2, path.display()))?;
        let title = record.get(title_index).unwrap_or("").trim().to_string();
        let price_text = record.get(price_index).unwrap_or("").trim().to_string();
        rows.push(InputRow { title, price_text });
    }
    Ok(rows)
}
