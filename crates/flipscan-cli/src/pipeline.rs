//! The end-to-end research pipeline: read the source export, detect the
//! brand, extract model references, look up sold listings, evaluate profit,
//! and write the results CSV.
//!
//! Rows are processed sequentially. A research failure on one row is logged
//! and leaves that row's listing columns blank; it never aborts the run.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rust_decimal::Decimal;

use flipscan_core::{
    detect, evaluate, extract, load_profit_config, parse_price, Brand, Currency, Detection,
    ExtractionStatus, ProfitConfig, Registry, DETECT_SAMPLE_ROWS,
};
use flipscan_research::{ResearchClient, SoldListing};

use crate::input::{read_input, InputRow};
use crate::output::{write_results, ResultRow, VERDICT_OK};
use crate::settings::load_research_settings;

/// Everything the pipeline needs, already parsed and validated by the CLI
/// layer.
#[derive(Debug)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub config: PathBuf,
    pub output: Option<PathBuf>,
    pub markup_rate: Option<Decimal>,
    pub fixed_profit: Option<Decimal>,
    pub exchange_rate: Option<Decimal>,
    pub brands: Vec<Brand>,
    pub research_url: Option<String>,
    pub dry_run: bool,
}

/// Derives the default output path from the input path: the input stem with
/// a `_results.csv` suffix, alongside the input file.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "results".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_results.csv"))
}

/// Decides which brands to apply: explicit selection wins, otherwise the
/// dominant brand detected from the leading sample, otherwise every
/// registered brand.
fn select_brands(explicit: &[Brand], rows: &[InputRow], registry: &Registry) -> Vec<Brand> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }

    let sample: Vec<&str> = rows
        .iter()
        .take(DETECT_SAMPLE_ROWS)
        .map(|row| row.title.as_str())
        .collect();
    match detect(&sample, registry) {
        Detection::Brand(brand) => {
            tracing::info!(%brand, "detected dominant brand from sample");
            vec![brand]
        }
        Detection::Ambiguous => {
            tracing::warn!("brand detection ambiguous; applying all registered brands");
            registry.brands()
        }
    }
}

/// Matches the winning foreign price back to the first listing that parsed
/// to it, so the output can cite a concrete listing.
fn listing_for_price(
    listings: &[(SoldListing, Decimal)],
    foreign_price: Decimal,
) -> Option<&SoldListing> {
    listings
        .iter()
        .find(|(_, price)| *price == foreign_price)
        .map(|(listing, _)| listing)
}

async fn process_row(
    row: &InputRow,
    brands: &[Brand],
    registry: &Registry,
    config: &ProfitConfig,
    client: Option<&ResearchClient>,
) -> anyhow::Result<ResultRow> {
    let mut result = ResultRow {
        title: row.title.clone(),
        price: row.price_text.clone(),
        ..ResultRow::default()
    };

    let extraction = extract(&row.title, brands, registry)
        .with_context(|| format!("extraction failed for \"{}\"", row.title))?;
    if extraction.status == ExtractionStatus::NoModel {
        return Ok(result);
    }
    let Some(model) = extraction.extracted_model else {
        return Ok(result);
    };
    result.model.clone_from(&model);

    let Some(client) = client else {
        return Ok(result);
    };

    let listings = match client.search_sold(&model).await {
        Ok(listings) => listings,
        Err(err) => {
            tracing::warn!(%model, error = %err, "sold-listing lookup failed; leaving row blank");
            return Ok(result);
        }
    };

    let source_price = parse_price(&row.price_text, Currency::Jpy).value;
    let priced: Vec<(SoldListing, Decimal)> = listings
        .into_iter()
        .map(|listing| {
            let price = parse_price(&listing.price_text, Currency::Usd).value;
            (listing, price)
        })
        .collect();
    let candidates: Vec<Decimal> = priced
        .iter()
        .map(|(_, price)| *price)
        .filter(|price| !price.is_zero())
        .collect();

    let Some(verdict) = evaluate(source_price, &candidates, config) else {
        return Ok(result);
    };

    if let Some(listing) = listing_for_price(&priced, verdict.foreign_price) {
        result.listing_title.clone_from(&listing.title);
        result.listing_url.clone_from(&listing.url);
    }
    result.foreign_price = verdict.foreign_price.to_string();
    result.converted_price = verdict.converted_price.to_string();
    result.profit = verdict.profit.to_string();
    if verdict.profitable {
        result.verdict = VERDICT_OK.to_string();
    }
    Ok(result)
}

/// Runs the whole pipeline per `options`.
///
/// # Errors
///
/// Fails on unreadable input, invalid configuration, a missing research URL
/// outside dry-run mode, or an unwritable output file. Per-row research
/// failures are logged and do not fail the run.
pub async fn run(options: PipelineOptions) -> anyhow::Result<()> {
    if !options.config.exists() {
        tracing::warn!(config = %options.config.display(), "config file not found; using defaults");
    }
    let base_config = load_profit_config(&options.config)
        .with_context(|| format!("failed to load config {}", options.config.display()))?;
    let config = base_config.with_overrides(
        options.markup_rate,
        options.fixed_profit,
        options.exchange_rate,
    );

    let rows = read_input(&options.input)?;
    anyhow::ensure!(
        !rows.is_empty(),
        "input CSV {} contains no data rows",
        options.input.display()
    );
    tracing::info!(rows = rows.len(), input = %options.input.display(), "loaded input");

    let registry = Registry::builtin();
    let brands = select_brands(&options.brands, &rows, &registry);

    let client = if options.dry_run {
        None
    } else {
        let url = options.research_url.as_deref().context(
            "a research endpoint URL is required unless --dry-run is set \
             (pass --research-url or set FLIPSCAN_RESEARCH_URL)",
        )?;
        let settings = load_research_settings()?;
        Some(
            ResearchClient::new(
                url,
                settings.timeout_secs,
                settings.max_retries,
                settings.backoff_base_secs,
            )
            .context("failed to construct research client")?,
        )
    };

    let mut results = Vec::with_capacity(rows.len());
    for row in &rows {
        let result = process_row(row, &brands, &registry, &config, client.as_ref()).await?;
        results.push(result);
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&options.input));
    write_results(&output, &results)?;

    let extracted = results.iter().filter(|r| !r.model.is_empty()).count();
    let profitable_rows: Vec<&ResultRow> = results
        .iter()
        .filter(|r| r.verdict == VERDICT_OK)
        .collect();
    let total_profit: Decimal = profitable_rows
        .iter()
        .filter_map(|r| r.profit.parse::<Decimal>().ok())
        .sum();
    tracing::info!(
        rows = results.len(),
        extracted,
        profitable = profitable_rows.len(),
        %total_profit,
        output = %output.display(),
        "pipeline finished"
    );
    println!(
        "{} rows processed, {extracted} models extracted, {} profitable (total profit {total_profit}) -> {}",
        results.len(),
        profitable_rows.len(),
        output.display()
    );
    Ok(())
}
