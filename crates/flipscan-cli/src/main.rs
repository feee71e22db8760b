use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use flipscan_core::Brand;

mod input;
mod output;
mod pipeline;
mod settings;

#[derive(Debug, Parser)]
#[command(name = "flipscan")]
#[command(about = "Cross-marketplace watch resale research")]
struct Cli {
    /// Source marketplace CSV export to process.
    #[arg(short, long)]
    input: PathBuf,

    /// Profit-calculation config file.
    #[arg(long, default_value = "./config/config.yaml")]
    config: PathBuf,

    /// Results CSV path. Defaults to the input stem with a `_results.csv` suffix.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the configured markup rate (e.g. 0.2).
    #[arg(long)]
    markup_rate: Option<Decimal>,

    /// Override the configured fixed profit, in local currency.
    #[arg(long)]
    fixed_profit: Option<Decimal>,

    /// Override the configured exchange rate (local per foreign unit).
    #[arg(long)]
    exchange_rate: Option<Decimal>,

    /// Restrict matching to specific brands (repeatable). Defaults to
    /// detecting the dominant brand from the leading input rows.
    #[arg(long)]
    brand: Vec<Brand>,

    /// Base URL of the sold-listing research endpoint.
    #[arg(long, env = "FLIPSCAN_RESEARCH_URL")]
    research_url: Option<String>,

    /// Extract models and write the results CSV without contacting the
    /// research endpoint.
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn into_options(self) -> pipeline::PipelineOptions {
        pipeline::PipelineOptions {
            input: self.input,
            config: self.config,
            output: self.output,
            markup_rate: self.markup_rate,
            fixed_profit: self.fixed_profit,
            exchange_rate: self.exchange_rate,
            brands: self.brand,
            research_url: self.research_url,
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    pipeline::run(cli.into_options()).await
}
