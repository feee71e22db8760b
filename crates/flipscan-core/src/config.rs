//! Loading of the profit-calculation configuration file.
//!
//! The file mirrors the tool's historical `config/config.yaml` layout:
//!
//! ```yaml
//! profit_calculation:
//!   markup_rate: 0.2
//!   fixed_profit: 3000
//! exchange_rate:
//!   fixed_rate: 150.0
//! research:
//!   price_filter:
//!     enabled: false
//!     min_price: 0
//!     max_price: 999999
//! ```
//!
//! Every key is individually optional and falls back to its documented
//! default; a missing file yields the full default configuration. Only a
//! structurally unparseable file is an error.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::profit::{PriceFilter, ProfitConfig};
use crate::ConfigError;

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    profit_calculation: ProfitCalculationSection,
    #[serde(default)]
    exchange_rate: ExchangeRateSection,
    #[serde(default)]
    research: ResearchSection,
}

#[derive(Debug, Deserialize)]
struct ProfitCalculationSection {
    #[serde(default = "default_markup_rate")]
    markup_rate: Decimal,
    #[serde(default = "default_fixed_profit")]
    fixed_profit: Decimal,
}

impl Default for ProfitCalculationSection {
    fn default() -> Self {
        Self {
            markup_rate: default_markup_rate(),
            fixed_profit: default_fixed_profit(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRateSection {
    #[serde(default = "default_exchange_rate")]
    fixed_rate: Decimal,
}

impl Default for ExchangeRateSection {
    fn default() -> Self {
        Self {
            fixed_rate: default_exchange_rate(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ResearchSection {
    #[serde(default)]
    price_filter: PriceFilterSection,
}

#[derive(Debug, Deserialize)]
struct PriceFilterSection {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    min_price: Decimal,
    #[serde(default = "default_max_price")]
    max_price: Decimal,
}

impl Default for PriceFilterSection {
    fn default() -> Self {
        Self {
            enabled: false,
            min_price: Decimal::ZERO,
            max_price: default_max_price(),
        }
    }
}

fn default_markup_rate() -> Decimal {
    Decimal::new(2, 1)
}

fn default_fixed_profit() -> Decimal {
    Decimal::new(3000, 0)
}

fn default_exchange_rate() -> Decimal {
    Decimal::new(150, 0)
}

fn default_max_price() -> Decimal {
    Decimal::new(999_999, 0)
}

/// Loads a [`ProfitConfig`] from a YAML file.
///
/// A missing file is not an error: the full default configuration is
/// returned so the tool stays runnable without any config on disk.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read,
/// [`ConfigError::Parse`] if it is not valid YAML, or
/// [`ConfigError::Validation`] for out-of-range values (negative markup
/// rate, non-positive exchange rate, inverted filter bounds).
pub fn load_profit_config(path: &Path) -> Result<ProfitConfig, ConfigError> {
    if !path.exists() {
        return Ok(ProfitConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    // An empty or comments-only file is a null document, not a mapping.
    let file = serde_yaml::from_str::<Option<ConfigFile>>(&content)?.unwrap_or_default();
    build_profit_config(&file)
}

fn build_profit_config(file: &ConfigFile) -> Result<ProfitConfig, ConfigError> {
    if file.profit_calculation.markup_rate < Decimal::ZERO {
        return Err(ConfigError::Validation(format!(
            "markup_rate must be >= 0, got {}",
            file.profit_calculation.markup_rate
        )));
    }
    if file.exchange_rate.fixed_rate <= Decimal::ZERO {
        return Err(ConfigError::Validation(format!(
            "exchange_rate.fixed_rate must be > 0, got {}",
            file.exchange_rate.fixed_rate
        )));
    }

    let filter = &file.research.price_filter;
    let price_filter = if filter.enabled {
        if filter.min_price > filter.max_price {
            return Err(ConfigError::Validation(format!(
                "price_filter min {} exceeds max {}",
                filter.min_price, filter.max_price
            )));
        }
        Some(PriceFilter {
            min: filter.min_price,
            max: filter.max_price,
        })
    } else {
        None
    };

    Ok(ProfitConfig {
        markup_rate: file.profit_calculation.markup_rate,
        fixed_profit: file.profit_calculation.fixed_profit,
        exchange_rate: file.exchange_rate.fixed_rate,
        price_filter,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
