//! Profit evaluation over normalized foreign-currency sold prices.
//!
//! Deterministic and side-effect free. All non-determinism (how the
//! candidate prices were obtained) lives in the research collaborator;
//! this module only requires "zero or more foreign prices".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inclusive bound on acceptable foreign-currency candidate prices,
/// applied before profitability ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFilter {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceFilter {
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Immutable profit-calculation configuration. Overrides produce a new
/// value; nothing here is shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitConfig {
    /// Fractional markup applied to the source price.
    pub markup_rate: Decimal,
    /// Flat additive profit requirement, in local currency.
    pub fixed_profit: Decimal,
    /// Local currency per one unit of foreign currency.
    pub exchange_rate: Decimal,
    pub price_filter: Option<PriceFilter>,
}

impl Default for ProfitConfig {
    fn default() -> Self {
        Self {
            markup_rate: Decimal::new(2, 1),
            fixed_profit: Decimal::new(3000, 0),
            exchange_rate: Decimal::new(150, 0),
            price_filter: None,
        }
    }
}

impl ProfitConfig {
    /// Returns a new configuration with any supplied fields replaced.
    /// Absent overrides keep the current values.
    #[must_use]
    pub fn with_overrides(
        &self,
        markup_rate: Option<Decimal>,
        fixed_profit: Option<Decimal>,
        exchange_rate: Option<Decimal>,
    ) -> Self {
        Self {
            markup_rate: markup_rate.unwrap_or(self.markup_rate),
            fixed_profit: fixed_profit.unwrap_or(self.fixed_profit),
            exchange_rate: exchange_rate.unwrap_or(self.exchange_rate),
            price_filter: self.price_filter,
        }
    }

    /// The minimum acceptable resale price, in local currency:
    /// `source * (1 + markup_rate) + fixed_profit`.
    #[must_use]
    pub fn minimum_required(&self, source_price: Decimal) -> Decimal {
        source_price * (Decimal::ONE + self.markup_rate) + self.fixed_profit
    }

    /// Converts a foreign-currency price into local currency.
    #[must_use]
    pub fn convert(&self, foreign_price: Decimal) -> Decimal {
        foreign_price * self.exchange_rate
    }
}

/// The profitability outcome for a selected candidate price.
///
/// Only produced for qualifying candidates; "no profitable item" is
/// `None` from [`evaluate`], never a zero-valued verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfitVerdict {
    pub source_price: Decimal,
    pub foreign_price: Decimal,
    pub converted_price: Decimal,
    pub minimum_required: Decimal,
    pub profit: Decimal,
    pub profitable: bool,
}

/// Evaluates candidate foreign prices against `source_price`.
///
/// The price filter, when configured, excludes candidates before ranking so
/// an out-of-filter high price can never win. Among remaining candidates
/// whose converted price meets the minimum (`>=`, inclusive), the maximum
/// foreign price is selected, first-encountered order breaking ties.
#[must_use]
pub fn evaluate(
    source_price: Decimal,
    candidates: &[Decimal],
    config: &ProfitConfig,
) -> Option<ProfitVerdict> {
    let minimum_required = config.minimum_required(source_price);

    let mut best: Option<Decimal> = None;
    for &foreign in candidates {
        if let Some(filter) = &config.price_filter {
            if !filter.contains(foreign) {
                continue;
            }
        }
        if config.convert(foreign) < minimum_required {
            continue;
        }
        // Strictly-greater keeps the first-encountered candidate on ties.
        if best.map_or(true, |current| foreign > current) {
            best = Some(foreign);
        }
    }

    let foreign_price = best?;
    let converted_price = config.convert(foreign_price);
    Some(ProfitVerdict {
        source_price,
        foreign_price,
        converted_price,
        minimum_required,
        profit: converted_price - source_price,
        profitable: converted_price >= minimum_required,
    })
}

#[cfg(test)]
#[path = "profit_test.rs"]
mod tests;
