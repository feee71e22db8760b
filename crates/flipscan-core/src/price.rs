//! Normalization of heterogeneous currency-formatted strings.
//!
//! Scraped price text arrives in many shapes (`$1,625.00`, `¥150,000`,
//! `N/A`, empty). Parsing never fails: unparseable input yields a
//! zero-valued record, and the caller supplies the currency from context
//! (which marketplace the text came from).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Jpy,
    Usd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Jpy => write!(f, "JPY"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

/// A price parsed out of raw marketplace text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    pub raw: String,
    pub currency: Currency,
    pub value: Decimal,
}

impl PriceRecord {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

/// Parses `text` into a [`PriceRecord`] denominated in `currency`.
///
/// Thousands separators are stripped, then the first maximal
/// `digits[.digits]` run is parsed (an optional currency-symbol prefix is
/// ignored by construction). Anything unparseable yields a zero value.
#[must_use]
pub fn parse_price(text: &str, currency: Currency) -> PriceRecord {
    PriceRecord {
        raw: text.to_string(),
        currency,
        value: extract_amount(text).unwrap_or(Decimal::ZERO),
    }
}

/// Scans for the first `digits[.digits]` run after removing `,` separators.
fn extract_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    let bytes = cleaned.as_bytes();
    let len = bytes.len();

    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut end = start;
    let mut has_dot = false;
    while end < len {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !has_dot && end + 1 < len && bytes[end + 1].is_ascii_digit() => {
                has_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    cleaned[start..end].parse::<Decimal>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_usd_with_symbol_and_separators() {
        let record = parse_price("$1,625.00", Currency::Usd);
        assert_eq!(record.value, dec!(1625.0));
        assert_eq!(record.currency, Currency::Usd);
        assert_eq!(record.raw, "$1,625.00");
    }

    #[test]
    fn parses_jpy_with_symbol_and_separators() {
        let record = parse_price("¥150,000", Currency::Jpy);
        assert_eq!(record.value, dec!(150000.0));
    }

    #[test]
    fn empty_text_yields_zero() {
        let record = parse_price("", Currency::Usd);
        assert!(record.is_zero());
    }

    #[test]
    fn non_numeric_text_yields_zero() {
        let record = parse_price("N/A", Currency::Usd);
        assert!(record.is_zero());
    }

    #[test]
    fn bare_number_parses() {
        assert_eq!(parse_price("12800", Currency::Jpy).value, dec!(12800));
    }

    #[test]
    fn decimal_without_separator_parses() {
        assert_eq!(parse_price("$49.99", Currency::Usd).value, dec!(49.99));
    }

    #[test]
    fn first_run_wins_when_multiple_numbers_present() {
        assert_eq!(
            parse_price("$120.50 (was $199.99)", Currency::Usd).value,
            dec!(120.50)
        );
    }

    #[test]
    fn trailing_dot_is_not_consumed() {
        assert_eq!(parse_price("1625.", Currency::Usd).value, dec!(1625));
    }

    #[test]
    fn leading_text_is_skipped() {
        assert_eq!(parse_price("Sold for 89.00 USD", Currency::Usd).value, dec!(89));
    }
}
