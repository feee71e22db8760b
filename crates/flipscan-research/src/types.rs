//! Response types for the sold-listing research endpoint.
//!
//! The endpoint returns a JSON array of listing objects. Price text is kept
//! verbatim (`"$1,625.00"`, `"US $89.99"`, sometimes empty) because the
//! marketplace formats it inconsistently; normalization belongs to the
//! caller, which knows the currency context.

use serde::Deserialize;

/// One completed (sold) listing as reported by the research endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoldListing {
    pub title: String,
    pub url: String,
    /// Raw price text as displayed by the marketplace. May be empty.
    #[serde(default)]
    pub price_text: String,
}
