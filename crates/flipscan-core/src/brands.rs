use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A watch brand with a registered reference-number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Brand {
    Bvlgari,
    GrandSeiko,
    Omega,
}

impl Brand {
    /// All registered brands, in registry order.
    pub const ALL: [Brand; 3] = [Brand::Bvlgari, Brand::GrandSeiko, Brand::Omega];
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Brand::Bvlgari => write!(f, "bvlgari"),
            Brand::GrandSeiko => write!(f, "grand-seiko"),
            Brand::Omega => write!(f, "omega"),
        }
    }
}

impl FromStr for Brand {
    type Err = CoreError;

    /// Case-insensitive; accepts `grand-seiko`, `grand_seiko`, and
    /// `grand seiko` spellings, plus the `bulgari` variant spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match folded.as_str() {
            "bvlgari" | "bulgari" => Ok(Brand::Bvlgari),
            "grandseiko" => Ok(Brand::GrandSeiko),
            "omega" => Ok(Brand::Omega),
            _ => Err(CoreError::UnknownBrandName(s.to_string())),
        }
    }
}
