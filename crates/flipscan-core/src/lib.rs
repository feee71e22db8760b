pub mod brands;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod price;
pub mod profit;
pub mod registry;

pub use brands::Brand;
pub use config::load_profit_config;
pub use detect::{detect, Detection};
pub use error::{ConfigError, CoreError};
pub use extract::{extract, Candidate, ExtractionResult, ExtractionStatus};
pub use price::{parse_price, Currency, PriceRecord};
pub use profit::{evaluate, PriceFilter, ProfitConfig, ProfitVerdict};
pub use registry::{BrandProfile, PatternRule, Registry};

/// Number of leading input rows sampled for brand detection.
pub const DETECT_SAMPLE_ROWS: usize = 10;
