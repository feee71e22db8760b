use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A brand with no profile in the registry at hand.
    #[error("unknown brand: {0}")]
    UnknownBrand(String),

    /// A string that names no registered brand.
    #[error("unknown brand name: {0}")]
    UnknownBrandName(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
