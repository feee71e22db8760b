use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("throttled by the research endpoint; retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("research endpoint has no such resource: {url}")]
    NotFound { url: String },

    #[error("research endpoint answered {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("base URL \"{base_url}\" is unusable: {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
