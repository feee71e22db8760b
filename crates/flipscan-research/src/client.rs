//! HTTP client for the sold-listing research endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::ResearchError;
use crate::retry::RetryPolicy;
use crate::types::SoldListing;

/// HTTP client for the research endpoint's `GET /sold?q=<term>` resource.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx responses
/// as typed errors. Transient failures are retried per [`RetryPolicy`]: a
/// 429 waits for the interval the server requested, network failures back
/// off exponentially.
pub struct ResearchClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ResearchClient {
    /// Creates a `ResearchClient` with configured timeout and retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors. Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::InvalidBaseUrl`] if `base_url` does not parse
    /// as an absolute URL, or [`ResearchError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ResearchError> {
        reqwest::Url::parse(base_url).map_err(|e| ResearchError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            retry: RetryPolicy {
                max_retries,
                backoff_base_secs,
            },
        })
    }

    /// Fetches sold listings matching `term`, with automatic retry on
    /// transient errors.
    ///
    /// # Errors
    ///
    /// - [`ResearchError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ResearchError::NotFound`] — HTTP 404 (not retried).
    /// - [`ResearchError::UnexpectedStatus`] — any other non-2xx status (not retried).
    /// - [`ResearchError::Http`] — network failure after all retries exhausted.
    /// - [`ResearchError::Deserialize`] — response body is not a JSON listing array (not retried).
    pub async fn search_sold(&self, term: &str) -> Result<Vec<SoldListing>, ResearchError> {
        let url = Self::sold_url(&self.base_url, term)?;

        self.retry
            .run(|| {
                let url = url.clone();
                async move {
                    let response = self.client.get(&url).send().await?;
                    let status = response.status();

                    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        let retry_after_secs = response
                            .headers()
                            .get(reqwest::header::RETRY_AFTER)
                            .and_then(|v| v.to_str().ok())
                            .and_then(|s| s.parse::<u64>().ok())
                            .unwrap_or(60);
                        return Err(ResearchError::RateLimited { retry_after_secs });
                    }

                    if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(ResearchError::NotFound { url });
                    }

                    if !status.is_success() {
                        return Err(ResearchError::UnexpectedStatus {
                            status: status.as_u16(),
                            url,
                        });
                    }

                    let body = response.text().await?;
                    let listings = serde_json::from_str::<Vec<SoldListing>>(&body)
                        .map_err(|e| ResearchError::Deserialize {
                            context: format!("sold listings for \"{term}\""),
                            source: e,
                        })?;

                    Ok(listings)
                }
            })
            .await
    }

    /// Builds the sold-search URL for `term`, query-encoding it.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::InvalidBaseUrl`] if `base_url` cannot be
    /// parsed as a URL base.
    fn sold_url(base_url: &str, term: &str) -> Result<String, ResearchError> {
        let base = format!("{base_url}/sold");
        let mut url = reqwest::Url::parse(&base).map_err(|e| ResearchError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("q", term);
        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
