//! HTTP client for the LIMS records endpoint.
//!
//! The endpoint returns a JSON array of records for an inclusive date
//! range: `GET <base_url>?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`,
//! authorized by a bearer token. Session handling beyond token presence
//! lives with the caller.

use std::thread;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, warn};

use labops_model::{Period, PeriodPair, TestRecord};

use crate::error::{FetchError, Result};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
const CLIENT_USER_AGENT: &str = concat!("labops/", env!("CARGO_PKG_VERSION"));

/// Bounded retry behavior for failed fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        // One retry after the initial attempt.
        Self {
            max_attempts: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }
}

/// Connection settings for the records endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Records endpoint URL.
    pub base_url: String,
    /// Bearer token.
    pub token: String,
}

impl ApiConfig {
    /// Create a config, rejecting a missing token up front.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(FetchError::MissingToken);
        }
        Ok(Self {
            base_url: base_url.into(),
            token,
        })
    }
}

/// Client for the LIMS records endpoint.
pub struct LimsClient {
    client: Client,
    config: ApiConfig,
    retry: RetryPolicy,
}

impl LimsClient {
    /// Create a new client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::from)?;
        Ok(Self {
            client,
            config,
            retry: RetryPolicy::default(),
        })
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch the record array for a period, retrying retryable failures
    /// up to the configured attempt count.
    pub fn fetch_records(&self, period: &Period) -> Result<Vec<TestRecord>> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.fetch_once(period) {
                Ok(records) => {
                    debug!(
                        period = %period,
                        records = records.len(),
                        attempt,
                        "fetched records"
                    );
                    return Ok(records);
                }
                Err(error) if attempt < self.retry.max_attempts && error.is_retryable() => {
                    warn!(
                        period = %period,
                        attempt,
                        max_attempts = self.retry.max_attempts,
                        %error,
                        "fetch failed, retrying"
                    );
                    thread::sleep(self.retry.backoff);
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Fetch current and previous period records together.
    ///
    /// The two requests run on scoped threads and are joined before
    /// returning; if either side fails the whole call fails, so callers
    /// never render a partial period pair.
    pub fn fetch_period_pair(
        &self,
        periods: &PeriodPair,
    ) -> Result<(Vec<TestRecord>, Vec<TestRecord>)> {
        let (current, previous) = thread::scope(|scope| {
            let current = scope.spawn(|| self.fetch_records(&periods.current));
            let previous = scope.spawn(|| self.fetch_records(&periods.previous));
            (
                current.join().map_err(|_| FetchError::Worker),
                previous.join().map_err(|_| FetchError::Worker),
            )
        });
        Ok((current??, previous??))
    }

    fn fetch_once(&self, period: &Period) -> Result<Vec<TestRecord>> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("start_date", period.start.format("%Y-%m-%d").to_string()),
                ("end_date", period.end.format("%Y-%m-%d").to_string()),
            ])
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .bearer_auth(&self.config.token)
            .send()?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(60);
            return Err(FetchError::RateLimited { retry_after_secs });
        }
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        response.json::<Vec<TestRecord>>().map_err(FetchError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_missing_token() {
        let error = ApiConfig::new("https://lims.example/api/records", "  ").unwrap_err();
        assert!(matches!(error, FetchError::MissingToken));
        assert!(ApiConfig::new("https://lims.example/api/records", "token").is_ok());
    }

    #[test]
    fn default_policy_allows_exactly_one_retry() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 2);
        assert_eq!(RetryPolicy::none().max_attempts, 1);
    }
}
