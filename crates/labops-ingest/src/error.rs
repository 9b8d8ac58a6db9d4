//! Error types for record ingest.

use thiserror::Error;

/// Errors that can occur while fetching or loading records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// No API token is configured; requests are never issued without one.
    #[error("api token is not configured")]
    MissingToken,

    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Server asked us to back off.
    #[error("rate limited, retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Seconds until the limit resets.
        retry_after_secs: u64,
    },

    /// Response body was not a valid record array.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// I/O error reading a local records file.
    #[error("I/O error: {0}")]
    Io(String),

    /// A fetch worker thread died.
    #[error("fetch worker thread panicked")]
    Worker,
}

impl FetchError {
    /// Whether a retry could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited { .. } => true,
            Self::Status { status } => *status >= 500,
            Self::MissingToken | Self::Decode(_) | Self::Io(_) | Self::Worker => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_split() {
        assert!(FetchError::Network("timeout".to_string()).is_retryable());
        assert!(FetchError::RateLimited { retry_after_secs: 30 }.is_retryable());
        assert!(FetchError::Status { status: 503 }.is_retryable());
        assert!(!FetchError::Status { status: 404 }.is_retryable());
        assert!(!FetchError::MissingToken.is_retryable());
        assert!(!FetchError::Decode("bad json".to_string()).is_retryable());
    }
}
