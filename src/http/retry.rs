//! Retry policy for index fetches and classification of HTTP failures.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Default number of attempts for a single fetch.
pub const DEFAULT_ATTEMPTS: usize = 3;

/// Retries after the first attempt, as exposed on the command line.
pub const DEFAULT_RETRIES: usize = DEFAULT_ATTEMPTS - 1;

/// Default pause between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// How many times a fetch is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: usize,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: usize, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    /// First attempt plus `retries` more.
    pub fn with_retries(retries: usize, delay: Duration) -> Self {
        Self::new(retries.saturating_add(1), delay)
    }

    /// Single attempt, no waiting.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Failures that will not go away by asking again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NonRetryableError {
    #[error("repository index not found (HTTP {0})")]
    NotFound(u16),

    #[error("authentication required to read the repository index (HTTP {0})")]
    Unauthorized(u16),

    #[error("access to the repository index is forbidden (HTTP {0})")]
    Forbidden(u16),

    #[error("too many requests to the repository server (HTTP {0})")]
    RateLimited(u16),

    #[error("request rejected by the repository server (HTTP {0})")]
    ClientError(u16),
}

impl NonRetryableError {
    pub fn status(&self) -> u16 {
        match self {
            NonRetryableError::NotFound(s)
            | NonRetryableError::Unauthorized(s)
            | NonRetryableError::Forbidden(s)
            | NonRetryableError::RateLimited(s)
            | NonRetryableError::ClientError(s) => *s,
        }
    }
}

/// Maps a status code to a non-retryable error, or `None` when a retry may help.
pub fn classify_status(status: StatusCode) -> Option<NonRetryableError> {
    let code = status.as_u16();
    match status {
        StatusCode::NOT_FOUND | StatusCode::GONE => Some(NonRetryableError::NotFound(code)),
        StatusCode::UNAUTHORIZED => Some(NonRetryableError::Unauthorized(code)),
        StatusCode::FORBIDDEN => Some(NonRetryableError::Forbidden(code)),
        StatusCode::TOO_MANY_REQUESTS => Some(NonRetryableError::RateLimited(code)),
        s if s.is_client_error() => Some(NonRetryableError::ClientError(code)),
        // 5xx and anything unusual
        _ => None,
    }
}
