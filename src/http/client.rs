//! HTTP client with built-in retry logic and error handling.

use log::{debug, warn};
use reqwest::Client;
use thiserror::Error;

use super::retry::{NonRetryableError, RetryPolicy, classify_status};

/// Why a GET did not produce a body.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Rejected(#[from] NonRetryableError),

    #[error("server error (HTTP {0})")]
    Server(u16),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),
}

impl HttpError {
    fn is_retryable(&self) -> bool {
        !matches!(self, HttpError::Rejected(_))
    }

    /// HTTP status behind the failure, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Rejected(e) => Some(e.status()),
            HttpError::Server(code) => Some(*code),
            HttpError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// HTTP client with built-in retry logic for network operations.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    policy: RetryPolicy,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Performs a GET request and returns the body as text.
    /// Automatically retries on transient errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        debug!("GET {}...", url);
        self.with_retry("GET", || self.get_text_once(url)).await
    }

    async fn get_text_once(&self, url: &str) -> Result<String, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(HttpError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(match classify_status(status) {
                Some(rejected) => HttpError::Rejected(rejected),
                None => HttpError::Server(status.as_u16()),
            });
        }

        let body = response.text().await.map_err(HttpError::Transport)?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Executes an async operation with retry logic.
    async fn with_retry<F, Fut, T>(&self, operation_name: &str, operation: F) -> Result<T, HttpError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, HttpError>>,
    {
        let attempts = self.policy.attempts;
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if !e.is_retryable() => {
                    debug!("{}: non-retryable error: {}", operation_name, e);
                    return Err(e);
                }
                Err(e) if attempt >= attempts => return Err(e),
                Err(e) => {
                    warn!(
                        "{}: attempt {}/{} failed ({}), retrying in {}ms...",
                        operation_name,
                        attempt,
                        attempts,
                        e,
                        self.policy.delay.as_millis()
                    );
                    tokio::time::sleep(self.policy.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
