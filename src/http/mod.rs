//! HTTP client module with retry logic and error handling.

mod client;
mod retry;

pub use client::{HttpClient, HttpError};
pub use retry::{
    DEFAULT_ATTEMPTS, DEFAULT_RETRIES, DEFAULT_RETRY_DELAY, NonRetryableError, RetryPolicy,
    classify_status,
};
