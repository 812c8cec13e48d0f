use anyhow::Result;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::{
    http::{DEFAULT_RETRY_DELAY, HttpClient, RetryPolicy},
    runtime::Runtime,
    source::{FileSource, HttpSource, IndexLocation, IndexSource},
};

/// Default request timeout for fetching the index.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub location: IndexLocation,
    pub repo_alias: String,
    pub http_client: HttpClient,
}

impl<R: Runtime> Config<R> {
    pub fn new(
        runtime: R,
        index: &str,
        repo_alias: String,
        timeout: Duration,
        retries: usize,
    ) -> Result<Self> {
        let location: IndexLocation = index.parse()?;
        debug!("Index location: {}", location);

        let client = Client::builder()
            .user_agent("chartdex-cli")
            .timeout(timeout)
            .build()?;
        let http_client = HttpClient::new(client)
            .with_policy(RetryPolicy::with_retries(retries, DEFAULT_RETRY_DELAY));

        Ok(Self {
            runtime,
            location,
            repo_alias,
            http_client,
        })
    }

    /// The source matching the configured location.
    pub fn source(&self) -> Box<dyn IndexSource + '_> {
        match &self.location {
            IndexLocation::Url(url) => Box::new(HttpSource::new(self.http_client.clone(), url)),
            IndexLocation::Path(path) => Box::new(FileSource::new(&self.runtime, path.clone())),
        }
    }
}
