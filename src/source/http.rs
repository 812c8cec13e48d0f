//! Index served over HTTP(S).

use async_trait::async_trait;
use log::debug;

use crate::error::FetchError;
use crate::http::HttpClient;

use super::IndexSource;

pub struct HttpSource {
    http_client: HttpClient,
    url: String,
}

impl HttpSource {
    pub fn new(http_client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl IndexSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        debug!("Fetching index from {}...", self.url);
        Ok(self.http_client.get_text(&self.url).await?)
    }
}
