//! Where the repository index comes from.
//!
//! An index is either served over HTTP(S) next to the chart archives or read
//! from a local file. Both are hidden behind [`IndexSource`].

mod file;
mod http;

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::FetchError;

pub use file::FileSource;
pub use http::HttpSource;

/// File name of the index inside a chart repository.
pub const INDEX_FILE_NAME: &str = "index.yaml";

/// Location of an index document, as given on the command line.
///
/// A location that does not name a `.yaml`/`.yml` file is taken to be the
/// repository root, and `index.yaml` is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexLocation {
    Url(String),
    Path(PathBuf),
}

fn names_yaml_file(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.ends_with(".yaml") || lower.ends_with(".yml")
}

impl FromStr for IndexLocation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("Index location must not be empty.");
        }

        if s.starts_with("http://") || s.starts_with("https://") {
            let url = if names_yaml_file(s) {
                s.to_string()
            } else {
                format!("{}/{}", s.trim_end_matches('/'), INDEX_FILE_NAME)
            };
            return Ok(IndexLocation::Url(url));
        }

        if s.contains("://") && !s.starts_with("file://") {
            anyhow::bail!(
                "Unsupported index location: {}. Expected an http(s) URL or a file path.",
                s
            );
        }

        let path = PathBuf::from(s.strip_prefix("file://").unwrap_or(s));
        let path = if names_yaml_file(s) {
            path
        } else {
            path.join(INDEX_FILE_NAME)
        };
        Ok(IndexLocation::Path(path))
    }
}

impl fmt::Display for IndexLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexLocation::Url(url) => write!(f, "{}", url),
            IndexLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A place the raw index document can be read from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IndexSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> String;

    /// Returns the document body.
    async fn fetch(&self) -> Result<String, FetchError>;
}
