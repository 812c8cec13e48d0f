//! Chart repository index.
//!
//! A [`PackageIndex`] is built once from an `index.yaml` document and is
//! read-only afterwards; reloading produces a new value.

mod release;
pub mod version;

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::LoadError;
use crate::source::IndexSource;

pub use release::{Maintainer, Release};
pub use version::compare_versions;

/// Top level of a Helm repository `index.yaml`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexDocument {
    #[serde(default)]
    api_version: Option<String>,
    #[serde(default)]
    generated: Option<String>,
    entries: BTreeMap<String, Vec<Release>>,
}

/// Releases of one chart, newest first. Never empty, versions unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseList(Vec<Release>);

impl ReleaseList {
    /// Sorts and deduplicates; returns `None` for an empty list.
    ///
    /// When a version appears more than once the first occurrence in the
    /// document is kept.
    pub fn new(package: &str, releases: Vec<Release>) -> Option<Self> {
        let mut seen = std::collections::HashSet::new();
        let mut unique = Vec::with_capacity(releases.len());
        for mut release in releases {
            if !seen.insert(release.version.clone()) {
                warn!(
                    "Chart '{}' lists version {} more than once, keeping the first",
                    package, release.version
                );
                continue;
            }
            if release.name.is_empty() {
                release.name = package.to_string();
            }
            unique.push(release);
        }

        if unique.is_empty() {
            return None;
        }
        version::sort_descending(&mut unique, |r| r.version.as_str());
        Some(Self(unique))
    }

    pub fn newest(&self) -> &Release {
        &self.0[0]
    }

    pub fn find(&self, version: &str) -> Option<&Release> {
        self.0.iter().find(|r| r.version == version)
    }

    pub fn contains(&self, version: &str) -> bool {
        self.find(version).is_some()
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|r| r.version.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A chart name together with its releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageEntry<'a> {
    pub name: &'a str,
    pub releases: &'a ReleaseList,
}

impl<'a> PackageEntry<'a> {
    pub fn newest(&self) -> &'a Release {
        self.releases.newest()
    }
}

/// All charts of a repository, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageIndex {
    api_version: Option<String>,
    generated: Option<String>,
    packages: BTreeMap<String, ReleaseList>,
}

impl PackageIndex {
    /// Parses an `index.yaml` body.
    pub fn parse(body: &str) -> Result<Self, serde_yaml_ng::Error> {
        let document: IndexDocument = serde_yaml_ng::from_str(body)?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: IndexDocument) -> Self {
        let mut packages = BTreeMap::new();
        for (name, releases) in document.entries {
            match ReleaseList::new(&name, releases) {
                Some(list) => {
                    debug!("Chart '{}': {} release(s)", name, list.len());
                    packages.insert(name, list);
                }
                None => warn!("Chart '{}' has no releases, skipping", name),
            }
        }

        Self {
            api_version: document.api_version,
            generated: document.generated,
            packages,
        }
    }

    pub fn from_packages<I>(packages: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Release>)>,
    {
        Self::from_document(IndexDocument {
            api_version: None,
            generated: None,
            entries: packages.into_iter().collect(),
        })
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&ReleaseList> {
        self.packages.get(name)
    }

    pub fn entry(&self, name: &str) -> Option<PackageEntry<'_>> {
        self.packages
            .get_key_value(name)
            .map(|(name, releases)| PackageEntry { name, releases })
    }

    /// Entries in ascending name order.
    pub fn entries(&self) -> impl Iterator<Item = PackageEntry<'_>> {
        self.packages
            .iter()
            .map(|(name, releases)| PackageEntry { name, releases })
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Fetches and parses the index behind `source`.
#[tracing::instrument(skip(source), fields(location = %source.location()))]
pub async fn load(source: &dyn IndexSource) -> Result<PackageIndex, LoadError> {
    let location = source.location();
    debug!("Loading chart index from {}", location);

    let body = source.fetch().await.map_err(|e| LoadError::Fetch {
        location: location.clone(),
        source: e,
    })?;

    let index = PackageIndex::parse(&body).map_err(|e| LoadError::Parse {
        location: location.clone(),
        source: e,
    })?;

    info!("Loaded {} chart(s) from {}", index.len(), location);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::http::{HttpError, NonRetryableError};
    use crate::source::MockIndexSource;

    const SAMPLE: &str = r#"
apiVersion: v1
generated: "2024-05-01T10:00:00Z"
entries:
  zookeeper:
    - name: zookeeper
      version: 0.9.0
  app:
    - version: 1.2.0
      name: app
    - version: 1.10.0
      name: app
  Beta:
    - name: Beta
      version: 9.9.9
    - name: Beta
      version: 10.2.0
"#;

    fn mock_source(body: Result<&'static str, fn() -> FetchError>) -> MockIndexSource {
        let mut source = MockIndexSource::new();
        source
            .expect_location()
            .returning(|| "https://charts.example.com/index.yaml".to_string());
        source.expect_fetch().returning(move || match body {
            Ok(text) => Ok(text.to_string()),
            Err(make) => Err(make()),
        });
        source
    }

    #[test]
    fn test_parse_orders_releases_numerically() {
        let index = PackageIndex::parse(SAMPLE).unwrap();
        let versions: Vec<&str> = index.get("app").unwrap().versions().collect();
        assert_eq!(versions, vec!["1.10.0", "1.2.0"]);

        let versions: Vec<&str> = index.get("Beta").unwrap().versions().collect();
        assert_eq!(versions, vec!["10.2.0", "9.9.9"]);
    }

    #[test]
    fn test_parse_orders_packages_by_codepoint() {
        let index = PackageIndex::parse(SAMPLE).unwrap();
        let names: Vec<&str> = index.entries().map(|e| e.name).collect();
        assert_eq!(names, vec!["Beta", "app", "zookeeper"]);
        assert_eq!(index.api_version(), Some("v1"));
        assert_eq!(index.generated(), Some("2024-05-01T10:00:00Z"));
    }

    #[test_log::test]
    fn test_parse_drops_duplicate_versions() {
        let index = PackageIndex::parse(
            r#"
entries:
  app:
    - version: 1.0.0
      description: first
    - version: 1.0.0
      description: second
    - version: 0.1.0
"#,
        )
        .unwrap();
        let list = index.get("app").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.newest().description.as_deref(), Some("first"));
    }

    #[test]
    fn test_parse_fills_missing_release_name() {
        let index = PackageIndex::parse("entries:\n  app:\n    - version: 1.0.0\n").unwrap();
        assert_eq!(index.get("app").unwrap().newest().name, "app");
    }

    #[test]
    fn test_parse_skips_packages_without_releases() {
        let index =
            PackageIndex::parse("entries:\n  empty: []\n  app:\n    - version: 1.0.0\n").unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.get("empty").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_entries() {
        assert!(PackageIndex::parse("apiVersion: v1\n").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(PackageIndex::parse("entries: [unclosed\n").is_err());
        assert!(PackageIndex::parse("entries:\n  app: not-a-list\n").is_err());
    }

    #[test]
    fn test_release_list_find() {
        let index = PackageIndex::parse(SAMPLE).unwrap();
        let list = index.get("app").unwrap();
        assert!(list.contains("1.2.0"));
        assert!(!list.contains("3.0.0"));
        assert_eq!(list.find("1.10.0").unwrap().version, "1.10.0");
    }

    #[tokio::test]
    async fn test_load_success() {
        let source = mock_source(Ok(SAMPLE));
        let index = load(&source).await.unwrap();
        assert_eq!(index.len(), 3);
    }

    #[tokio::test]
    async fn test_load_fetch_error() {
        let source = mock_source(Err(|| {
            FetchError::Http(HttpError::Rejected(NonRetryableError::NotFound(404)))
        }));
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch { .. }));
        assert_eq!(err.kind(), "fetch");
        assert!(err.to_string().contains("https://charts.example.com/index.yaml"));
    }

    #[tokio::test]
    async fn test_load_parse_error() {
        let source = mock_source(Ok("entries: [oops\n"));
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert_eq!(err.kind(), "parse");
    }
}
