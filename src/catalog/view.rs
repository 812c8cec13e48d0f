//! View model produced by the catalog. Renderers only read these types.

use serde::Serialize;

use crate::error::LoadError;
use crate::index::{Maintainer, Release};

/// Placeholder shown for any missing release field.
pub const NOT_AVAILABLE: &str = "N/A";

pub const NO_RESULTS_MESSAGE: &str = "No charts found matching your search.";

pub const LOAD_FAILED_MESSAGE: &str = "Could not load Helm chart repository.";

/// Repository alias used in install commands unless configured otherwise.
pub const DEFAULT_REPO_ALIAS: &str = "eggybyte";

/// A detail value that may be missing from the release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Field<T> {
    Present(T),
    NotAvailable,
}

impl<T> Field<T> {
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Present(v) => Field::Present(v),
            Field::NotAvailable => Field::NotAvailable,
        }
    }

    pub fn present(self) -> Option<T> {
        match self {
            Field::Present(v) => Some(v),
            Field::NotAvailable => None,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn non_empty_list<T>(items: Option<&Vec<T>>) -> Option<&Vec<T>> {
    items.filter(|v| !v.is_empty())
}

/// A label with an optional target. The target is dropped when it would
/// not be safe to follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Link {
    /// Link to a web page; only http(s) targets are kept.
    pub fn web(url: &str) -> Self {
        let lower = url.trim().to_ascii_lowercase();
        let safe = lower.starts_with("https://") || lower.starts_with("http://");
        Self {
            label: url.to_string(),
            href: safe.then(|| url.trim().to_string()),
        }
    }

    /// Maintainer link; plain name when there is no email.
    pub fn maintainer(maintainer: &Maintainer) -> Self {
        let label = if maintainer.name.is_empty() {
            maintainer.email.clone().unwrap_or_default()
        } else {
            maintainer.name.clone()
        };
        Self {
            label,
            href: non_empty(maintainer.email.as_deref()).map(|email| format!("mailto:{}", email)),
        }
    }
}

/// `helm install` invocation for one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct InstallCommand {
    pub release_name: String,
    pub chart: String,
    pub version: String,
}

impl InstallCommand {
    pub fn new(repo_alias: &str, release: &Release) -> Self {
        Self {
            release_name: format!("my-{}", release.name),
            chart: format!("{}/{}", repo_alias, release.name),
            version: release.version.clone(),
        }
    }

    pub fn args(&self) -> Vec<&str> {
        vec![
            "helm",
            "install",
            &self.release_name,
            &self.chart,
            "--version",
            &self.version,
        ]
    }
}

impl std::fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", shell_words::join(self.args()))
    }
}

impl From<InstallCommand> for String {
    fn from(command: InstallCommand) -> Self {
        command.to_string()
    }
}

/// Everything shown in the expanded panel for one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub package: String,
    pub version: String,
    pub home: Field<Link>,
    pub app_version: Field<String>,
    pub maintainers: Field<Vec<Link>>,
    pub sources: Field<Vec<Link>>,
    pub keywords: Field<Vec<String>>,
    pub install_command: InstallCommand,
}

impl DetailView {
    pub fn new(repo_alias: &str, release: &Release) -> Self {
        let home = match non_empty(release.home.as_deref()) {
            Some(url) => Field::Present(Link::web(url)),
            None => Field::NotAvailable,
        };
        let app_version = match non_empty(release.app_version.as_deref()) {
            Some(v) => Field::Present(v.to_string()),
            None => Field::NotAvailable,
        };
        let maintainers = match non_empty_list(release.maintainers.as_ref()) {
            Some(list) => Field::Present(list.iter().map(Link::maintainer).collect()),
            None => Field::NotAvailable,
        };
        let sources = match non_empty_list(release.sources.as_ref()) {
            Some(list) => Field::Present(list.iter().map(|s| Link::web(s)).collect()),
            None => Field::NotAvailable,
        };
        // An empty keyword list is still a list; only a missing one is N/A.
        let keywords = match &release.keywords {
            Some(list) => Field::Present(list.clone()),
            None => Field::NotAvailable,
        };

        Self {
            package: release.name.clone(),
            version: release.version.clone(),
            home,
            app_version,
            maintainers,
            sources,
            keywords,
            install_command: InstallCommand::new(repo_alias, release),
        }
    }
}

/// One entry of the version picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOption {
    pub version: String,
    pub selected: bool,
}

/// Summary row plus its (possibly collapsed) detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageCard {
    pub name: String,
    /// Description of the newest release, empty when absent.
    pub description: String,
    pub newest_version: String,
    pub selected_version: String,
    pub expanded: bool,
    pub picker_open: bool,
    pub versions: Vec<VersionOption>,
    pub detail: DetailView,
}

impl PackageCard {
    pub fn badge(&self) -> String {
        format!("v{}", self.selected_version)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogView {
    Packages { packages: Vec<PackageCard> },
    NoResults { message: String },
    LoadFailed { message: String, kind: String },
}

impl CatalogView {
    pub fn no_results() -> Self {
        CatalogView::NoResults {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    }

    pub fn load_failed(error: &LoadError) -> Self {
        CatalogView::LoadFailed {
            message: LOAD_FAILED_MESSAGE.to_string(),
            kind: error.kind().to_string(),
        }
    }

    pub fn packages(&self) -> &[PackageCard] {
        match self {
            CatalogView::Packages { packages } => packages,
            _ => &[],
        }
    }
}
