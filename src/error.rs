use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpError;

/// Could not obtain the raw index document.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("cannot read {path:?}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loading the repository index failed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to fetch repository index from {location}")]
    Fetch {
        location: String,
        #[source]
        source: FetchError,
    },

    #[error("failed to parse repository index from {location}")]
    Parse {
        location: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

impl LoadError {
    /// Short name of the failure kind, shown next to the user-facing message.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Fetch { .. } => "fetch",
            LoadError::Parse { .. } => "parse",
        }
    }
}

/// An event referenced something the catalog does not contain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no chart named '{0}' in the repository")]
    UnknownPackage(String),

    #[error("chart '{package}' has no version '{version}'")]
    UnknownVersion { package: String, version: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    fn missing_file() -> LoadError {
        LoadError::Fetch {
            location: "/srv/charts/index.yaml".into(),
            source: FetchError::File {
                path: PathBuf::from("/srv/charts/index.yaml"),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            },
        }
    }

    #[test]
    fn test_each_layer_names_its_cause_once() {
        let err = missing_file();
        let chain: Vec<String> = std::iter::successors(
            Some(&err as &(dyn std::error::Error + 'static)),
            |&e| e.source(),
        )
        .map(|e| e.to_string())
        .collect();

        assert_eq!(
            chain,
            vec![
                "failed to fetch repository index from /srv/charts/index.yaml",
                "cannot read \"/srv/charts/index.yaml\"",
                "No such file or directory",
            ]
        );
    }

    #[test]
    fn test_alternate_format_lists_every_cause_once() {
        let err = anyhow::Error::from(missing_file());
        let text = format!("{:#}", err);
        assert_eq!(text.matches("No such file or directory").count(), 1);
        assert_eq!(text.matches("cannot read").count(), 1);
    }
}
