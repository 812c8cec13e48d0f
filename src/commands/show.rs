use anyhow::{Context, Result};
use log::debug;

use crate::{
    catalog::Catalog,
    render::{Render, TextRenderer},
    runtime::Runtime,
};

use super::{Config, load_catalog};

/// Show the details of one chart release
#[tracing::instrument(skip(config))]
pub async fn show<R: Runtime>(
    config: Config<R>,
    package: &str,
    version: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(&config).await?;
    print!("{}", show_output(&catalog, package, version, json)?);
    Ok(())
}

pub(crate) fn show_output(
    catalog: &Catalog,
    package: &str,
    version: Option<&str>,
    json: bool,
) -> Result<String> {
    let detail = catalog.detail(package, version)?;
    debug!("Showing {} {}", detail.package, detail.version);

    if json {
        let text = serde_json::to_string_pretty(&detail).context("Failed to serialize details")?;
        Ok(format!("{}\n", text))
    } else {
        Ok(TextRenderer.detail(&detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::catalog;
    use crate::error::CatalogError;

    #[test]
    fn test_show_newest_by_default() {
        let output = show_output(&catalog(), "redis", None, false).unwrap();
        assert!(output.contains("Version:      1.10.0\n"));
        assert!(output.contains("Maintainers:  Ops <ops@example.com>\n"));
        assert!(output.contains("Home:         N/A\n"));
    }

    #[test]
    fn test_show_selected_version() {
        let output = show_output(&catalog(), "redis", Some("1.9.0"), false).unwrap();
        assert!(output.contains("Version:      1.9.0\n"));
        assert!(output.contains("App Version:  6.0.0\n"));
        assert!(output.contains("Home:         https://redis.io\n"));
        assert!(output.contains("Maintainers:  N/A\n"));
        assert!(output.contains("Keywords:     cache\n"));
    }

    #[test]
    fn test_show_unknown_version() {
        let err = show_output(&catalog(), "redis", Some("3.0.0"), false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::UnknownVersion {
                package: "redis".into(),
                version: "3.0.0".into(),
            })
        );
    }

    #[test]
    fn test_show_unknown_package() {
        let err = show_output(&catalog(), "mysql", None, false).unwrap_err();
        assert!(err.to_string().contains("no chart named 'mysql'"));
    }

    #[test]
    fn test_show_json() {
        let output = show_output(&catalog(), "app", None, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["package"], "app");
        assert_eq!(value["version"], "0.1.0");
        assert_eq!(value["keywords"]["kind"], "not_available");
    }
}
