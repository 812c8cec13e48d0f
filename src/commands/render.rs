use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::str::FromStr;

use crate::{
    catalog::{Catalog, Event, ViewState},
    render::{HtmlRenderer, Render},
    runtime::Runtime,
};

use super::{Config, load_catalog};

/// `PACKAGE=VERSION` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub package: String,
    pub version: String,
}

impl FromStr for Selection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((package, version)) if !package.is_empty() && !version.is_empty() => {
                Ok(Selection {
                    package: package.to_string(),
                    version: version.to_string(),
                })
            }
            _ => anyhow::bail!("Invalid selection '{}'. Expected 'PACKAGE=VERSION'.", s),
        }
    }
}

/// Write the catalog as an HTML fragment
#[tracing::instrument(skip(config))]
pub async fn render<R: Runtime>(
    config: Config<R>,
    search: Option<String>,
    expand: Vec<String>,
    select: Vec<Selection>,
    out: Option<PathBuf>,
) -> Result<()> {
    let catalog = load_catalog(&config).await?;
    let html = render_html(&catalog, search, expand, select)?;

    match out {
        Some(path) => {
            config
                .runtime
                .write(&path, html.as_bytes())
                .with_context(|| format!("Failed to write catalog to {:?}", path))?;
            info!("Wrote catalog to {:?}", path);
        }
        None => println!("{}", html),
    }
    Ok(())
}

pub(crate) fn render_html(
    catalog: &Catalog,
    search: Option<String>,
    expand: Vec<String>,
    select: Vec<Selection>,
) -> Result<String> {
    let mut state = ViewState::new();

    if let Some(term) = search {
        catalog.apply(&mut state, Event::Search(term))?;
    }
    for package in expand {
        // Repeating a name keeps it expanded.
        if state.is_expanded(&package) {
            debug!("{} is already expanded", package);
            continue;
        }
        catalog.apply(&mut state, Event::ToggleExpand(package))?;
    }
    for selection in select {
        debug!("Selecting {}={}", selection.package, selection.version);
        catalog.apply(
            &mut state,
            Event::SelectVersion {
                package: selection.package,
                version: selection.version,
            },
        )?;
    }

    Ok(HtmlRenderer.catalog(&catalog.view(&state)))
}
