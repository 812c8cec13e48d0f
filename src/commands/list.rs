use anyhow::Result;
use log::debug;

use crate::{
    catalog::{Catalog, Event, ViewState},
    render::{Render, TextRenderer},
    runtime::Runtime,
};

use super::{Config, load_catalog};

/// List the charts in the repository, optionally filtered
#[tracing::instrument(skip(config))]
pub async fn list<R: Runtime>(config: Config<R>, search: Option<String>, json: bool) -> Result<()> {
    let catalog = load_catalog(&config).await?;
    print!("{}", list_output(&catalog, search, json)?);
    Ok(())
}

pub(crate) fn list_output(catalog: &Catalog, search: Option<String>, json: bool) -> Result<String> {
    let mut state = ViewState::new();
    if let Some(term) = search {
        debug!("Filtering charts by {:?}", term);
        catalog.apply(&mut state, Event::Search(term))?;
    }

    let view = catalog.view(&state);
    debug!("Listing {} chart(s)", view.packages().len());

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
    } else {
        Ok(TextRenderer.catalog(&view))
    }
}
