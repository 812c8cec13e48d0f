use anyhow::Result;
use log::debug;

use crate::{
    catalog::{Catalog, CatalogView},
    index,
    render::{Render, TextRenderer},
    runtime::Runtime,
};

pub mod config;
mod install_command;
mod list;
mod render;
mod show;

pub use config::Config;
pub use install_command::install_command;
pub use list::list;
pub use render::{Selection, render};
pub use show::show;

/// Loads the configured index into a catalog.
///
/// On failure the single user-facing load message goes to stderr before the
/// error is returned.
#[tracing::instrument(skip(config))]
pub async fn load_catalog<R: Runtime>(config: &Config<R>) -> Result<Catalog> {
    let source = config.source();
    match index::load(source.as_ref()).await {
        Ok(index) => {
            debug!("Catalog ready with {} chart(s)", index.len());
            Ok(Catalog::new(index, config.repo_alias.clone()))
        }
        Err(e) => {
            eprint!("{}", TextRenderer.catalog(&CatalogView::load_failed(&e)));
            Err(e.into())
        }
    }
}
