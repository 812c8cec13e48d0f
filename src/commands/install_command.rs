use anyhow::Result;

use crate::{
    catalog::{Catalog, Effect, Event, ViewState},
    runtime::Runtime,
};

use super::{Config, load_catalog};

/// Print the `helm install` command for a chart release
#[tracing::instrument(skip(config))]
pub async fn install_command<R: Runtime>(
    config: Config<R>,
    package: &str,
    version: Option<&str>,
) -> Result<()> {
    let catalog = load_catalog(&config).await?;
    println!("{}", command_for(&catalog, package, version)?);
    Ok(())
}

/// Goes through the copy event so the printed text is exactly what the
/// catalog would put on the clipboard.
pub(crate) fn command_for(catalog: &Catalog, package: &str, version: Option<&str>) -> Result<String> {
    let version = match version {
        Some(v) => v.to_string(),
        None => catalog.release(package, None)?.version.clone(),
    };

    let mut state = ViewState::new();
    let effect = catalog.apply(
        &mut state,
        Event::CopyInstallCommand {
            package: package.to_string(),
            version,
        },
    )?;

    match effect {
        Some(Effect::Copy(text)) => Ok(text),
        None => anyhow::bail!("No install command available for {}", package),
    }
}
