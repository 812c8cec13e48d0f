//! Searchable catalog over a loaded [`PackageIndex`].
//!
//! The catalog owns the index and turns it, together with a [`ViewState`],
//! into a [`CatalogView`]. User interaction is expressed as [`Event`]s that
//! [`Catalog::apply`] folds into the state. An event that names an unknown
//! package or version is rejected and leaves the state untouched.

mod state;
mod view;

use log::debug;

use crate::error::CatalogError;
use crate::index::{PackageEntry, PackageIndex, Release, ReleaseList};

pub use state::{Effect, Event, ViewState};
pub use view::{
    CatalogView, DEFAULT_REPO_ALIAS, DetailView, Field, InstallCommand, LOAD_FAILED_MESSAGE, Link,
    NO_RESULTS_MESSAGE, NOT_AVAILABLE, PackageCard, VersionOption,
};

#[derive(Debug)]
pub struct Catalog {
    index: PackageIndex,
    repo_alias: String,
}

impl Catalog {
    pub fn new(index: PackageIndex, repo_alias: impl Into<String>) -> Self {
        Self {
            index,
            repo_alias: repo_alias.into(),
        }
    }

    pub fn index(&self) -> &PackageIndex {
        &self.index
    }

    pub fn repo_alias(&self) -> &str {
        &self.repo_alias
    }

    fn releases(&self, package: &str) -> Result<&ReleaseList, CatalogError> {
        self.index
            .get(package)
            .ok_or_else(|| CatalogError::UnknownPackage(package.to_string()))
    }

    /// Looks up a release; `None` means the newest one.
    pub fn release(&self, package: &str, version: Option<&str>) -> Result<&Release, CatalogError> {
        let releases = self.releases(package)?;
        match version {
            None => Ok(releases.newest()),
            Some(v) => releases.find(v).ok_or_else(|| CatalogError::UnknownVersion {
                package: package.to_string(),
                version: v.to_string(),
            }),
        }
    }

    /// Packages whose newest release mentions `term` in its name, description
    /// or keywords, ignoring case. An empty term keeps everything. Name order
    /// is preserved.
    pub fn filter(&self, term: &str) -> Vec<PackageEntry<'_>> {
        let needle = term.to_lowercase();
        self.index
            .entries()
            .filter(|entry| needle.is_empty() || entry.newest().matches(&needle))
            .collect()
    }

    pub fn detail(&self, package: &str, version: Option<&str>) -> Result<DetailView, CatalogError> {
        let release = self.release(package, version)?;
        Ok(DetailView::new(&self.repo_alias, release))
    }

    pub fn install_command(
        &self,
        package: &str,
        version: Option<&str>,
    ) -> Result<InstallCommand, CatalogError> {
        let release = self.release(package, version)?;
        Ok(InstallCommand::new(&self.repo_alias, release))
    }

    fn card(&self, entry: PackageEntry<'_>, state: &ViewState) -> PackageCard {
        let newest = entry.newest();
        // A stale selection (e.g. from before a reload) falls back to newest.
        let selected = state
            .selected_version(entry.name)
            .and_then(|v| entry.releases.find(v))
            .unwrap_or(newest);

        PackageCard {
            name: entry.name.to_string(),
            description: newest.description.clone().unwrap_or_default(),
            newest_version: newest.version.clone(),
            selected_version: selected.version.clone(),
            expanded: state.is_expanded(entry.name),
            picker_open: state.is_picker_open(entry.name),
            versions: entry
                .releases
                .versions()
                .map(|v| VersionOption {
                    version: v.to_string(),
                    selected: v == selected.version,
                })
                .collect(),
            detail: DetailView::new(&self.repo_alias, selected),
        }
    }

    /// Builds the view for `state`. Pure: same inputs, same view.
    pub fn view(&self, state: &ViewState) -> CatalogView {
        let entries = self.filter(state.search());
        if entries.is_empty() {
            return CatalogView::no_results();
        }
        CatalogView::Packages {
            packages: entries
                .into_iter()
                .map(|entry| self.card(entry, state))
                .collect(),
        }
    }

    /// Applies one event. Everything is validated before `state` is touched.
    pub fn apply(&self, state: &mut ViewState, event: Event) -> Result<Option<Effect>, CatalogError> {
        debug!("Applying {:?}", event);
        match event {
            Event::ToggleExpand(package) => {
                self.releases(&package)?;
                if !state.expanded.remove(&package) {
                    state.expanded.insert(package);
                }
                Ok(None)
            }
            Event::TogglePicker(package) => {
                self.releases(&package)?;
                state.open_picker = if state.is_picker_open(&package) {
                    None
                } else {
                    Some(package)
                };
                Ok(None)
            }
            Event::DismissPickers => {
                state.open_picker = None;
                Ok(None)
            }
            Event::SelectVersion { package, version } => {
                self.release(&package, Some(version.as_str()))?;
                if state.is_picker_open(&package) {
                    state.open_picker = None;
                }
                state.selected.insert(package, version);
                Ok(None)
            }
            Event::Search(term) => {
                state.search = term;
                Ok(None)
            }
            Event::CopyInstallCommand { package, version } => {
                let command = self.install_command(&package, Some(version.as_str()))?;
                Ok(Some(Effect::Copy(command.to_string())))
            }
        }
    }
}
