use std::collections::{BTreeMap, BTreeSet};

/// What the user has done to the catalog so far.
///
/// Packages without an explicit selection show their newest release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub(super) search: String,
    pub(super) expanded: BTreeSet<String>,
    pub(super) open_picker: Option<String>,
    pub(super) selected: BTreeMap<String, String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_expanded(&self, package: &str) -> bool {
        self.expanded.contains(package)
    }

    pub fn is_picker_open(&self, package: &str) -> bool {
        self.open_picker.as_deref() == Some(package)
    }

    pub fn selected_version(&self, package: &str) -> Option<&str> {
        self.selected.get(package).map(String::as_str)
    }
}

/// User interaction with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on a package header.
    ToggleExpand(String),
    /// Click on a package's version picker trigger.
    TogglePicker(String),
    /// Click anywhere outside a version picker.
    DismissPickers,
    SelectVersion { package: String, version: String },
    Search(String),
    CopyInstallCommand { package: String, version: String },
}

/// Side effect requested by an event, carried out by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put this text on the clipboard.
    Copy(String),
}
