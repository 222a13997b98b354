//! Builder for configuring DesktopLinker initialization.

use std::path::PathBuf;

use crate::discovery::SearchLocation;
use crate::shortcut::ShortcutManager;
use crate::DesktopLinker;

/// Builder for configuring DesktopLinker initialization.
///
/// # Example
///
/// ```rust,ignore
/// use desktop_linker::{DesktopLinker, SearchLocation};
///
/// let linker = DesktopLinker::builder()
///     .desktop_dir("/tmp/desktop")
///     .search_locations(vec![SearchLocation::custom("/tmp/apps")])
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct DesktopLinkerBuilder {
    desktop_dir: Option<PathBuf>,
    search_locations: Option<Vec<SearchLocation>>,
    extra_locations: Vec<SearchLocation>,
}

impl DesktopLinkerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write shortcuts to `dir` instead of the resolved desktop directory.
    pub fn desktop_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.desktop_dir = Some(dir.into());
        self
    }

    /// Replace the standard search locations.
    ///
    /// Default: the six standard locations for the current user.
    pub fn search_locations(mut self, locations: Vec<SearchLocation>) -> Self {
        self.search_locations = Some(locations);
        self
    }

    /// Scan `location` after the others, at the lowest precedence.
    pub fn add_search_location(mut self, location: SearchLocation) -> Self {
        self.extra_locations.push(location);
        self
    }

    /// Build the DesktopLinker instance.
    pub fn build(self) -> DesktopLinker {
        let mut search_locations = self.search_locations.unwrap_or_else(SearchLocation::defaults);
        search_locations.extend(self.extra_locations);

        let shortcuts = match self.desktop_dir {
            Some(dir) => ShortcutManager::with_desktop_dir(dir),
            None => ShortcutManager::new(),
        };

        DesktopLinker {
            search_locations,
            shortcuts,
        }
    }
}
