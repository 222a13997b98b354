//! Desktop Linker - Headless library for creating Linux desktop shortcuts.
//!
//! This crate discovers installed applications from their `.desktop` files and
//! writes new `.desktop` shortcuts to the user's Desktop for files, folders and
//! applications. It has no UI; a front end passes in paths and gets back the
//! created file or an error to show.
//!
//! # Example
//!
//! ```rust,ignore
//! use desktop_linker::DesktopLinker;
//!
//! fn main() -> desktop_linker::Result<()> {
//!     let linker = DesktopLinker::new();
//!
//!     // List installed applications matching a search
//!     let apps = linker.discover_apps();
//!     for app in linker.filter_apps(&apps, "browser").iter() {
//!         println!("{}", app.name().unwrap_or_default());
//!     }
//!
//!     // Put a shortcut to a document on the desktop
//!     let path = linker.create_file_shortcut("/home/u/notes.txt", None, None)?;
//!     println!("Created {}", path.display());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod desktop_entry;
pub mod discovery;
pub mod error;
pub mod platform;
pub mod shortcut;

mod api;

// Re-export commonly used types
pub use desktop_entry::DesktopEntry;
pub use discovery::{AppCatalog, DiscoveryReport, LocationKind, SearchLocation, SkipReason};
pub use error::{LinkerError, Result};
pub use shortcut::{CreatedShortcut, ShortcutManager, ShortcutRequest};

pub use api::DesktopLinkerBuilder;

use std::path::{Path, PathBuf};

/// Main entry point for discovery and shortcut creation.
///
/// Holds the search locations and the shortcut writer. It has no mutable
/// state, so one instance can serve any number of callers. Two callers
/// creating shortcuts with the same name concurrently still get distinct
/// files, because each candidate file name is claimed atomically.
#[derive(Debug, Clone)]
pub struct DesktopLinker {
    search_locations: Vec<SearchLocation>,
    shortcuts: ShortcutManager,
}

impl Default for DesktopLinker {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopLinker {
    /// Linker using the standard search locations and the platform desktop directory.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom locations.
    pub fn builder() -> DesktopLinkerBuilder {
        DesktopLinkerBuilder::new()
    }

    /// Locations scanned by [`discover_apps`](Self::discover_apps), in precedence order.
    pub fn search_locations(&self) -> &[SearchLocation] {
        &self.search_locations
    }

    /// Scan all search locations for applications.
    pub fn discover_apps(&self) -> AppCatalog {
        discovery::discover(&self.search_locations)
    }

    /// Scan all search locations, also reporting skipped files.
    pub fn discover_apps_with_report(&self) -> DiscoveryReport {
        discovery::discover_with_report(&self.search_locations)
    }

    /// Narrow a catalog by a case-insensitive query.
    pub fn filter_apps(&self, catalog: &AppCatalog, query: &str) -> AppCatalog {
        catalog.filter(query)
    }

    /// The directory shortcuts are written to.
    pub fn resolve_desktop_dir(&self) -> Result<PathBuf> {
        self.shortcuts.desktop_dir()
    }

    /// Create a shortcut for a file or folder and return its path.
    pub fn create_file_shortcut(
        &self,
        target: impl AsRef<Path>,
        icon: Option<&Path>,
        name: Option<&str>,
    ) -> Result<PathBuf> {
        self.shortcuts
            .create_file_shortcut(target.as_ref(), icon, name)
            .map(|created| created.path)
    }

    /// Create a shortcut for an installed application and return its path.
    pub fn create_app_shortcut(
        &self,
        source: impl AsRef<Path>,
        icon: Option<&Path>,
        name: Option<&str>,
    ) -> Result<PathBuf> {
        self.shortcuts
            .create_app_shortcut(source.as_ref(), icon, name)
            .map(|created| created.path)
    }

    /// Create a shortcut for either kind of request.
    pub fn create(&self, request: &ShortcutRequest) -> Result<CreatedShortcut> {
        self.shortcuts.create(request)
    }
}

/// Discover applications in the standard locations.
pub fn discover_apps() -> AppCatalog {
    discovery::discover(&SearchLocation::defaults())
}

/// Narrow a catalog by a case-insensitive query.
pub fn filter_apps(catalog: &AppCatalog, query: &str) -> AppCatalog {
    catalog.filter(query)
}

/// Create a file or folder shortcut on the platform desktop.
pub fn create_file_shortcut(
    target: impl AsRef<Path>,
    icon: Option<&Path>,
    name: Option<&str>,
) -> Result<PathBuf> {
    ShortcutManager::new()
        .create_file_shortcut(target.as_ref(), icon, name)
        .map(|created| created.path)
}

/// Create an application shortcut on the platform desktop.
pub fn create_app_shortcut(
    source: impl AsRef<Path>,
    icon: Option<&Path>,
    name: Option<&str>,
) -> Result<PathBuf> {
    ShortcutManager::new()
        .create_app_shortcut(source.as_ref(), icon, name)
        .map(|created| created.path)
}

/// The platform desktop directory.
pub fn resolve_desktop_dir() -> Result<PathBuf> {
    platform::desktop_dir()
}
