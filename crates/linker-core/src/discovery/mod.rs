//! Installed application discovery.
//!
//! Scans each [`SearchLocation`] in order for `*.desktop` files, keeps entries
//! that have a `Name` and are not `NoDisplay=true`, drops later entries whose
//! `Name` was already seen, and sorts the result.
//!
//! Discovery is read-only. A bad file never fails the scan; it becomes a
//! [`SkipReason::Unreadable`] outcome.

mod catalog;
mod location;

pub use catalog::AppCatalog;
pub use location::{LocationKind, SearchLocation};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::ShortcutConfig;
use crate::desktop_entry::DesktopEntry;

/// Why a scanned file did not make it into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The file could not be read.
    Unreadable,
    /// No `Name` (or an empty one) in `[Desktop Entry]`.
    MissingName,
    /// `NoDisplay=true`.
    Hidden,
    /// An earlier location already provided this `Name`.
    Duplicate,
}

/// Per-file result of a scan.
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Listed(DesktopEntry),
    Skipped { path: PathBuf, reason: SkipReason },
}

/// A catalog plus what was left out of it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveryReport {
    pub catalog: AppCatalog,
    /// Number of `.desktop` files looked at.
    pub scanned: usize,
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Discover applications in `locations`.
pub fn discover(locations: &[SearchLocation]) -> AppCatalog {
    discover_with_report(locations).catalog
}

/// Discover applications in `locations`, keeping track of skipped files.
pub fn discover_with_report(locations: &[SearchLocation]) -> DiscoveryReport {
    let mut seen: HashSet<String> = HashSet::new();
    let mut listed = Vec::new();
    let mut skipped = Vec::new();
    let mut scanned = 0;

    for location in locations {
        let files = desktop_files(&location.path);
        debug!(
            "Scanning {} location {}: {} entries",
            location.kind,
            location.path.display(),
            files.len()
        );

        for path in files {
            scanned += 1;
            match classify(&path, &seen) {
                ScanOutcome::Listed(entry) => {
                    if let Some(name) = entry.name() {
                        seen.insert(name.to_string());
                    }
                    listed.push(entry);
                }
                ScanOutcome::Skipped { path, reason } => {
                    trace!("Skipping {}: {:?}", path.display(), reason);
                    skipped.push((path, reason));
                }
            }
        }
    }

    let catalog = AppCatalog::from_discovered(listed);
    debug!(
        "Discovered {} applications ({} scanned, {} skipped)",
        catalog.len(),
        scanned,
        skipped.len()
    );

    DiscoveryReport {
        catalog,
        scanned,
        skipped,
    }
}

/// Decide what to do with one file given the names already listed.
pub fn classify(path: &Path, seen: &HashSet<String>) -> ScanOutcome {
    let skip = |reason: SkipReason| ScanOutcome::Skipped {
        path: path.to_path_buf(),
        reason,
    };

    let entry = match DesktopEntry::load(path) {
        Ok(entry) => entry,
        Err(e) => {
            debug!("Failed to read {}: {}", path.display(), e);
            return skip(SkipReason::Unreadable);
        }
    };

    let Some(name) = entry.name() else {
        return skip(SkipReason::MissingName);
    };

    if seen.contains(name) {
        return skip(SkipReason::Duplicate);
    }

    if entry.is_no_display() {
        return skip(SkipReason::Hidden);
    }

    ScanOutcome::Listed(entry)
}

/// `*.desktop` files directly inside `dir`, in file name order.
///
/// A missing or unreadable directory yields nothing.
fn desktop_files(dir: &Path) -> Vec<PathBuf> {
    let suffix = format!(".{}", ShortcutConfig::DESKTOP_EXTENSION);

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(&suffix))
        .map(|e| e.into_path())
        .collect()
}
