//! Application search locations.
//!
//! Order is precedence: when two locations hold an entry with the same `Name`,
//! the one scanned first is kept.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::config::SearchPathsConfig;
use crate::platform;

/// Which role a search location plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    /// `/usr/share/applications`
    System,
    /// `/usr/local/share/applications`
    LocalAdmin,
    /// `~/.local/share/applications`
    User,
    /// Snap exports
    Snap,
    /// System-wide Flatpak exports
    FlatpakSystem,
    /// Per-user Flatpak exports
    FlatpakUser,
    /// Caller-supplied directory
    Custom,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::System => "system",
            LocationKind::LocalAdmin => "local-admin",
            LocationKind::User => "user",
            LocationKind::Snap => "snap",
            LocationKind::FlatpakSystem => "flatpak-system",
            LocationKind::FlatpakUser => "flatpak-user",
            LocationKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directory scanned for `*.desktop` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLocation {
    pub kind: LocationKind,
    pub path: PathBuf,
}

impl SearchLocation {
    pub fn new(kind: LocationKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// A caller-supplied directory.
    pub fn custom(path: impl Into<PathBuf>) -> Self {
        Self::new(LocationKind::Custom, path)
    }

    /// The six standard locations for the current user, in precedence order.
    ///
    /// Home-relative locations are left out when the home directory is unknown.
    pub fn defaults() -> Vec<Self> {
        let home = platform::home_dir()
            .map_err(|e| warn!("Skipping per-user application directories: {}", e))
            .ok();
        Self::standard(home.as_deref())
    }

    /// The standard locations relative to `home`.
    pub fn standard(home: Option<&Path>) -> Vec<Self> {
        let mut locations = vec![
            Self::new(LocationKind::System, SearchPathsConfig::SYSTEM_APPS_DIR),
            Self::new(LocationKind::LocalAdmin, SearchPathsConfig::LOCAL_ADMIN_APPS_DIR),
        ];

        if let Some(home) = home {
            locations.push(Self::new(LocationKind::User, platform::user_apps_dir(home)));
        }

        locations.push(Self::new(LocationKind::Snap, SearchPathsConfig::SNAP_APPS_DIR));
        locations.push(Self::new(
            LocationKind::FlatpakSystem,
            SearchPathsConfig::FLATPAK_SYSTEM_APPS_DIR,
        ));

        if let Some(home) = home {
            locations.push(Self::new(
                LocationKind::FlatpakUser,
                platform::flatpak_user_apps_dir(home),
            ));
        }

        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let locations = SearchLocation::standard(Some(Path::new("/home/u")));
        let kinds: Vec<_> = locations.iter().map(|l| l.kind).collect();

        assert_eq!(
            kinds,
            vec![
                LocationKind::System,
                LocationKind::LocalAdmin,
                LocationKind::User,
                LocationKind::Snap,
                LocationKind::FlatpakSystem,
                LocationKind::FlatpakUser,
            ]
        );
        assert_eq!(locations[0].path, PathBuf::from("/usr/share/applications"));
        assert_eq!(
            locations[2].path,
            PathBuf::from("/home/u/.local/share/applications")
        );
        assert_eq!(
            locations[5].path,
            PathBuf::from("/home/u/.local/share/flatpak/exports/share/applications")
        );
    }

    #[test]
    fn test_standard_without_home() {
        let locations = SearchLocation::standard(None);
        assert_eq!(locations.len(), 4);
        assert!(locations
            .iter()
            .all(|l| !matches!(l.kind, LocationKind::User | LocationKind::FlatpakUser)));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(LocationKind::FlatpakUser.to_string(), "flatpak-user");
        assert_eq!(LocationKind::Custom.as_str(), "custom");
    }
}
