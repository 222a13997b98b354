//! Platform-specific path utilities.
//!
//! This module provides functions to get:
//! - The user's home directory
//! - The Desktop directory (XDG user dirs with a `~/Desktop` fallback)
//! - The home-relative application directories scanned during discovery

use crate::config::{SearchPathsConfig, ShortcutConfig};
use crate::error::{LinkerError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Get the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| LinkerError::Config {
        message: "Could not determine home directory".to_string(),
    })
}

/// Get the user's desktop directory.
///
/// Asks `xdg-user-dir DESKTOP` first. When the command is missing, fails, or
/// prints nothing, falls back to `~/Desktop`. The directory is not created.
///
/// # Errors
/// Only when the query yields nothing and the home directory is unknown.
pub fn desktop_dir() -> Result<PathBuf> {
    resolve_desktop_dir_from(query_user_desktop_dir(), dirs::home_dir())
}

/// Pick the desktop directory from a user-dirs query result and a home directory.
pub fn resolve_desktop_dir_from(
    query_output: Option<String>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(output) = query_output {
        let trimmed = output.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    let home = home.ok_or_else(|| LinkerError::Config {
        message: "Could not determine home directory for the Desktop fallback".to_string(),
    })?;
    Ok(home.join(ShortcutConfig::FALLBACK_DESKTOP_DIR_NAME))
}

/// Run the platform user-directory query for the Desktop category.
fn query_user_desktop_dir() -> Option<String> {
    let output = Command::new(ShortcutConfig::USER_DIR_COMMAND)
        .arg(ShortcutConfig::USER_DIR_DESKTOP_KEY)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(output) => Some(String::from_utf8_lossy(&output.stdout).into_owned()),
        Err(e) => {
            debug!("{} unavailable: {}", ShortcutConfig::USER_DIR_COMMAND, e);
            None
        }
    }
}

/// Per-user applications directory (`~/.local/share/applications`).
pub fn user_apps_dir(home: &Path) -> PathBuf {
    home.join(SearchPathsConfig::USER_APPS_SUBDIR)
}

/// Per-user Flatpak exports (`~/.local/share/flatpak/exports/share/applications`).
pub fn flatpak_user_apps_dir(home: &Path) -> PathBuf {
    home.join(SearchPathsConfig::FLATPAK_USER_APPS_SUBDIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_query_output() {
        let dir = resolve_desktop_dir_from(
            Some("/home/u/Schreibtisch\n".to_string()),
            Some(PathBuf::from("/home/u")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/home/u/Schreibtisch"));
    }

    #[test]
    fn test_resolve_falls_back_on_empty_output() {
        let dir =
            resolve_desktop_dir_from(Some("  \n".to_string()), Some(PathBuf::from("/home/u")))
                .unwrap();
        assert_eq!(dir, PathBuf::from("/home/u/Desktop"));
    }

    #[test]
    fn test_resolve_falls_back_when_query_unavailable() {
        let dir = resolve_desktop_dir_from(None, Some(PathBuf::from("/home/u"))).unwrap();
        assert_eq!(dir, PathBuf::from("/home/u/Desktop"));
    }

    #[test]
    fn test_resolve_without_home_errors() {
        let result = resolve_desktop_dir_from(None, None);
        assert!(matches!(result, Err(LinkerError::Config { .. })));
    }

    #[test]
    fn test_home_relative_dirs() {
        let home = Path::new("/home/u");
        assert_eq!(
            user_apps_dir(home),
            PathBuf::from("/home/u/.local/share/applications")
        );
        assert_eq!(
            flatpak_user_apps_dir(home),
            PathBuf::from("/home/u/.local/share/flatpak/exports/share/applications")
        );
    }

    #[test]
    fn test_desktop_dir() {
        // May fail in environments without a home directory, so just check it doesn't panic
        let _ = desktop_dir();
    }
}
