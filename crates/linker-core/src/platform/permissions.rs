//! File permission handling for written shortcuts.
//!
//! Desktop environments refuse to launch `.desktop` files on the desktop unless
//! they carry an execute bit, so every shortcut goes through [`set_executable`].

use crate::config::ShortcutConfig;
use crate::error::{LinkerError, Result};
use std::path::Path;
use tracing::debug;

/// Add the owner-execute bit to a file, keeping its other permission bits.
///
/// # Platform Behavior
/// - **Unix**: `mode |= 0o100`
/// - **Other**: No-op
///
/// # Errors
/// Returns an error if the file doesn't exist or permissions can't be changed.
pub fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path)
            .map_err(|e| LinkerError::io_action("read file metadata", e, path))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | ShortcutConfig::OWNER_EXECUTE_MODE);
        std::fs::set_permissions(path, permissions)
            .map_err(|e| LinkerError::io_action("set permissions", e, path))?;
        debug!("Set executable permissions on: {}", path.display());
    }

    #[cfg(not(unix))]
    {
        debug!("Skipping executable bit on non-unix platform for: {}", path.display());
    }

    Ok(())
}

/// Check if a file has any execute bit set.
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path)
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}
