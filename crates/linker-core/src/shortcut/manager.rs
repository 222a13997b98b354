//! High-level shortcut creation.
//!
//! Creation is not transactional: a failure after the file was claimed can
//! leave a partially written shortcut behind. Existing files are never
//! overwritten, so nothing the user had is lost.

use super::icon::choose_icon;
use super::naming::{base_path, create_unique};
use super::request::{custom_name, CreatedShortcut, ShortcutRequest};
use super::rewrite::set_icon;
use super::shortcut_entry::ShortcutEntry;
use crate::desktop_entry::DesktopEntry;
use crate::error::{LinkerError, Result};
use crate::platform;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where shortcuts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopDirSource {
    /// Ask the platform on every call.
    Resolve,
    /// Always use this directory.
    Fixed(PathBuf),
}

/// High-level shortcut manager.
#[derive(Debug, Clone)]
pub struct ShortcutManager {
    desktop_dir: DesktopDirSource,
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManager {
    /// Manager writing to the platform desktop directory.
    pub fn new() -> Self {
        Self {
            desktop_dir: DesktopDirSource::Resolve,
        }
    }

    /// Manager writing to `dir`.
    pub fn with_desktop_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            desktop_dir: DesktopDirSource::Fixed(dir.into()),
        }
    }

    /// The desktop directory, without creating it.
    pub fn desktop_dir(&self) -> Result<PathBuf> {
        match &self.desktop_dir {
            DesktopDirSource::Resolve => platform::desktop_dir(),
            DesktopDirSource::Fixed(dir) => Ok(dir.clone()),
        }
    }

    /// Resolve the desktop directory and make sure it exists.
    fn prepare_desktop_dir(&self) -> Result<PathBuf> {
        let dir = self.desktop_dir()?;
        fs::create_dir_all(&dir)
            .map_err(|e| LinkerError::io_action("create Desktop directory", e, &dir))?;
        Ok(dir)
    }

    /// Create a shortcut for either kind of request.
    pub fn create(&self, request: &ShortcutRequest) -> Result<CreatedShortcut> {
        match request {
            ShortcutRequest::File { target, icon, name } => {
                self.create_file_shortcut(target, icon.as_deref(), name.as_deref())
            }
            ShortcutRequest::App { source, icon, name } => {
                self.create_app_shortcut(source, icon.as_deref(), name.as_deref())
            }
        }
    }

    /// Create a shortcut that opens a file or folder.
    ///
    /// # Arguments
    ///
    /// * `target` - File or folder to open
    /// * `icon` - Icon path overriding the type-based icon
    /// * `name` - Display name; defaults to the target's file name
    pub fn create_file_shortcut(
        &self,
        target: &Path,
        icon: Option<&Path>,
        name: Option<&str>,
    ) -> Result<CreatedShortcut> {
        if target.as_os_str().is_empty() {
            return Err(LinkerError::NoTargetSelected);
        }

        let desktop_dir = self.prepare_desktop_dir()?;

        let name = match custom_name(name) {
            Some(name) => name.to_string(),
            None => target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| target.to_string_lossy().into_owned()),
        };
        let icon = choose_icon(target, icon);
        let entry = ShortcutEntry::open_target(target, name.clone(), icon.clone());

        let (path, mut file) = create_unique(&base_path(&desktop_dir, &name))?;
        file.write_all(entry.to_string().as_bytes())
            .map_err(|e| LinkerError::io_action("write desktop file", e, &path))?;
        drop(file);

        platform::set_executable(&path)?;

        info!("Created shortcut for {} at {}", target.display(), path.display());

        Ok(CreatedShortcut {
            path,
            name,
            icon: Some(icon),
        })
    }

    /// Create a shortcut by copying an application's `.desktop` file.
    ///
    /// # Arguments
    ///
    /// * `source` - The application's `.desktop` file
    /// * `icon` - Icon path replacing the entry's `Icon=`
    /// * `name` - Name for the shortcut file; defaults to the entry's `Name`
    pub fn create_app_shortcut(
        &self,
        source: &Path,
        icon: Option<&Path>,
        name: Option<&str>,
    ) -> Result<CreatedShortcut> {
        if source.as_os_str().is_empty() {
            return Err(LinkerError::NoAppSelected);
        }

        let desktop_dir = self.prepare_desktop_dir()?;

        let original =
            fs::read(source).map_err(|e| LinkerError::io_action("read source entry", e, source))?;
        let parsed = DesktopEntry::parse_str(&String::from_utf8_lossy(&original), source);

        let name = custom_name(name)
            .or_else(|| parsed.name())
            .map(str::to_string)
            .or_else(|| parsed.file_stem())
            .unwrap_or_else(|| source.to_string_lossy().into_owned());

        let (contents, written_icon) = match icon {
            Some(icon) => {
                let text = String::from_utf8(original).map_err(|e| LinkerError::InvalidEntry {
                    path: source.to_path_buf(),
                    message: format!("cannot rewrite Icon in non UTF-8 file: {}", e),
                })?;
                let icon = icon.to_string_lossy().into_owned();
                (set_icon(&text, &icon).into_bytes(), Some(icon))
            }
            None => (original, parsed.icon().map(str::to_string)),
        };

        let (path, mut file) = create_unique(&base_path(&desktop_dir, &name))?;
        file.write_all(&contents)
            .map_err(|e| LinkerError::io_action("write desktop file", e, &path))?;
        drop(file);

        copy_permissions(source, &path)?;
        platform::set_executable(&path)?;

        info!("Created application shortcut for {} at {}", source.display(), path.display());

        Ok(CreatedShortcut {
            path,
            name,
            icon: written_icon,
        })
    }
}

/// Give `dest` the permission bits of `source`.
fn copy_permissions(source: &Path, dest: &Path) -> Result<()> {
    let permissions = fs::metadata(source)
        .map_err(|e| LinkerError::io_action("read source metadata", e, source))?
        .permissions();
    fs::set_permissions(dest, permissions)
        .map_err(|e| LinkerError::io_action("set permissions", e, dest))?;
    debug!("Copied permissions from {} to {}", source.display(), dest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager(temp_dir: &TempDir) -> ShortcutManager {
        ShortcutManager::with_desktop_dir(temp_dir.path().join("Desktop"))
    }

    #[test]
    fn test_file_shortcut_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("notes.txt");
        fs::write(&target, "hello").unwrap();

        let created = manager(&temp_dir)
            .create_file_shortcut(&target, None, None)
            .unwrap();

        assert_eq!(created.path, temp_dir.path().join("Desktop").join("notes.txt.desktop"));
        assert_eq!(created.name, "notes.txt");
        assert_eq!(created.icon.as_deref(), Some("text-x-generic"));

        let content = fs::read_to_string(&created.path).unwrap();
        assert!(content.contains(&format!("Exec=xdg-open \"{}\"\n", target.display())));
        assert!(content.ends_with("Terminal=false\n"));
        assert!(platform::is_executable(&created.path));
    }

    #[test]
    fn test_file_shortcut_empty_custom_name_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("song.mp3");
        fs::write(&target, "").unwrap();

        let created = manager(&temp_dir)
            .create_file_shortcut(&target, None, Some(""))
            .unwrap();

        assert_eq!(created.name, "song.mp3");
        assert_eq!(created.icon.as_deref(), Some("audio-x-generic"));
    }

    #[test]
    fn test_empty_target_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = manager(&temp_dir).create_file_shortcut(Path::new(""), None, None);
        assert!(matches!(result, Err(LinkerError::NoTargetSelected)));

        let result = manager(&temp_dir).create_app_shortcut(Path::new(""), None, None);
        assert!(matches!(result, Err(LinkerError::NoAppSelected)));
    }

    #[test]
    fn test_app_shortcut_name_falls_back_to_stem() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("org.example.Tool.desktop");
        fs::write(&source, "[Desktop Entry]\nExec=tool\n").unwrap();

        let created = manager(&temp_dir)
            .create_app_shortcut(&source, None, None)
            .unwrap();

        assert_eq!(created.name, "org.example.Tool");
        assert_eq!(
            created.path.file_name().unwrap().to_string_lossy(),
            "org.example.Tool.desktop"
        );
    }

    #[test]
    fn test_app_shortcut_missing_source_errors() {
        let temp_dir = TempDir::new().unwrap();
        let result = manager(&temp_dir).create_app_shortcut(
            &temp_dir.path().join("gone.desktop"),
            None,
            None,
        );
        assert!(matches!(result, Err(LinkerError::Io { .. })));
    }

    #[test]
    fn test_app_shortcut_non_utf8_with_icon_errors() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("bad.desktop");
        fs::write(&source, b"[Desktop Entry]\nName=Bad\xff\n").unwrap();

        let result =
            manager(&temp_dir).create_app_shortcut(&source, Some(Path::new("/i.png")), None);
        assert!(matches!(result, Err(LinkerError::InvalidEntry { .. })));

        let copied = manager(&temp_dir).create_app_shortcut(&source, None, None).unwrap();
        assert_eq!(fs::read(&copied.path).unwrap(), fs::read(&source).unwrap());
    }

    #[test]
    fn test_create_dispatches_on_request() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("Projects");
        fs::create_dir(&folder).unwrap();

        let created = manager(&temp_dir)
            .create(&ShortcutRequest::file(&folder).with_name("Work"))
            .unwrap();

        assert_eq!(created.name, "Work");
        assert_eq!(created.icon.as_deref(), Some("folder"));
        assert!(created.path.ends_with("Work.desktop"));
    }
}
