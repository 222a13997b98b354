//! Shortcut requests and results.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::desktop_entry::DesktopEntry;

/// What to create a shortcut for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutRequest {
    /// A file or folder, opened with `xdg-open`.
    File {
        target: PathBuf,
        icon: Option<PathBuf>,
        name: Option<String>,
    },
    /// An installed application, copied from its `.desktop` file.
    App {
        source: PathBuf,
        icon: Option<PathBuf>,
        name: Option<String>,
    },
}

impl ShortcutRequest {
    pub fn file(target: impl Into<PathBuf>) -> Self {
        ShortcutRequest::File {
            target: target.into(),
            icon: None,
            name: None,
        }
    }

    pub fn app(source: impl Into<PathBuf>) -> Self {
        ShortcutRequest::App {
            source: source.into(),
            icon: None,
            name: None,
        }
    }

    /// Request a shortcut for a discovered application.
    pub fn for_entry(entry: &DesktopEntry) -> Self {
        Self::app(entry.source_path())
    }

    /// Use `icon` instead of the default icon.
    pub fn with_icon(mut self, new_icon: impl Into<PathBuf>) -> Self {
        match &mut self {
            ShortcutRequest::File { icon, .. } | ShortcutRequest::App { icon, .. } => {
                *icon = Some(new_icon.into());
            }
        }
        self
    }

    /// Use `name` as the display name. Empty names are ignored at creation time.
    pub fn with_name(mut self, new_name: impl Into<String>) -> Self {
        match &mut self {
            ShortcutRequest::File { name, .. } | ShortcutRequest::App { name, .. } => {
                *name = Some(new_name.into());
            }
        }
        self
    }

    /// The file or `.desktop` source this request points at.
    pub fn path(&self) -> &Path {
        match self {
            ShortcutRequest::File { target, .. } => target,
            ShortcutRequest::App { source, .. } => source,
        }
    }
}

/// A shortcut written to the desktop directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedShortcut {
    /// Final path of the written `.desktop` file.
    pub path: PathBuf,
    /// Display name used for the file name.
    pub name: String,
    /// Icon written into the entry, if any.
    pub icon: Option<String>,
}

/// A custom name counts only when it is non-empty.
pub(crate) fn custom_name(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let request = ShortcutRequest::file("/home/u/notes.txt")
            .with_name("Notes")
            .with_icon("/icons/n.png");

        assert_eq!(
            request,
            ShortcutRequest::File {
                target: PathBuf::from("/home/u/notes.txt"),
                icon: Some(PathBuf::from("/icons/n.png")),
                name: Some("Notes".to_string()),
            }
        );
        assert_eq!(request.path(), Path::new("/home/u/notes.txt"));
    }

    #[test]
    fn test_for_entry_uses_source_path() {
        let entry = DesktopEntry::parse_str(
            "[Desktop Entry]\nName=Maps\n",
            "/usr/share/applications/maps.desktop",
        );
        let request = ShortcutRequest::for_entry(&entry);

        assert!(matches!(request, ShortcutRequest::App { .. }));
        assert_eq!(request.path(), Path::new("/usr/share/applications/maps.desktop"));
    }

    #[test]
    fn test_custom_name_ignores_empty() {
        assert_eq!(custom_name(Some("")), None);
        assert_eq!(custom_name(Some("X")), Some("X"));
        assert_eq!(custom_name(None), None);
    }
}
