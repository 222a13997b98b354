//! Desktop entry (.desktop file) parsing.
//!
//! Only the `[Desktop Entry]` group matters for shortcuts. Action groups and
//! vendor extensions are skipped so their keys cannot shadow the primary ones.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::ShortcutConfig;
use crate::error::{LinkerError, Result};

/// Recognized keys.
pub mod keys {
    pub const NAME: &str = "Name";
    pub const ICON: &str = "Icon";
    pub const COMMENT: &str = "Comment";
    pub const GENERIC_NAME: &str = "GenericName";
    pub const NO_DISPLAY: &str = "NoDisplay";
    pub const EXEC: &str = "Exec";
    pub const TYPE: &str = "Type";
}

/// The `[Desktop Entry]` section of one `.desktop` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesktopEntry {
    /// Where the entry was read from.
    source_path: PathBuf,
    /// Key/value pairs of the `[Desktop Entry]` section.
    fields: BTreeMap<String, String>,
}

impl DesktopEntry {
    /// Parse a file, yielding an empty entry if it cannot be read.
    pub fn parse(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            debug!("Treating {} as empty entry: {}", path.display(), e);
            Self {
                source_path: path.to_path_buf(),
                fields: BTreeMap::new(),
            }
        })
    }

    /// Read and parse a file, reporting read failures.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).map_err(|e| LinkerError::io_action("read desktop entry", e, path))?;
        Ok(Self::parse_str(&String::from_utf8_lossy(&bytes), path))
    }

    /// Parse `.desktop` text.
    pub fn parse_str(content: &str, source_path: impl Into<PathBuf>) -> Self {
        let mut fields = BTreeMap::new();
        let mut in_section = false;

        for line in content.lines() {
            let line = line.trim();

            if let Some(section) = section_header(line) {
                in_section = section == ShortcutConfig::DESKTOP_ENTRY_SECTION;
                continue;
            }

            if !in_section || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                fields.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self {
            source_path: source_path.into(),
            fields,
        }
    }

    /// Path the entry was read from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// File stem of the source path (`firefox` for `firefox.desktop`).
    pub fn file_stem(&self) -> Option<String> {
        self.source_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
    }

    /// Raw value for any key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// `Name`, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.get(keys::NAME).filter(|name| !name.is_empty())
    }

    pub fn icon(&self) -> Option<&str> {
        self.get(keys::ICON)
    }

    pub fn comment(&self) -> Option<&str> {
        self.get(keys::COMMENT)
    }

    pub fn generic_name(&self) -> Option<&str> {
        self.get(keys::GENERIC_NAME)
    }

    pub fn exec(&self) -> Option<&str> {
        self.get(keys::EXEC)
    }

    pub fn entry_type(&self) -> Option<&str> {
        self.get(keys::TYPE)
    }

    /// Whether `NoDisplay` is set to `true` (any case).
    pub fn is_no_display(&self) -> bool {
        self.get(keys::NO_DISPLAY)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Iterate key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Return the group name if `line` is a `[Group]` header.
pub(crate) fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FIREFOX: &str = "\
# Generated by the package
[Desktop Entry]
Version=1.0
Name=Firefox
GenericName = Web Browser
Comment=Browse the Web
Exec=firefox %u
Icon=firefox
Type=Application

[Desktop Action new-window]
Name=Open a New Window
Exec=firefox --new-window
";

    #[test]
    fn test_parse_desktop_entry_section_only() {
        let entry = DesktopEntry::parse_str(FIREFOX, "/usr/share/applications/firefox.desktop");

        assert_eq!(entry.name(), Some("Firefox"));
        assert_eq!(entry.generic_name(), Some("Web Browser"));
        assert_eq!(entry.comment(), Some("Browse the Web"));
        assert_eq!(entry.exec(), Some("firefox %u"));
        assert_eq!(entry.icon(), Some("firefox"));
        assert_eq!(entry.entry_type(), Some("Application"));
        assert_eq!(entry.len(), 7);
    }

    #[test]
    fn test_value_splits_on_first_equals() {
        let entry = DesktopEntry::parse_str(
            "[Desktop Entry]\nExec=env FOO=bar app --opt=1\n",
            "a.desktop",
        );
        assert_eq!(entry.exec(), Some("env FOO=bar app --opt=1"));
    }

    #[test]
    fn test_lines_outside_section_ignored() {
        let entry = DesktopEntry::parse_str(
            "Name=Before\n[Other]\nName=Other\n[Desktop Entry]\n#Name=Commented\nIcon=x\nnot a pair\n",
            "a.desktop",
        );
        assert_eq!(entry.name(), None);
        assert_eq!(entry.icon(), Some("x"));
        assert_eq!(entry.len(), 1);
    }

    #[test]
    fn test_section_reentry() {
        let entry = DesktopEntry::parse_str(
            "[Desktop Entry]\nName=A\n[Desktop Action x]\nIcon=action\n[Desktop Entry]\nComment=back\n",
            "a.desktop",
        );
        assert_eq!(entry.name(), Some("A"));
        assert_eq!(entry.icon(), None);
        assert_eq!(entry.comment(), Some("back"));
    }

    #[test]
    fn test_no_display_case_insensitive() {
        let hidden = DesktopEntry::parse_str("[Desktop Entry]\nNoDisplay=TRUE\n", "a.desktop");
        let shown = DesktopEntry::parse_str("[Desktop Entry]\nNoDisplay=false\n", "b.desktop");
        let absent = DesktopEntry::parse_str("[Desktop Entry]\nName=C\n", "c.desktop");

        assert!(hidden.is_no_display());
        assert!(!shown.is_no_display());
        assert!(!absent.is_no_display());
    }

    #[test]
    fn test_empty_name_is_none() {
        let entry = DesktopEntry::parse_str("[Desktop Entry]\nName=\n", "a.desktop");
        assert_eq!(entry.get("Name"), Some(""));
        assert_eq!(entry.name(), None);
    }

    #[test]
    fn test_parse_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.desktop");

        assert!(DesktopEntry::load(&path).is_err());

        let entry = DesktopEntry::parse(&path);
        assert!(entry.is_empty());
        assert_eq!(entry.source_path(), path.as_path());
    }

    #[test]
    fn test_parse_binary_file_has_no_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.desktop");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x3d, 0x80, 0x0a, 0xc3, 0x28]).unwrap();

        let entry = DesktopEntry::parse(&path);
        assert!(entry.is_empty());
    }

    #[test]
    fn test_parse_tolerates_invalid_utf8_in_section() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.desktop");
        let mut bytes = b"[Desktop Entry]\nName=Caf".to_vec();
        bytes.push(0xe9);
        bytes.extend_from_slice(b"\nIcon=cafe\n");
        fs::write(&path, bytes).unwrap();

        let entry = DesktopEntry::parse(&path);
        assert!(entry.name().unwrap().starts_with("Caf"));
        assert_eq!(entry.icon(), Some("cafe"));
    }

    #[test]
    fn test_file_stem() {
        let entry = DesktopEntry::parse_str("", "/opt/apps/org.gnome.Maps.desktop");
        assert_eq!(entry.file_stem().as_deref(), Some("org.gnome.Maps"));
    }
}
