//! Desktop entry generation for file and folder shortcuts.
//!
//! Produces the fixed-layout launcher that opens its target with `xdg-open`.

use std::fmt;
use std::path::Path;

use crate::config::ShortcutConfig;

/// A generated launcher entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutEntry {
    /// Entry name (shown under the desktop icon).
    pub name: String,
    /// Executable command.
    pub exec: String,
    /// Icon name or path.
    pub icon: String,
    /// Whether to run in a terminal.
    pub terminal: bool,
    /// Entry type (usually "Application").
    pub entry_type: String,
    /// Desktop Entry Specification version.
    pub version: String,
}

impl Default for ShortcutEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            exec: String::new(),
            icon: ShortcutConfig::DEFAULT_FILE_ICON.to_string(),
            terminal: false,
            entry_type: ShortcutConfig::ENTRY_TYPE.to_string(),
            version: ShortcutConfig::ENTRY_VERSION.to_string(),
        }
    }
}

impl ShortcutEntry {
    /// Create a new shortcut entry builder.
    pub fn builder() -> ShortcutEntryBuilder {
        ShortcutEntryBuilder::new()
    }

    /// Entry that opens `target` with the desktop's default handler.
    pub fn open_target(target: &Path, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self::builder()
            .name(name)
            .exec(open_command(target))
            .icon(icon)
            .build()
    }
}

/// `xdg-open "<target>"`, with the path embedded verbatim.
pub fn open_command(target: &Path) -> String {
    format!("{} \"{}\"", ShortcutConfig::OPENER_COMMAND, target.display())
}

impl fmt::Display for ShortcutEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", ShortcutConfig::DESKTOP_ENTRY_SECTION)?;
        writeln!(f, "Version={}", self.version)?;
        writeln!(f, "Type={}", self.entry_type)?;
        writeln!(f, "Name={}", self.name)?;
        writeln!(f, "Exec={}", self.exec)?;
        writeln!(f, "Icon={}", self.icon)?;
        writeln!(f, "Terminal={}", if self.terminal { "true" } else { "false" })
    }
}

/// Builder for shortcut entries.
pub struct ShortcutEntryBuilder {
    entry: ShortcutEntry,
}

impl ShortcutEntryBuilder {
    pub fn new() -> Self {
        Self {
            entry: ShortcutEntry::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.entry.exec = exec.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entry.icon = icon.into();
        self
    }

    pub fn build(self) -> ShortcutEntry {
        self.entry
    }
}

impl Default for ShortcutEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
