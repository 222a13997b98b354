//! Desktop shortcut creation.
//!
//! Provides functionality for creating:
//! - File and folder shortcuts (`xdg-open` launchers with a type-based icon)
//! - Application shortcuts (copies of an installed `.desktop` file, optionally
//!   with a different icon)
//!
//! Shortcut files are named after their display name and never overwrite an
//! existing file: `Name.desktop`, then `Name_1.desktop`, `Name_2.desktop`, ...
//!
//! # Example
//!
//! ```rust,ignore
//! use desktop_linker::shortcut::ShortcutManager;
//! use std::path::Path;
//!
//! fn main() -> desktop_linker::Result<()> {
//!     let manager = ShortcutManager::new();
//!
//!     let created = manager.create_file_shortcut(Path::new("/home/u/notes.txt"), None, None)?;
//!     println!("Shortcut created: {}", created.path.display());
//!
//!     Ok(())
//! }
//! ```

mod icon;
mod manager;
mod naming;
mod request;
mod rewrite;
mod shortcut_entry;

pub use icon::{choose_icon, icon_for_extension};
pub use manager::{DesktopDirSource, ShortcutManager};
pub use naming::{base_path, numbered_path, unique_path};
pub use request::{CreatedShortcut, ShortcutRequest};
pub use rewrite::set_icon;
pub use shortcut_entry::{open_command, ShortcutEntry, ShortcutEntryBuilder};
