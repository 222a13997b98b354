//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module rather than
//! scattered throughout the codebase.
//!
//! # Architecture
//!
//! - `paths` - Home, desktop and application search directories
//! - `permissions` - File permission handling (executable bits)
//!
//! # Supported Platforms
//!
//! - **Linux**: Full support (desktop entries are a freedesktop.org convention)
//! - **Other unix**: Paths resolve, but no desktop environment will read the files

pub mod paths;
pub mod permissions;

// Re-export commonly used items
pub use paths::{desktop_dir, flatpak_user_apps_dir, home_dir, user_apps_dir};
pub use permissions::{is_executable, set_executable};
