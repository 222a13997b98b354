//! Centralized configuration for Desktop Linker.
//!
//! Nothing is persisted; these are the fixed locations, file names and icon
//! names the backend works with.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Desktop Linker";
}

/// Locations scanned for installed applications.
pub struct SearchPathsConfig;

impl SearchPathsConfig {
    pub const SYSTEM_APPS_DIR: &'static str = "/usr/share/applications";
    pub const LOCAL_ADMIN_APPS_DIR: &'static str = "/usr/local/share/applications";
    pub const SNAP_APPS_DIR: &'static str = "/var/lib/snapd/desktop/applications";
    pub const FLATPAK_SYSTEM_APPS_DIR: &'static str = "/var/lib/flatpak/exports/share/applications";

    // Relative to the home directory
    pub const USER_APPS_SUBDIR: &'static str = ".local/share/applications";
    pub const FLATPAK_USER_APPS_SUBDIR: &'static str =
        ".local/share/flatpak/exports/share/applications";
}

/// Desktop directory lookup and shortcut file layout.
pub struct ShortcutConfig;

impl ShortcutConfig {
    pub const DESKTOP_EXTENSION: &'static str = "desktop";
    pub const DESKTOP_ENTRY_SECTION: &'static str = "Desktop Entry";
    pub const ENTRY_VERSION: &'static str = "1.0";
    pub const ENTRY_TYPE: &'static str = "Application";
    pub const OPENER_COMMAND: &'static str = "xdg-open";

    pub const USER_DIR_COMMAND: &'static str = "xdg-user-dir";
    pub const USER_DIR_DESKTOP_KEY: &'static str = "DESKTOP";
    pub const FALLBACK_DESKTOP_DIR_NAME: &'static str = "Desktop";

    pub const FOLDER_ICON: &'static str = "folder";
    pub const DEFAULT_FILE_ICON: &'static str = "text-x-generic";

    /// Owner-execute bit added to every written shortcut.
    pub const OWNER_EXECUTE_MODE: u32 = 0o100;
}
