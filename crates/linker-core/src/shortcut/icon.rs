//! Icon selection for file and folder shortcuts.
//!
//! Precedence: explicit icon path, `folder` for directories, then the
//! extension table, then `text-x-generic`.

use std::path::Path;

use crate::config::ShortcutConfig;

/// Lowercase extension (without dot) to freedesktop icon name.
const EXTENSION_ICONS: &[(&str, &str)] = &[
    ("pdf", "application-pdf"),
    ("png", "image-x-generic"),
    ("jpg", "image-x-generic"),
    ("jpeg", "image-x-generic"),
    ("mp3", "audio-x-generic"),
    ("ogg", "audio-x-generic"),
    ("flac", "audio-x-generic"),
    ("mp4", "video-x-generic"),
    ("mkv", "video-x-generic"),
    ("sh", "text-x-script"),
];

/// Icon name for a file by extension, ignoring case.
pub fn icon_for_extension(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return ShortcutConfig::DEFAULT_FILE_ICON;
    };
    let ext = ext.to_string_lossy().to_lowercase();

    EXTENSION_ICONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, icon)| *icon)
        .unwrap_or(ShortcutConfig::DEFAULT_FILE_ICON)
}

/// Icon value for a shortcut to `target`.
pub fn choose_icon(target: &Path, icon_override: Option<&Path>) -> String {
    if let Some(icon) = icon_override {
        return icon.to_string_lossy().into_owned();
    }

    if target.is_dir() {
        return ShortcutConfig::FOLDER_ICON.to_string();
    }

    icon_for_extension(target).to_string()
}
