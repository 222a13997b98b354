//! Collision-free shortcut file names.
//!
//! `<name>.desktop` is tried first, then `<name>_1.desktop`, `<name>_2.desktop`
//! and so on. There is no upper bound on the counter.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::config::ShortcutConfig;
use crate::error::{LinkerError, Result};

/// File name (without extension) for a display name.
///
/// Path separators would place the file outside the desktop directory, so
/// they become `-`. The display name itself is left untouched.
pub fn file_stem_for(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\0' { '-' } else { c })
        .collect()
}

/// `<dir>/<name>.desktop`.
pub fn base_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!(
        "{}.{}",
        file_stem_for(name),
        ShortcutConfig::DESKTOP_EXTENSION
    ))
}

/// `base` with `_<counter>` inserted before its extension; `base` itself for 0.
pub fn numbered_path(base: &Path, counter: u64) -> PathBuf {
    if counter == 0 {
        return base.to_path_buf();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match base.extension() {
        Some(ext) => format!("{}_{}.{}", stem, counter, ext.to_string_lossy()),
        None => format!("{}_{}", stem, counter),
    };

    match base.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// First candidate derived from `base` that does not exist yet.
///
/// Dangling symlinks count as existing.
pub fn unique_path(base: &Path) -> PathBuf {
    (0..)
        .map(|counter| numbered_path(base, counter))
        .find(|candidate| candidate.symlink_metadata().is_err())
        .unwrap_or_else(|| base.to_path_buf())
}

/// Create the first free candidate derived from `base` and return it opened.
///
/// Each candidate is created with `create_new`, so a file that appears between
/// the check and the write is skipped instead of overwritten.
pub(crate) fn create_unique(base: &Path) -> Result<(PathBuf, File)> {
    let mut counter = 0u64;
    loop {
        let candidate = numbered_path(base, counter);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                trace!("{} is taken", candidate.display());
                counter += 1;
            }
            Err(e) => return Err(LinkerError::io_action("create shortcut file", e, candidate)),
        }
    }
}
