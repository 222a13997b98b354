//! In-place `Icon=` rewriting for copied application entries.

use crate::config::ShortcutConfig;
use crate::desktop_entry::{keys, section_header};

/// Set the `Icon` of the `[Desktop Entry]` group to `icon`.
///
/// Existing `Icon=` lines in that group are replaced where they stand. If the
/// group has none, one line is added after its last non-blank line; without a
/// `[Desktop Entry]` group it goes at the end. Every other line keeps its
/// text, position and line ending, and the trailing newline (or lack of one)
/// is kept.
pub fn set_icon(content: &str, icon: &str) -> String {
    let icon_line = format!("{}={}", keys::ICON, icon);

    let mut lines: Vec<(String, &str)> = content
        .split_inclusive('\n')
        .map(split_line_ending)
        .map(|(body, eol)| (body.to_string(), eol))
        .collect();
    let mut in_section = false;
    let mut replaced = false;
    let mut insert_at: Option<usize> = None;

    for (index, (body, _)) in lines.iter_mut().enumerate() {
        let trimmed = body.trim();

        if let Some(section) = section_header(trimmed) {
            in_section = section == ShortcutConfig::DESKTOP_ENTRY_SECTION;
            if in_section && insert_at.is_none() {
                insert_at = Some(index + 1);
            }
            continue;
        }

        if !in_section || trimmed.is_empty() {
            continue;
        }

        insert_at = Some(index + 1);

        if is_icon_line(trimmed) {
            *body = icon_line.clone();
            replaced = true;
        }
    }

    if !replaced {
        let at = insert_at.unwrap_or(lines.len());
        let fallback = lines
            .iter()
            .map(|(_, eol)| *eol)
            .find(|eol| !eol.is_empty())
            .unwrap_or("\n");
        let is_empty = lines.is_empty();

        // Inserted line ends like the one before it; an unterminated last line gets one.
        let eol = match at.checked_sub(1).map(|prev| &mut lines[prev]) {
            Some((_, prev_eol)) if prev_eol.is_empty() => {
                *prev_eol = fallback;
                ""
            }
            Some((_, prev_eol)) => *prev_eol,
            None if is_empty => "",
            None => fallback,
        };
        lines.insert(at, (icon_line, eol));
    }

    lines.into_iter().map(|(body, eol)| body + eol).collect()
}

/// Split a line from `split_inclusive` into its text and its terminator.
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

fn is_icon_line(trimmed: &str) -> bool {
    if trimmed.starts_with('#') {
        return false;
    }
    trimmed
        .split_once('=')
        .is_some_and(|(key, _)| key.trim() == keys::ICON)
}
