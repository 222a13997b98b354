//! The catalog of discovered applications and its search filter.

use serde::Serialize;

use crate::desktop_entry::DesktopEntry;

/// Deduplicated applications, sorted case-insensitively by `Name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AppCatalog {
    entries: Vec<DesktopEntry>,
}

impl AppCatalog {
    /// Build a catalog from entries that already passed discovery, sorting them.
    pub(crate) fn from_discovered(mut entries: Vec<DesktopEntry>) -> Self {
        entries.sort_by_cached_key(|entry| entry.name().unwrap_or_default().to_lowercase());
        Self { entries }
    }

    pub fn entries(&self) -> &[DesktopEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DesktopEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by exact `Name`.
    pub fn find_by_name(&self, name: &str) -> Option<&DesktopEntry> {
        self.entries.iter().find(|entry| entry.name() == Some(name))
    }

    /// Entries whose `Name`, `Comment` or `GenericName` contains `query`,
    /// ignoring case. An empty query keeps everything.
    pub fn filter(&self, query: &str) -> AppCatalog {
        if query.is_empty() {
            return self.clone();
        }

        let needle = query.to_lowercase();
        let entries = self
            .entries
            .iter()
            .filter(|entry| matches_query(entry, &needle))
            .cloned()
            .collect();

        AppCatalog { entries }
    }
}

fn matches_query(entry: &DesktopEntry, needle: &str) -> bool {
    [entry.name(), entry.comment(), entry.generic_name()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

impl IntoIterator for AppCatalog {
    type Item = DesktopEntry;
    type IntoIter = std::vec::IntoIter<DesktopEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AppCatalog {
    type Item = &'a DesktopEntry;
    type IntoIter = std::slice::Iter<'a, DesktopEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(file: &str, body: &str) -> DesktopEntry {
        DesktopEntry::parse_str(&format!("[Desktop Entry]\n{body}"), file)
    }

    fn sample() -> AppCatalog {
        AppCatalog::from_discovered(vec![
            entry("gimp.desktop", "Name=GIMP\nGenericName=Image Editor\n"),
            entry("files.desktop", "Name=files\nComment=Access and organize files\n"),
            entry("alacritty.desktop", "Name=Alacritty\nComment=A fast terminal\n"),
        ])
    }

    fn names(catalog: &AppCatalog) -> Vec<&str> {
        catalog.iter().filter_map(|e| e.name()).collect()
    }

    #[test]
    fn test_sorted_case_insensitively() {
        assert_eq!(names(&sample()), vec!["Alacritty", "files", "GIMP"]);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = sample();
        assert_eq!(catalog.filter(""), catalog);
    }

    #[test]
    fn test_filter_matches_name_comment_generic_name() {
        let catalog = sample();

        assert_eq!(names(&catalog.filter("gimp")), vec!["GIMP"]);
        assert_eq!(names(&catalog.filter("IMAGE")), vec!["GIMP"]);
        assert_eq!(names(&catalog.filter("Organize")), vec!["files"]);
        assert_eq!(names(&catalog.filter("a")), vec!["Alacritty", "files", "GIMP"]);
        assert!(catalog.filter("nothing-matches").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = sample();
        assert_eq!(names(&catalog.filter("e")), vec!["Alacritty", "files", "GIMP"]);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let catalog = sample();
        assert!(catalog.find_by_name("GIMP").is_some());
        assert!(catalog.find_by_name("gimp").is_none());
    }
}
