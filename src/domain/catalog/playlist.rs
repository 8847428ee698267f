// SPDX-License-Identifier: MPL-2.0
//! Ordered playlist with a selection cursor.

use super::MediaCatalogEntry;
use std::path::PathBuf;

/// Ordered collection of valid playlist entries.
///
/// Insertion order is the display and playback order. The selection cursor
/// is only meaningful when the catalog is not empty; it is conventionally 0
/// otherwise.
///
/// All index-taking operations report out-of-range indices through their
/// return value (`false` or `None`) and never panic.
///
/// # Example
///
/// ```no_run
/// use showdisplay::domain::catalog::MediaCatalog;
///
/// let mut catalog = MediaCatalog::new();
/// let added = catalog.add_many(["/shows/a.png", "/shows/b.mp4", "/shows/notes.txt"]);
/// assert!(added <= 2); // unsupported and missing files are skipped
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaCatalog {
    entries: Vec<MediaCatalogEntry>,
    selected_index: usize,
}

impl MediaCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the file at `path` if it is a supported, existing media file.
    ///
    /// Invalid files are skipped without an error; the return value tells
    /// whether the entry was added.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> bool {
        let entry = MediaCatalogEntry::new(path);
        if entry.is_valid() {
            self.entries.push(entry);
            true
        } else {
            log::debug!("Skipping invalid media file: {}", entry.display_name());
            false
        }
    }

    /// Adds every path in input order and returns how many were accepted.
    pub fn add_many<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths
            .into_iter()
            .map(|path| self.add(path))
            .filter(|added| *added)
            .count()
    }

    /// Removes the entry at `index`, shifting later entries left.
    ///
    /// If the cursor ends up past the end it moves back by one; an emptied
    /// catalog resets it to 0.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }

        self.entries.remove(index);
        if self.selected_index >= self.entries.len() && self.selected_index > 0 {
            self.selected_index -= 1;
        }
        true
    }

    /// Removes every entry and resets the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected_index = 0;
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaCatalogEntry> {
        self.entries.get(index)
    }

    /// Moves the entry at `from` so that it ends up at `to`.
    ///
    /// The entry is removed first and then inserted at `to` in the shifted
    /// sequence, so `[A, B, C]` becomes `[B, C, A]` for `move_item(0, 2)`.
    /// The selection cursor is left untouched.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.entries.len();
        if from >= len || to >= len {
            return false;
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    /// Number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves the selection cursor to `index` when it is in range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Current cursor position. Meaningless while the catalog is empty.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The entry under the cursor, if the catalog is not empty.
    #[must_use]
    pub fn selected(&self) -> Option<&MediaCatalogEntry> {
        self.get(self.selected_index)
    }

    /// Iterates over the entries in playlist order.
    pub fn iter(&self) -> impl Iterator<Item = &MediaCatalogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    fn create_media(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"media").expect("failed to write media file");
        path
    }

    fn catalog_with(names: &[&str]) -> (TempDir, MediaCatalog) {
        let dir = tempdir().expect("failed to create temp dir");
        let mut catalog = MediaCatalog::new();
        for name in names {
            assert!(catalog.add(create_media(dir.path(), name)));
        }
        (dir, catalog)
    }

    fn names(catalog: &MediaCatalog) -> Vec<&str> {
        catalog.iter().map(MediaCatalogEntry::display_name).collect()
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = MediaCatalog::new();
        assert_eq!(catalog.count(), 0);
        assert!(catalog.is_empty());
        assert_eq!(catalog.selected_index(), 0);
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn add_rejects_missing_and_unsupported_files() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut catalog = MediaCatalog::new();

        assert!(!catalog.add(dir.path().join("missing.png")));
        assert!(!catalog.add(create_media(dir.path(), "notes.txt")));
        assert!(catalog.add(create_media(dir.path(), "slide.png")));
        assert_eq!(catalog.count(), 1);
    }

    #[test]
    fn add_many_keeps_input_order_without_gaps() {
        let dir = tempdir().expect("failed to create temp dir");
        let a = create_media(dir.path(), "a.png");
        let b = create_media(dir.path(), "b.txt");
        let c = create_media(dir.path(), "c.mp4");
        let mut catalog = MediaCatalog::new();

        let accepted = catalog.add_many([a, b, dir.path().join("gone.jpg"), c]);

        assert_eq!(accepted, 2);
        assert_eq!(names(&catalog), vec!["a.png", "c.mp4"]);
    }

    #[test]
    fn remove_out_of_range_fails() {
        let (_dir, mut catalog) = catalog_with(&["a.png"]);
        assert!(!catalog.remove(1));
        assert_eq!(catalog.count(), 1);
    }

    #[test]
    fn remove_shifts_following_entries_left() {
        let (_dir, mut catalog) = catalog_with(&["a.png", "b.png", "c.png"]);
        assert!(catalog.remove(1));
        assert_eq!(catalog.get(1).map(MediaCatalogEntry::display_name), Some("c.png"));
    }

    #[test]
    fn remove_last_selected_moves_cursor_back() {
        let (_dir, mut catalog) = catalog_with(&["a.png", "b.png", "c.png"]);
        assert!(catalog.select(2));
        assert!(catalog.remove(2));
        assert_eq!(catalog.selected_index(), 1);
    }

    #[test]
    fn remove_before_cursor_keeps_index_value() {
        let (_dir, mut catalog) = catalog_with(&["a.png", "b.png", "c.png"]);
        assert!(catalog.select(1));
        assert!(catalog.remove(0));
        assert_eq!(catalog.selected_index(), 1);
        assert_eq!(catalog.selected().map(MediaCatalogEntry::display_name), Some("c.png"));
    }

    #[test]
    fn removing_only_entry_resets_cursor() {
        let (_dir, mut catalog) = catalog_with(&["a.png"]);
        assert!(catalog.remove(0));
        assert!(catalog.is_empty());
        assert_eq!(catalog.selected_index(), 0);
    }

    #[test]
    fn clear_empties_and_resets() {
        let (_dir, mut catalog) = catalog_with(&["a.png", "b.png"]);
        assert!(catalog.select(1));
        catalog.clear();
        assert_eq!(catalog.count(), 0);
        assert_eq!(catalog.selected_index(), 0);
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn move_item_uses_splice_semantics() {
        let (_dir, mut catalog) = catalog_with(&["A.png", "B.png", "C.png"]);

        assert!(catalog.move_item(0, 2));
        assert_eq!(names(&catalog), vec!["B.png", "C.png", "A.png"]);

        assert!(catalog.move_item(2, 0));
        assert_eq!(names(&catalog), vec!["A.png", "B.png", "C.png"]);
    }

    #[test]
    fn move_item_is_not_a_swap() {
        let (_dir, mut catalog) = catalog_with(&["A.png", "B.png", "C.png", "D.png"]);
        assert!(catalog.move_item(0, 2));
        assert_eq!(names(&catalog), vec!["B.png", "C.png", "A.png", "D.png"]);
    }

    #[test]
    fn move_item_rejects_out_of_range_indices() {
        let (_dir, mut catalog) = catalog_with(&["A.png", "B.png"]);
        assert!(!catalog.move_item(0, 2));
        assert!(!catalog.move_item(5, 0));
        assert_eq!(names(&catalog), vec!["A.png", "B.png"]);
    }

    #[test]
    fn move_item_does_not_track_selection() {
        let (_dir, mut catalog) = catalog_with(&["A.png", "B.png", "C.png"]);
        assert!(catalog.select(0));
        assert!(catalog.move_item(0, 2));
        assert_eq!(catalog.selected_index(), 0);
        assert_eq!(catalog.selected().map(MediaCatalogEntry::display_name), Some("B.png"));
    }

    #[test]
    fn select_rejects_out_of_range() {
        let (_dir, mut catalog) = catalog_with(&["A.png"]);
        assert!(!catalog.select(1));
        assert_eq!(catalog.selected_index(), 0);
        assert!(!MediaCatalog::new().select(0));
    }
}
