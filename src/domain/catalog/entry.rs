// SPDX-License-Identifier: MPL-2.0
//! A single playlist item.

use crate::domain::media::{kind_for_path, MediaKind};
use std::path::{Path, PathBuf};

/// One playlist item: a path, a display name and the kind derived from the
/// path's extension.
///
/// Entries are immutable. Construction never touches the filesystem; whether
/// the file exists is asked again every time [`is_valid`](Self::is_valid)
/// is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCatalogEntry {
    path: PathBuf,
    display_name: String,
    kind: MediaKind,
}

impl MediaCatalogEntry {
    /// Creates an entry for `path`, deriving its display name and kind.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let kind = kind_for_path(&path);

        Self {
            path,
            display_name,
            kind,
        }
    }

    /// Location of the media file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown to the operator.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Kind derived from the extension at construction.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Returns true if this entry is a still image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }

    /// Returns true if this entry is a video clip.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// An entry is valid when its kind is supported and the file exists now.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.kind.is_supported() && self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn derives_name_and_kind_from_path() {
        let entry = MediaCatalogEntry::new("/shows/opening/Intro.MP4");
        assert_eq!(entry.display_name(), "Intro.MP4");
        assert_eq!(entry.kind(), MediaKind::Video);
        assert!(entry.is_video());
        assert!(!entry.is_image());
    }

    #[test]
    fn empty_path_is_unknown_and_invalid() {
        let entry = MediaCatalogEntry::new("");
        assert_eq!(entry.kind(), MediaKind::Unknown);
        assert!(!entry.is_valid());
    }

    #[test]
    fn supported_file_that_exists_is_valid() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("slide.png");
        fs::write(&path, b"png").expect("failed to write file");

        assert!(MediaCatalogEntry::new(&path).is_valid());
    }

    #[test]
    fn unsupported_file_that_exists_is_invalid() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"text").expect("failed to write file");

        assert!(!MediaCatalogEntry::new(&path).is_valid());
    }

    #[test]
    fn validity_is_rechecked_on_every_query() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("later.jpg");
        let entry = MediaCatalogEntry::new(&path);

        assert!(!entry.is_valid());
        fs::write(&path, b"jpg").expect("failed to write file");
        assert!(entry.is_valid());
        fs::remove_file(&path).expect("failed to remove file");
        assert!(!entry.is_valid());
    }
}
