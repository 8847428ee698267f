// SPDX-License-Identifier: MPL-2.0
//! Preview of the selected playlist entry for the control view.
//!
//! Building a preview never affects what the secondary display shows. Video
//! entries get a placeholder instead of a thumbnail.

use crate::application::port::ImageDecoder;
use crate::domain::catalog::MediaCatalogEntry;
use crate::domain::media::{Dimensions, MediaKind, RawImage};
use std::path::{Path, PathBuf};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// What the preview area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    /// Decoded image scaled into the preview bounds.
    Thumbnail(RawImage),
    /// Videos are described, not rendered.
    VideoPlaceholder,
    /// The image could not be decoded; carries the error text.
    Unavailable(String),
}

/// Textual information and visual content for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    name: String,
    kind: MediaKind,
    path: PathBuf,
    size_bytes: Option<u64>,
    content: PreviewContent,
}

impl Preview {
    /// Builds the preview of `entry`, decoding images to fit `bounds`.
    pub fn build<D>(entry: &MediaCatalogEntry, decoder: &D, bounds: Dimensions) -> Self
    where
        D: ImageDecoder + ?Sized,
    {
        let size_bytes = file_size(entry.path());
        let content = match entry.kind() {
            MediaKind::Image => match decoder.decode_to_fit(entry.path(), bounds) {
                Ok(image) => PreviewContent::Thumbnail(image),
                Err(err) => {
                    log::warn!("Preview of {} failed: {err}", entry.display_name());
                    PreviewContent::Unavailable(err.to_string())
                }
            },
            MediaKind::Video => PreviewContent::VideoPlaceholder,
            MediaKind::Unknown => PreviewContent::Unavailable("Unsupported media".to_string()),
        };

        Self {
            name: entry.display_name().to_string(),
            kind: entry.kind(),
            path: entry.path().to_path_buf(),
            size_bytes,
            content,
        }
    }

    /// File name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Media kind.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Full path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File size in megabytes, `None` if the file could not be inspected.
    #[must_use]
    pub fn size_mb(&self) -> Option<f64> {
        // Precision loss is irrelevant for a two-decimal display value.
        #[allow(clippy::cast_precision_loss)]
        self.size_bytes.map(|bytes| bytes as f64 / BYTES_PER_MB)
    }

    /// Visual content.
    #[must_use]
    pub fn content(&self) -> &PreviewContent {
        &self.content
    }

    /// The thumbnail, if one was decoded.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&RawImage> {
        match &self.content {
            PreviewContent::Thumbnail(image) => Some(image),
            _ => None,
        }
    }
}

fn file_size(path: &Path) -> Option<u64> {
    match std::fs::metadata(path) {
        Ok(meta) => Some(meta.len()),
        Err(err) => {
            log::debug!("Cannot read size of {}: {err}", path.display());
            None
        }
    }
}
