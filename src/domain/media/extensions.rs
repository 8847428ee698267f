// SPDX-License-Identifier: MPL-2.0
//! Supported media extensions and kind detection.
//!
//! Detection only looks at the path string. Nothing here touches the
//! filesystem, so a kind can be derived for paths that do not exist yet.

use super::MediaKind;
use std::path::Path;

/// Image file extensions (lowercase, without the dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Video file extensions (lowercase, without the dot).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm"];

/// All supported extensions (images + videos), e.g. for file dialog filters.
#[must_use]
pub fn all_supported_extensions() -> Vec<&'static str> {
    IMAGE_EXTENSIONS
        .iter()
        .chain(VIDEO_EXTENSIONS.iter())
        .copied()
        .collect()
}

/// Derives the media kind of a path from its extension, case-insensitively.
///
/// Returns [`MediaKind::Unknown`] for empty paths, paths without an
/// extension and extensions outside both supported sets.
#[must_use]
pub fn kind_for_path(path: &Path) -> MediaKind {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return MediaKind::Unknown;
    };
    let extension = extension.to_ascii_lowercase();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        MediaKind::Image
    } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        MediaKind::Video
    } else {
        MediaKind::Unknown
    }
}
