// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for importing a whole folder into the playlist.
//!
//! The scan is not recursive: only regular files directly inside the folder
//! whose extension is supported are returned, sorted by file name.

use crate::domain::media::kind_for_path;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Returns the supported media files directly inside `directory`, sorted
/// alphabetically by file name.
///
/// # Errors
///
/// Returns [`Error::Io`] if `directory` is not a directory or cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(Error::Io(format!("Not a directory: {}", directory.display())));
    }

    let mut media_files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && kind_for_path(&path).is_supported() {
            media_files.push(path);
        }
    }

    sort_media_files(&mut media_files);
    Ok(media_files)
}

fn sort_media_files(media_files: &mut [PathBuf]) {
    media_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}
