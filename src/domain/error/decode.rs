// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors that can occur while decoding and scaling a still image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The file does not exist (anymore).
    #[error("File not found")]
    NotFound,

    /// The file format is not a supported raster format.
    #[error("Unsupported image format")]
    UnsupportedFormat,

    /// The decoded image reported zero width or height.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// The width that was detected.
        width: u32,
        /// The height that was detected.
        height: u32,
    },

    /// The image data is corrupted or cannot be decoded.
    #[error("Corrupted image data: {0}")]
    Corrupted(String),

    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}
