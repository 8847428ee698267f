// SPDX-License-Identifier: MPL-2.0
//! `image` crate adapter implementing the [`ImageDecoder`] port trait.
//!
//! [`ImageDecoder`]: crate::application::port::ImageDecoder

use crate::application::port::ImageDecoder;
use crate::domain::error::DecodeError;
use crate::domain::media::{Dimensions, RawImage};
use image_rs::imageops::FilterType;
use image_rs::{GenericImageView, ImageError};
use std::fs;
use std::io;
use std::path::Path;

/// Still-image decoder backed by the `image` crate.
///
/// The format is detected from the file contents, not the extension.
/// Oversized images are downsampled with a Lanczos3 filter; smaller images
/// keep their resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRsDecoder;

impl ImageRsDecoder {
    /// Creates a decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for ImageRsDecoder {
    fn decode_to_fit(&self, path: &Path, bounds: Dimensions) -> Result<RawImage, DecodeError> {
        let bytes = fs::read(path).map_err(map_io_error)?;
        let image = image_rs::load_from_memory(&bytes).map_err(map_image_error)?;

        let (width, height) = image.dimensions();
        let source = Dimensions::new(width, height);
        if source.is_empty() {
            return Err(DecodeError::InvalidDimensions { width, height });
        }

        let target = source.fit_within(bounds);
        let image = if target == source {
            image
        } else {
            image.resize_exact(target.width, target.height, FilterType::Lanczos3)
        };

        log::debug!("Decoded {} at {source}, presenting at {target}", path.display());
        Ok(RawImage::from_rgba(
            target.width,
            target.height,
            image.to_rgba8().into_vec(),
        ))
    }
}

fn map_io_error(err: io::Error) -> DecodeError {
    match err.kind() {
        io::ErrorKind::NotFound => DecodeError::NotFound,
        _ => DecodeError::Io(err.to_string()),
    }
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        ImageError::IoError(io_err) => map_io_error(io_err),
        other => DecodeError::Corrupted(other.to_string()),
    }
}
