// SPDX-License-Identifier: MPL-2.0
//! Image decoding port definition.

use crate::domain::error::DecodeError;
use crate::domain::media::{Dimensions, RawImage};
use std::path::Path;

/// Port for decoding a still image scaled to fit a target area.
///
/// # Contract
///
/// - The result preserves the source aspect ratio and fits inside `bounds`
/// - Images are only ever downsampled; a source smaller than `bounds` is
///   returned at its own resolution
/// - At least JPEG, PNG, GIF, BMP and WebP are supported
///
/// # Example
///
/// ```ignore
/// use showdisplay::application::port::ImageDecoder;
/// use showdisplay::domain::media::Dimensions;
///
/// let image = decoder.decode_to_fit(path, Dimensions::new(1920, 1080))?;
/// assert!(image.dimensions().fits_within(Dimensions::new(1920, 1080)));
/// ```
pub trait ImageDecoder: Send + Sync {
    /// Decodes the file at `path` and scales it to fit `bounds`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the file is missing, unreadable, in an
    /// unsupported format or corrupted.
    fn decode_to_fit(&self, path: &Path, bounds: Dimensions) -> Result<RawImage, DecodeError>;
}

impl<T: ImageDecoder + ?Sized> ImageDecoder for std::sync::Arc<T> {
    fn decode_to_fit(&self, path: &Path, bounds: Dimensions) -> Result<RawImage, DecodeError> {
        (**self).decode_to_fit(path, bounds)
    }
}
