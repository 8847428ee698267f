// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;
use std::sync::Arc;

/// Kind of a playlist item, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still image (JPEG, PNG, GIF, BMP, WebP).
    Image,
    /// Video clip (MP4, AVI, MKV, MOV, WMV, FLV, WebM).
    Video,
    /// Unsupported or missing extension.
    Unknown,
}

impl MediaKind {
    /// Returns true for kinds that can be presented.
    #[must_use]
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Short lowercase label, used in diagnostics and localized messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Creates a new pair of dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either side is zero.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns true if `self` fits inside `bounds` on both axes.
    #[must_use]
    pub fn fits_within(self, bounds: Dimensions) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }

    /// Computes the size of `self` scaled to fit inside `bounds`.
    ///
    /// The aspect ratio is preserved (rounded to whole pixels) and the result
    /// never exceeds the source size: a source that already fits is returned
    /// unchanged, so images are only ever downsampled. Empty bounds are
    /// treated as 1×1 and every side of the result is at least one pixel.
    #[must_use]
    pub fn fit_within(self, bounds: Dimensions) -> Dimensions {
        let bounds = Dimensions::new(bounds.width.max(1), bounds.height.max(1));
        if self.is_empty() || self.fits_within(bounds) {
            return self;
        }

        let (sw, sh) = (u64::from(self.width), u64::from(self.height));
        let (bw, bh) = (u64::from(bounds.width), u64::from(bounds.height));

        // Compare sw/sh against bw/bh without floating point.
        let (width, height) = if sw * bh >= sh * bw {
            let height = ((sh * bw + sw / 2) / sw).clamp(1, bh);
            (bw, height)
        } else {
            let width = ((sw * bh + sh / 2) / sh).clamp(1, bw);
            (width, bh)
        };

        // Both values are bounded by u32 inputs.
        #[allow(clippy::cast_possible_truncation)]
        Dimensions::new(width as u32, height as u32)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Raw image data without presentation dependencies.
///
/// This is the domain representation of a decoded frame, containing only the
/// pure pixel data. Render surfaces convert it to whatever their toolkit
/// expects.
///
/// # Example
///
/// ```
/// use showdisplay::domain::media::RawImage;
/// use std::sync::Arc;
///
/// let pixels = vec![255u8; 100 * 100 * 4]; // 100x100 RGBA
/// let image = RawImage::new(100, 100, Arc::new(pixels));
///
/// assert_eq!(image.width(), 100);
/// assert_eq!(image.height(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new `RawImage` from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns both sides as [`Dimensions`].
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns the total number of pixels.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}
