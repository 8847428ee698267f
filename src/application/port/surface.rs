// SPDX-License-Identifier: MPL-2.0
//! Render surface port definition.
//!
//! A render surface is one display-filling target split into two regions
//! that are shown and hidden independently: the image region shows a pixel
//! buffer, the video region is handed to the playback engine through a
//! [`NativeHandle`].

use crate::domain::media::{Dimensions, RawImage};
use std::fmt;
use std::sync::Arc;

/// Receives decoded video frames, possibly from the engine's own thread.
pub trait FrameSink: Send + Sync {
    /// Presents one RGBA frame.
    fn present_frame(&self, frame: RawImage);
}

/// Handle identifying the video region a playback engine renders into.
///
/// Cloning the handle is cheap and all clones refer to the same region.
#[derive(Clone)]
pub struct NativeHandle {
    id: u64,
    sink: Arc<dyn FrameSink>,
}

impl NativeHandle {
    /// Creates a handle for the region `id` whose frames go to `sink`.
    pub fn new(id: u64, sink: Arc<dyn FrameSink>) -> Self {
        Self { id, sink }
    }

    /// Identifier of the region, stable for the lifetime of the surface.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Delivers a frame to the region.
    pub fn present_frame(&self, frame: RawImage) {
        self.sink.present_frame(frame);
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeHandle").field("id", &self.id).finish()
    }
}

impl PartialEq for NativeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NativeHandle {}

/// Port for the display-filling render target.
pub trait RenderSurface {
    /// Current size of the target in pixels.
    fn bounds(&self) -> Dimensions;

    /// Records a new size reported by the windowing layer.
    fn set_bounds(&mut self, bounds: Dimensions);

    /// Makes the image region visible.
    fn show_image_region(&mut self);

    /// Hides the image region. Its contents are kept.
    fn hide_image_region(&mut self);

    /// Makes the video region visible.
    fn show_video_region(&mut self);

    /// Hides the video region.
    fn hide_video_region(&mut self);

    /// Replaces the image region's contents.
    fn set_image(&mut self, image: RawImage);

    /// Drops the image region's contents.
    fn clear_image(&mut self);

    /// Handle for binding a playback engine to the video region.
    fn video_handle(&self) -> NativeHandle;

    /// Returns true if the image region is visible.
    fn is_image_visible(&self) -> bool;

    /// Returns true if the video region is visible.
    fn is_video_visible(&self) -> bool;
}
