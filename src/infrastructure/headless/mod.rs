// SPDX-License-Identifier: MPL-2.0
//! In-memory display used by the console front end and tests.
//!
//! [`HeadlessSurface`] keeps the image region's pixels and the last video
//! frame in memory instead of drawing them, so every state of the
//! presentation can be inspected.

use crate::application::port::display::DisplayError;
use crate::application::port::{
    DisplayComponents, DisplayProvider, FrameSink, NativeHandle, RenderSurface,
};
use crate::domain::media::{Dimensions, RawImage};
use crate::infrastructure::{FfmpegPlaybackEngine, ImageRsDecoder};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Video region of a headless surface; keeps the latest frame.
#[derive(Debug, Default)]
pub struct VideoRegion {
    last_frame: Mutex<Option<RawImage>>,
    frames: AtomicU64,
}

impl VideoRegion {
    /// Most recent frame delivered by the engine.
    #[must_use]
    pub fn last_frame(&self) -> Option<RawImage> {
        self.last_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of frames delivered since the region was created.
    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }
}

impl FrameSink for VideoRegion {
    fn present_frame(&self, frame: RawImage) {
        *self
            .last_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(frame);
        self.frames.fetch_add(1, Ordering::Relaxed);
    }
}

/// Render surface that keeps everything in memory.
#[derive(Debug)]
pub struct HeadlessSurface {
    id: u64,
    bounds: Dimensions,
    image: Option<RawImage>,
    image_visible: bool,
    video_visible: bool,
    video: Arc<VideoRegion>,
}

impl HeadlessSurface {
    /// Creates a surface of the given size with both regions hidden.
    #[must_use]
    pub fn new(id: u64, bounds: Dimensions) -> Self {
        Self {
            id,
            bounds,
            image: None,
            image_visible: false,
            video_visible: false,
            video: Arc::default(),
        }
    }

    /// Pixels currently held by the image region.
    #[must_use]
    pub fn image(&self) -> Option<&RawImage> {
        self.image.as_ref()
    }

    /// The video region, shared with the playback engine.
    #[must_use]
    pub fn video_region(&self) -> &Arc<VideoRegion> {
        &self.video
    }
}

impl RenderSurface for HeadlessSurface {
    fn bounds(&self) -> Dimensions {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Dimensions) {
        log::debug!("Headless surface {} resized to {bounds}", self.id);
        self.bounds = bounds;
    }

    fn show_image_region(&mut self) {
        self.image_visible = true;
    }

    fn hide_image_region(&mut self) {
        self.image_visible = false;
    }

    fn show_video_region(&mut self) {
        self.video_visible = true;
    }

    fn hide_video_region(&mut self) {
        self.video_visible = false;
    }

    fn set_image(&mut self, image: RawImage) {
        self.image = Some(image);
    }

    fn clear_image(&mut self) {
        self.image = None;
    }

    fn video_handle(&self) -> NativeHandle {
        let sink: Arc<dyn FrameSink> = self.video.clone();
        NativeHandle::new(self.id, sink)
    }

    fn is_image_visible(&self) -> bool {
        self.image_visible
    }

    fn is_video_visible(&self) -> bool {
        self.video_visible
    }
}

/// Display provider handing out headless surfaces backed by the real
/// image decoder and `FFmpeg` engine.
#[derive(Debug)]
pub struct HeadlessDisplay {
    bounds: Dimensions,
    opened: u64,
}

impl HeadlessDisplay {
    /// Creates a provider whose surfaces have the given size.
    #[must_use]
    pub fn new(bounds: Dimensions) -> Self {
        Self { bounds, opened: 0 }
    }
}

impl DisplayProvider for HeadlessDisplay {
    type Surface = HeadlessSurface;
    type Decoder = ImageRsDecoder;
    type Engine = FfmpegPlaybackEngine;

    fn open_display(
        &mut self,
    ) -> Result<DisplayComponents<HeadlessSurface, ImageRsDecoder, FfmpegPlaybackEngine>, DisplayError>
    {
        let engine = FfmpegPlaybackEngine::new()?;
        self.opened += 1;
        log::info!("Opened headless display #{} at {}", self.opened, self.bounds);
        Ok(DisplayComponents {
            surface: HeadlessSurface::new(self.opened, self.bounds),
            decoder: ImageRsDecoder::new(),
            engine,
        })
    }
}
