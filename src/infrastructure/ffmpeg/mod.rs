// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`PlaybackEngine`] port trait.
//!
//! [`FfmpegPlaybackEngine`] decodes on a dedicated thread and paces RGBA
//! frames by their presentation timestamps into the bound video region.
//!
//! ```text
//! controlling thread              decode thread
//! ┌───────────────────┐          ┌─────────────────┐
//! │ FfmpegPlayback-   │ commands │ demux + decode  │
//! │ Engine            │─────────▶│ scale to RGBA   │──▶ NativeHandle
//! │ play/pause/stop   │          │ pace by PTS     │    (frame sink)
//! └───────────────────┘          └─────────────────┘
//! ```
//!
//! Audio is not decoded.
//!
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine

mod decode;
mod engine;
mod worker;

pub use engine::FfmpegPlaybackEngine;

use crate::domain::error::PlaybackError;
use std::sync::OnceLock;

static FFMPEG_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initializes `FFmpeg` once per process and silences its console logging
/// below error level.
///
/// # Errors
///
/// Returns [`PlaybackError::Other`] if the libraries failed to initialize;
/// every later call reports the same failure.
pub fn init_ffmpeg() -> Result<(), PlaybackError> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init().map_err(|e| format!("FFmpeg initialization failed: {e}"))?;
            // SAFETY: av_log_set_level only stores the global log threshold.
            unsafe {
                ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(PlaybackError::Other)
}
