// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`image`]: still images via the `image` crate (implements [`ImageDecoder`])
//! - [`ffmpeg`]: video playback via `FFmpeg` (implements [`PlaybackEngine`])
//! - [`headless`]: in-memory render surface and display provider
//!
//! [`ImageDecoder`]: crate::application::port::ImageDecoder
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine

pub mod ffmpeg;
pub mod headless;
pub mod image;

pub use ffmpeg::FfmpegPlaybackEngine;
pub use headless::{HeadlessDisplay, HeadlessSurface};
pub use image::ImageRsDecoder;
