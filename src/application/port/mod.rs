// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The presentation core drives external capabilities through these traits
//! and never depends on a concrete codec, playback engine or window toolkit.
//!
//! # Available Ports
//!
//! - [`image`]: decode and scale a still image to fit bounds
//! - [`playback`]: single-slot video playback engine
//! - [`surface`]: render target with an image region and a video region
//! - [`display`]: opens a display and hands out its components
//!
//! # Design Notes
//!
//! - Traits use domain types only (no `FFmpeg` or `image` types)
//! - Methods return `Result` with domain error types
//! - Calls are serialized by the caller; only frame delivery crosses threads

pub mod display;
pub mod image;
pub mod playback;
pub mod surface;

pub use display::{DisplayComponents, DisplayError, DisplayProvider};
pub use image::ImageDecoder;
pub use playback::PlaybackEngine;
pub use surface::{FrameSink, NativeHandle, RenderSurface};
