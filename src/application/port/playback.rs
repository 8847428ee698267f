// SPDX-License-Identifier: MPL-2.0
//! Video playback port definition.
//!
//! # Design Notes
//!
//! - The engine is a single mutable playback slot: loading new media
//!   discards whatever was loaded before
//! - The engine may decode on its own threads, but callers never invoke it
//!   concurrently
//! - Audio is not part of the contract

use super::surface::NativeHandle;
use crate::domain::error::PlaybackError;
use std::path::Path;

/// Port for an external video playback engine.
///
/// # Lifecycle
///
/// 1. `bind_surface()` with the video region's native handle
/// 2. `load()` the media
/// 3. `play()`, `pause()`, `play()` again to resume, `stop()`
/// 4. `release()` once; every later call fails with
///    [`PlaybackError::Released`] or is ignored
///
/// # Contract
///
/// A failed `load` leaves the previously loaded media and its playback
/// untouched. A successful `load` stops and discards the previous media.
pub trait PlaybackEngine: Send {
    /// Directs video output to the surface behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Released`] after `release()`.
    fn bind_surface(&mut self, handle: NativeHandle) -> Result<(), PlaybackError>;

    /// Loads the media at `path`, replacing any previous media.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the file cannot be opened or holds no
    /// decodable video stream.
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError>;

    /// Starts playback, or resumes it when paused.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is loaded, the engine is not bound, or
    /// decoding cannot start.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pauses playback, keeping the current position.
    fn pause(&mut self);

    /// Stops playback. Loaded media stays loaded and restarts from the
    /// beginning on the next `play()`.
    fn stop(&mut self);

    /// Returns true while frames are being delivered.
    fn is_playing(&self) -> bool;

    /// Stops playback and frees every resource held by the engine.
    ///
    /// Must be idempotent.
    fn release(&mut self);
}
