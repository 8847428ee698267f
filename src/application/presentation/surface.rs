// SPDX-License-Identifier: MPL-2.0
use super::SurfaceError;
use crate::application::port::{ImageDecoder, PlaybackEngine, RenderSurface};
use crate::domain::catalog::MediaCatalogEntry;
use crate::domain::media::{Dimensions, MediaKind};
use crate::domain::presentation::PresentationState;

/// State machine presenting one entry at a time on a render surface.
///
/// The surface owns its playback engine for its whole lifetime. The engine
/// is released by [`teardown`](Self::teardown) or, failing that, when the
/// surface is dropped, always before the render target goes away.
///
/// Failed presents are logged and returned as [`SurfaceError`]; they never
/// change `state` or `active_entry`.
///
/// # Example
///
/// ```ignore
/// let mut surface = PresentationSurface::new(components);
/// surface.present_video(&clip)?;
/// surface.pause()?;
/// surface.resume()?;
/// surface.stop();
/// surface.teardown();
/// ```
pub struct PresentationSurface<S, D, E>
where
    S: RenderSurface,
    D: ImageDecoder,
    E: PlaybackEngine,
{
    surface: S,
    decoder: D,
    engine: Option<E>,
    state: PresentationState,
    active_entry: Option<MediaCatalogEntry>,
}

impl<S, D, E> PresentationSurface<S, D, E>
where
    S: RenderSurface,
    D: ImageDecoder,
    E: PlaybackEngine,
{
    /// Creates an idle surface with both regions hidden.
    pub fn new(mut surface: S, decoder: D, engine: E) -> Self {
        surface.hide_image_region();
        surface.hide_video_region();
        Self {
            surface,
            decoder,
            engine: Some(engine),
            state: PresentationState::Idle,
            active_entry: None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Entry currently presented, `None` while idle.
    #[must_use]
    pub fn active_entry(&self) -> Option<&MediaCatalogEntry> {
        self.active_entry.as_ref()
    }

    /// The render target.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The playback engine, until it is released.
    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    /// Presents `entry` as an image or a video depending on its kind.
    ///
    /// # Errors
    ///
    /// See [`present_image`](Self::present_image) and
    /// [`present_video`](Self::present_video). Entries of unknown kind are
    /// rejected with [`SurfaceError::Unsupported`].
    pub fn present(&mut self, entry: &MediaCatalogEntry) -> Result<(), SurfaceError> {
        match entry.kind() {
            MediaKind::Image => self.present_image(entry),
            MediaKind::Video => self.present_video(entry),
            MediaKind::Unknown => {
                log::warn!("Refusing to present unsupported media {}", entry.display_name());
                Err(SurfaceError::Unsupported(entry.display_name().to_string()))
            }
        }
    }

    /// Decodes `entry` to fit the surface and shows it in the image region.
    ///
    /// The decode runs first. Only once it succeeded is any active video
    /// stopped and hidden, then the image region is filled and shown.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Decode`] if the image cannot be decoded; the
    /// previous content stays on screen.
    pub fn present_image(&mut self, entry: &MediaCatalogEntry) -> Result<(), SurfaceError> {
        if !entry.is_image() {
            return Err(SurfaceError::KindMismatch {
                expected: MediaKind::Image,
                found: entry.kind(),
            });
        }

        let bounds = self.surface.bounds();
        let image = self
            .decoder
            .decode_to_fit(entry.path(), bounds)
            .map_err(|err| {
                log::warn!("Failed to decode {}: {err}", entry.display_name());
                SurfaceError::from(err)
            })?;

        if self.state.is_video_active() {
            if let Some(engine) = self.engine.as_mut() {
                engine.stop();
            }
        }
        self.surface.hide_video_region();
        self.surface.set_image(image);
        self.surface.show_image_region();

        self.active_entry = Some(entry.clone());
        self.transition(PresentationState::ShowingImage);
        Ok(())
    }

    /// Loads `entry` into the engine and starts playing it in the video
    /// region.
    ///
    /// The media is loaded before anything on screen changes, so a file
    /// that fails to load leaves the current presentation untouched. If the
    /// media loads but playback cannot start, the engine is stopped and the
    /// previous presentation is put back: a shown image is made visible
    /// again, a previous video is reloaded and, if it was playing, restarted
    /// from the beginning. Only when that reload fails does the surface fall
    /// back to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Playback`] on load or start failure and
    /// [`SurfaceError::Released`] if the engine is gone.
    pub fn present_video(&mut self, entry: &MediaCatalogEntry) -> Result<(), SurfaceError> {
        if !entry.is_video() {
            return Err(SurfaceError::KindMismatch {
                expected: MediaKind::Video,
                found: entry.kind(),
            });
        }

        let previous = self.state;
        let handle = self.surface.video_handle();
        let engine = self.engine.as_mut().ok_or(SurfaceError::Released)?;

        if let Err(err) = engine.load(entry.path()) {
            log::warn!("Failed to load video {}: {err}", entry.display_name());
            return Err(err.into());
        }

        self.surface.hide_image_region();
        self.surface.show_video_region();

        match engine.bind_surface(handle).and_then(|()| engine.play()) {
            Ok(()) => {
                self.active_entry = Some(entry.clone());
                self.transition(PresentationState::ShowingVideo);
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to start video {}: {err}", entry.display_name());
                engine.stop();
                self.surface.hide_video_region();
                if previous.is_showing_image() {
                    self.surface.show_image_region();
                } else if previous.is_video_active() {
                    self.restore_video(previous);
                }
                Err(err.into())
            }
        }
    }

    /// Stops whatever is presented and returns to `Idle`.
    pub fn stop(&mut self) {
        if self.state.is_video_active() {
            if let Some(engine) = self.engine.as_mut() {
                engine.stop();
            }
        }
        self.surface.clear_image();
        self.surface.hide_image_region();
        self.surface.hide_video_region();
        self.active_entry = None;
        self.transition(PresentationState::Idle);
    }

    /// Pauses the playing video.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidTransition`] unless the state is
    /// `ShowingVideo`.
    pub fn pause(&mut self) -> Result<(), SurfaceError> {
        self.require(PresentationState::ShowingVideo, "pause")?;
        let engine = self.engine.as_mut().ok_or(SurfaceError::Released)?;
        engine.pause();
        self.transition(PresentationState::PausedVideo);
        Ok(())
    }

    /// Resumes the paused video.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidTransition`] unless the state is
    /// `PausedVideo`, and [`SurfaceError::Playback`] if the engine refuses
    /// to continue; the video then stays paused.
    pub fn resume(&mut self) -> Result<(), SurfaceError> {
        self.require(PresentationState::PausedVideo, "resume")?;
        if self.active_entry.is_none() {
            return Err(SurfaceError::NoActiveEntry);
        }
        let engine = self.engine.as_mut().ok_or(SurfaceError::Released)?;
        engine.play().map_err(|err| {
            log::warn!("Failed to resume playback: {err}");
            SurfaceError::from(err)
        })?;
        self.transition(PresentationState::ShowingVideo);
        Ok(())
    }

    /// Re-decodes the active image against the current surface bounds.
    ///
    /// Does nothing outside `ShowingImage`: video output follows the
    /// region on its own.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Decode`] if the file can no longer be
    /// decoded; the previous pixels stay on screen.
    pub fn on_surface_resized(&mut self) -> Result<(), SurfaceError> {
        if !self.state.is_showing_image() {
            log::debug!("Ignoring resize while {}", self.state);
            return Ok(());
        }

        let entry = self
            .active_entry
            .as_ref()
            .ok_or(SurfaceError::NoActiveEntry)?;
        let bounds = self.surface.bounds();
        let image = self
            .decoder
            .decode_to_fit(entry.path(), bounds)
            .map_err(|err| {
                log::warn!("Failed to redecode {}: {err}", entry.display_name());
                SurfaceError::from(err)
            })?;
        log::debug!("Rescaled {} to {}", entry.display_name(), image.dimensions());
        self.surface.set_image(image);
        Ok(())
    }

    /// Applies new bounds to the render target and rescales the image.
    ///
    /// # Errors
    ///
    /// Same as [`on_surface_resized`](Self::on_surface_resized).
    pub fn resize(&mut self, bounds: Dimensions) -> Result<(), SurfaceError> {
        self.surface.set_bounds(bounds);
        self.on_surface_resized()
    }

    /// Stops playback, releases the engine and gives up the surface.
    pub fn teardown(mut self) {
        self.release_engine();
        self.surface.clear_image();
        self.surface.hide_image_region();
        self.surface.hide_video_region();
        self.active_entry = None;
        self.transition(PresentationState::Idle);
    }

    /// Reloads the active video after a failed switch to another one.
    ///
    /// Loading the new media already discarded the old one, so it is loaded
    /// and bound again; playback restarts only when `previous` was
    /// `ShowingVideo`. A paused video stays paused at its first frame.
    fn restore_video(&mut self, previous: PresentationState) {
        let handle = self.surface.video_handle();
        let restored = match (self.engine.as_mut(), self.active_entry.as_ref()) {
            (Some(engine), Some(entry)) => engine
                .load(entry.path())
                .and_then(|()| engine.bind_surface(handle))
                .and_then(|()| {
                    if previous == PresentationState::ShowingVideo {
                        engine.play()
                    } else {
                        Ok(())
                    }
                })
                .map_err(|err| {
                    log::warn!("Cannot restore {}: {err}", entry.display_name());
                    engine.stop();
                }),
            _ => Err(()),
        };

        if restored.is_ok() {
            self.surface.show_video_region();
        } else {
            self.active_entry = None;
            self.transition(PresentationState::Idle);
        }
    }

    fn release_engine(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.stop();
            engine.release();
            log::debug!("Playback engine released");
        }
    }

    fn require(
        &self,
        expected: PresentationState,
        call: &'static str,
    ) -> Result<(), SurfaceError> {
        if self.state == expected {
            Ok(())
        } else {
            log::warn!("Ignoring {call} while {}", self.state);
            Err(SurfaceError::InvalidTransition {
                from: self.state,
                call,
            })
        }
    }

    fn transition(&mut self, next: PresentationState) {
        if self.state != next {
            log::debug!("Presentation state: {} -> {next}", self.state);
        }
        self.state = next;
    }
}

impl<S, D, E> Drop for PresentationSurface<S, D, E>
where
    S: RenderSurface,
    D: ImageDecoder,
    E: PlaybackEngine,
{
    fn drop(&mut self) {
        self.release_engine();
    }
}

impl<S, D, E> std::fmt::Debug for PresentationSurface<S, D, E>
where
    S: RenderSurface,
    D: ImageDecoder,
    E: PlaybackEngine,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentationSurface")
            .field("state", &self.state)
            .field("active_entry", &self.active_entry)
            .field("engine_released", &self.engine.is_none())
            .finish_non_exhaustive()
    }
}
