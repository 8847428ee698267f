// SPDX-License-Identifier: MPL-2.0
//! Display provider port definition.

use super::{ImageDecoder, PlaybackEngine, RenderSurface};
use crate::domain::error::PlaybackError;
use thiserror::Error;

/// Everything a presentation surface needs to run on one display.
#[derive(Debug)]
pub struct DisplayComponents<S, D, E> {
    /// The display-filling render target.
    pub surface: S,
    /// Decoder used for the image region.
    pub decoder: D,
    /// The single playback engine instance owned by the surface.
    pub engine: E,
}

/// Errors raised while opening a display.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// No secondary output is available.
    #[error("No display available")]
    Unavailable,

    /// The playback engine could not be created.
    #[error("Playback engine unavailable: {0}")]
    Engine(#[from] PlaybackError),
}

/// Port that opens the secondary display.
///
/// Screen enumeration and window placement live behind this trait.
pub trait DisplayProvider {
    /// Render target type.
    type Surface: RenderSurface;
    /// Image decoder type.
    type Decoder: ImageDecoder;
    /// Playback engine type.
    type Engine: PlaybackEngine;

    /// Opens a fresh display and creates its playback engine.
    ///
    /// # Errors
    ///
    /// Returns a [`DisplayError`] if no display can be opened.
    fn open_display(
        &mut self,
    ) -> Result<DisplayComponents<Self::Surface, Self::Decoder, Self::Engine>, DisplayError>;
}
