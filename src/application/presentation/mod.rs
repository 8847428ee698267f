// SPDX-License-Identifier: MPL-2.0
//! Presentation of the active playlist item on the secondary display.
//!
//! [`PresentationSurface`] drives one render target, one image decoder and
//! one playback engine through the [`PresentationState`] machine. It
//! guarantees that at most one of the image region and the video region is
//! visible, and that the engine plays exactly while the state is
//! `ShowingVideo`.
//!
//! [`PresentationState`]: crate::domain::presentation::PresentationState

mod error;
mod surface;


pub use error::SurfaceError;
pub use surface::PresentationSurface;
