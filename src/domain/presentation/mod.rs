// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine.
//!
//! The presentation surface is always in exactly one of these states. Legal
//! transitions:
//!
//! ```text
//! Idle ──present_image──▶ ShowingImage ──present_image──▶ ShowingImage
//!   │                         │
//!   └──present_video──▶ ShowingVideo ◀──present_video── ShowingImage
//!                         │     ▲
//!                    pause│     │resume
//!                         ▼     │
//!                       PausedVideo
//!
//! any state ──stop──▶ Idle
//! ```

use std::fmt;

/// What the presentation surface is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationState {
    /// Nothing visible, no media loaded in the engine.
    #[default]
    Idle,
    /// A decoded still image fills the image region.
    ShowingImage,
    /// A video is playing in the video region.
    ShowingVideo,
    /// A video is loaded and shown but paused.
    PausedVideo,
}

impl PresentationState {
    /// Returns true when nothing is presented.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a still image is presented.
    #[must_use]
    pub fn is_showing_image(self) -> bool {
        matches!(self, Self::ShowingImage)
    }

    /// Returns true if a video is presented, playing or paused.
    ///
    /// The engine holds loaded media in exactly these states.
    #[must_use]
    pub fn is_video_active(self) -> bool {
        matches!(self, Self::ShowingVideo | Self::PausedVideo)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::PausedVideo)
    }

    /// Stable lowercase name used in logs and diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ShowingImage => "showing_image",
            Self::ShowingVideo => "showing_video",
            Self::PausedVideo => "paused_video",
        }
    }
}

impl fmt::Display for PresentationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
