// SPDX-License-Identifier: MPL-2.0
use crate::domain::error::{DecodeError, PlaybackError};
use crate::domain::media::MediaKind;
use crate::domain::presentation::PresentationState;
use thiserror::Error;

/// Failure of a presentation call.
///
/// Every variant is recoverable: the surface state is unchanged by the
/// failing call unless documented otherwise on the call itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The image could not be decoded.
    #[error("Image decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// The video could not be loaded or started.
    #[error("Video playback failed: {0}")]
    Playback(#[from] PlaybackError),

    /// The entry's kind does not match the requested presentation.
    #[error("Cannot present {found} as {expected}")]
    KindMismatch {
        /// Kind the call presents.
        expected: MediaKind,
        /// Kind of the entry that was passed.
        found: MediaKind,
    },

    /// The entry has no supported kind.
    #[error("Unsupported media: {0}")]
    Unsupported(String),

    /// The call is not allowed in the current state.
    #[error("Cannot {call} while {from}")]
    InvalidTransition {
        /// State the surface was in.
        from: PresentationState,
        /// Rejected call.
        call: &'static str,
    },

    /// The state requires an active entry but none is set.
    #[error("No active entry")]
    NoActiveEntry,

    /// The playback engine was already released.
    #[error("Playback engine has been released")]
    Released,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = SurfaceError::InvalidTransition {
            from: PresentationState::Idle,
            call: "pause",
        };
        assert_eq!(err.to_string(), "Cannot pause while idle");

        let err = SurfaceError::KindMismatch {
            expected: MediaKind::Image,
            found: MediaKind::Video,
        };
        assert_eq!(err.to_string(), "Cannot present video as image");

        let err = SurfaceError::from(DecodeError::NotFound);
        assert_eq!(err.to_string(), "Image decode failed: File not found");
    }
}
