// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! These errors describe why a decode or a playback request failed. They are
//! produced by capability adapters and consumed by the presentation surface,
//! which turns them into diagnostics instead of state transitions.

mod decode;
mod playback;

pub use decode::DecodeError;
pub use playback::PlaybackError;
