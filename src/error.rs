// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type for the ambient services (configuration,
//! diagnostics export, console I/O).
//!
//! Presentation and catalog failures have their own types
//! ([`SurfaceError`], [`DecodeError`], [`PlaybackError`]) and are converted
//! here only when they need to cross into the application shell.
//!
//! [`SurfaceError`]: crate::application::presentation::SurfaceError
//! [`DecodeError`]: crate::domain::error::DecodeError
//! [`PlaybackError`]: crate::domain::error::PlaybackError

use crate::application::port::display::DisplayError;
use crate::application::presentation::SurfaceError;
use thiserror::Error;

/// Errors raised outside the presentation core.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The configuration could not be parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A presentation call failed.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// The secondary display could not be opened.
    #[error(transparent)]
    Display(#[from] DisplayError),

    /// The diagnostics report could not be produced.
    #[error("Diagnostics error: {0}")]
    Diagnostics(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagnostics(err.to_string())
    }
}

/// Result alias for fallible shell operations.
pub type Result<T> = std::result::Result<T, Error>;
