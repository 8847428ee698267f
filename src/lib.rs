// SPDX-License-Identifier: MPL-2.0
//! `showdisplay` curates a playlist of images and videos and presents the
//! selected item full-screen on a secondary display.
//!
//! # Layers
//!
//! - [`domain`]: playlist, media kinds, presentation states, errors
//! - [`application`]: capability ports, the presentation state machine and
//!   the preview query
//! - [`infrastructure`]: `image` decoder, `FFmpeg` playback engine and an
//!   in-memory headless display
//! - [`app`]: the control session, configuration and console protocol
//!
//! Localized status messages live in [`i18n`]; session events are kept by
//! [`diagnostics`].

#![doc(html_root_url = "https://docs.rs/showdisplay/0.1.0")]

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
