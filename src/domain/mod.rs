// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playlist and presentation rules with no I/O adapters.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `thiserror` and the `log` facade it depends only on `std`, so
//! everything here can be tested without a display, a codec or a video engine.
//!
//! # Modules
//!
//! - [`catalog`]: Playlist model ([`MediaCatalog`](catalog::MediaCatalog),
//!   [`MediaCatalogEntry`](catalog::MediaCatalogEntry))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`DecodeError`](error::DecodeError),
//!   [`PlaybackError`](error::PlaybackError))
//! - [`media`]: Media types ([`MediaKind`](media::MediaKind), [`RawImage`](media::RawImage),
//!   [`Dimensions`](media::Dimensions))
//! - [`presentation`]: Presentation states ([`PresentationState`](presentation::PresentationState))

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod media;
pub mod presentation;
