// SPDX-License-Identifier: MPL-2.0
//! Playlist model.
//!
//! [`MediaCatalog`] is the ordered list of presentable items plus a selection
//! cursor. Each item is an immutable [`MediaCatalogEntry`] whose kind is
//! derived once from its path.

pub mod entry;
pub mod playlist;

pub use entry::MediaCatalogEntry;
pub use playlist::MediaCatalog;
