// SPDX-License-Identifier: MPL-2.0
//! Default values for every configuration setting.
//!
//! # Categories
//!
//! - **Preview**: thumbnail area of the control view
//! - **Surface**: size of the headless presentation surface
//! - **Diagnostics**: event buffer size

use crate::domain::media::Dimensions;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default preview width in pixels.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 600;

/// Default preview height in pixels.
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 400;

/// Default preview bounds.
pub const DEFAULT_PREVIEW_BOUNDS: Dimensions =
    Dimensions::new(DEFAULT_PREVIEW_WIDTH, DEFAULT_PREVIEW_HEIGHT);

// ==========================================================================
// Surface Defaults
// ==========================================================================

/// Default presentation surface width (Full HD).
pub const DEFAULT_SURFACE_WIDTH: u32 = 1920;

/// Default presentation surface height (Full HD).
pub const DEFAULT_SURFACE_HEIGHT: u32 = 1080;

/// Default presentation surface bounds.
pub const DEFAULT_SURFACE_BOUNDS: Dimensions =
    Dimensions::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT);

/// Smallest surface side accepted from configuration.
pub const MIN_SURFACE_SIDE: u32 = 16;

/// Largest surface side accepted from configuration (8K).
pub const MAX_SURFACE_SIDE: u32 = 7680;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub use crate::domain::diagnostics::buffer_capacity_bounds::DEFAULT as DEFAULT_DIAGNOSTICS_CAPACITY;
