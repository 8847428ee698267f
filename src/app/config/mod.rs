// SPDX-License-Identifier: MPL-2.0
//! Operator preferences stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language
//! - `[display]` - Preview size and headless surface size
//! - `[diagnostics]` - Event buffer capacity
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! The file is read once at startup and never written by the program; the
//! operator edits it by hand. It lives in the directory resolved by
//! [`paths::resolve_config_dir`](crate::app::paths::resolve_config_dir).
//!
//! # Examples
//!
//! ```no_run
//! use showdisplay::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("preview {}", config.display.preview_bounds());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::media::Dimensions;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Warning key returned by [`load`] when the file exists but cannot be read.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default)]
    pub language: Option<String>,
}

/// Preview and presentation surface sizes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Preview width in pixels.
    #[serde(default)]
    pub preview_width: Option<u32>,

    /// Preview height in pixels.
    #[serde(default)]
    pub preview_height: Option<u32>,

    /// Headless surface width in pixels.
    #[serde(default)]
    pub surface_width: Option<u32>,

    /// Headless surface height in pixels.
    #[serde(default)]
    pub surface_height: Option<u32>,
}

impl DisplayConfig {
    /// Preview bounds; zero values fall back to the defaults.
    #[must_use]
    pub fn preview_bounds(&self) -> Dimensions {
        Dimensions::new(
            non_zero_or(self.preview_width, DEFAULT_PREVIEW_WIDTH),
            non_zero_or(self.preview_height, DEFAULT_PREVIEW_HEIGHT),
        )
    }

    /// Surface bounds, clamped to a sane range.
    #[must_use]
    pub fn surface_bounds(&self) -> Dimensions {
        let side = |value: Option<u32>, default: u32| {
            value
                .unwrap_or(default)
                .clamp(MIN_SURFACE_SIDE, MAX_SURFACE_SIDE)
        };
        Dimensions::new(
            side(self.surface_width, DEFAULT_SURFACE_WIDTH),
            side(self.surface_height, DEFAULT_SURFACE_HEIGHT),
        )
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(default)]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    /// Buffer capacity, clamped to the accepted range.
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::from_setting(self.buffer_capacity)
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// `[general]` section.
    #[serde(default)]
    pub general: GeneralConfig,

    /// `[display]` section.
    #[serde(default)]
    pub display: DisplayConfig,

    /// `[diagnostics]` section.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

fn non_zero_or(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v > 0).unwrap_or(default)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns the configuration and an optional warning key. A missing file
/// yields defaults silently; an unreadable file yields defaults plus
/// [`LOAD_WARNING_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir` instead of the default location.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = paths::resolve_config_dir(base_dir).map(|dir| dir.settings_file()) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read and
/// [`Error::Config`](crate::error::Error::Config)
/// if it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
