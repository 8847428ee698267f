// SPDX-License-Identifier: MPL-2.0
//! Location of the ShowDisplay configuration directory.
//!
//! The directory holds `settings.toml` and is the default destination for
//! diagnostics reports. It is looked up in this order:
//!
//! 1. an explicit path handed to [`resolve_config_dir`] (tests)
//! 2. `--config-dir`, recorded once by [`init_cli_overrides`]
//! 3. the `SHOWDISPLAY_CONFIG_DIR` environment variable
//! 4. the platform config directory from `dirs`, plus `ShowDisplay`

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const APP_NAME: &str = "ShowDisplay";
const SETTINGS_FILE: &str = "settings.toml";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "SHOWDISPLAY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Only the first call counts.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("--config-dir was already recorded, ignoring the new value");
    }
}

/// Which lookup step produced the config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Explicit,
    CommandLine,
    Environment,
    Platform,
}

impl fmt::Display for ConfigDirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explicit => "explicit path",
            Self::CommandLine => "--config-dir",
            Self::Environment => ENV_CONFIG_DIR,
            Self::Platform => "platform default",
        })
    }
}

/// A resolved configuration directory. It may not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    path: PathBuf,
    source: ConfigDirSource,
}

impl ConfigDir {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn source(&self) -> ConfigDirSource {
        self.source
    }

    /// `settings.toml` inside the directory.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.path.join(SETTINGS_FILE)
    }

    /// Default diagnostics report for an export started at `at`, named
    /// `showdisplay-diagnostics-YYYYMMDD-HHMMSS.json`.
    #[must_use]
    pub fn report_file(&self, at: DateTime<Utc>) -> PathBuf {
        self.path.join(format!(
            "showdisplay-diagnostics-{}.json",
            at.format("%Y%m%d-%H%M%S")
        ))
    }
}

/// Resolves the config directory, preferring `explicit` when given.
///
/// Returns `None` only when no step applies, i.e. the platform has no
/// config directory and nothing was configured.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<ConfigDir> {
    let cli = || CLI_CONFIG_DIR.get().cloned().flatten();
    let env = || {
        std::env::var_os(ENV_CONFIG_DIR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    };
    let platform = || dirs::config_dir().map(|dir| dir.join(APP_NAME));

    let (path, source) = explicit
        .map(|path| (path, ConfigDirSource::Explicit))
        .or_else(|| cli().map(|path| (path, ConfigDirSource::CommandLine)))
        .or_else(|| env().map(|path| (path, ConfigDirSource::Environment)))
        .or_else(|| platform().map(|path| (path, ConfigDirSource::Platform)))?;

    log::debug!("Config directory {} (from {source})", path.display());
    Some(ConfigDir { path, source })
}
