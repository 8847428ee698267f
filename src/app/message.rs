// SPDX-License-Identifier: MPL-2.0
//! Commands accepted by the control session and the status it reports back.

use crate::domain::media::Dimensions;
use std::fmt;
use std::path::PathBuf;

/// Operator actions dispatched into [`ControlSession::update`](super::ControlSession::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Offer files to the playlist; invalid ones are skipped.
    AddFiles(Vec<PathBuf>),
    /// Import every supported file directly inside a folder.
    AddDirectory(PathBuf),
    RemoveSelected,
    ClearAll,
    /// Select the entry at an index and refresh the preview.
    Select(usize),
    MoveUp,
    MoveDown,
    /// Splice-move an entry without touching the selection.
    Move { from: usize, to: usize },
    /// Present the selected entry, opening the display when needed.
    ShowOnDisplay,
    OpenDisplay,
    CloseDisplay,
    Pause,
    Resume,
    StopDisplay,
    /// The display reported new bounds.
    SurfaceResized(Dimensions),
}

/// How a status line should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Lowercase label for plain-text output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Localized outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }

    /// Returns true for info messages.
    #[must_use]
    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Info => f.write_str(&self.text),
            other => write!(f, "[{}] {}", other.label(), self.text),
        }
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOWDISPLAY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Files to add to the playlist on startup.
    pub files: Vec<PathBuf>,
}
