// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for session activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operator actions captured for diagnostics.
///
/// One variant per control command; indices and counts are kept, paths are not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Files were offered to the playlist.
    AddFiles {
        /// How many files were accepted.
        accepted: usize,
    },
    /// A folder was scanned into the playlist.
    AddDirectory {
        /// How many files were accepted.
        accepted: usize,
    },
    RemoveSelected,
    ClearAll,
    Select {
        index: usize,
    },
    MoveUp,
    MoveDown,
    Move {
        from: usize,
        to: usize,
    },
    ShowOnDisplay,
    OpenDisplay,
    CloseDisplay,
    Pause,
    Resume,
    StopDisplay,
    SurfaceResized {
        width: u32,
        height: u32,
    },
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Operator action.
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Presentation surface changed state.
    StateTransition { from: String, to: String },

    /// Non-fatal problem, such as a rejected file.
    Warning { message: String },

    /// Failed operation.
    Error { message: String },
}

/// A diagnostic event with its wall-clock timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// When the event occurred (UTC).
    pub timestamp: DateTime<Utc>,
    /// The type and data of the event.
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Utc::now())
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }
}
