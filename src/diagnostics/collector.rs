// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for session events.
//!
//! The collector is owned by the control session and written to
//! synchronously from its update loop. It keeps the most recent events only:
//! once the configured [`BufferCapacity`] is reached, each new event evicts
//! the oldest one.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::{
    sanitize_message, BufferCapacity, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ReportMetadata, UserAction,
};
use crate::domain::presentation::PresentationState;
use crate::error::Result;

/// Stores the most recent diagnostic events, oldest first.
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    events: VecDeque<DiagnosticEvent>,
    capacity: BufferCapacity,
    collection_started_at: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    /// Creates a collector keeping at most `capacity` events.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        log::debug!("Diagnostics keep the last {capacity}");
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity,
            collection_started_at: Utc::now(),
        }
    }

    /// Records an operator action.
    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Records an operator action with free-form details.
    ///
    /// Details are sanitized to remove file paths.
    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        let details = details.map(|text| sanitize_message(&text));
        self.push(DiagnosticEventKind::UserAction { action, details });
    }

    /// Records a presentation state change. Self-transitions are ignored.
    pub fn log_transition(&mut self, from: PresentationState, to: PresentationState) {
        if from != to {
            self.push(DiagnosticEventKind::StateTransition {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
    }

    /// Records a warning. The message is sanitized to remove file paths.
    pub fn log_warning(&mut self, message: impl AsRef<str>) {
        self.push(DiagnosticEventKind::Warning {
            message: sanitize_message(message.as_ref()),
        });
    }

    /// Records an error. The message is sanitized to remove file paths.
    pub fn log_error(&mut self, message: impl AsRef<str>) {
        self.push(DiagnosticEventKind::Error {
            message: sanitize_message(message.as_ref()),
        });
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        if self.events.len() >= self.capacity.value() {
            self.events.pop_front();
        }
        self.events.push_back(DiagnosticEvent::new(kind));
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Maximum number of events kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.value()
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path` and returns the path written.
    ///
    /// The report is written to a temporary sibling first and then renamed,
    /// so an interrupted export never leaves a truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Diagnostics`](crate::error::Error::Diagnostics) if
    /// serialization fails and [`Error::Io`](crate::error::Error::Io) if
    /// the file cannot be written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }

    fn build_report(&self) -> DiagnosticReport {
        DiagnosticReport {
            metadata: ReportMetadata::new(
                self.collection_started_at,
                self.events.len(),
                self.capacity.value(),
            ),
            events: self.events.iter().cloned().collect(),
        }
    }
}

fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
