// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report structure for JSON export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEvent;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    /// Version of the application that generated the report.
    pub app_version: String,
    /// When diagnostic collection started (RFC 3339).
    pub collection_started_at: String,
    /// Number of events in the report.
    pub event_count: usize,
    /// Number of events the buffer can hold.
    pub buffer_capacity: usize,
}

impl ReportMetadata {
    /// Creates metadata stamped with the current time.
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        event_count: usize,
        buffer_capacity: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            event_count,
            buffer_capacity,
        }
    }
}

/// Complete exported report: metadata followed by events, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<DiagnosticEvent>,
}
