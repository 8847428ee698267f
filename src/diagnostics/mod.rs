// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the control session.
//!
//! The most recent events are kept in memory, up to a configured
//! [`BufferCapacity`], and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`DiagnosticEvent`]: Timestamped operator action, state transition, warning or error
//! - [`DiagnosticsCollector`]: Records events and writes reports
//!
//! # Privacy
//!
//! Messages are sanitized before they are stored: paths are reduced to
//! their file name.

mod collector;
mod events;
mod report;
mod sanitizer;

pub use crate::domain::diagnostics::BufferCapacity;
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportMetadata};
pub use sanitizer::sanitize_message;
