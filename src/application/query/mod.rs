// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! These services read domain data and external capabilities without
//! touching the presentation state machine.
//!
//! - [`preview`]: operator preview of the selected entry

pub mod preview;

pub use preview::{Preview, PreviewContent};
