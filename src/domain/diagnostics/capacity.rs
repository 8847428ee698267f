// SPDX-License-Identifier: MPL-2.0
//! Capacity of the diagnostic event buffer.

use std::fmt;

/// Accepted range for the diagnostics buffer, in events.
pub mod buffer_capacity_bounds {
    /// Smallest buffer worth keeping for a show.
    pub const MIN: usize = 16;
    /// Upper bound so a long-running session stays small in memory.
    pub const MAX: usize = 4096;
    /// Used when the configuration does not say otherwise.
    pub const DEFAULT: usize = 256;
}

/// Number of session events kept before the oldest are dropped.
///
/// Always within [`buffer_capacity_bounds::MIN`] and
/// [`buffer_capacity_bounds::MAX`]; out-of-range requests are clamped.
///
/// ```
/// use showdisplay::domain::diagnostics::{buffer_capacity_bounds, BufferCapacity};
///
/// assert_eq!(BufferCapacity::new(1).value(), buffer_capacity_bounds::MIN);
/// assert_eq!(BufferCapacity::from_setting(None), BufferCapacity::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping `value` into the accepted range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Builds a capacity from an optional configuration value.
    #[must_use]
    pub fn from_setting(value: Option<usize>) -> Self {
        value.map_or_else(Self::default, Self::new)
    }

    /// The capacity in events.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

impl fmt::Display for BufferCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} events", self.0)
    }
}
