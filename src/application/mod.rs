// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`presentation`]: The presentation surface state machine
//! - [`query`]: Read-only services (operator preview)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The control session drives application services
//!
//! # Example
//!
//! ```ignore
//! use showdisplay::application::presentation::PresentationSurface;
//! use showdisplay::infrastructure::headless::HeadlessDisplay;
//!
//! let components = HeadlessDisplay::default().open_display()?;
//! let mut surface = PresentationSurface::new(
//!     components.surface,
//!     components.decoder,
//!     components.engine,
//! );
//! surface.present(&entry)?;
//! ```

pub mod port;
pub mod presentation;
pub mod query;
