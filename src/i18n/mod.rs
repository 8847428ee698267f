// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for operator-facing messages.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time
//! - Named arguments (`{ $name }`, `{ $count }`) in messages
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;

pub use fluent::I18n;
