// SPDX-License-Identifier: MPL-2.0
//! Control session: the operator-side root state.
//!
//! [`ControlSession`] owns the playlist, the preview of the selected entry
//! and the optional presentation surface on the secondary display. Every
//! operator action arrives as a [`Command`] through [`ControlSession::update`]
//! and yields a localized [`StatusMessage`]; nothing here depends on a UI
//! toolkit.

pub mod command;
pub mod config;
mod message;
pub mod paths;
mod update;

pub use message::{Command, Flags, Severity, StatusMessage};

use crate::application::port::{DisplayProvider, ImageDecoder};
use crate::application::presentation::PresentationSurface;
use crate::application::query::Preview;
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::catalog::MediaCatalog;
use crate::domain::media::Dimensions;
use crate::domain::presentation::PresentationState;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use config::Config;
use std::fmt;
use std::path::{Path, PathBuf};

/// Presentation surface type produced by a display provider.
pub type DisplaySurface<P> = PresentationSurface<
    <P as DisplayProvider>::Surface,
    <P as DisplayProvider>::Decoder,
    <P as DisplayProvider>::Engine,
>;

/// Operator session state.
pub struct ControlSession<P: DisplayProvider> {
    catalog: MediaCatalog,
    /// Whether the operator has an entry selected. Cleared whenever the
    /// playlist is rebuilt by an add, remove or clear.
    has_selection: bool,
    preview: Option<Preview>,
    preview_decoder: Box<dyn ImageDecoder>,
    preview_bounds: Dimensions,
    provider: P,
    display: Option<DisplaySurface<P>>,
    i18n: I18n,
    diagnostics: DiagnosticsCollector,
}

impl<P: DisplayProvider> ControlSession<P> {
    /// Creates a session with an empty playlist and no display.
    pub fn new(
        provider: P,
        preview_decoder: Box<dyn ImageDecoder>,
        config: &Config,
        i18n: I18n,
    ) -> Self {
        Self {
            catalog: MediaCatalog::new(),
            has_selection: false,
            preview: None,
            preview_decoder,
            preview_bounds: config.display.preview_bounds(),
            provider,
            display: None,
            i18n,
            diagnostics: DiagnosticsCollector::new(config.diagnostics.capacity()),
        }
    }

    /// The playlist.
    #[must_use]
    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    /// Returns true if an entry is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.has_selection && !self.catalog.is_empty()
    }

    /// Preview of the selected entry, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// The open presentation surface, if any.
    #[must_use]
    pub fn display(&self) -> Option<&DisplaySurface<P>> {
        self.display.as_ref()
    }

    /// State of the presentation surface; `Idle` while no display is open.
    #[must_use]
    pub fn presentation_state(&self) -> PresentationState {
        self.display
            .as_ref()
            .map_or(PresentationState::Idle, PresentationSurface::state)
    }

    /// The display provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Localization bundle used for status messages.
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Events recorded so far.
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Writes the diagnostics report to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized or written.
    pub fn export_diagnostics(&self, path: &Path) -> Result<PathBuf> {
        self.diagnostics.export_to_file(path)
    }

    /// Localized status for a finished diagnostics export.
    pub fn export_status(&self, result: &Result<PathBuf>) -> StatusMessage {
        match result {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                StatusMessage::info(
                    self.i18n
                        .tr_with_args("status-export-done", &[("name", name.as_str().into())]),
                )
            }
            Err(err) => StatusMessage::error(self.i18n.tr_with_args(
                "error-export",
                &[("reason", err.to_string().as_str().into())],
            )),
        }
    }
}

impl<P: DisplayProvider> fmt::Debug for ControlSession<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlSession")
            .field("catalog", &self.catalog)
            .field("has_selection", &self.has_selection)
            .field("display_open", &self.display.is_some())
            .field("state", &self.presentation_state())
            .finish_non_exhaustive()
    }
}
