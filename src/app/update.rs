// SPDX-License-Identifier: MPL-2.0
//! Command handlers for the control session.

use super::{Command, ControlSession, Severity, StatusMessage};
use crate::application::port::DisplayProvider;
use crate::application::presentation::{PresentationSurface, SurfaceError};
use crate::application::query::Preview;
use crate::diagnostics::UserAction;
use crate::directory_scanner;
use crate::domain::media::Dimensions;
use crate::i18n::fluent::I18nArg;
use std::path::{Path, PathBuf};

impl<P: DisplayProvider> ControlSession<P> {
    /// Applies one operator command and reports the outcome.
    pub fn update(&mut self, command: Command) -> StatusMessage {
        let before = self.presentation_state();
        let status = match command {
            Command::AddFiles(paths) => self.handle_add_files(paths),
            Command::AddDirectory(dir) => self.handle_add_directory(&dir),
            Command::RemoveSelected => self.handle_remove_selected(),
            Command::ClearAll => self.handle_clear_all(),
            Command::Select(index) => self.handle_select(index),
            Command::MoveUp => self.handle_move_by(-1),
            Command::MoveDown => self.handle_move_by(1),
            Command::Move { from, to } => self.handle_move(from, to),
            Command::ShowOnDisplay => self.handle_show_on_display(),
            Command::OpenDisplay => self.handle_open_display(),
            Command::CloseDisplay => self.handle_close_display(),
            Command::Pause => self.handle_pause(),
            Command::Resume => self.handle_resume(),
            Command::StopDisplay => self.handle_stop(),
            Command::SurfaceResized(bounds) => self.handle_resized(bounds),
        };
        self.diagnostics
            .log_transition(before, self.presentation_state());
        if status.severity == Severity::Warning {
            self.diagnostics.log_warning(&status.text);
        }
        status
    }

    // -------------------------------------------------------------------------
    // Playlist
    // -------------------------------------------------------------------------

    fn handle_add_files(&mut self, paths: Vec<PathBuf>) -> StatusMessage {
        let offered = paths.len();
        let accepted = self.catalog.add_many(paths);
        self.playlist_rebuilt();
        self.diagnostics.log_action_with_details(
            UserAction::AddFiles { accepted },
            skipped_details(offered, accepted),
        );
        StatusMessage::info(self.tr_args("status-files-added", &[("count", accepted.into())]))
    }

    fn handle_add_directory(&mut self, dir: &Path) -> StatusMessage {
        let name = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());

        match directory_scanner::scan_directory(dir) {
            Ok(files) => {
                let offered = files.len();
                let accepted = self.catalog.add_many(files);
                self.playlist_rebuilt();
                self.diagnostics.log_action_with_details(
                    UserAction::AddDirectory { accepted },
                    skipped_details(offered, accepted),
                );
                StatusMessage::info(self.tr_args(
                    "status-directory-added",
                    &[("count", accepted.into()), ("name", name.as_str().into())],
                ))
            }
            Err(err) => {
                log::warn!("Cannot scan {}: {err}", dir.display());
                self.diagnostics.log_error(err.to_string());
                StatusMessage::error(
                    self.tr_args("error-directory", &[("name", name.as_str().into())]),
                )
            }
        }
    }

    fn handle_remove_selected(&mut self) -> StatusMessage {
        if !self.has_selection() {
            return StatusMessage::warning(self.i18n.tr("warning-no-selection"));
        }

        let index = self.catalog.selected_index();
        let name = self
            .catalog
            .get(index)
            .map(|entry| entry.display_name().to_string())
            .unwrap_or_default();
        self.catalog.remove(index);
        self.playlist_rebuilt();
        self.diagnostics.log_action(UserAction::RemoveSelected);
        StatusMessage::info(self.tr_args("status-removed", &[("name", name.as_str().into())]))
    }

    fn handle_clear_all(&mut self) -> StatusMessage {
        self.catalog.clear();
        self.playlist_rebuilt();
        self.diagnostics.log_action(UserAction::ClearAll);
        StatusMessage::info(self.i18n.tr("status-cleared"))
    }

    fn handle_select(&mut self, index: usize) -> StatusMessage {
        if !self.select(index) {
            return self.invalid_index(index);
        }
        self.diagnostics.log_action(UserAction::Select { index });
        let name = self.selected_name();
        StatusMessage::info(self.tr_args("status-selected", &[("name", name.as_str().into())]))
    }

    fn handle_move_by(&mut self, delta: isize) -> StatusMessage {
        if !self.has_selection() {
            return StatusMessage::warning(self.i18n.tr("warning-no-selection"));
        }

        let from = self.catalog.selected_index();
        let action = if delta < 0 {
            UserAction::MoveUp
        } else {
            UserAction::MoveDown
        };
        let target = from
            .checked_add_signed(delta)
            .filter(|to| *to < self.catalog.count());

        let Some(to) = target else {
            return StatusMessage::info(self.i18n.tr("status-move-unchanged"));
        };

        self.catalog.move_item(from, to);
        self.select(to);
        self.diagnostics.log_action(action);
        let name = self.selected_name();
        StatusMessage::info(self.tr_args("status-moved", &[("name", name.as_str().into())]))
    }

    fn handle_move(&mut self, from: usize, to: usize) -> StatusMessage {
        let name = self
            .catalog
            .get(from)
            .map(|entry| entry.display_name().to_string());

        match name {
            Some(name) if self.catalog.move_item(from, to) => {
                self.diagnostics.log_action(UserAction::Move { from, to });
                StatusMessage::info(self.tr_args("status-moved", &[("name", name.as_str().into())]))
            }
            Some(_) => self.invalid_index(to),
            None => self.invalid_index(from),
        }
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    fn handle_open_display(&mut self) -> StatusMessage {
        self.diagnostics.log_action(UserAction::OpenDisplay);
        if self.display.is_some() {
            return StatusMessage::info(self.i18n.tr("status-display-already-open"));
        }
        match self.open_display() {
            Ok(()) => StatusMessage::info(self.i18n.tr("status-display-opened")),
            Err(status) => status,
        }
    }

    fn handle_close_display(&mut self) -> StatusMessage {
        self.diagnostics.log_action(UserAction::CloseDisplay);
        match self.display.take() {
            Some(display) => {
                display.teardown();
                log::info!("Display closed");
                StatusMessage::info(self.i18n.tr("status-display-closed"))
            }
            None => StatusMessage::warning(self.i18n.tr("warning-display-not-open")),
        }
    }

    fn handle_show_on_display(&mut self) -> StatusMessage {
        self.diagnostics.log_action(UserAction::ShowOnDisplay);
        let Some(entry) = self
            .has_selection()
            .then(|| self.catalog.selected().cloned())
            .flatten()
        else {
            return StatusMessage::warning(self.i18n.tr("warning-no-selection"));
        };

        if self.display.is_none() {
            if let Err(status) = self.open_display() {
                return status;
            }
        }
        let Some(display) = self.display.as_mut() else {
            return StatusMessage::warning(self.i18n.tr("warning-display-not-open"));
        };

        match display.present(&entry) {
            Ok(()) => StatusMessage::info(self.tr_args(
                "status-showing",
                &[("name", entry.display_name().into())],
            )),
            Err(err) => {
                self.diagnostics.log_error(format!(
                    "Cannot show {}: {err}",
                    entry.display_name()
                ));
                StatusMessage::error(self.tr_args(
                    "error-present",
                    &[
                        ("name", entry.display_name().into()),
                        ("reason", err.to_string().as_str().into()),
                    ],
                ))
            }
        }
    }

    fn handle_pause(&mut self) -> StatusMessage {
        self.diagnostics.log_action(UserAction::Pause);
        match self.with_display(PresentationSurface::pause) {
            Ok(()) => StatusMessage::info(self.i18n.tr("status-paused")),
            Err(status) => status,
        }
    }

    fn handle_resume(&mut self) -> StatusMessage {
        self.diagnostics.log_action(UserAction::Resume);
        match self.with_display(PresentationSurface::resume) {
            Ok(()) => StatusMessage::info(self.i18n.tr("status-resumed")),
            Err(status) => status,
        }
    }

    fn handle_stop(&mut self) -> StatusMessage {
        self.diagnostics.log_action(UserAction::StopDisplay);
        let stopped = self.with_display(|display| {
            display.stop();
            Ok(())
        });
        match stopped {
            Ok(()) => StatusMessage::info(self.i18n.tr("status-stopped")),
            Err(status) => status,
        }
    }

    fn handle_resized(&mut self, bounds: Dimensions) -> StatusMessage {
        self.diagnostics.log_action(UserAction::SurfaceResized {
            width: bounds.width,
            height: bounds.height,
        });
        match self.with_display(|display| display.resize(bounds)) {
            Ok(()) => StatusMessage::info(self.tr_args(
                "status-resized",
                &[
                    ("width", I18nArg::Number(f64::from(bounds.width))),
                    ("height", I18nArg::Number(f64::from(bounds.height))),
                ],
            )),
            Err(status) => status,
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Runs `action` on the open display, turning failures into a status.
    fn with_display<F>(&mut self, action: F) -> Result<(), StatusMessage>
    where
        F: FnOnce(&mut super::DisplaySurface<P>) -> Result<(), SurfaceError>,
    {
        let Some(display) = self.display.as_mut() else {
            return Err(StatusMessage::warning(
                self.i18n.tr("warning-display-not-open"),
            ));
        };
        action(display).map_err(|err| self.surface_error(&err))
    }

    fn surface_error(&mut self, err: &SurfaceError) -> StatusMessage {
        match err {
            SurfaceError::InvalidTransition { from, call } => StatusMessage::warning(self.tr_args(
                "warning-invalid-transition",
                &[("call", (*call).into()), ("state", from.as_str().into())],
            )),
            other => {
                self.diagnostics.log_error(other.to_string());
                StatusMessage::error(self.tr_args(
                    "error-playback",
                    &[("reason", other.to_string().as_str().into())],
                ))
            }
        }
    }

    fn open_display(&mut self) -> Result<(), StatusMessage> {
        match self.provider.open_display() {
            Ok(components) => {
                self.display = Some(PresentationSurface::new(
                    components.surface,
                    components.decoder,
                    components.engine,
                ));
                log::info!("Display opened");
                Ok(())
            }
            Err(err) => {
                log::warn!("Cannot open display: {err}");
                self.diagnostics.log_error(err.to_string());
                Err(StatusMessage::error(self.tr_args(
                    "error-display-unavailable",
                    &[("reason", err.to_string().as_str().into())],
                )))
            }
        }
    }

    /// Moves the cursor to `index` and rebuilds the preview.
    fn select(&mut self, index: usize) -> bool {
        if !self.catalog.select(index) {
            return false;
        }
        self.has_selection = true;
        self.preview = self.catalog.selected().map(|entry| {
            Preview::build(entry, self.preview_decoder.as_ref(), self.preview_bounds)
        });
        true
    }

    /// The playlist changed shape; the operator has to pick again.
    fn playlist_rebuilt(&mut self) {
        self.has_selection = false;
        self.preview = None;
    }

    fn selected_name(&self) -> String {
        self.catalog
            .selected()
            .map(|entry| entry.display_name().to_string())
            .unwrap_or_default()
    }

    fn invalid_index(&self, index: usize) -> StatusMessage {
        StatusMessage::warning(self.tr_args("warning-invalid-index", &[("index", index.into())]))
    }

    fn tr_args(&self, key: &str, args: &[(&str, I18nArg<'_>)]) -> String {
        self.i18n.tr_with_args(key, args)
    }
}

fn skipped_details(offered: usize, accepted: usize) -> Option<String> {
    let skipped = offered.saturating_sub(accepted);
    (skipped > 0).then(|| format!("{skipped} skipped"))
}
