// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests of the control session command flow.

mod common;

use common::{session, session_with, write_clip, write_png, EngineCall, TestDisplay};
use showdisplay::app::{Command, Severity};
use showdisplay::application::port::RenderSurface;
use showdisplay::application::query::PreviewContent;
use showdisplay::diagnostics::DiagnosticEventKind;
use showdisplay::domain::media::Dimensions;
use showdisplay::domain::presentation::PresentationState;
use tempfile::tempdir;

#[test]
fn add_files_reports_accepted_count() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    let files = vec![
        write_png(dir.path(), "a.png", 8, 8),
        write_clip(dir.path(), "b.mp4"),
        write_clip(dir.path(), "notes.txt"),
        dir.path().join("missing.png"),
    ];

    let status = session.update(Command::AddFiles(files));

    assert_eq!(status.severity, Severity::Info);
    assert_eq!(status.text, "2 file(s) added");
    assert_eq!(session.catalog().count(), 2);
    assert!(!session.has_selection());
}

#[test]
fn show_without_selection_warns_and_opens_nothing() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_png(dir.path(), "a.png", 8, 8)]));

    let status = session.update(Command::ShowOnDisplay);

    assert_eq!(status.severity, Severity::Warning);
    assert_eq!(status.text, "Please select a file to display");
    assert!(session.display().is_none());
}

#[test]
fn selecting_an_image_builds_a_fitted_thumbnail() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_png(dir.path(), "wide.png", 1200, 800)]));

    let status = session.update(Command::Select(0));

    assert_eq!(status.text, "Selected: wide.png");
    let preview = session.preview().expect("preview should exist");
    assert_eq!(preview.name(), "wide.png");
    let thumbnail = preview.thumbnail().expect("image preview has a thumbnail");
    assert_eq!(thumbnail.dimensions(), Dimensions::new(600, 400));
}

#[test]
fn small_images_are_not_upscaled_in_preview() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_png(dir.path(), "icon.png", 64, 32)]));
    session.update(Command::Select(0));

    let thumbnail = session
        .preview()
        .and_then(|preview| preview.thumbnail())
        .expect("thumbnail");
    assert_eq!(thumbnail.dimensions(), Dimensions::new(64, 32));
}

#[test]
fn selecting_a_video_shows_placeholder() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_clip(dir.path(), "intro.mp4")]));
    session.update(Command::Select(0));

    let preview = session.preview().expect("preview should exist");
    assert_eq!(preview.content(), &PreviewContent::VideoPlaceholder);
}

#[test]
fn select_out_of_range_warns() {
    let mut session = session();
    let status = session.update(Command::Select(3));
    assert_eq!(status.severity, Severity::Warning);
    assert_eq!(status.text, "No file at position 3");
}

#[test]
fn show_image_opens_display_and_presents() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_png(dir.path(), "slide.png", 4000, 3000)]));
    session.update(Command::Select(0));

    let status = session.update(Command::ShowOnDisplay);

    assert_eq!(status.text, "Showing: slide.png");
    assert_eq!(session.provider().opened, 1);
    let display = session.display().expect("display should be open");
    assert_eq!(display.state(), PresentationState::ShowingImage);
    assert!(display.surface().is_image_visible());
    assert!(!display.surface().is_video_visible());
    let shown = display.surface().image().expect("image region filled");
    assert_eq!(shown.dimensions(), Dimensions::new(1440, 1080));
}

#[test]
fn video_flow_through_pause_resume_and_stop() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    let clip = write_clip(dir.path(), "intro.mp4");
    session.update(Command::AddFiles(vec![clip.clone()]));
    session.update(Command::Select(0));

    assert_eq!(session.update(Command::ShowOnDisplay).text, "Showing: intro.mp4");
    assert_eq!(session.presentation_state(), PresentationState::ShowingVideo);

    assert_eq!(session.update(Command::Pause).text, "Paused");
    assert_eq!(session.presentation_state(), PresentationState::PausedVideo);

    assert_eq!(session.update(Command::Resume).text, "Resumed");
    assert_eq!(session.presentation_state(), PresentationState::ShowingVideo);

    assert_eq!(session.update(Command::StopDisplay).text, "Display stopped");
    assert_eq!(session.presentation_state(), PresentationState::Idle);
    let display = session.display().expect("display stays open");
    assert!(display.active_entry().is_none());

    let calls = session.provider().engine_log.lock().unwrap().calls.clone();
    assert_eq!(
        calls,
        vec![
            EngineCall::Load(clip),
            EngineCall::Bind(1),
            EngineCall::Play,
            EngineCall::Pause,
            EngineCall::Play,
            EngineCall::Stop,
        ]
    );
}

#[test]
fn pause_without_video_is_rejected() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_png(dir.path(), "a.png", 8, 8)]));
    session.update(Command::Select(0));
    session.update(Command::ShowOnDisplay);

    let status = session.update(Command::Pause);

    assert_eq!(status.severity, Severity::Warning);
    assert_eq!(status.text, "Cannot pause while showing_image");
    assert_eq!(session.presentation_state(), PresentationState::ShowingImage);
}

#[test]
fn playback_commands_without_display_warn() {
    let mut session = session();
    for command in [Command::Pause, Command::Resume, Command::StopDisplay] {
        let status = session.update(command);
        assert_eq!(status.severity, Severity::Warning);
        assert_eq!(status.text, "Display window is not open");
    }
}

#[test]
fn image_after_video_stops_the_engine() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![
        write_clip(dir.path(), "a.mp4"),
        write_png(dir.path(), "b.png", 8, 8),
    ]));
    session.update(Command::Select(0));
    session.update(Command::ShowOnDisplay);
    session.update(Command::Select(1));

    session.update(Command::ShowOnDisplay);

    assert_eq!(session.presentation_state(), PresentationState::ShowingImage);
    let log = session.provider().engine_log.lock().unwrap();
    assert_eq!(log.calls.last(), Some(&EngineCall::Stop));
    assert!(!log.playing);
}

#[test]
fn failed_video_load_keeps_current_image() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![
        write_png(dir.path(), "a.png", 8, 8),
        write_clip(dir.path(), "broken.mp4"),
    ]));
    session.update(Command::Select(0));
    session.update(Command::ShowOnDisplay);
    session.update(Command::Select(1));

    let status = session.update(Command::ShowOnDisplay);

    assert_eq!(status.severity, Severity::Error);
    assert!(status.text.starts_with("Cannot show broken.mp4:"));
    let display = session.display().expect("display open");
    assert_eq!(display.state(), PresentationState::ShowingImage);
    assert_eq!(
        display.active_entry().map(|entry| entry.display_name()),
        Some("a.png")
    );
    assert!(display.surface().is_image_visible());
}

#[test]
fn open_display_twice_reports_already_open() {
    let mut session = session();
    assert_eq!(session.update(Command::OpenDisplay).text, "Display window opened");
    assert_eq!(
        session.update(Command::OpenDisplay).text,
        "Display window already open"
    );
    assert_eq!(session.provider().opened, 1);
}

#[test]
fn close_display_releases_the_engine() {
    let mut session = session();
    session.update(Command::OpenDisplay);
    let engine_log = session.provider().engine_log.clone();

    assert_eq!(session.update(Command::CloseDisplay).text, "Display window closed");
    assert!(session.display().is_none());
    assert!(engine_log.lock().unwrap().released);

    let again = session.update(Command::CloseDisplay);
    assert_eq!(again.severity, Severity::Warning);
}

#[test]
fn unavailable_display_reports_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session_with(TestDisplay::unavailable(), "en-US");
    session.update(Command::AddFiles(vec![write_png(dir.path(), "a.png", 8, 8)]));
    session.update(Command::Select(0));

    let status = session.update(Command::ShowOnDisplay);

    assert_eq!(status.severity, Severity::Error);
    assert_eq!(
        status.text,
        "Cannot open display window: No display available"
    );
    assert!(session.display().is_none());
}

#[test]
fn move_up_and_down_follow_the_selection() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![
        write_png(dir.path(), "a.png", 8, 8),
        write_png(dir.path(), "b.png", 8, 8),
        write_png(dir.path(), "c.png", 8, 8),
    ]));
    session.update(Command::Select(1));

    assert_eq!(session.update(Command::MoveUp).text, "Moved: b.png");
    assert_eq!(session.catalog().selected_index(), 0);
    assert_eq!(
        session.update(Command::MoveUp).text,
        "Already at the end of the list"
    );

    session.update(Command::MoveDown);
    session.update(Command::MoveDown);
    let names: Vec<_> = session
        .catalog()
        .iter()
        .map(|entry| entry.display_name())
        .collect();
    assert_eq!(names, vec!["a.png", "c.png", "b.png"]);
    assert_eq!(session.catalog().selected_index(), 2);
    assert!(session.has_selection());
}

#[test]
fn move_command_splices_without_reselecting() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![
        write_png(dir.path(), "A.png", 8, 8),
        write_png(dir.path(), "B.png", 8, 8),
        write_png(dir.path(), "C.png", 8, 8),
    ]));

    assert_eq!(session.update(Command::Move { from: 0, to: 2 }).text, "Moved: A.png");
    let names: Vec<_> = session
        .catalog()
        .iter()
        .map(|entry| entry.display_name())
        .collect();
    assert_eq!(names, vec!["B.png", "C.png", "A.png"]);

    let status = session.update(Command::Move { from: 0, to: 7 });
    assert_eq!(status.text, "No file at position 7");
}

#[test]
fn remove_selected_reports_name_and_clears_selection() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![
        write_png(dir.path(), "a.png", 8, 8),
        write_png(dir.path(), "b.png", 8, 8),
    ]));
    session.update(Command::Select(1));

    assert_eq!(session.update(Command::RemoveSelected).text, "Removed: b.png");
    assert_eq!(session.catalog().count(), 1);
    assert!(!session.has_selection());
    assert!(session.preview().is_none());

    let status = session.update(Command::RemoveSelected);
    assert_eq!(status.severity, Severity::Warning);
}

#[test]
fn clear_all_empties_playlist_and_preview() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_png(dir.path(), "a.png", 8, 8)]));
    session.update(Command::Select(0));

    assert_eq!(session.update(Command::ClearAll).text, "All files removed");
    assert!(session.catalog().is_empty());
    assert!(session.preview().is_none());
}

#[test]
fn add_directory_imports_sorted_media() {
    let dir = tempdir().expect("failed to create temp dir");
    let show = dir.path().join("show");
    std::fs::create_dir(&show).expect("failed to create folder");
    write_clip(&show, "c.mp4");
    write_png(&show, "a.png", 8, 8);
    write_clip(&show, "readme.txt");

    let mut session = session();
    let status = session.update(Command::AddDirectory(show));

    assert_eq!(status.text, "2 file(s) added from show");
    let names: Vec<_> = session
        .catalog()
        .iter()
        .map(|entry| entry.display_name())
        .collect();
    assert_eq!(names, vec!["a.png", "c.mp4"]);
}

#[test]
fn add_missing_directory_is_an_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    let status = session.update(Command::AddDirectory(dir.path().join("gone")));
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(status.text, "Cannot read folder: gone");
}

#[test]
fn resize_rescales_the_shown_image() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_png(dir.path(), "slide.png", 4000, 3000)]));
    session.update(Command::Select(0));
    session.update(Command::ShowOnDisplay);

    let status = session.update(Command::SurfaceResized(Dimensions::new(800, 600)));

    assert_eq!(status.text, "Display resized to 800x600");
    let display = session.display().expect("display open");
    assert_eq!(display.surface().bounds(), Dimensions::new(800, 600));
    let shown = display.surface().image().expect("image present");
    assert_eq!(shown.dimensions(), Dimensions::new(800, 600));
}

#[test]
fn diagnostics_record_actions_and_transitions() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session();
    session.update(Command::AddFiles(vec![write_png(dir.path(), "a.png", 8, 8)]));
    session.update(Command::Select(0));
    session.update(Command::ShowOnDisplay);

    let transitions: Vec<_> = session
        .diagnostics()
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::StateTransition { from, to } => Some((from.clone(), to.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        transitions,
        vec![("idle".to_string(), "showing_image".to_string())]
    );

    let export_path = dir.path().join("report.json");
    let result = session.export_diagnostics(&export_path);
    assert_eq!(
        session.export_status(&result).text,
        "Diagnostics written to report.json"
    );
    let content = std::fs::read_to_string(&export_path).expect("report written");
    assert!(!content.contains(&dir.path().display().to_string()));
}

#[test]
fn spanish_messages_are_used_when_requested() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut session = session_with(TestDisplay::new(Dimensions::new(1280, 720)), "es");
    let status = session.update(Command::AddFiles(vec![write_png(dir.path(), "a.png", 8, 8)]));
    assert_eq!(status.text, "1 archivo(s) agregado(s)");
}
