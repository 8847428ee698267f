// SPDX-License-Identifier: MPL-2.0
//! Presentation surface driven with real image decoding on a headless
//! surface and a recording playback engine.

mod common;

use common::{write_clip, write_png, EngineCall, RecordingEngine, SharedEngineLog};
use showdisplay::application::port::RenderSurface;
use showdisplay::application::presentation::{PresentationSurface, SurfaceError};
use showdisplay::domain::catalog::MediaCatalogEntry;
use showdisplay::domain::error::DecodeError;
use showdisplay::domain::media::Dimensions;
use showdisplay::domain::presentation::PresentationState;
use showdisplay::infrastructure::{HeadlessSurface, ImageRsDecoder};
use std::fs;
use tempfile::tempdir;

type Surface = PresentationSurface<HeadlessSurface, ImageRsDecoder, RecordingEngine>;

fn surface(bounds: Dimensions) -> (Surface, SharedEngineLog) {
    let log = SharedEngineLog::default();
    let surface = PresentationSurface::new(
        HeadlessSurface::new(7, bounds),
        ImageRsDecoder::new(),
        RecordingEngine::new(log.clone()),
    );
    (surface, log)
}

#[test]
fn image_is_fitted_to_the_surface() {
    let dir = tempdir().expect("failed to create temp dir");
    let entry = MediaCatalogEntry::new(write_png(dir.path(), "tall.png", 1000, 2000));
    let (mut surface, _log) = surface(Dimensions::new(1920, 1080));

    surface.present(&entry).expect("image should present");

    assert_eq!(surface.state(), PresentationState::ShowingImage);
    let shown = surface.surface().image().expect("image present");
    assert_eq!(shown.dimensions(), Dimensions::new(540, 1080));
}

#[test]
fn corrupt_image_leaves_previous_content() {
    let dir = tempdir().expect("failed to create temp dir");
    let good = MediaCatalogEntry::new(write_png(dir.path(), "good.png", 16, 16));
    let bad_path = dir.path().join("bad.png");
    fs::write(&bad_path, b"definitely not a png").expect("failed to write file");
    let bad = MediaCatalogEntry::new(bad_path);
    let (mut surface, _log) = surface(Dimensions::new(800, 600));
    surface.present(&good).expect("image should present");

    let result = surface.present(&bad);

    assert!(matches!(result, Err(SurfaceError::Decode(_))));
    assert_eq!(surface.state(), PresentationState::ShowingImage);
    assert_eq!(surface.active_entry(), Some(&good));
    let shown = surface.surface().image().expect("old image kept");
    assert_eq!(shown.dimensions(), Dimensions::new(16, 16));
}

#[test]
fn deleted_image_reports_not_found() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = write_png(dir.path(), "gone.png", 4, 4);
    let entry = MediaCatalogEntry::new(&path);
    fs::remove_file(&path).expect("failed to remove file");
    let (mut surface, _log) = surface(Dimensions::new(800, 600));

    assert_eq!(
        surface.present(&entry),
        Err(SurfaceError::Decode(DecodeError::NotFound))
    );
    assert_eq!(surface.state(), PresentationState::Idle);
}

#[test]
fn video_replaces_image_and_back() {
    let dir = tempdir().expect("failed to create temp dir");
    let image = MediaCatalogEntry::new(write_png(dir.path(), "a.png", 32, 32));
    let clip = MediaCatalogEntry::new(write_clip(dir.path(), "b.mov"));
    let (mut surface, log) = surface(Dimensions::new(800, 600));

    surface.present(&image).expect("image should present");
    surface.present(&clip).expect("video should present");
    assert!(!surface.surface().is_image_visible());
    assert!(surface.surface().is_video_visible());
    assert!(log.lock().unwrap().playing);

    surface.present(&image).expect("image should present");
    assert!(surface.surface().is_image_visible());
    assert!(!surface.surface().is_video_visible());
    assert!(!log.lock().unwrap().playing);
}

#[test]
fn stall_on_start_restores_the_image() {
    let dir = tempdir().expect("failed to create temp dir");
    let image = MediaCatalogEntry::new(write_png(dir.path(), "a.png", 32, 32));
    let clip = MediaCatalogEntry::new(write_clip(dir.path(), "stall.mp4"));
    let (mut surface, _log) = surface(Dimensions::new(800, 600));
    surface.present(&image).expect("image should present");

    let result = surface.present(&clip);

    assert!(matches!(result, Err(SurfaceError::Playback(_))));
    assert_eq!(surface.state(), PresentationState::ShowingImage);
    assert_eq!(surface.active_entry(), Some(&image));
    assert!(surface.surface().is_image_visible());
    assert!(!surface.surface().is_video_visible());
}

#[test]
fn stall_on_start_keeps_the_running_video() {
    let dir = tempdir().expect("failed to create temp dir");
    let intro = MediaCatalogEntry::new(write_clip(dir.path(), "intro.mp4"));
    let stall = MediaCatalogEntry::new(write_clip(dir.path(), "stall.mp4"));
    let (mut surface, log) = surface(Dimensions::new(800, 600));
    surface.present(&intro).expect("video should present");

    assert!(surface.present(&stall).is_err());

    assert_eq!(surface.state(), PresentationState::ShowingVideo);
    assert_eq!(surface.active_entry(), Some(&intro));
    assert!(surface.surface().is_video_visible());
    let log = log.lock().unwrap();
    assert!(log.playing);
    assert_eq!(
        log.calls.last(),
        Some(&EngineCall::Play),
        "intro should be playing again"
    );
}

#[test]
fn stall_on_start_goes_idle_when_running_video_was_deleted() {
    let dir = tempdir().expect("failed to create temp dir");
    let intro = MediaCatalogEntry::new(write_clip(dir.path(), "intro.mp4"));
    let stall = MediaCatalogEntry::new(write_clip(dir.path(), "stall.mp4"));
    let (mut surface, log) = surface(Dimensions::new(800, 600));
    surface.present(&intro).expect("video should present");
    fs::remove_file(intro.path()).expect("failed to remove clip");

    assert!(surface.present(&stall).is_err());

    assert_eq!(surface.state(), PresentationState::Idle);
    assert!(surface.active_entry().is_none());
    assert!(!surface.surface().is_video_visible());
    assert!(!log.lock().unwrap().playing);
}

#[test]
fn teardown_releases_engine_once() {
    let dir = tempdir().expect("failed to create temp dir");
    let clip = MediaCatalogEntry::new(write_clip(dir.path(), "a.webm"));
    let (mut surface, log) = surface(Dimensions::new(800, 600));
    surface.present(&clip).expect("video should present");

    surface.teardown();

    let log = log.lock().unwrap();
    assert!(log.released);
    let releases = log
        .calls
        .iter()
        .filter(|call| **call == EngineCall::Release)
        .count();
    assert_eq!(releases, 1);
}

#[test]
fn dropping_the_surface_releases_engine() {
    let (surface, log) = surface(Dimensions::new(800, 600));
    drop(surface);
    assert!(log.lock().unwrap().released);
}
