// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for the integration tests.
//!
//! The display provider hands out real headless surfaces and the real image
//! decoder, paired with a recording playback engine so that video flows can
//! run without `FFmpeg` or sample clips.

#![allow(dead_code)]

use showdisplay::app::config::Config;
use showdisplay::app::ControlSession;
use showdisplay::application::port::{
    DisplayComponents, DisplayError, DisplayProvider, NativeHandle, PlaybackEngine,
};
use showdisplay::domain::error::PlaybackError;
use showdisplay::domain::media::Dimensions;
use showdisplay::i18n::fluent::I18n;
use showdisplay::infrastructure::{HeadlessSurface, ImageRsDecoder};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Calls observed by a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Bind(u64),
    Load(PathBuf),
    Play,
    Pause,
    Stop,
    Release,
}

/// State shared between a [`RecordingEngine`] and the test.
#[derive(Debug, Default)]
pub struct EngineLog {
    pub calls: Vec<EngineCall>,
    pub playing: bool,
    pub released: bool,
}

pub type SharedEngineLog = Arc<Mutex<EngineLog>>;

/// Playback engine that records its calls.
///
/// Loading fails for missing files and for names containing `broken`;
/// playing fails for names containing `stall`.
#[derive(Debug)]
pub struct RecordingEngine {
    log: SharedEngineLog,
    loaded: Option<PathBuf>,
}

impl RecordingEngine {
    pub fn new(log: SharedEngineLog) -> Self {
        Self { log, loaded: None }
    }

    fn record(&self, call: EngineCall) {
        self.log.lock().unwrap().calls.push(call);
    }
}

impl PlaybackEngine for RecordingEngine {
    fn bind_surface(&mut self, handle: NativeHandle) -> Result<(), PlaybackError> {
        self.record(EngineCall::Bind(handle.id()));
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        self.record(EngineCall::Load(path.to_path_buf()));
        if !path.exists() {
            return Err(PlaybackError::Io(format!(
                "No such file or directory: {}",
                path.display()
            )));
        }
        if path.to_string_lossy().contains("broken") {
            return Err(PlaybackError::NoVideoStream);
        }
        self.log.lock().unwrap().playing = false;
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.record(EngineCall::Play);
        let Some(loaded) = &self.loaded else {
            return Err(PlaybackError::NotLoaded);
        };
        if loaded.to_string_lossy().contains("stall") {
            return Err(PlaybackError::DecodingFailed("stalled".into()));
        }
        self.log.lock().unwrap().playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.record(EngineCall::Pause);
        self.log.lock().unwrap().playing = false;
    }

    fn stop(&mut self) {
        self.record(EngineCall::Stop);
        self.log.lock().unwrap().playing = false;
    }

    fn is_playing(&self) -> bool {
        self.log.lock().unwrap().playing
    }

    fn release(&mut self) {
        self.record(EngineCall::Release);
        let mut log = self.log.lock().unwrap();
        log.playing = false;
        log.released = true;
    }
}

/// Display provider backed by headless surfaces and [`RecordingEngine`]s.
#[derive(Debug)]
pub struct TestDisplay {
    pub bounds: Dimensions,
    pub opened: u64,
    pub available: bool,
    /// Log of the engine created by the most recent `open_display`.
    pub engine_log: SharedEngineLog,
}

impl TestDisplay {
    pub fn new(bounds: Dimensions) -> Self {
        Self {
            bounds,
            opened: 0,
            available: true,
            engine_log: SharedEngineLog::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(Dimensions::new(1920, 1080))
        }
    }
}

impl DisplayProvider for TestDisplay {
    type Surface = HeadlessSurface;
    type Decoder = ImageRsDecoder;
    type Engine = RecordingEngine;

    fn open_display(
        &mut self,
    ) -> Result<DisplayComponents<HeadlessSurface, ImageRsDecoder, RecordingEngine>, DisplayError>
    {
        if !self.available {
            return Err(DisplayError::Unavailable);
        }
        self.opened += 1;
        self.engine_log = SharedEngineLog::default();
        Ok(DisplayComponents {
            surface: HeadlessSurface::new(self.opened, self.bounds),
            decoder: ImageRsDecoder::new(),
            engine: RecordingEngine::new(Arc::clone(&self.engine_log)),
        })
    }
}

/// Session on a 1920x1080 test display with English messages.
pub fn session() -> ControlSession<TestDisplay> {
    session_with(TestDisplay::new(Dimensions::new(1920, 1080)), "en-US")
}

pub fn session_with(provider: TestDisplay, lang: &str) -> ControlSession<TestDisplay> {
    let config = Config::default();
    let i18n = I18n::new(Some(lang.to_string()), &config);
    ControlSession::new(provider, Box::new(ImageRsDecoder::new()), &config, i18n)
}

/// Writes a solid-color PNG of the given size.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([40, 90, 160, 255]))
        .save(&path)
        .expect("failed to write png");
    path
}

/// Writes a placeholder file with a video extension.
pub fn write_clip(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"not really a video").expect("failed to write clip");
    path
}
