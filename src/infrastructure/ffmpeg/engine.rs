// SPDX-License-Identifier: MPL-2.0
use super::decode::DecodeSession;
use super::init_ffmpeg;
use super::worker::{Worker, WorkerCommand};
use crate::application::port::{NativeHandle, PlaybackEngine};
use crate::domain::error::PlaybackError;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// `FFmpeg`-based playback engine implementing the [`PlaybackEngine`] trait.
///
/// `load` opens the file on the calling thread to check it has a decodable
/// video stream; only then is the previous media discarded. `play` spawns
/// the decode thread (or wakes it when paused), `stop` joins it.
///
/// A binding made while the decode thread runs applies from the next start.
///
/// # Example
///
/// ```ignore
/// use showdisplay::application::port::PlaybackEngine;
/// use showdisplay::infrastructure::ffmpeg::FfmpegPlaybackEngine;
///
/// let mut engine = FfmpegPlaybackEngine::new()?;
/// engine.bind_surface(surface.video_handle())?;
/// engine.load(Path::new("intro.mp4"))?;
/// engine.play()?;
/// ```
pub struct FfmpegPlaybackEngine {
    target: Option<NativeHandle>,
    media: Option<PathBuf>,
    worker: Option<Worker>,
    playing: Arc<AtomicBool>,
    released: bool,
}

impl FfmpegPlaybackEngine {
    /// Creates an engine with nothing loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if `FFmpeg` cannot be initialized.
    pub fn new() -> Result<Self, PlaybackError> {
        init_ffmpeg()?;
        Ok(Self {
            target: None,
            media: None,
            worker: None,
            playing: Arc::new(AtomicBool::new(false)),
            released: false,
        })
    }

    /// Path of the loaded media, if any.
    #[must_use]
    pub fn loaded_media(&self) -> Option<&Path> {
        self.media.as_deref()
    }

    /// Returns true once [`release`](PlaybackEngine::release) was called.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    fn ensure_active(&self) -> Result<(), PlaybackError> {
        if self.released {
            Err(PlaybackError::Released)
        } else {
            Ok(())
        }
    }

    fn shutdown_worker(&mut self) {
        // Dropping the worker stops and joins the decode thread.
        self.worker = None;
        self.playing.store(false, Ordering::SeqCst);
    }
}

impl PlaybackEngine for FfmpegPlaybackEngine {
    fn bind_surface(&mut self, handle: NativeHandle) -> Result<(), PlaybackError> {
        self.ensure_active()?;
        log::debug!("Binding playback to video region {}", handle.id());
        self.target = Some(handle);
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        self.ensure_active()?;
        DecodeSession::open(path)?;

        self.shutdown_worker();
        self.media = Some(path.to_path_buf());
        log::debug!("Loaded video {}", path.display());
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.ensure_active()?;
        let media = self.media.clone().ok_or(PlaybackError::NotLoaded)?;
        let target = self.target.clone().ok_or(PlaybackError::NotBound)?;

        self.playing.store(true, Ordering::SeqCst);
        if let Some(worker) = &self.worker {
            if worker.send(WorkerCommand::Play) {
                return Ok(());
            }
        }

        // No thread yet, or it exited after an error.
        self.worker = None;
        match Worker::spawn(media, target, Arc::clone(&self.playing)) {
            Ok(worker) => {
                self.worker = Some(worker);
                Ok(())
            }
            Err(err) => {
                self.playing.store(false, Ordering::SeqCst);
                Err(err)
            }
        }
    }

    fn pause(&mut self) {
        if let Some(worker) = &self.worker {
            worker.send(WorkerCommand::Pause);
        }
        self.playing.store(false, Ordering::SeqCst);
    }

    fn stop(&mut self) {
        self.shutdown_worker();
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.shutdown_worker();
        self.target = None;
        self.media = None;
        self.released = true;
        log::debug!("FFmpeg playback engine released");
    }
}

impl Drop for FfmpegPlaybackEngine {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for FfmpegPlaybackEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegPlaybackEngine")
            .field("target", &self.target)
            .field("media", &self.media)
            .field("playing", &self.is_playing())
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}
