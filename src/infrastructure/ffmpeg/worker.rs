// SPDX-License-Identifier: MPL-2.0
//! Decode thread driving one loaded file.

use super::decode::{DecodeSession, VideoFrame};
use crate::application::port::NativeHandle;
use crate::domain::error::PlaybackError;
use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Commands sent from the engine to its decode thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum WorkerCommand {
    /// Start, resume, or restart after the end of the stream.
    Play,
    /// Hold the current frame.
    Pause,
    /// Shut the thread down.
    Stop,
}

/// Handle to a running decode thread. Dropping it stops and joins the
/// thread.
pub(super) struct Worker {
    commands: Sender<WorkerCommand>,
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    /// Spawns the decode thread for `path` and waits until the file is open.
    ///
    /// The thread starts in the playing state.
    pub fn spawn(
        path: PathBuf,
        target: NativeHandle,
        playing: Arc<AtomicBool>,
    ) -> Result<Self, PlaybackError> {
        let (commands, command_rx) = unbounded();
        let (ready_tx, ready_rx) = bounded(1);

        let thread = std::thread::Builder::new()
            .name("showdisplay-video".to_string())
            .spawn(move || run(&path, &target, &command_rx, &ready_tx, &playing))
            .map_err(|e| PlaybackError::Io(format!("Failed to spawn decode thread: {e}")))?;

        let mut worker = Self {
            commands,
            thread: Some(thread),
        };

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(worker),
            Ok(Err(err)) => {
                worker.join();
                Err(err)
            }
            Err(_) => {
                worker.join();
                Err(PlaybackError::DecodingFailed(
                    "decode thread exited during startup".to_string(),
                ))
            }
        }
    }

    /// Sends `command`; false if the thread has already exited.
    pub fn send(&self, command: WorkerCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Video decode thread panicked");
            }
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        let _ = self.commands.send(WorkerCommand::Stop);
        self.join();
    }
}

/// Maps presentation timestamps to wall-clock deadlines.
#[derive(Debug, Default)]
struct PlaybackClock {
    origin: Option<(Instant, f64)>,
}

impl PlaybackClock {
    /// Forgets the reference point; the next frame is shown immediately.
    fn reset(&mut self) {
        self.origin = None;
    }

    /// Time left until the frame with `pts_secs` is due.
    fn delay_for(&mut self, pts_secs: f64) -> Duration {
        let (start, first_pts) = *self.origin.get_or_insert_with(|| (Instant::now(), pts_secs));
        let offset = (pts_secs - first_pts).max(0.0);
        let due = start + Duration::from_secs_f64(offset);
        due.saturating_duration_since(Instant::now())
    }
}

struct WorkerState<'a> {
    playing: &'a AtomicBool,
    paused: bool,
    at_end: bool,
    clock: PlaybackClock,
    pending: Option<VideoFrame>,
}

impl WorkerState<'_> {
    fn is_waiting(&self) -> bool {
        self.paused || self.at_end
    }

    /// Applies `command`; false means the thread must exit.
    fn apply(&mut self, command: WorkerCommand, session: &mut DecodeSession) -> bool {
        match command {
            WorkerCommand::Stop => return false,
            WorkerCommand::Pause => {
                self.paused = true;
                self.playing.store(false, Ordering::SeqCst);
            }
            WorkerCommand::Play => {
                if self.at_end {
                    if let Err(err) = session.rewind() {
                        log::error!("Cannot restart video: {err}");
                        return true;
                    }
                    self.at_end = false;
                    self.pending = None;
                }
                self.paused = false;
                self.clock.reset();
                self.playing.store(true, Ordering::SeqCst);
            }
        }
        true
    }

    fn finish(&mut self) {
        self.at_end = true;
        self.playing.store(false, Ordering::SeqCst);
    }
}

fn run(
    path: &Path,
    target: &NativeHandle,
    commands: &Receiver<WorkerCommand>,
    ready: &Sender<Result<(), PlaybackError>>,
    playing: &AtomicBool,
) {
    let mut session = match DecodeSession::open(path) {
        Ok(session) => {
            let _ = ready.send(Ok(()));
            session
        }
        Err(err) => {
            playing.store(false, Ordering::SeqCst);
            let _ = ready.send(Err(err));
            return;
        }
    };

    let mut state = WorkerState {
        playing,
        paused: false,
        at_end: false,
        clock: PlaybackClock::default(),
        pending: None,
    };

    loop {
        let command = if state.is_waiting() {
            match commands.recv() {
                Ok(command) => Some(command),
                Err(_) => break,
            }
        } else {
            match commands.try_recv() {
                Ok(command) => Some(command),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => break,
            }
        };
        if let Some(command) = command {
            if !state.apply(command, &mut session) {
                break;
            }
        }
        if state.is_waiting() {
            continue;
        }

        let frame = match state.pending.take() {
            Some(frame) => frame,
            None => match session.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    log::debug!("Video reached end of stream");
                    state.finish();
                    continue;
                }
                Err(err) => {
                    log::error!("Video decoding stopped: {err}");
                    state.finish();
                    continue;
                }
            },
        };

        let delay = state.clock.delay_for(frame.pts_secs);
        if !delay.is_zero() {
            match commands.recv_timeout(delay) {
                Ok(command) => {
                    state.pending = Some(frame);
                    if !state.apply(command, &mut session) {
                        break;
                    }
                    continue;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        target.present_frame(frame.image);
    }

    playing.store(false, Ordering::SeqCst);
}
