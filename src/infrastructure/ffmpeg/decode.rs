// SPDX-License-Identifier: MPL-2.0
//! Frame-by-frame decoding of the best video stream of a file.

use super::init_ffmpeg;
use crate::domain::error::PlaybackError;
use crate::domain::media::RawImage;
use std::path::Path;
use std::sync::Arc;

/// One decoded frame with its presentation timestamp.
pub(super) struct VideoFrame {
    pub image: RawImage,
    pub pts_secs: f64,
}

/// Open input, decoder and RGBA scaler for one file.
///
/// `FFmpeg` contexts are not `Send`, so a session lives on the thread that
/// opened it.
pub(super) struct DecodeSession {
    input: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    stream_index: usize,
    time_base_secs: f64,
    width: u32,
    height: u32,
    eof_sent: bool,
}

impl DecodeSession {
    /// Opens `path` and prepares decoding of its best video stream.
    pub fn open(path: &Path) -> Result<Self, PlaybackError> {
        init_ffmpeg()?;

        if !path.exists() {
            return Err(PlaybackError::Io(format!(
                "No such file or directory: {}",
                path.display()
            )));
        }

        let input = ffmpeg_next::format::input(&path)
            .map_err(|e| PlaybackError::from_message(&format!("Failed to open video: {e}")))?;

        let (stream_index, time_base_secs, parameters) = {
            let stream = input
                .streams()
                .best(ffmpeg_next::media::Type::Video)
                .ok_or(PlaybackError::NoVideoStream)?;
            let time_base = stream.time_base();
            let time_base_secs = if time_base.denominator() == 0 {
                0.0
            } else {
                f64::from(time_base.numerator()) / f64::from(time_base.denominator())
            };
            (stream.index(), time_base_secs, stream.parameters())
        };

        let decoder = ffmpeg_next::codec::context::Context::from_parameters(parameters)
            .map_err(|e| {
                PlaybackError::from_message(&format!("Failed to create codec context: {e}"))
            })?
            .decoder()
            .video()
            .map_err(|e| {
                PlaybackError::from_message(&format!("Failed to create video decoder: {e}"))
            })?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(PlaybackError::CorruptedFile);
        }

        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| PlaybackError::DecodingFailed(format!("Failed to create scaler: {e}")))?;

        Ok(Self {
            input,
            decoder,
            scaler,
            stream_index,
            time_base_secs,
            width,
            height,
            eof_sent: false,
        })
    }

    /// Decodes the next frame, or `None` once the stream is drained.
    pub fn next_frame(&mut self) -> Result<Option<VideoFrame>, PlaybackError> {
        let mut decoded = ffmpeg_next::frame::Video::empty();
        loop {
            if self.decoder.receive_frame(&mut decoded).is_ok() {
                return self.convert(&decoded).map(Some);
            }
            if self.eof_sent {
                return Ok(None);
            }

            let stream_index = self.stream_index;
            let packet = self
                .input
                .packets()
                .find(|(stream, _)| stream.index() == stream_index)
                .map(|(_, packet)| packet);

            match packet {
                Some(packet) => {
                    // A damaged packet only costs its frame.
                    if let Err(e) = self.decoder.send_packet(&packet) {
                        log::debug!("Skipping video packet: {e}");
                    }
                }
                None => {
                    self.decoder.send_eof().map_err(|e| {
                        PlaybackError::DecodingFailed(format!("Failed to flush decoder: {e}"))
                    })?;
                    self.eof_sent = true;
                }
            }
        }
    }

    /// Seeks back to the first frame.
    pub fn rewind(&mut self) -> Result<(), PlaybackError> {
        self.input
            .seek(0, ..0)
            .map_err(|e| PlaybackError::DecodingFailed(format!("Seek failed: {e}")))?;
        self.decoder.flush();
        self.eof_sent = false;
        Ok(())
    }

    fn convert(&mut self, decoded: &ffmpeg_next::frame::Video) -> Result<VideoFrame, PlaybackError> {
        let mut rgba = ffmpeg_next::frame::Video::empty();
        self.scaler
            .run(decoded, &mut rgba)
            .map_err(|e| PlaybackError::DecodingFailed(format!("Scaling failed: {e}")))?;

        // Timestamps fit comfortably in f64 for any realistic clip length.
        #[allow(clippy::cast_precision_loss)]
        let pts_secs = decoded
            .timestamp()
            .map_or(0.0, |pts| pts as f64 * self.time_base_secs);

        let pixels = extract_rgba_data(&rgba, self.width, self.height).ok_or_else(|| {
            PlaybackError::DecodingFailed("Scaled frame is smaller than expected".to_string())
        })?;
        Ok(VideoFrame {
            image: RawImage::new(self.width, self.height, Arc::new(pixels)),
            pts_secs,
        })
    }
}

/// Copies the RGBA plane row by row, dropping the stride padding.
///
/// Returns `None` if the plane holds fewer than `height` full rows.
fn extract_rgba_data(
    frame: &ffmpeg_next::frame::Video,
    width: u32,
    height: u32,
) -> Option<Vec<u8>> {
    let data = frame.data(0);
    let stride = frame.stride(0);
    let row_len = width as usize * 4;

    let mut rgba_bytes = Vec::with_capacity(row_len * height as usize);
    let mut rows = data.chunks(stride.max(row_len));
    for _ in 0..height {
        rgba_bytes.extend_from_slice(rows.next()?.get(..row_len)?);
    }
    Some(rgba_bytes)
}
