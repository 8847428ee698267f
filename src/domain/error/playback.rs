// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors reported by a video playback engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The engine was released and can no longer be used.
    #[error("Playback engine has been released")]
    Released,

    /// `play` was requested before any media was loaded.
    #[error("No media loaded")]
    NotLoaded,

    /// `play` was requested before the engine was bound to a surface.
    #[error("Playback engine is not bound to a surface")]
    NotBound,

    /// Video codec is not supported by the engine.
    #[error("Unsupported video codec: {0}")]
    UnsupportedCodec(String),

    /// File appears corrupted or has invalid data.
    #[error("Video file is corrupted")]
    CorruptedFile,

    /// File exists but contains no video stream.
    #[error("No video stream found")]
    NoVideoStream,

    /// Decoding failed while starting or running playback.
    #[error("Decoding failed: {0}")]
    DecodingFailed(String),

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic error with raw message.
    #[error("{0}")]
    Other(String),
}

impl PlaybackError {
    /// Categorizes a raw engine error message into a specific variant.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Codec/decoder errors first: they may also contain "not found".
        if msg_lower.contains("codec") || msg_lower.contains("decoder") {
            if let Some(codec) = Self::extract_codec_name(&msg_lower) {
                return Self::UnsupportedCodec(codec);
            } else if msg_lower.contains("not found") || msg_lower.contains("unsupported") {
                return Self::DecodingFailed(msg.to_string());
            }
        }

        if msg_lower.contains("no such file")
            || (msg_lower.contains("not found") && !msg_lower.contains("decoder"))
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return Self::Io(msg.to_string());
        }

        if msg_lower.contains("no video stream")
            || msg_lower.contains("no video track")
            || msg_lower.contains("invalid data found")
        {
            return Self::NoVideoStream;
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
        {
            return Self::CorruptedFile;
        }

        if msg_lower.contains("packet")
            || msg_lower.contains("scaling")
            || msg_lower.contains("decode")
            || msg_lower.contains("unsupported")
        {
            return Self::DecodingFailed(msg.to_string());
        }

        Self::Other(msg.to_string())
    }

    /// Tries to extract a codec name from an error message.
    fn extract_codec_name(msg: &str) -> Option<String> {
        const CODECS: [&str; 9] = [
            "h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mpeg2", "wmv",
        ];
        CODECS
            .iter()
            .find(|codec| msg.contains(*codec))
            .map(|codec| codec.to_uppercase())
    }
}
