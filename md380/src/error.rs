use thiserror::Error;

use crate::frame::FrameKind;

/// Errors returned by vocoder operations.
#[derive(Debug, Error)]
pub enum VocoderError {
    #[error("md380: failed to create vocoder: out of memory")]
    ResourceExhausted,

    #[error("md380: failed to initialize vocoder: {0}")]
    InitializationFailed(String),

    #[error("md380: {frame} must be {expected} {}, got {got}", .frame.unit())]
    InvalidFrameSize {
        frame: FrameKind,
        expected: usize,
        got: usize,
    },

    #[error("md380: vocoder is closed")]
    SessionClosed,

    #[error("md380: encoding failed: {0}")]
    EncodeFailed(String),

    #[error("md380: decoding failed: {0}")]
    DecodeFailed(String),
}

impl VocoderError {
    /// Builds an [`VocoderError::InvalidFrameSize`] for a buffer of `got`
    /// elements where one `frame` was expected.
    pub(crate) fn frame_size(frame: FrameKind, got: usize) -> Self {
        Self::InvalidFrameSize {
            frame,
            expected: frame.expected_len(),
            got,
        }
    }
}

/// Result alias for vocoder operations.
pub type Result<T> = std::result::Result<T, VocoderError>;
