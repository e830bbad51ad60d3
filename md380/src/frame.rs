//! Frame shapes exchanged with the vocoder.
//!
//! One frame covers 20ms of 8kHz mono audio: 160 PCM16 samples on the
//! uncompressed side and 9 AMBE bytes on the compressed side.

use std::fmt;
use std::time::Duration;

/// Samples per PCM frame.
pub const PCM_FRAME_SIZE: usize = 160;

/// Bytes per PCM frame when carried as PCM16 little-endian.
pub const PCM_FRAME_BYTES: usize = PCM_FRAME_SIZE * 2;

/// Bytes per AMBE frame.
pub const AMBE_FRAME_SIZE: usize = 9;

/// Sample rate of the PCM side, in Hz.
pub const SAMPLE_RATE: u32 = 8000;

/// Audio duration covered by one frame.
pub const FRAME_DURATION: Duration = Duration::from_millis(20);

/// One frame of PCM16 samples.
pub type PcmFrame = [i16; PCM_FRAME_SIZE];

/// One compressed AMBE frame.
pub type AmbeFrame = [u8; AMBE_FRAME_SIZE];

/// Identifies which buffer shape a caller got wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// PCM16 samples.
    Pcm,
    /// PCM16 little-endian bytes.
    PcmBytes,
    /// AMBE bytes.
    Ambe,
}

impl FrameKind {
    /// Returns the exact element count a single frame of this kind has.
    pub fn expected_len(&self) -> usize {
        match self {
            Self::Pcm => PCM_FRAME_SIZE,
            Self::PcmBytes => PCM_FRAME_BYTES,
            Self::Ambe => AMBE_FRAME_SIZE,
        }
    }

    /// Returns the unit the length is counted in.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Pcm => "samples",
            Self::PcmBytes | Self::Ambe => "bytes",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pcm => write!(f, "PCM frame"),
            Self::PcmBytes => write!(f, "PCM byte frame"),
            Self::Ambe => write!(f, "AMBE frame"),
        }
    }
}

/// Converts PCM16 samples to little-endian bytes.
pub fn pcm_to_le_bytes(samples: &[i16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}

/// Converts little-endian bytes to PCM16 samples.
/// A trailing odd byte is ignored.
pub fn pcm_from_le_bytes(data: &[u8]) -> Vec<i16> {
    data.chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}

/// Returns how many whole frames fit in `samples` PCM samples.
pub fn frames_in(samples: usize) -> usize {
    samples / PCM_FRAME_SIZE
}

/// Returns the audio duration of `frames` frames, saturating at
/// `u64::MAX` milliseconds.
pub fn duration_of_frames(frames: usize) -> Duration {
    let frame_ms = FRAME_DURATION.as_millis() as u64;
    Duration::from_millis((frames as u64).saturating_mul(frame_ms))
}
