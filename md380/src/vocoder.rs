//! MD380 vocoder session.

use std::mem;

use crate::engine::{Engine, STATUS_OK};
use crate::error::{Result, VocoderError};
use crate::frame::{self, AMBE_FRAME_SIZE, AmbeFrame, FrameKind, PCM_FRAME_SIZE, PcmFrame};

const UNKNOWN_ERROR: &str = "unknown error";

enum State<E> {
    Open(E),
    Closed,
}

/// A session bound to one vocoder engine instance.
///
/// The engine is released exactly once: by [`Vocoder::close`], or by
/// `Drop` if the session goes away while still open. Dropping an open
/// session works but logs a warning; close sessions explicitly.
///
/// Every frame is length-checked before it reaches the engine. Once
/// closed, all operations except `close` fail with
/// [`VocoderError::SessionClosed`].
pub struct Vocoder<E: Engine> {
    state: State<E>,
}

impl<E: Engine> Vocoder<E> {
    /// Allocates and initializes a new engine instance.
    ///
    /// Fails with [`VocoderError::ResourceExhausted`] if the engine cannot
    /// be allocated, or [`VocoderError::InitializationFailed`] if its init
    /// step fails. In the latter case the instance is released before
    /// returning.
    pub fn create() -> Result<Self> {
        let mut engine = E::create().ok_or(VocoderError::ResourceExhausted)?;

        if engine.init() != STATUS_OK {
            // The diagnostic is owned by the instance, read it before release.
            let msg = diagnostic(&engine);
            engine.destroy();
            tracing::debug!(error = %msg, "md380: vocoder init failed");
            return Err(VocoderError::InitializationFailed(msg));
        }

        tracing::debug!("md380: vocoder created");
        Ok(Self {
            state: State::Open(engine),
        })
    }

    /// Returns true once the session has been closed.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// Encodes one frame of [`PCM_FRAME_SIZE`] samples to an AMBE frame.
    pub fn encode(&mut self, pcm: &[i16]) -> Result<AmbeFrame> {
        let pcm: &PcmFrame = pcm
            .try_into()
            .map_err(|_| VocoderError::frame_size(FrameKind::Pcm, pcm.len()))?;
        let engine = self.engine()?;

        let mut ambe = [0u8; AMBE_FRAME_SIZE];
        if engine.encode(pcm, &mut ambe) != STATUS_OK {
            let msg = diagnostic(&*engine);
            tracing::debug!(error = %msg, "md380: encode failed");
            return Err(VocoderError::EncodeFailed(msg));
        }
        Ok(ambe)
    }

    /// Decodes one AMBE frame of [`AMBE_FRAME_SIZE`] bytes to PCM samples.
    pub fn decode(&mut self, ambe: &[u8]) -> Result<PcmFrame> {
        let ambe: &AmbeFrame = ambe
            .try_into()
            .map_err(|_| VocoderError::frame_size(FrameKind::Ambe, ambe.len()))?;
        let engine = self.engine()?;

        let mut pcm = [0i16; PCM_FRAME_SIZE];
        if engine.decode(ambe, &mut pcm) != STATUS_OK {
            let msg = diagnostic(&*engine);
            tracing::debug!(error = %msg, "md380: decode failed");
            return Err(VocoderError::DecodeFailed(msg));
        }
        Ok(pcm)
    }

    /// Encodes one frame given as PCM16 little-endian bytes.
    pub fn encode_bytes(&mut self, pcm: &[u8]) -> Result<AmbeFrame> {
        if pcm.len() != frame::PCM_FRAME_BYTES {
            return Err(VocoderError::frame_size(FrameKind::PcmBytes, pcm.len()));
        }
        self.encode(&frame::pcm_from_le_bytes(pcm))
    }

    /// Decodes one AMBE frame to PCM16 little-endian bytes.
    pub fn decode_bytes(&mut self, ambe: &[u8]) -> Result<Vec<u8>> {
        let pcm = self.decode(ambe)?;
        Ok(frame::pcm_to_le_bytes(&pcm))
    }

    /// Encodes consecutive PCM frames into concatenated AMBE frames.
    ///
    /// The input must hold a whole number of frames. A trailing partial
    /// frame is rejected before any frame is encoded; the error reports
    /// the length of that partial frame.
    pub fn encode_stream(&mut self, pcm: &[i16]) -> Result<Vec<u8>> {
        let chunks = pcm.chunks_exact(PCM_FRAME_SIZE);
        if !chunks.remainder().is_empty() {
            return Err(VocoderError::frame_size(
                FrameKind::Pcm,
                chunks.remainder().len(),
            ));
        }
        self.engine()?;

        let mut out = Vec::with_capacity(chunks.len() * AMBE_FRAME_SIZE);
        for chunk in chunks {
            out.extend_from_slice(&self.encode(chunk)?);
        }
        Ok(out)
    }

    /// Decodes concatenated AMBE frames into consecutive PCM frames.
    ///
    /// Same whole-frame rule as [`Vocoder::encode_stream`].
    pub fn decode_stream(&mut self, ambe: &[u8]) -> Result<Vec<i16>> {
        let chunks = ambe.chunks_exact(AMBE_FRAME_SIZE);
        if !chunks.remainder().is_empty() {
            return Err(VocoderError::frame_size(
                FrameKind::Ambe,
                chunks.remainder().len(),
            ));
        }
        self.engine()?;

        let mut out = Vec::with_capacity(chunks.len() * PCM_FRAME_SIZE);
        for chunk in chunks {
            out.extend_from_slice(&self.decode(chunk)?);
        }
        Ok(out)
    }

    /// Releases the engine. Calling it again is a no-op.
    pub fn close(&mut self) {
        if let State::Open(engine) = mem::replace(&mut self.state, State::Closed) {
            engine.destroy();
            tracing::debug!("md380: vocoder closed");
        }
    }

    fn engine(&mut self) -> Result<&mut E> {
        match &mut self.state {
            State::Open(engine) => Ok(engine),
            State::Closed => Err(VocoderError::SessionClosed),
        }
    }
}

impl<E: Engine> Drop for Vocoder<E> {
    fn drop(&mut self) {
        if !self.is_closed() {
            tracing::warn!("md380: vocoder dropped without close, releasing engine");
            self.close();
        }
    }
}

/// Copies the engine's current diagnostic, substituting a placeholder
/// when it has none.
fn diagnostic<E: Engine>(engine: &E) -> String {
    match engine.last_error() {
        Some(msg) if !msg.is_empty() => msg,
        _ => UNKNOWN_ERROR.to_string(),
    }
}
