//! Safe Rust session wrapper for the MD380 AMBE vocoder.
//!
//! The vocoder turns 20ms of 8kHz PCM16 audio (160 samples) into one
//! 9-byte AMBE frame and back. The codec itself is an opaque native
//! library reached through a small C API; this crate owns the lifecycle
//! around it:
//!
//! - [`Vocoder`]: one session bound to exactly one engine instance
//! - [`Engine`]: the create/init/encode/decode/destroy seam to the engine
//! - [`frame`]: fixed frame shapes and PCM16 byte helpers
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(feature = "native")]
//! # fn main() -> giztoy_md380::Result<()> {
//! use giztoy_md380::{Vocoder, PCM_FRAME_SIZE};
//!
//! let mut vocoder = Vocoder::new()?;
//!
//! let pcm = [0i16; PCM_FRAME_SIZE];
//! let ambe = vocoder.encode(&pcm)?;
//! let decoded = vocoder.decode(&ambe)?;
//! assert_eq!(decoded.len(), PCM_FRAME_SIZE);
//!
//! vocoder.close();
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "native"))]
//! # fn main() {}
//! ```
//!
//! # Linking
//!
//! The native binding is behind the `native` feature. It links
//! `libmd380_vocoder`, searching `MD380_VOCODER_LIB_DIR` when set.
//!
//! # Thread Safety
//!
//! A [`Vocoder`] is `Send` but not `Sync`: it may move between threads,
//! but calls on one session must be serialized. The engine keeps codec
//! state across frames, so call order on a session matters.

mod engine;
mod error;
pub mod frame;
mod vocoder;

#[cfg(feature = "native")]
mod ffi;
#[cfg(feature = "native")]
mod native;

#[cfg(test)]
mod mock;

pub use engine::{Engine, STATUS_OK, Status};
pub use error::{Result, VocoderError};
pub use frame::{AMBE_FRAME_SIZE, AmbeFrame, FrameKind, PCM_FRAME_SIZE, PcmFrame};
pub use vocoder::Vocoder;

#[cfg(feature = "native")]
pub use native::NativeEngine;
