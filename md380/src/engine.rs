use crate::frame::{AmbeFrame, PcmFrame};

/// Status code returned by engine calls. Zero is success.
pub type Status = i32;

/// The success [`Status`].
pub const STATUS_OK: Status = 0;

/// One instance of the vocoder engine.
///
/// This mirrors the engine's C API on an owned value: `create` allocates,
/// `init` must run once before any other call, and `destroy` consumes
/// the instance so it cannot be released twice. Frame buffers are
/// fixed-size arrays, so shape checks happen before reaching here.
///
/// The engine is not assumed safe for concurrent calls on one instance.
/// It may keep codec state between frames.
pub trait Engine: Sized {
    /// Allocates a new engine instance. Returns `None` when allocation fails.
    fn create() -> Option<Self>;

    /// Initializes the instance. A failed instance must still be destroyed.
    fn init(&mut self) -> Status;

    /// Encodes one PCM frame into `ambe`.
    fn encode(&mut self, pcm: &PcmFrame, ambe: &mut AmbeFrame) -> Status;

    /// Decodes one AMBE frame into `pcm`.
    fn decode(&mut self, ambe: &AmbeFrame, pcm: &mut PcmFrame) -> Status;

    /// Returns a copy of the diagnostic for the last failed call, if any.
    ///
    /// The engine owns the underlying text and may overwrite it on the
    /// next call, so implementations copy it out here.
    fn last_error(&self) -> Option<String>;

    /// Releases the instance and everything it owns.
    fn destroy(self) {
        drop(self);
    }
}
