//! Raw FFI bindings for the md380_vocoder C API.
//!
//! These declarations match `md380_vocoder_c.h`.

use std::os::raw::{c_char, c_int, c_void};

/// Opaque vocoder instance handle.
pub type Md380VocoderHandle = *mut c_void;

unsafe extern "C" {
    /// Returns NULL on allocation failure.
    pub fn md380_vocoder_create() -> Md380VocoderHandle;

    pub fn md380_vocoder_destroy(handle: Md380VocoderHandle);

    /// Returns 0 on success.
    pub fn md380_vocoder_init(handle: Md380VocoderHandle) -> c_int;

    /// `pcm_in` holds 160 samples, `ambe_out` receives 9 bytes.
    pub fn md380_vocoder_encode(
        handle: Md380VocoderHandle,
        pcm_in: *const i16,
        ambe_out: *mut u8,
    ) -> c_int;

    /// `ambe_in` holds 9 bytes, `pcm_out` receives 160 samples.
    pub fn md380_vocoder_decode(
        handle: Md380VocoderHandle,
        ambe_in: *const u8,
        pcm_out: *mut i16,
    ) -> c_int;

    /// Returns NULL when there is no error.
    pub fn md380_vocoder_get_error(handle: Md380VocoderHandle) -> *const c_char;
}
