//! [`Engine`] implementation backed by libmd380_vocoder.

use std::ffi::CStr;
use std::ptr::NonNull;

use crate::engine::{Engine, Status};
use crate::ffi;
use crate::frame::{AmbeFrame, PcmFrame};

/// A live libmd380_vocoder instance.
///
/// The handle is released when this value is dropped.
pub struct NativeEngine {
    handle: NonNull<std::os::raw::c_void>,
}

// Safety: The handle is owned exclusively and never aliased; moving it to
// another thread is fine as long as calls stay serialized.
unsafe impl Send for NativeEngine {}

impl Engine for NativeEngine {
    fn create() -> Option<Self> {
        let handle = unsafe { ffi::md380_vocoder_create() };
        NonNull::new(handle).map(|handle| Self { handle })
    }

    fn init(&mut self) -> Status {
        unsafe { ffi::md380_vocoder_init(self.handle.as_ptr()) }
    }

    fn encode(&mut self, pcm: &PcmFrame, ambe: &mut AmbeFrame) -> Status {
        unsafe {
            ffi::md380_vocoder_encode(self.handle.as_ptr(), pcm.as_ptr(), ambe.as_mut_ptr())
        }
    }

    fn decode(&mut self, ambe: &AmbeFrame, pcm: &mut PcmFrame) -> Status {
        unsafe {
            ffi::md380_vocoder_decode(self.handle.as_ptr(), ambe.as_ptr(), pcm.as_mut_ptr())
        }
    }

    fn last_error(&self) -> Option<String> {
        unsafe {
            let c_str = ffi::md380_vocoder_get_error(self.handle.as_ptr());
            if c_str.is_null() {
                return None;
            }
            Some(CStr::from_ptr(c_str).to_string_lossy().into_owned())
        }
    }
}

impl Drop for NativeEngine {
    fn drop(&mut self) {
        unsafe { ffi::md380_vocoder_destroy(self.handle.as_ptr()) };
    }
}

impl crate::Vocoder<NativeEngine> {
    /// Creates a session on a new libmd380_vocoder instance.
    pub fn new() -> crate::Result<Self> {
        Self::create()
    }
}
