//! Handle types for opaque references to CSFML objects.
//!
//! Each handle type is a newtype wrapper around a C pointer to provide type
//! safety. The null pointer is the empty sentinel.

use std::os::raw::c_void;

use crate::handle::RawHandle;

/// Macro to define a handle type.
macro_rules! define_handle {
    ($name:ident) => {
        /// Opaque handle to a CSFML object.
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            ptr: *mut c_void,
        }

        impl $name {
            /// Create an invalid (null) handle.
            #[inline]
            pub const fn invalid() -> Self {
                Self {
                    ptr: std::ptr::null_mut(),
                }
            }

            /// Check if this handle is valid (non-null).
            #[inline]
            pub fn is_valid(&self) -> bool {
                !self.ptr.is_null()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl RawHandle for $name {
            #[inline]
            fn invalid() -> Self {
                $name::invalid()
            }

            #[inline]
            fn is_valid(&self) -> bool {
                $name::is_valid(self)
            }

            #[inline]
            fn addr(&self) -> usize {
                self.ptr as usize
            }
        }
    };
}

define_handle!(SfClock);
define_handle!(SfView);
define_handle!(SfTexture);
define_handle!(SfRenderTexture);
define_handle!(SfRenderWindow);
define_handle!(SfSoundBuffer);
define_handle!(SfSound);
define_handle!(SfSoundRecorder);
define_handle!(SfSoundBufferRecorder);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert!(!SfClock::default().is_valid());
        assert_eq!(SfView::default(), SfView::invalid());
        assert_eq!(RawHandle::addr(&SfSound::invalid()), 0);
    }
}
