//! Error conversion utilities for FFI.

use crate::error::{Error, Result};
use crate::handle::RawHandle;

/// Turn the result of a native create or copy call into a `Result`.
///
/// CSFML reports creation failure by returning a null pointer.
pub fn check_created<H: RawHandle>(handle: H, kind: &'static str) -> Result<H> {
    if handle.is_valid() {
        Ok(handle)
    } else {
        log::debug!("native create returned null for {}", kind);
        Err(Error::CreationFailed(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::SfClock;

    #[test]
    fn test_null_is_creation_failure() {
        let err = check_created(SfClock::invalid(), "clock").unwrap_err();
        assert_eq!(err, Error::CreationFailed("clock"));
    }
}
