//! Conversions of strings and buffers across the C boundary.

use std::ffi::CString;
use std::path::Path;

use crate::error::{Error, Result};

/// Encode text as NUL-terminated UTF-32, as CSFML's unicode entry points expect.
///
/// Interior NULs would truncate the string on the native side, so they are
/// rejected.
pub fn to_utf32(text: &str) -> Result<Vec<u32>> {
    if text.contains('\0') {
        return Err(Error::InvalidArgument(format!(
            "string contains a NUL character: {:?}",
            text
        )));
    }
    let mut out: Vec<u32> = text.chars().map(u32::from).collect();
    out.push(0);
    Ok(out)
}

/// Encode a string as a C string.
pub fn to_c_string(text: &str) -> Result<CString> {
    CString::new(text).map_err(|e| Error::InvalidArgument(e.to_string()))
}

/// Encode a file path as a C string.
pub fn path_to_c_string(path: &Path) -> Result<CString> {
    let text = path
        .to_str()
        .ok_or_else(|| Error::InvalidArgument(format!("path is not UTF-8: {}", path.display())))?;
    to_c_string(text)
}

/// Check an RGBA8 pixel buffer against its dimensions.
pub fn check_pixels(pixels: &[u8], width: u32, height: u32) -> Result<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| {
            Error::InvalidArgument(format!("{}x{} RGBA pixels overflow usize", width, height))
        })?;
    if pixels.len() != expected {
        return Err(Error::InvalidArgument(format!(
            "expected {} bytes for {}x{} RGBA pixels, got {}",
            expected,
            width,
            height,
            pixels.len()
        )));
    }
    Ok(())
}

/// Copy a native sample array into an owned buffer.
///
/// # Safety
///
/// `ptr` must be null or point to at least `count` readable samples.
pub unsafe fn copy_samples(ptr: *const i16, count: usize) -> Vec<i16> {
    if ptr.is_null() || count == 0 {
        return Vec::new();
    }
    std::slice::from_raw_parts(ptr, count).to_vec()
}
