//! Audio sample storage.

use std::path::Path;

use crate::error::{Error, Result};
use crate::ffi::{self, check_created, from_sf_bool, AudioApi, SfSoundBuffer};
use crate::handle::{NativeResource, Owned};
use crate::marshal;
use crate::time::Time;

struct SoundBufferResource;

impl NativeResource for SoundBufferResource {
    type Handle = SfSoundBuffer;
    const KIND: &'static str = "sound buffer";

    fn release(handle: SfSoundBuffer) {
        if let Ok(api) = ffi::audio() {
            unsafe { (api.sound_buffer_destroy)(handle) }
        }
    }
}

/// Interleaved 16-bit samples held by the audio module.
#[derive(Debug)]
pub struct SoundBuffer {
    handle: Owned<SoundBufferResource>,
}

impl SoundBuffer {
    /// Create a buffer from interleaved samples.
    ///
    /// The native side copies the samples.
    pub fn from_samples(samples: &[i16], channel_count: u32, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InvalidArgument("no samples".to_string()));
        }
        if channel_count == 0 || sample_rate == 0 {
            return Err(Error::InvalidArgument(format!(
                "channel count ({}) and sample rate ({}) must be non-zero",
                channel_count, sample_rate
            )));
        }

        let api = ffi::audio()?;
        let handle = check_created(
            unsafe {
                (api.sound_buffer_create_from_samples)(
                    samples.as_ptr(),
                    samples.len() as u64,
                    channel_count,
                    sample_rate,
                )
            },
            SoundBufferResource::KIND,
        )?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
        })
    }

    /// Load and decode an audio file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path_c = marshal::path_to_c_string(path.as_ref())?;
        let api = ffi::audio()?;
        let handle = check_created(
            unsafe { (api.sound_buffer_create_from_file)(path_c.as_ptr()) },
            SoundBufferResource::KIND,
        )?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
        })
    }

    /// Wrap a buffer owned by a recorder.
    ///
    /// # Safety
    ///
    /// The handle must outlive the returned SoundBuffer.
    pub(crate) unsafe fn borrowed(handle: SfSoundBuffer) -> Self {
        Self {
            handle: Owned::borrowed(handle),
        }
    }

    /// Get the underlying handle.
    pub(crate) fn handle(&self) -> SfSoundBuffer {
        self.handle.raw()
    }

    fn live(&self) -> Option<(&'static AudioApi, SfSoundBuffer)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::audio().ok().map(|api| (api, handle))
    }

    /// Copy of the samples.
    pub fn samples(&self) -> Vec<i16> {
        match self.live() {
            Some((api, handle)) => unsafe {
                let count = (api.sound_buffer_get_sample_count)(handle) as usize;
                marshal::copy_samples((api.sound_buffer_get_samples)(handle), count)
            },
            None => Vec::new(),
        }
    }

    /// Number of samples, all channels included.
    pub fn sample_count(&self) -> u64 {
        match self.live() {
            Some((api, handle)) => unsafe { (api.sound_buffer_get_sample_count)(handle) },
            None => 0,
        }
    }

    /// Samples per second.
    pub fn sample_rate(&self) -> u32 {
        match self.live() {
            Some((api, handle)) => unsafe { (api.sound_buffer_get_sample_rate)(handle) },
            None => 0,
        }
    }

    /// Number of interleaved channels.
    pub fn channel_count(&self) -> u32 {
        match self.live() {
            Some((api, handle)) => unsafe { (api.sound_buffer_get_channel_count)(handle) },
            None => 0,
        }
    }

    /// Playing time of the buffer.
    pub fn duration(&self) -> Time {
        match self.live() {
            Some((api, handle)) => unsafe { (api.sound_buffer_get_duration)(handle) },
            None => Time::ZERO,
        }
    }

    /// Encode the samples to a file; the format follows the extension.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let path_c = marshal::path_to_c_string(path)?;
        let (api, handle) = self.live().ok_or(Error::AlreadyDisposed)?;

        let saved = unsafe { (api.sound_buffer_save_to_file)(handle, path_c.as_ptr()) };
        if !from_sf_bool(saved) {
            return Err(Error::SaveFailed(path.display().to_string()));
        }
        Ok(())
    }

    /// Ask the native side for an independent copy of this buffer.
    pub fn try_clone(&self) -> Result<Self> {
        let (api, source) = self.live().ok_or(Error::AlreadyDisposed)?;
        let handle = check_created(
            unsafe { (api.sound_buffer_copy)(source) },
            SoundBufferResource::KIND,
        )?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
        })
    }

    /// Release the buffer. Further calls are no-ops.
    pub fn dispose(&mut self) {
        self.handle.dispose();
    }

    /// Check if the buffer has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }
}

unsafe impl Send for SoundBuffer {}
unsafe impl Sync for SoundBuffer {}
