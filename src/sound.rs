//! Playback of in-memory sounds.

use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::ffi::{self, check_created, from_sf_bool, sf_bool, AudioApi, SfSound, SfSoundBuffer};
use crate::handle::{NativeResource, Owned};
use crate::sound_buffer::SoundBuffer;
use crate::time::Time;
use crate::types::SoundStatus;

struct SoundResource;

impl NativeResource for SoundResource {
    type Handle = SfSound;
    const KIND: &'static str = "sound";

    fn release(handle: SfSound) {
        if let Ok(api) = ffi::audio() {
            unsafe { (api.sound_destroy)(handle) }
        }
    }
}

/// A playing instance of a [`SoundBuffer`].
///
/// The sound reads the buffer's samples while it plays, so it borrows the
/// buffer for `'buf`.
///
/// # Example
///
/// ```no_run
/// use sfml::{Sound, SoundBuffer};
///
/// let samples: Vec<i16> = (0..44_100).map(|i| ((i % 100) * 300) as i16).collect();
/// let buffer = SoundBuffer::from_samples(&samples, 1, 44_100)?;
/// let mut sound = Sound::with_buffer(&buffer)?;
/// sound.set_volume(50.0);
/// sound.play();
/// # Ok::<(), sfml::Error>(())
/// ```
#[derive(Debug)]
pub struct Sound<'buf> {
    handle: Owned<SoundResource>,
    _buffer: PhantomData<&'buf SoundBuffer>,
}

impl<'buf> Sound<'buf> {
    /// Create a sound with no buffer.
    pub fn new() -> Result<Self> {
        let api = ffi::audio()?;
        let handle = check_created(unsafe { (api.sound_create)() }, SoundResource::KIND)?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
            _buffer: PhantomData,
        })
    }

    /// Create a sound playing a buffer.
    pub fn with_buffer(buffer: &'buf SoundBuffer) -> Result<Self> {
        let mut sound = Self::new()?;
        sound.set_buffer(buffer);
        Ok(sound)
    }

    fn live(&self) -> Option<(&'static AudioApi, SfSound)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::audio().ok().map(|api| (api, handle))
    }

    /// Attach a buffer. Playback is stopped first.
    pub fn set_buffer(&mut self, buffer: &'buf SoundBuffer) {
        let buffer: SfSoundBuffer = buffer.handle();
        if let Some((api, handle)) = self.live() {
            if buffer.is_valid() {
                unsafe { (api.sound_set_buffer)(handle, buffer) }
            }
        }
    }

    /// Start or resume playback.
    pub fn play(&mut self) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_play)(handle) }
        }
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_pause)(handle) }
        }
    }

    /// Stop playback and rewind.
    pub fn stop(&mut self) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_stop)(handle) }
        }
    }

    /// Current playback state.
    pub fn status(&self) -> SoundStatus {
        match self.live() {
            Some((api, handle)) => SoundStatus::from(unsafe { (api.sound_get_status)(handle) }),
            None => SoundStatus::Stopped,
        }
    }

    /// Volume in [0, 100].
    pub fn volume(&self) -> f32 {
        match self.live() {
            Some((api, handle)) => unsafe { (api.sound_get_volume)(handle) },
            None => 0.0,
        }
    }

    /// Set the volume, clamped to [0, 100].
    pub fn set_volume(&mut self, volume: f32) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_set_volume)(handle, volume.clamp(0.0, 100.0)) }
        }
    }

    /// Check if the sound restarts when it reaches the end.
    pub fn is_looping(&self) -> bool {
        match self.live() {
            Some((api, handle)) => from_sf_bool(unsafe { (api.sound_get_loop)(handle) }),
            None => false,
        }
    }

    /// Enable or disable looping.
    pub fn set_looping(&mut self, looping: bool) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_set_loop)(handle, sf_bool(looping)) }
        }
    }

    /// Current position in the buffer.
    pub fn playing_offset(&self) -> Time {
        match self.live() {
            Some((api, handle)) => unsafe { (api.sound_get_playing_offset)(handle) },
            None => Time::ZERO,
        }
    }

    /// Jump to a position in the buffer.
    pub fn set_playing_offset(&mut self, offset: Time) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_set_playing_offset)(handle, offset) }
        }
    }

    /// Ask the native side for an independent copy, sharing the same buffer.
    pub fn try_clone(&self) -> Result<Sound<'buf>> {
        let (api, source) = self.live().ok_or(Error::AlreadyDisposed)?;
        let handle = check_created(unsafe { (api.sound_copy)(source) }, SoundResource::KIND)?;
        Ok(Sound {
            handle: unsafe { Owned::from_raw(handle) },
            _buffer: PhantomData,
        })
    }

    /// Stop and release the sound. Further calls are no-ops.
    pub fn dispose(&mut self) {
        self.handle.dispose();
    }

    /// Check if the sound has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }
}

unsafe impl Send for Sound<'_> {}
