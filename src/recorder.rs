//! Audio capture.
//!
//! CSFML runs capture on its own thread. [`SoundRecorder`] forwards the
//! thread's start, sample and stop hooks to a [`SoundRecorderHandler`];
//! [`SoundBufferRecorder`] accumulates everything into a [`SoundBuffer`].

use std::os::raw::c_void;
use std::panic::{self, AssertUnwindSafe};
use std::slice;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::ffi::{
    self, check_created, from_sf_bool, sf_bool, AudioApi, SfBool, SfSoundBufferRecorder,
    SfSoundRecorder,
};
use crate::handle::{NativeResource, Owned};
use crate::sound_buffer::SoundBuffer;
use crate::time::Time;

/// Sample rate used by most capture devices.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Check if the system has an audio capture device.
///
/// Returns `false` when the audio library itself cannot be loaded.
pub fn is_capture_available() -> bool {
    match ffi::audio() {
        Ok(api) => from_sf_bool(unsafe { (api.sound_recorder_is_available)() }),
        Err(e) => {
            log::debug!("audio capture unavailable: {}", e);
            false
        }
    }
}

/// Hooks invoked on the capture thread.
///
/// They run concurrently with the thread that owns the recorder, which only
/// reaches the handler through [`SoundRecorder::handler`].
pub trait SoundRecorderHandler: Send + 'static {
    /// Called once when capture starts. Returning `false` aborts the start.
    fn on_start(&mut self) -> bool {
        true
    }

    /// Called with each chunk of captured samples. Returning `false` stops
    /// capture.
    fn on_process_samples(&mut self, samples: &[i16]) -> bool;

    /// Called once when capture stops.
    fn on_stop(&mut self) {}
}

/// A handler that keeps every captured sample.
#[derive(Debug, Default, Clone)]
pub struct SampleCollector {
    /// Samples received so far.
    pub samples: Vec<i16>,
    /// Number of chunks delivered.
    pub chunks: usize,
    /// Whether capture is between its start and stop hooks.
    pub running: bool,
}

impl SoundRecorderHandler for SampleCollector {
    fn on_start(&mut self) -> bool {
        self.running = true;
        true
    }

    fn on_process_samples(&mut self, samples: &[i16]) -> bool {
        self.samples.extend_from_slice(samples);
        self.chunks += 1;
        true
    }

    fn on_stop(&mut self) {
        self.running = false;
    }
}

fn lock<H>(handler: &Mutex<H>) -> MutexGuard<'_, H> {
    handler.lock().unwrap_or_else(PoisonError::into_inner)
}

// A panic must not unwind into the native thread.
fn contained<T>(hook: &str, fallback: T, f: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            log::warn!("sound recorder {} hook panicked; stopping capture", hook);
            fallback
        }
    }
}

unsafe extern "C" fn on_start<H: SoundRecorderHandler>(user_data: *mut c_void) -> SfBool {
    let handler = &*(user_data as *const Mutex<H>);
    sf_bool(contained("start", false, || lock(handler).on_start()))
}

unsafe extern "C" fn on_process_samples<H: SoundRecorderHandler>(
    samples: *const i16,
    sample_count: usize,
    user_data: *mut c_void,
) -> SfBool {
    let handler = &*(user_data as *const Mutex<H>);
    let samples = if samples.is_null() || sample_count == 0 {
        &[][..]
    } else {
        slice::from_raw_parts(samples, sample_count)
    };
    sf_bool(contained("process", false, || {
        lock(handler).on_process_samples(samples)
    }))
}

unsafe extern "C" fn on_stop<H: SoundRecorderHandler>(user_data: *mut c_void) {
    let handler = &*(user_data as *const Mutex<H>);
    contained("stop", (), || lock(handler).on_stop())
}

struct SoundRecorderResource;

impl NativeResource for SoundRecorderResource {
    type Handle = SfSoundRecorder;
    const KIND: &'static str = "sound recorder";

    fn release(handle: SfSoundRecorder) {
        if let Ok(api) = ffi::audio() {
            // Destroying stops capture and joins the capture thread.
            unsafe { (api.sound_recorder_destroy)(handle) }
        }
    }
}

/// Captures audio and hands it to a handler on the capture thread.
///
/// # Example
///
/// ```no_run
/// use sfml::{SampleCollector, SoundRecorder, Time};
///
/// if SoundRecorder::<SampleCollector>::is_available() {
///     let mut recorder = SoundRecorder::new(SampleCollector::default())?;
///     recorder.start(44_100)?;
///     sfml::sleep(Time::seconds(1.0))?;
///     recorder.stop();
///     println!("captured {} samples", recorder.handler().samples.len());
/// }
/// # Ok::<(), sfml::Error>(())
/// ```
pub struct SoundRecorder<H: SoundRecorderHandler> {
    // Released before the handler it points to.
    handle: Owned<SoundRecorderResource>,
    handler: Box<Mutex<H>>,
}

impl<H: SoundRecorderHandler> SoundRecorder<H> {
    /// Check if the system has an audio capture device.
    pub fn is_available() -> bool {
        is_capture_available()
    }

    /// Create a recorder around a handler. Capture starts with [`start`](Self::start).
    pub fn new(handler: H) -> Result<Self> {
        let api = ffi::audio()?;
        let handler = Box::new(Mutex::new(handler));
        let user_data = &*handler as *const Mutex<H> as *mut c_void;

        let handle = check_created(
            unsafe {
                (api.sound_recorder_create)(
                    Some(on_start::<H>),
                    Some(on_process_samples::<H>),
                    Some(on_stop::<H>),
                    user_data,
                )
            },
            SoundRecorderResource::KIND,
        )?;

        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
            handler,
        })
    }

    fn live(&self) -> Option<(&'static AudioApi, SfSoundRecorder)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::audio().ok().map(|api| (api, handle))
    }

    /// Start capturing at the given sample rate.
    pub fn start(&mut self, sample_rate: u32) -> Result<()> {
        let (api, handle) = self.live().ok_or(Error::AlreadyDisposed)?;
        if !from_sf_bool(unsafe { (api.sound_recorder_is_available)() }) {
            return Err(Error::CaptureUnavailable);
        }
        if !from_sf_bool(unsafe { (api.sound_recorder_start)(handle, sample_rate) }) {
            return Err(Error::CaptureStartFailed);
        }
        log::debug!("sound recorder started at {} Hz", sample_rate);
        Ok(())
    }

    /// Stop capturing. Returns once the capture thread has delivered its
    /// last chunk and run the stop hook.
    pub fn stop(&mut self) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_recorder_stop)(handle) }
        }
    }

    /// Sample rate of the running capture.
    pub fn sample_rate(&self) -> u32 {
        match self.live() {
            Some((api, handle)) => unsafe { (api.sound_recorder_get_sample_rate)(handle) },
            None => 0,
        }
    }

    /// Set how often the sample hook is called. A hint; the default is 100 ms.
    pub fn set_processing_interval(&mut self, interval: Time) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_recorder_set_processing_interval)(handle, interval) }
        }
    }

    /// Lock the handler. Blocks while a hook is running.
    pub fn handler(&self) -> MutexGuard<'_, H> {
        lock(&self.handler)
    }

    /// Release the recorder and give back the handler.
    pub fn into_handler(self) -> H {
        let SoundRecorder {
            mut handle,
            handler,
        } = self;
        handle.dispose();
        handler.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stop and release the recorder. Further calls are no-ops.
    pub fn dispose(&mut self) {
        self.handle.dispose();
    }

    /// Check if the recorder has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }
}

unsafe impl<H: SoundRecorderHandler> Send for SoundRecorder<H> {}

struct SoundBufferRecorderResource;

impl NativeResource for SoundBufferRecorderResource {
    type Handle = SfSoundBufferRecorder;
    const KIND: &'static str = "sound buffer recorder";

    fn release(handle: SfSoundBufferRecorder) {
        if let Ok(api) = ffi::audio() {
            unsafe { (api.sound_buffer_recorder_destroy)(handle) }
        }
    }
}

/// Captures audio into a [`SoundBuffer`].
pub struct SoundBufferRecorder {
    buffer: SoundBuffer,
    handle: Owned<SoundBufferRecorderResource>,
}

impl SoundBufferRecorder {
    /// Create a recorder.
    pub fn new() -> Result<Self> {
        let api = ffi::audio()?;
        let handle = check_created(
            unsafe { (api.sound_buffer_recorder_create)() },
            SoundBufferRecorderResource::KIND,
        )?;
        let handle = unsafe { Owned::<SoundBufferRecorderResource>::from_raw(handle) };
        let buffer = unsafe { (api.sound_buffer_recorder_get_buffer)(handle.raw()) };
        Ok(Self {
            buffer: unsafe { SoundBuffer::borrowed(buffer) },
            handle,
        })
    }

    fn live(&self) -> Option<(&'static AudioApi, SfSoundBufferRecorder)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::audio().ok().map(|api| (api, handle))
    }

    /// Start capturing at the given sample rate.
    pub fn start(&mut self, sample_rate: u32) -> Result<()> {
        let (api, handle) = self.live().ok_or(Error::AlreadyDisposed)?;
        if !from_sf_bool(unsafe { (api.sound_recorder_is_available)() }) {
            return Err(Error::CaptureUnavailable);
        }
        if !from_sf_bool(unsafe { (api.sound_buffer_recorder_start)(handle, sample_rate) }) {
            return Err(Error::CaptureStartFailed);
        }
        Ok(())
    }

    /// Stop capturing.
    pub fn stop(&mut self) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.sound_buffer_recorder_stop)(handle) }
        }
    }

    /// Sample rate of the running capture.
    pub fn sample_rate(&self) -> u32 {
        match self.live() {
            Some((api, handle)) => unsafe { (api.sound_buffer_recorder_get_sample_rate)(handle) },
            None => 0,
        }
    }

    /// The captured audio, refreshed from the recorder on each call.
    pub fn buffer(&self) -> &SoundBuffer {
        if let Some((api, handle)) = self.live() {
            // The returned address is stable; the call copies the latest samples into it.
            let refreshed = unsafe { (api.sound_buffer_recorder_get_buffer)(handle) };
            debug_assert_eq!(refreshed, self.buffer.handle());
        }
        &self.buffer
    }

    /// Release the recorder and its buffer.
    pub fn dispose(&mut self) {
        self.buffer.dispose();
        self.handle.dispose();
    }

    /// Check if the recorder has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }
}
