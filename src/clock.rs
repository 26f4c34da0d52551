//! Elapsed time measurement.

use crate::error::{Error, Result};
use crate::ffi::{self, check_created, SfClock, SystemApi};
use crate::handle::{NativeResource, Owned};
use crate::time::Time;

struct ClockResource;

impl NativeResource for ClockResource {
    type Handle = SfClock;
    const KIND: &'static str = "clock";

    fn release(handle: SfClock) {
        if let Ok(api) = ffi::system() {
            unsafe { (api.clock_destroy)(handle) }
        }
    }
}

/// A native clock measuring time since its creation or last restart.
///
/// # Example
///
/// ```no_run
/// use sfml::{Clock, Time};
///
/// let mut clock = Clock::new()?;
/// sfml::sleep(Time::milliseconds(10))?;
/// let lap = clock.restart();
/// assert!(lap >= Time::milliseconds(10));
/// # Ok::<(), sfml::Error>(())
/// ```
#[derive(Debug)]
pub struct Clock {
    handle: Owned<ClockResource>,
}

impl Clock {
    /// Create and start a clock.
    pub fn new() -> Result<Self> {
        let api = ffi::system()?;
        let handle = check_created(unsafe { (api.clock_create)() }, ClockResource::KIND)?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
        })
    }

    fn live(&self) -> Option<(&'static SystemApi, SfClock)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::system().ok().map(|api| (api, handle))
    }

    /// Time since the clock was started or restarted.
    pub fn elapsed_time(&self) -> Time {
        match self.live() {
            Some((api, handle)) => unsafe { (api.clock_get_elapsed_time)(handle) },
            None => Time::ZERO,
        }
    }

    /// Put the clock back to zero and return the time elapsed until now.
    pub fn restart(&mut self) -> Time {
        match self.live() {
            Some((api, handle)) => unsafe { (api.clock_restart)(handle) },
            None => Time::ZERO,
        }
    }

    /// Ask the native side for an independent copy of this clock.
    pub fn try_clone(&self) -> Result<Self> {
        let (api, source) = self.live().ok_or(Error::AlreadyDisposed)?;
        let handle = check_created(unsafe { (api.clock_copy)(source) }, ClockResource::KIND)?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
        })
    }

    /// Release the native clock. Further calls are no-ops.
    pub fn dispose(&mut self) {
        self.handle.dispose();
    }

    /// Check if the clock has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }
}

// Clock holds no thread-affine state.
unsafe impl Send for Clock {}
unsafe impl Sync for Clock {}

/// Block the current thread for a duration.
pub fn sleep(duration: Time) -> Result<()> {
    let api = ffi::system()?;
    unsafe { (api.sleep)(duration) };
    Ok(())
}
