//! Ownership of native handles.
//!
//! Every wrapped CSFML object stores its pointer in an [`Owned`], which
//! releases it at most once: either through an explicit [`Owned::dispose`]
//! or when the wrapper is dropped. A disposed wrapper holds the empty handle,
//! so the drop that follows is a no-op.
//!
//! ```text
//! Unattached --attach/from_raw--> Owning --dispose/drop--> Released
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::mem;

/// An opaque handle value with a reserved empty sentinel.
pub trait RawHandle: Copy {
    /// The empty sentinel.
    fn invalid() -> Self;

    /// Check if this handle refers to a resource.
    fn is_valid(&self) -> bool;

    /// Numeric value of the handle, for logging.
    fn addr(&self) -> usize;
}

/// A kind of native resource and its release operation.
pub trait NativeResource {
    /// Handle type produced by the native create call.
    type Handle: RawHandle;

    /// Human readable name used in logs and errors.
    const KIND: &'static str;

    /// Release the native resource.
    ///
    /// Only ever called with a valid handle, and at most once per handle.
    fn release(handle: Self::Handle);
}

/// Lifecycle of an [`Owned`] handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No handle has been attached yet.
    Unattached,
    /// A valid handle is owned and will be released.
    Owning,
    /// The handle was released (or handed off). Terminal.
    Released,
}

/// Exclusive owner of one native handle.
pub struct Owned<R: NativeResource> {
    handle: R::Handle,
    state: LifecycleState,
    borrowed: bool,
    _resource: PhantomData<R>,
}

impl<R: NativeResource> Owned<R> {
    /// Take ownership of a freshly created handle.
    ///
    /// An empty handle yields an `Unattached` owner.
    ///
    /// # Safety
    ///
    /// The handle must come from the matching native create call and must
    /// not be owned by any other `Owned`.
    pub unsafe fn from_raw(handle: R::Handle) -> Self {
        let state = if handle.is_valid() {
            log::trace!("acquired {} {:#x}", R::KIND, handle.addr());
            LifecycleState::Owning
        } else {
            LifecycleState::Unattached
        };
        Self {
            handle,
            state,
            borrowed: false,
            _resource: PhantomData,
        }
    }

    /// Create an owner whose handle is acquired later with [`Owned::attach`].
    pub fn unattached() -> Self {
        Self {
            handle: R::Handle::invalid(),
            state: LifecycleState::Unattached,
            borrowed: false,
            _resource: PhantomData,
        }
    }

    /// Wrap a sub-resource that belongs to another native object.
    ///
    /// The handle is never released through this owner; the parent's release
    /// frees it.
    ///
    /// # Safety
    ///
    /// The handle must stay valid for as long as the returned value is used,
    /// which callers guarantee by tying it to the parent's lifetime.
    pub unsafe fn borrowed(handle: R::Handle) -> Self {
        let state = if handle.is_valid() {
            LifecycleState::Owning
        } else {
            LifecycleState::Unattached
        };
        Self {
            handle,
            state,
            borrowed: true,
            _resource: PhantomData,
        }
    }

    /// Attach a handle to an `Unattached` owner.
    ///
    /// Returns `false` and leaves the owner untouched when it is not
    /// `Unattached` or the handle is empty.
    ///
    /// # Safety
    ///
    /// Same contract as [`Owned::from_raw`].
    pub unsafe fn attach(&mut self, handle: R::Handle) -> bool {
        if self.state != LifecycleState::Unattached || !handle.is_valid() {
            return false;
        }
        log::trace!("acquired {} {:#x}", R::KIND, handle.addr());
        self.handle = handle;
        self.state = LifecycleState::Owning;
        true
    }

    /// Release the native resource. Calling it again is a no-op.
    pub fn dispose(&mut self) {
        if self.handle.is_valid() {
            let handle = mem::replace(&mut self.handle, R::Handle::invalid());
            if !self.borrowed {
                log::trace!("releasing {} {:#x}", R::KIND, handle.addr());
                R::release(handle);
            }
        }
        if self.state == LifecycleState::Owning {
            self.state = LifecycleState::Released;
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Check if the handle has been released.
    pub fn is_disposed(&self) -> bool {
        self.state == LifecycleState::Released
    }

    /// Check if this owner wraps a sub-resource of another object.
    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// Get the raw handle. Empty once disposed.
    pub fn raw(&self) -> R::Handle {
        self.handle
    }

    /// Give up ownership without releasing.
    ///
    /// The caller becomes responsible for the returned handle.
    pub fn into_raw(mut self) -> R::Handle {
        let handle = mem::replace(&mut self.handle, R::Handle::invalid());
        self.state = LifecycleState::Released;
        handle
    }
}

impl<R: NativeResource> Drop for Owned<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<R: NativeResource> fmt::Debug for Owned<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owned")
            .field("kind", &R::KIND)
            .field("handle", &format_args!("{:#x}", self.handle.addr()))
            .field("state", &self.state)
            .field("borrowed", &self.borrowed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct FakeHandle(u64);

    impl RawHandle for FakeHandle {
        fn invalid() -> Self {
            FakeHandle(0)
        }
        fn is_valid(&self) -> bool {
            self.0 != 0
        }
        fn addr(&self) -> usize {
            self.0 as usize
        }
    }

    thread_local! {
        static RELEASED: RefCell<Vec<u64>> = RefCell::new(Vec::new());
    }

    struct Fake;

    impl NativeResource for Fake {
        type Handle = FakeHandle;
        const KIND: &'static str = "fake";

        fn release(handle: FakeHandle) {
            RELEASED.with(|r| r.borrow_mut().push(handle.0));
        }
    }

    fn released() -> Vec<u64> {
        RELEASED.with(|r| r.borrow().clone())
    }

    #[test]
    fn test_from_raw_states() {
        let owned = unsafe { Owned::<Fake>::from_raw(FakeHandle(7)) };
        assert_eq!(owned.state(), LifecycleState::Owning);

        let empty = unsafe { Owned::<Fake>::from_raw(FakeHandle(0)) };
        assert_eq!(empty.state(), LifecycleState::Unattached);
        drop(empty);
        assert!(released().is_empty());
    }

    #[test]
    fn test_dispose_then_drop_releases_once() {
        let mut owned = unsafe { Owned::<Fake>::from_raw(FakeHandle(3)) };
        owned.dispose();
        owned.dispose();
        assert!(owned.is_disposed());
        assert!(!owned.raw().is_valid());
        drop(owned);
        assert_eq!(released(), vec![3]);
    }

    #[test]
    fn test_attach_only_from_unattached() {
        let mut owned = Owned::<Fake>::unattached();
        assert!(!unsafe { owned.attach(FakeHandle(0)) });
        assert!(unsafe { owned.attach(FakeHandle(9)) });
        assert!(!unsafe { owned.attach(FakeHandle(10)) });
        assert_eq!(owned.raw(), FakeHandle(9));
        owned.dispose();
        assert!(!unsafe { owned.attach(FakeHandle(11)) });
        assert_eq!(released(), vec![9]);
    }

    #[test]
    fn test_borrowed_never_releases() {
        let mut view = unsafe { Owned::<Fake>::borrowed(FakeHandle(5)) };
        assert!(view.is_borrowed());
        view.dispose();
        assert!(view.is_disposed());
        drop(view);
        assert!(released().is_empty());
    }

    #[test]
    fn test_into_raw_skips_release() {
        let owned = unsafe { Owned::<Fake>::from_raw(FakeHandle(4)) };
        assert_eq!(owned.into_raw(), FakeHandle(4));
        assert!(released().is_empty());
    }
}
