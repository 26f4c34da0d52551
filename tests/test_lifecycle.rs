//! Handle ownership tests.
//!
//! These tests use a fake native resource that counts releases, so they do
//! not require CSFML.

use std::cell::RefCell;
use std::collections::HashMap;

use sfml::{LifecycleState, NativeResource, Owned, RawHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FakeHandle(u32);

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
    // Release calls per handle value. Each test runs on its own thread.
    static RELEASES: RefCell<HashMap<u32, usize>> = RefCell::new(HashMap::new());
    static NEXT: RefCell<u32> = RefCell::new(1);
}

fn releases_of(handle: FakeHandle) -> usize {
    RELEASES.with(|r| r.borrow().get(&handle.0).copied().unwrap_or(0))
}

fn total_releases() -> usize {
    RELEASES.with(|r| r.borrow().values().sum())
}

/// Stand-in for a native "create" call.
fn fake_create() -> FakeHandle {
    NEXT.with(|n| {
        let mut n = n.borrow_mut();
        let handle = FakeHandle(*n);
        *n += 1;
        handle
    })
}

struct FakeResource;

impl NativeResource for FakeResource {
    type Handle = FakeHandle;
    const KIND: &'static str = "fake";

    fn release(handle: FakeHandle) {
        assert!(handle.is_valid(), "release called with the empty handle");
        RELEASES.with(|r| *r.borrow_mut().entry(handle.0).or_insert(0) += 1);
    }
}

/// A wrapper shaped like the crate's render targets: one owned handle plus a
/// sub-resource that belongs to it.
struct FakeTarget {
    default_view: Owned<FakeResource>,
    handle: Owned<FakeResource>,
}

impl FakeTarget {
    fn new() -> Self {
        let handle = fake_create();
        let view = fake_create();
        unsafe {
            FakeTarget {
                default_view: Owned::borrowed(view),
                handle: Owned::from_raw(handle),
            }
        }
    }

    fn dispose(&mut self) {
        self.default_view.dispose();
        self.handle.dispose();
    }
}

#[test]
fn test_dispose_twice_releases_once() {
    let handle = fake_create();
    let mut owned = unsafe { Owned::<FakeResource>::from_raw(handle) };

    owned.dispose();
    owned.dispose();

    assert_eq!(releases_of(handle), 1, "second dispose must be a no-op");
    assert_eq!(owned.state(), LifecycleState::Released);
}

#[test]
fn test_drop_without_dispose_releases_once() {
    let handle = fake_create();
    {
        let owned = unsafe { Owned::<FakeResource>::from_raw(handle) };
        assert_eq!(owned.state(), LifecycleState::Owning);
        assert_eq!(releases_of(handle), 0);
    }
    assert_eq!(releases_of(handle), 1);
}

#[test]
fn test_dispose_then_drop_releases_once() {
    let handle = fake_create();
    let mut owned = unsafe { Owned::<FakeResource>::from_raw(handle) };
    owned.dispose();
    drop(owned);
    assert_eq!(releases_of(handle), 1, "drop after dispose must not release again");
}

#[test]
fn test_empty_handle_is_never_released() {
    let owned = unsafe { Owned::<FakeResource>::from_raw(FakeHandle::invalid()) };
    assert_eq!(owned.state(), LifecycleState::Unattached);
    drop(owned);

    let mut unattached = Owned::<FakeResource>::unattached();
    unattached.dispose();
    assert_eq!(unattached.state(), LifecycleState::Unattached);
    drop(unattached);

    assert_eq!(total_releases(), 0);
}

#[test]
fn test_late_attach_path() {
    let mut owned = Owned::<FakeResource>::unattached();
    let handle = fake_create();

    assert!(unsafe { owned.attach(handle) });
    assert_eq!(owned.state(), LifecycleState::Owning);
    assert_eq!(owned.raw(), handle);

    drop(owned);
    assert_eq!(releases_of(handle), 1);
}

#[test]
fn test_released_is_terminal() {
    let mut owned = unsafe { Owned::<FakeResource>::from_raw(fake_create()) };
    owned.dispose();

    let other = fake_create();
    assert!(!unsafe { owned.attach(other) });
    assert!(owned.is_disposed());
    assert!(!owned.raw().is_valid());
}

#[test]
fn test_sub_resource_released_with_parent_only() {
    let mut target = FakeTarget::new();
    let parent = target.handle.raw();
    let view = target.default_view.raw();

    target.dispose();
    target.dispose();
    drop(target);

    assert_eq!(releases_of(parent), 1);
    assert_eq!(releases_of(view), 0, "sub-resource must not be released on its own");
}

#[test]
fn test_dropping_parent_releases_once() {
    let target = FakeTarget::new();
    let parent = target.handle.raw();
    drop(target);
    assert_eq!(releases_of(parent), 1);
    assert_eq!(total_releases(), 1);
}

#[test]
fn test_into_raw_hands_off_ownership() {
    let handle = fake_create();
    let owned = unsafe { Owned::<FakeResource>::from_raw(handle) };
    let raw = owned.into_raw();
    assert_eq!(raw, handle);
    assert_eq!(releases_of(handle), 0);

    // The new owner releases it.
    drop(unsafe { Owned::<FakeResource>::from_raw(raw) });
    assert_eq!(releases_of(handle), 1);
}

#[test]
fn test_many_wrappers_each_release_once() {
    let handles: Vec<FakeHandle> = (0..16).map(|_| fake_create()).collect();
    let mut owned: Vec<Owned<FakeResource>> = handles
        .iter()
        .map(|h| unsafe { Owned::from_raw(*h) })
        .collect();

    // Dispose every other one explicitly, drop the rest.
    for o in owned.iter_mut().step_by(2) {
        o.dispose();
    }
    drop(owned);

    for h in handles {
        assert_eq!(releases_of(h), 1);
    }
}
