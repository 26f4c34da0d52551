//! 2D cameras.

use crate::angle::Angle;
use crate::error::{Error, Result};
use crate::ffi::{self, check_created, GraphicsApi, SfView};
use crate::handle::{NativeResource, Owned};
use crate::rect::FloatRect;
use crate::vector::Vector2f;

pub(crate) struct ViewResource;

impl NativeResource for ViewResource {
    type Handle = SfView;
    const KIND: &'static str = "view";

    fn release(handle: SfView) {
        if let Ok(api) = ffi::graphics() {
            unsafe { (api.view_destroy)(handle) }
        }
    }
}

/// The region of a 2D scene shown by a render target.
///
/// Views handed out by [`RenderTexture::default_view`](crate::RenderTexture::default_view)
/// and [`RenderWindow::default_view`](crate::RenderWindow::default_view) belong
/// to their target and are only reachable by shared reference.
#[derive(Debug)]
pub struct View {
    handle: Owned<ViewResource>,
}

impl View {
    /// Create a view covering (0, 0, 1000, 1000).
    pub fn new() -> Result<Self> {
        let api = ffi::graphics()?;
        let handle = check_created(unsafe { (api.view_create)() }, ViewResource::KIND)?;
        Ok(unsafe { Self::from_handle(handle) })
    }

    /// Create a view covering a rectangle of the scene.
    pub fn from_rect(rect: FloatRect) -> Result<Self> {
        let api = ffi::graphics()?;
        let handle = check_created(
            unsafe { (api.view_create_from_rect)(rect) },
            ViewResource::KIND,
        )?;
        Ok(unsafe { Self::from_handle(handle) })
    }

    /// Take ownership of a view handle.
    ///
    /// # Safety
    ///
    /// The handle must be valid and not already owned by another View.
    pub(crate) unsafe fn from_handle(handle: SfView) -> Self {
        Self {
            handle: Owned::from_raw(handle),
        }
    }

    /// Wrap a view owned by a render target.
    ///
    /// # Safety
    ///
    /// The handle must outlive the returned View.
    pub(crate) unsafe fn borrowed(handle: SfView) -> Self {
        Self {
            handle: Owned::borrowed(handle),
        }
    }

    /// Get the underlying handle.
    pub(crate) fn handle(&self) -> SfView {
        self.handle.raw()
    }

    fn live(&self) -> Option<(&'static GraphicsApi, SfView)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::graphics().ok().map(|api| (api, handle))
    }

    /// Center of the view in scene coordinates.
    pub fn center(&self) -> Vector2f {
        match self.live() {
            Some((api, handle)) => unsafe { (api.view_get_center)(handle) },
            None => Vector2f::ZERO,
        }
    }

    /// Move the center of the view.
    pub fn set_center(&mut self, center: Vector2f) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.view_set_center)(handle, center) }
        }
    }

    /// Size of the view in scene units.
    pub fn size(&self) -> Vector2f {
        match self.live() {
            Some((api, handle)) => unsafe { (api.view_get_size)(handle) },
            None => Vector2f::ZERO,
        }
    }

    /// Resize the view.
    pub fn set_size(&mut self, size: Vector2f) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.view_set_size)(handle, size) }
        }
    }

    /// Orientation of the view.
    pub fn rotation(&self) -> Angle {
        match self.live() {
            Some((api, handle)) => Angle::degrees(unsafe { (api.view_get_rotation)(handle) }),
            None => Angle::ZERO,
        }
    }

    /// Set the orientation of the view.
    pub fn set_rotation(&mut self, angle: Angle) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.view_set_rotation)(handle, angle.as_degrees()) }
        }
    }

    /// Rotate relative to the current orientation.
    pub fn rotate(&mut self, angle: Angle) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.view_rotate)(handle, angle.as_degrees()) }
        }
    }

    /// Move relative to the current center.
    pub fn move_by(&mut self, offset: Vector2f) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.view_move)(handle, offset) }
        }
    }

    /// Scale the view size by a factor.
    pub fn zoom(&mut self, factor: f32) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.view_zoom)(handle, factor) }
        }
    }

    /// Target viewport, as a ratio of the render target size.
    pub fn viewport(&self) -> FloatRect {
        match self.live() {
            Some((api, handle)) => unsafe { (api.view_get_viewport)(handle) },
            None => FloatRect::default(),
        }
    }

    /// Set the target viewport.
    pub fn set_viewport(&mut self, viewport: FloatRect) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.view_set_viewport)(handle, viewport) }
        }
    }

    /// Ask the native side for an independent, owned copy of this view.
    ///
    /// Copying a borrowed view is the way to get an editable version of it.
    pub fn try_clone(&self) -> Result<Self> {
        let (api, source) = self.live().ok_or(Error::AlreadyDisposed)?;
        let handle = check_created(unsafe { (api.view_copy)(source) }, ViewResource::KIND)?;
        Ok(unsafe { Self::from_handle(handle) })
    }

    /// Release the native view. Further calls are no-ops.
    ///
    /// A borrowed view only forgets its handle.
    pub fn dispose(&mut self) {
        self.handle.dispose();
    }

    /// Check if the view has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }

    /// Check if this view belongs to a render target.
    pub fn is_borrowed(&self) -> bool {
        self.handle.is_borrowed()
    }
}
