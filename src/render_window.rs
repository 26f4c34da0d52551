//! On-screen render targets.

use crate::color::Color;
use crate::error::Result;
use crate::ffi::{
    self, check_created, from_sf_bool, sf_bool, GraphicsApi, SfContextSettings, SfRenderWindow,
};
use crate::handle::{NativeResource, Owned};
use crate::marshal;
use crate::types::{ContextSettings, VideoMode};
use crate::vector::Vector2u;
use crate::view::View;

struct RenderWindowResource;

impl NativeResource for RenderWindowResource {
    type Handle = SfRenderWindow;
    const KIND: &'static str = "render window";

    fn release(handle: SfRenderWindow) {
        if let Ok(api) = ffi::graphics() {
            unsafe { (api.render_window_destroy)(handle) }
        }
    }
}

/// A window that can be rendered into.
///
/// Closing the window and releasing it are separate steps: [`close`](Self::close)
/// hides the OS window, [`dispose`](Self::dispose) or drop frees it.
///
/// # Example
///
/// ```no_run
/// use sfml::{style, Color, ContextSettings, RenderWindow, VideoMode};
///
/// let mut window = RenderWindow::new(
///     VideoMode::new(800, 600),
///     "Hello",
///     style::DEFAULT,
///     &ContextSettings::default(),
/// )?;
/// window.set_framerate_limit(60);
/// while window.is_open() {
///     window.clear(Color::BLACK);
///     window.display();
///     window.close();
/// }
/// # Ok::<(), sfml::Error>(())
/// ```
#[derive(Debug)]
pub struct RenderWindow {
    default_view: View,
    handle: Owned<RenderWindowResource>,
}

impl RenderWindow {
    /// Open a window.
    ///
    /// The title may contain any Unicode text except NUL.
    pub fn new(
        mode: VideoMode,
        title: &str,
        style: u32,
        settings: &ContextSettings,
    ) -> Result<Self> {
        let title_c = marshal::to_utf32(title)?;
        let api = ffi::graphics()?;
        let settings_c = SfContextSettings::from(settings);

        let handle = check_created(
            unsafe { (api.render_window_create)(mode, title_c.as_ptr(), style, &settings_c) },
            RenderWindowResource::KIND,
        )?;
        let handle = unsafe { Owned::<RenderWindowResource>::from_raw(handle) };

        unsafe {
            let view = (api.render_window_get_default_view)(handle.raw());
            Ok(Self {
                default_view: View::borrowed(view),
                handle,
            })
        }
    }

    fn live(&self) -> Option<(&'static GraphicsApi, SfRenderWindow)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::graphics().ok().map(|api| (api, handle))
    }

    /// Check if the OS window is still open.
    pub fn is_open(&self) -> bool {
        match self.live() {
            Some((api, handle)) => from_sf_bool(unsafe { (api.render_window_is_open)(handle) }),
            None => false,
        }
    }

    /// Close the OS window. The wrapper stays valid until released.
    pub fn close(&mut self) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_window_close)(handle) }
        }
    }

    /// Client area size in pixels.
    pub fn size(&self) -> Vector2u {
        match self.live() {
            Some((api, handle)) => unsafe { (api.render_window_get_size)(handle) },
            None => Vector2u::ZERO,
        }
    }

    /// Change the window title.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        let title_c = marshal::to_utf32(title)?;
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_window_set_title)(handle, title_c.as_ptr()) }
        }
        Ok(())
    }

    /// Cap the frame rate. Zero removes the cap.
    pub fn set_framerate_limit(&mut self, limit: u32) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_window_set_framerate_limit)(handle, limit) }
        }
    }

    /// Enable or disable vertical synchronization.
    pub fn set_vertical_sync_enabled(&mut self, enabled: bool) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_window_set_vsync)(handle, sf_bool(enabled)) }
        }
    }

    /// Fill the window with a color.
    pub fn clear(&mut self, color: Color) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_window_clear)(handle, color) }
        }
    }

    /// Show what was drawn since the last display.
    pub fn display(&mut self) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_window_display)(handle) }
        }
    }

    /// Make a view current. The window keeps its own copy.
    pub fn set_view(&mut self, view: &View) {
        if let Some((api, handle)) = self.live() {
            if view.handle().is_valid() {
                unsafe { (api.render_window_set_view)(handle, view.handle()) }
            }
        }
    }

    /// The view used when no other is set.
    pub fn default_view(&self) -> &View {
        &self.default_view
    }

    /// Release the window together with its default view.
    pub fn dispose(&mut self) {
        self.default_view.dispose();
        self.handle.dispose();
    }

    /// Check if the window has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }
}
