//! Off-screen render targets.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::ffi::{self, check_created, sf_bool, GraphicsApi, SfContextSettings, SfRenderTexture};
use crate::handle::{NativeResource, Owned};
use crate::texture::Texture;
use crate::types::ContextSettings;
use crate::vector::Vector2u;
use crate::view::View;

struct RenderTextureResource;

impl NativeResource for RenderTextureResource {
    type Handle = SfRenderTexture;
    const KIND: &'static str = "render texture";

    fn release(handle: SfRenderTexture) {
        if let Ok(api) = ffi::graphics() {
            unsafe { (api.render_texture_destroy)(handle) }
        }
    }
}

/// A render target that draws into a texture.
///
/// The default view and the target texture are sub-resources: they are
/// created with the render texture, freed by its release, and never
/// released on their own.
///
/// # Example
///
/// ```no_run
/// use sfml::{Color, ContextSettings, RenderTexture};
///
/// let mut target = RenderTexture::new(256, 256, &ContextSettings::default())?;
/// target.clear(Color::BLUE);
/// target.display();
/// println!("texture is {:?}", target.texture().size());
/// # Ok::<(), sfml::Error>(())
/// ```
#[derive(Debug)]
pub struct RenderTexture {
    // Sub-resources are declared first so they are dropped before the owner.
    default_view: View,
    texture: Texture,
    handle: Owned<RenderTextureResource>,
}

impl RenderTexture {
    /// Create a render texture of the given size.
    pub fn new(width: u32, height: u32, settings: &ContextSettings) -> Result<Self> {
        let api = ffi::graphics()?;
        let settings_c = SfContextSettings::from(settings);
        let handle = check_created(
            unsafe { (api.render_texture_create)(width, height, &settings_c) },
            RenderTextureResource::KIND,
        )?;
        let handle = unsafe { Owned::<RenderTextureResource>::from_raw(handle) };

        unsafe {
            let view = (api.render_texture_get_default_view)(handle.raw());
            let texture = (api.render_texture_get_texture)(handle.raw());
            Ok(Self {
                default_view: View::borrowed(view),
                texture: Texture::borrowed(texture),
                handle,
            })
        }
    }

    fn live(&self) -> Option<(&'static GraphicsApi, SfRenderTexture)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::graphics().ok().map(|api| (api, handle))
    }

    /// Size of the target in pixels.
    pub fn size(&self) -> Vector2u {
        match self.live() {
            Some((api, handle)) => unsafe { (api.render_texture_get_size)(handle) },
            None => Vector2u::ZERO,
        }
    }

    /// Fill the whole target with a color.
    pub fn clear(&mut self, color: Color) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_texture_clear)(handle, color) }
        }
    }

    /// Copy what was drawn into the target texture.
    pub fn display(&mut self) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_texture_display)(handle) }
        }
    }

    /// Make a view current. The target keeps its own copy.
    pub fn set_view(&mut self, view: &View) {
        if let Some((api, handle)) = self.live() {
            if view.handle().is_valid() {
                unsafe { (api.render_texture_set_view)(handle, view.handle()) }
            }
        }
    }

    /// Owned copy of the current view.
    pub fn view(&self) -> Result<View> {
        let (api, handle) = self.live().ok_or(Error::AlreadyDisposed)?;
        let current = unsafe { View::borrowed((api.render_texture_get_view)(handle)) };
        current.try_clone()
    }

    /// The view used when no other is set.
    pub fn default_view(&self) -> &View {
        &self.default_view
    }

    /// The texture holding the rendered image.
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Enable or disable filtering of the target texture.
    pub fn set_smooth(&mut self, smooth: bool) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.render_texture_set_smooth)(handle, sf_bool(smooth)) }
        }
    }

    /// Release the render texture together with its sub-resources.
    pub fn dispose(&mut self) {
        self.default_view.dispose();
        self.texture.dispose();
        self.handle.dispose();
    }

    /// Check if the render texture has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }
}
