//! GPU textures.

use std::path::Path;
use std::ptr;

use crate::error::{Error, Result};
use crate::ffi::{self, check_created, from_sf_bool, sf_bool, GraphicsApi, SfTexture};
use crate::handle::{NativeResource, Owned};
use crate::marshal;
use crate::vector::Vector2u;

struct TextureResource;

impl NativeResource for TextureResource {
    type Handle = SfTexture;
    const KIND: &'static str = "texture";

    fn release(handle: SfTexture) {
        if let Ok(api) = ffi::graphics() {
            unsafe { (api.texture_destroy)(handle) }
        }
    }
}

/// An image living in video memory.
#[derive(Debug)]
pub struct Texture {
    handle: Owned<TextureResource>,
}

impl Texture {
    /// Create an empty texture.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let api = ffi::graphics()?;
        let handle = check_created(
            unsafe { (api.texture_create)(width, height) },
            TextureResource::KIND,
        )?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
        })
    }

    /// Load a texture from an image file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path_c = marshal::path_to_c_string(path.as_ref())?;
        let api = ffi::graphics()?;
        let handle = check_created(
            unsafe { (api.texture_create_from_file)(path_c.as_ptr(), ptr::null()) },
            TextureResource::KIND,
        )?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
        })
    }

    /// Wrap a texture owned by a render texture.
    ///
    /// # Safety
    ///
    /// The handle must outlive the returned Texture.
    pub(crate) unsafe fn borrowed(handle: SfTexture) -> Self {
        Self {
            handle: Owned::borrowed(handle),
        }
    }

    fn live(&self) -> Option<(&'static GraphicsApi, SfTexture)> {
        let handle = self.handle.raw();
        if !handle.is_valid() {
            return None;
        }
        ffi::graphics().ok().map(|api| (api, handle))
    }

    /// Size in pixels.
    pub fn size(&self) -> Vector2u {
        match self.live() {
            Some((api, handle)) => unsafe { (api.texture_get_size)(handle) },
            None => Vector2u::ZERO,
        }
    }

    /// Overwrite a region with RGBA8 pixels.
    ///
    /// `pixels` must hold exactly `width * height * 4` bytes and the region
    /// must fit inside the texture.
    pub fn update_from_pixels(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        x: u32,
        y: u32,
    ) -> Result<()> {
        marshal::check_pixels(pixels, width, height)?;
        let (api, handle) = self.live().ok_or(Error::AlreadyDisposed)?;

        let size = unsafe { (api.texture_get_size)(handle) };
        let fits_x = x.checked_add(width).map_or(false, |right| right <= size.x);
        let fits_y = y.checked_add(height).map_or(false, |bottom| bottom <= size.y);
        if !fits_x || !fits_y {
            return Err(Error::InvalidArgument(format!(
                "{}x{} region at ({}, {}) exceeds {}x{} texture",
                width, height, x, y, size.x, size.y
            )));
        }

        unsafe { (api.texture_update_from_pixels)(handle, pixels.as_ptr(), width, height, x, y) };
        Ok(())
    }

    /// Enable or disable bilinear filtering.
    pub fn set_smooth(&mut self, smooth: bool) {
        if let Some((api, handle)) = self.live() {
            unsafe { (api.texture_set_smooth)(handle, sf_bool(smooth)) }
        }
    }

    /// Check if bilinear filtering is enabled.
    pub fn is_smooth(&self) -> bool {
        match self.live() {
            Some((api, handle)) => from_sf_bool(unsafe { (api.texture_is_smooth)(handle) }),
            None => false,
        }
    }

    /// Ask the native side for an independent copy of this texture.
    pub fn try_clone(&self) -> Result<Self> {
        let (api, source) = self.live().ok_or(Error::AlreadyDisposed)?;
        let handle = check_created(
            unsafe { (api.texture_copy)(source) },
            TextureResource::KIND,
        )?;
        Ok(Self {
            handle: unsafe { Owned::from_raw(handle) },
        })
    }

    /// Release the texture. Further calls are no-ops.
    pub fn dispose(&mut self) {
        self.handle.dispose();
    }

    /// Check if the texture has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }

    /// Check if this texture belongs to a render texture.
    pub fn is_borrowed(&self) -> bool {
        self.handle.is_borrowed()
    }
}
