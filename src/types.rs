//! Type definitions and enums.

/// Window size and pixel depth.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoMode {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel depth in bits.
    pub bits_per_pixel: u32,
}

impl VideoMode {
    /// A 32-bit video mode.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel: 32,
        }
    }
}

/// OpenGL context options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSettings {
    /// Depth buffer bits.
    pub depth_bits: u32,
    /// Stencil buffer bits.
    pub stencil_bits: u32,
    /// Multisampling level.
    pub antialiasing_level: u32,
    /// Requested OpenGL major version.
    pub major_version: u32,
    /// Requested OpenGL minor version.
    pub minor_version: u32,
    /// Context attribute flags, see [`context_attributes`].
    pub attribute_flags: u32,
    /// Request an sRGB-capable framebuffer.
    pub srgb_capable: bool,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            depth_bits: 0,
            stencil_bits: 0,
            antialiasing_level: 0,
            major_version: 1,
            minor_version: 1,
            attribute_flags: context_attributes::DEFAULT,
            srgb_capable: false,
        }
    }
}

/// Context attribute flags.
pub mod context_attributes {
    /// Non-debug, compatibility context.
    pub const DEFAULT: u32 = 0;
    /// Core profile context.
    pub const CORE: u32 = 1 << 0;
    /// Debug context.
    pub const DEBUG: u32 = 1 << 2;
}

/// Window style flags.
pub mod style {
    /// No decoration.
    pub const NONE: u32 = 0;
    /// Title bar and fixed border.
    pub const TITLEBAR: u32 = 1 << 0;
    /// Resizable border and maximize button.
    pub const RESIZE: u32 = 1 << 1;
    /// Close button.
    pub const CLOSE: u32 = 1 << 2;
    /// Fullscreen mode.
    pub const FULLSCREEN: u32 = 1 << 3;
    /// Title bar, resizable border and close button.
    pub const DEFAULT: u32 = TITLEBAR | RESIZE | CLOSE;
}

/// Playback state of a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundStatus {
    /// Not playing; position is at the start.
    #[default]
    Stopped,
    /// Paused at the current position.
    Paused,
    /// Playing.
    Playing,
}

impl From<i32> for SoundStatus {
    fn from(status: i32) -> Self {
        match status {
            1 => SoundStatus::Paused,
            2 => SoundStatus::Playing,
            _ => SoundStatus::Stopped,
        }
    }
}

impl From<SoundStatus> for i32 {
    fn from(status: SoundStatus) -> i32 {
        match status {
            SoundStatus::Stopped => 0,
            SoundStatus::Paused => 1,
            SoundStatus::Playing => 2,
        }
    }
}
