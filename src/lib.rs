//! Rust bindings for the CSFML multimedia library.
//!
//! This crate wraps CSFML's system, graphics and audio modules. Every native
//! object is owned by exactly one wrapper and released exactly once, either
//! by an explicit `dispose()` or when the wrapper is dropped. Small value
//! types ([`Vector2`], [`Time`], [`Angle`], [`Color`], [`Rect`]) are plain
//! Rust and need no library at all.
//!
//! The CSFML shared libraries are opened at run time on first use. Their
//! location can be set with [`init`] or the `CSFML_LIBRARY_DIR` environment
//! variable.
//!
//! # Example
//!
//! ```no_run
//! use sfml::{Clock, LoaderConfig, Time};
//!
//! fn main() -> sfml::Result<()> {
//!     sfml::init(Some(LoaderConfig::default().with_search_dir("/opt/csfml/lib")))?;
//!
//!     let clock = Clock::new()?;
//!     sfml::sleep(Time::milliseconds(20))?;
//!     println!("slept {} ms", clock.elapsed_time().as_milliseconds());
//!
//!     // Value types work without the native library.
//!     let step = Time::seconds(0.5) * 3i64;
//!     assert_eq!(step, Time::milliseconds(1500));
//!     Ok(())
//! }
//! ```

pub mod angle;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
mod ffi;
pub mod handle;
pub mod marshal;
pub mod rect;
pub mod recorder;
pub mod render_texture;
pub mod render_window;
pub mod sound;
pub mod sound_buffer;
pub mod texture;
pub mod time;
pub mod types;
pub mod vector;
pub mod view;

// Re-export main types at the crate root
pub use angle::Angle;
pub use clock::{sleep, Clock};
pub use color::Color;
pub use config::LoaderConfig;
pub use error::{Error, Result};
pub use ffi::library::{Module, Platform};
pub use handle::{LifecycleState, NativeResource, Owned, RawHandle};
pub use recorder::{
    is_capture_available, SampleCollector, SoundBufferRecorder, SoundRecorder,
    SoundRecorderHandler,
};
pub use rect::{FloatRect, IntRect, Rect};
pub use render_texture::RenderTexture;
pub use render_window::RenderWindow;
pub use sound::Sound;
pub use sound_buffer::SoundBuffer;
pub use texture::Texture;
pub use time::Time;
pub use types::{context_attributes, style, ContextSettings, SoundStatus, VideoMode};
pub use vector::{Vector2, Vector2f, Vector2i, Vector2u, Vector3, Vector3f, Vector3i};
pub use view::View;

/// Version constants.
pub mod version {
    /// CSFML major version the function tables target.
    pub const CSFML_MAJOR: u32 = 2;
    /// CSFML minor version the function tables target.
    pub const CSFML_MINOR: u32 = 6;
}

/// Fix the loader configuration.
///
/// Must be called before any native object is created. Passing `None`
/// freezes the configuration read from the environment. Returns
/// [`Error::AlreadyInitialized`] if the configuration is already fixed.
pub fn init(config: Option<LoaderConfig>) -> Result<()> {
    let config = config.unwrap_or_else(LoaderConfig::from_env);
    log::debug!("csfml loader configuration: {:?}", config);
    config::set(config)
}

/// Load every CSFML module now instead of on first use.
///
/// Surfaces a missing library or symbol up front.
pub fn preload() -> Result<()> {
    ffi::system()?;
    ffi::graphics()?;
    ffi::audio()?;
    Ok(())
}

/// Check if a module's library can be loaded.
pub fn is_module_available(module: Module) -> bool {
    match module {
        Module::System => ffi::system().is_ok(),
        // The window module is linked in by csfml-graphics.
        Module::Window | Module::Graphics => ffi::graphics().is_ok(),
        Module::Audio => ffi::audio().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_default_config() {
        assert_eq!(
            config::DEFAULT_VERSION,
            (version::CSFML_MAJOR, version::CSFML_MINOR)
        );
    }

    #[test]
    fn test_wrappers_exported_at_root() {
        fn name<T>() -> &'static str {
            std::any::type_name::<T>()
        }
        assert!(name::<crate::View>().ends_with("::View"));
        assert!(name::<crate::Texture>().ends_with("::Texture"));
        assert!(name::<crate::RenderTexture>().ends_with("::RenderTexture"));
        assert!(name::<crate::Clock>().ends_with("::Clock"));
    }

    #[test]
    fn test_current_platform_is_supported() {
        if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
            assert!(Platform::current().is_ok());
        }
    }
}
