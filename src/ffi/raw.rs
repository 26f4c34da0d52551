//! Raw C function tables for CSFML.
//!
//! CSFML is opened at run time, so instead of `extern` blocks each module is
//! described by a table of function pointers resolved from the loaded library.
//! Users should prefer the safe Rust wrappers in the parent modules.

use std::os::raw::{c_char, c_float, c_int, c_uint, c_void};

use libloading::Library;

use super::handles::*;
use super::library::Module;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::rect::{FloatRect, IntRect};
use crate::time::Time;
use crate::types::{ContextSettings, VideoMode};
use crate::vector::{Vector2f, Vector2u};

/// C boolean.
pub type SfBool = c_int;

pub const SF_FALSE: SfBool = 0;
pub const SF_TRUE: SfBool = 1;

/// Read a C boolean. Any non-zero value is true.
#[inline]
pub fn from_sf_bool(value: SfBool) -> bool {
    value != SF_FALSE
}

/// Convert a Rust bool to a C boolean.
#[inline]
pub fn sf_bool(value: bool) -> SfBool {
    if value {
        SF_TRUE
    } else {
        SF_FALSE
    }
}

/// Context settings structure.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SfContextSettings {
    pub depth_bits: c_uint,
    pub stencil_bits: c_uint,
    pub antialiasing_level: c_uint,
    pub major_version: c_uint,
    pub minor_version: c_uint,
    pub attribute_flags: u32,
    pub srgb_capable: SfBool,
}

impl From<&ContextSettings> for SfContextSettings {
    fn from(settings: &ContextSettings) -> Self {
        Self {
            depth_bits: settings.depth_bits,
            stencil_bits: settings.stencil_bits,
            antialiasing_level: settings.antialiasing_level,
            major_version: settings.major_version,
            minor_version: settings.minor_version,
            attribute_flags: settings.attribute_flags,
            srgb_capable: sf_bool(settings.srgb_capable),
        }
    }
}

/// Recorder start hook, run on the capture thread.
pub type SfSoundRecorderStartCallback = Option<unsafe extern "C" fn(user_data: *mut c_void) -> SfBool>;

/// Recorder sample hook, run on the capture thread.
pub type SfSoundRecorderProcessCallback = Option<
    unsafe extern "C" fn(samples: *const i16, sample_count: usize, user_data: *mut c_void) -> SfBool,
>;

/// Recorder stop hook, run on the capture thread.
pub type SfSoundRecorderStopCallback = Option<unsafe extern "C" fn(user_data: *mut c_void)>;

/// Macro to define a function table for one CSFML module.
///
/// The table keeps the `Library` alive for as long as the pointers exist.
macro_rules! native_api {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($module:expr) {
            $( $field:ident = $symbol:literal : fn($($arg:ty),*) $(-> $ret:ty)?; )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $( pub $field: unsafe extern "C" fn($($arg),*) $(-> $ret)?, )*
            _library: Library,
        }

        impl $name {
            /// Module this table is resolved from.
            pub const MODULE: Module = $module;

            /// Resolve every symbol of the table from an opened library.
            pub(crate) fn resolve(library: Library) -> Result<Self> {
                unsafe {
                    $(
                        let $field = *library
                            .get::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>(
                                concat!($symbol, "\0").as_bytes(),
                            )
                            .map_err(|e| Error::MissingSymbol {
                                symbol: $symbol.to_string(),
                                message: e.to_string(),
                            })?;
                    )*
                    Ok(Self {
                        $( $field, )*
                        _library: library,
                    })
                }
            }
        }
    };
}

native_api! {
    /// csfml-system functions.
    pub struct SystemApi(Module::System) {
        clock_create = "sfClock_create": fn() -> SfClock;
        clock_copy = "sfClock_copy": fn(SfClock) -> SfClock;
        clock_destroy = "sfClock_destroy": fn(SfClock);
        clock_get_elapsed_time = "sfClock_getElapsedTime": fn(SfClock) -> Time;
        clock_restart = "sfClock_restart": fn(SfClock) -> Time;
        sleep = "sfSleep": fn(Time);
    }
}

native_api! {
    /// csfml-graphics functions.
    pub struct GraphicsApi(Module::Graphics) {
        view_create = "sfView_create": fn() -> SfView;
        view_create_from_rect = "sfView_createFromRect": fn(FloatRect) -> SfView;
        view_copy = "sfView_copy": fn(SfView) -> SfView;
        view_destroy = "sfView_destroy": fn(SfView);
        view_set_center = "sfView_setCenter": fn(SfView, Vector2f);
        view_set_size = "sfView_setSize": fn(SfView, Vector2f);
        view_set_rotation = "sfView_setRotation": fn(SfView, c_float);
        view_set_viewport = "sfView_setViewport": fn(SfView, FloatRect);
        view_get_center = "sfView_getCenter": fn(SfView) -> Vector2f;
        view_get_size = "sfView_getSize": fn(SfView) -> Vector2f;
        view_get_rotation = "sfView_getRotation": fn(SfView) -> c_float;
        view_get_viewport = "sfView_getViewport": fn(SfView) -> FloatRect;
        view_move = "sfView_move": fn(SfView, Vector2f);
        view_rotate = "sfView_rotate": fn(SfView, c_float);
        view_zoom = "sfView_zoom": fn(SfView, c_float);

        texture_create = "sfTexture_create": fn(c_uint, c_uint) -> SfTexture;
        texture_create_from_file = "sfTexture_createFromFile": fn(*const c_char, *const IntRect) -> SfTexture;
        texture_copy = "sfTexture_copy": fn(SfTexture) -> SfTexture;
        texture_destroy = "sfTexture_destroy": fn(SfTexture);
        texture_get_size = "sfTexture_getSize": fn(SfTexture) -> Vector2u;
        texture_update_from_pixels = "sfTexture_updateFromPixels": fn(SfTexture, *const u8, c_uint, c_uint, c_uint, c_uint);
        texture_set_smooth = "sfTexture_setSmooth": fn(SfTexture, SfBool);
        texture_is_smooth = "sfTexture_isSmooth": fn(SfTexture) -> SfBool;

        render_texture_create = "sfRenderTexture_createWithSettings": fn(c_uint, c_uint, *const SfContextSettings) -> SfRenderTexture;
        render_texture_destroy = "sfRenderTexture_destroy": fn(SfRenderTexture);
        render_texture_get_size = "sfRenderTexture_getSize": fn(SfRenderTexture) -> Vector2u;
        render_texture_clear = "sfRenderTexture_clear": fn(SfRenderTexture, Color);
        render_texture_display = "sfRenderTexture_display": fn(SfRenderTexture);
        render_texture_set_view = "sfRenderTexture_setView": fn(SfRenderTexture, SfView);
        render_texture_get_view = "sfRenderTexture_getView": fn(SfRenderTexture) -> SfView;
        render_texture_get_default_view = "sfRenderTexture_getDefaultView": fn(SfRenderTexture) -> SfView;
        render_texture_get_texture = "sfRenderTexture_getTexture": fn(SfRenderTexture) -> SfTexture;
        render_texture_set_smooth = "sfRenderTexture_setSmooth": fn(SfRenderTexture, SfBool);

        render_window_create = "sfRenderWindow_createUnicode": fn(VideoMode, *const u32, u32, *const SfContextSettings) -> SfRenderWindow;
        render_window_destroy = "sfRenderWindow_destroy": fn(SfRenderWindow);
        render_window_close = "sfRenderWindow_close": fn(SfRenderWindow);
        render_window_is_open = "sfRenderWindow_isOpen": fn(SfRenderWindow) -> SfBool;
        render_window_get_size = "sfRenderWindow_getSize": fn(SfRenderWindow) -> Vector2u;
        render_window_set_title = "sfRenderWindow_setUnicodeTitle": fn(SfRenderWindow, *const u32);
        render_window_set_framerate_limit = "sfRenderWindow_setFramerateLimit": fn(SfRenderWindow, c_uint);
        render_window_set_vsync = "sfRenderWindow_setVerticalSyncEnabled": fn(SfRenderWindow, SfBool);
        render_window_clear = "sfRenderWindow_clear": fn(SfRenderWindow, Color);
        render_window_display = "sfRenderWindow_display": fn(SfRenderWindow);
        render_window_set_view = "sfRenderWindow_setView": fn(SfRenderWindow, SfView);
        render_window_get_default_view = "sfRenderWindow_getDefaultView": fn(SfRenderWindow) -> SfView;
    }
}

native_api! {
    /// csfml-audio functions.
    pub struct AudioApi(Module::Audio) {
        sound_buffer_create_from_samples = "sfSoundBuffer_createFromSamples": fn(*const i16, u64, c_uint, c_uint) -> SfSoundBuffer;
        sound_buffer_create_from_file = "sfSoundBuffer_createFromFile": fn(*const c_char) -> SfSoundBuffer;
        sound_buffer_copy = "sfSoundBuffer_copy": fn(SfSoundBuffer) -> SfSoundBuffer;
        sound_buffer_destroy = "sfSoundBuffer_destroy": fn(SfSoundBuffer);
        sound_buffer_save_to_file = "sfSoundBuffer_saveToFile": fn(SfSoundBuffer, *const c_char) -> SfBool;
        sound_buffer_get_samples = "sfSoundBuffer_getSamples": fn(SfSoundBuffer) -> *const i16;
        sound_buffer_get_sample_count = "sfSoundBuffer_getSampleCount": fn(SfSoundBuffer) -> u64;
        sound_buffer_get_sample_rate = "sfSoundBuffer_getSampleRate": fn(SfSoundBuffer) -> c_uint;
        sound_buffer_get_channel_count = "sfSoundBuffer_getChannelCount": fn(SfSoundBuffer) -> c_uint;
        sound_buffer_get_duration = "sfSoundBuffer_getDuration": fn(SfSoundBuffer) -> Time;

        sound_create = "sfSound_create": fn() -> SfSound;
        sound_copy = "sfSound_copy": fn(SfSound) -> SfSound;
        sound_destroy = "sfSound_destroy": fn(SfSound);
        sound_play = "sfSound_play": fn(SfSound);
        sound_pause = "sfSound_pause": fn(SfSound);
        sound_stop = "sfSound_stop": fn(SfSound);
        sound_set_buffer = "sfSound_setBuffer": fn(SfSound, SfSoundBuffer);
        sound_get_status = "sfSound_getStatus": fn(SfSound) -> c_int;
        sound_set_volume = "sfSound_setVolume": fn(SfSound, c_float);
        sound_get_volume = "sfSound_getVolume": fn(SfSound) -> c_float;
        sound_set_loop = "sfSound_setLoop": fn(SfSound, SfBool);
        sound_get_loop = "sfSound_getLoop": fn(SfSound) -> SfBool;
        sound_set_playing_offset = "sfSound_setPlayingOffset": fn(SfSound, Time);
        sound_get_playing_offset = "sfSound_getPlayingOffset": fn(SfSound) -> Time;

        sound_recorder_create = "sfSoundRecorder_create": fn(
            SfSoundRecorderStartCallback,
            SfSoundRecorderProcessCallback,
            SfSoundRecorderStopCallback,
            *mut c_void
        ) -> SfSoundRecorder;
        sound_recorder_destroy = "sfSoundRecorder_destroy": fn(SfSoundRecorder);
        sound_recorder_start = "sfSoundRecorder_start": fn(SfSoundRecorder, c_uint) -> SfBool;
        sound_recorder_stop = "sfSoundRecorder_stop": fn(SfSoundRecorder);
        sound_recorder_get_sample_rate = "sfSoundRecorder_getSampleRate": fn(SfSoundRecorder) -> c_uint;
        sound_recorder_is_available = "sfSoundRecorder_isAvailable": fn() -> SfBool;
        sound_recorder_set_processing_interval = "sfSoundRecorder_setProcessingInterval": fn(SfSoundRecorder, Time);

        sound_buffer_recorder_create = "sfSoundBufferRecorder_create": fn() -> SfSoundBufferRecorder;
        sound_buffer_recorder_destroy = "sfSoundBufferRecorder_destroy": fn(SfSoundBufferRecorder);
        sound_buffer_recorder_start = "sfSoundBufferRecorder_start": fn(SfSoundBufferRecorder, c_uint) -> SfBool;
        sound_buffer_recorder_stop = "sfSoundBufferRecorder_stop": fn(SfSoundBufferRecorder);
        sound_buffer_recorder_get_sample_rate = "sfSoundBufferRecorder_getSampleRate": fn(SfSoundBufferRecorder) -> c_uint;
        sound_buffer_recorder_get_buffer = "sfSoundBufferRecorder_getBuffer": fn(SfSoundBufferRecorder) -> SfSoundBuffer;
    }
}
