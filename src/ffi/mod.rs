//! FFI bindings to CSFML.
//!
//! This module contains the low-level C tables. Users should prefer the
//! safe Rust wrappers in the parent modules.

pub mod error;
pub mod handles;
pub mod library;
pub mod raw;

pub use error::check_created;
pub use handles::*;
pub use library::{audio, graphics, system};
pub use raw::*;
