//! Error types for the sfml crate.

use thiserror::Error;

/// Result type alias for sfml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sfml operations.
///
/// `Clone` so a failed library load can be cached and handed to every caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Host operating system has no known CSFML artifact naming.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// None of the candidate library files could be opened.
    #[error("failed to load {library}: {message}")]
    LibraryLoad {
        /// Library module (e.g. "graphics").
        library: String,
        /// Loader message for the last candidate tried.
        message: String,
    },

    /// Library opened but an expected function is missing.
    #[error("missing symbol {symbol}: {message}")]
    MissingSymbol {
        /// Symbol name.
        symbol: String,
        /// Loader message.
        message: String,
    },

    /// A native create or copy returned the null handle.
    #[error("failed to create {0}")]
    CreationFailed(&'static str),

    /// The wrapper's native resource was already released.
    #[error("already disposed")]
    AlreadyDisposed,

    /// Function argument is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No audio capture device on this system.
    #[error("audio capture unavailable")]
    CaptureUnavailable,

    /// The native recorder refused to start.
    #[error("audio capture failed to start")]
    CaptureStartFailed,

    /// Writing a resource to disk failed.
    #[error("failed to save to {0}")]
    SaveFailed(String),

    /// Loader configuration was already fixed.
    #[error("library already initialized")]
    AlreadyInitialized,
}

impl Error {
    /// Check if this is an unsupported platform error.
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, Error::UnsupportedPlatform(_))
    }

    /// Check if this is a library load or missing symbol error.
    pub fn is_library_load(&self) -> bool {
        matches!(self, Error::LibraryLoad { .. } | Error::MissingSymbol { .. })
    }

    /// Check if this is a creation failure.
    pub fn is_creation_failed(&self) -> bool {
        matches!(self, Error::CreationFailed(_))
    }
}
