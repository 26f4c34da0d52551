//! Loader configuration.
//!
//! Decides where the CSFML libraries are looked up. The configuration is
//! fixed once, either by [`crate::init`] or on the first native call.

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Environment variable naming a directory that holds the CSFML libraries.
pub const ENV_LIBRARY_DIR: &str = "CSFML_LIBRARY_DIR";

/// Environment variable overriding the CSFML version ("major.minor").
pub const ENV_VERSION: &str = "CSFML_VERSION";

/// CSFML version this crate's tables are written against.
pub const DEFAULT_VERSION: (u32, u32) = (2, 6);

/// Options for locating CSFML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory to load libraries from. `None` uses the system search path.
    pub search_dir: Option<PathBuf>,
    /// CSFML major.minor version used in versioned file names.
    pub version: (u32, u32),
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            search_dir: None,
            version: DEFAULT_VERSION,
        }
    }
}

impl LoaderConfig {
    /// Build a configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(ENV_LIBRARY_DIR).ok(), env::var(ENV_VERSION).ok())
    }

    fn from_vars(dir: Option<String>, version: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = dir.filter(|d| !d.is_empty()) {
            config.search_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = version {
            match parse_version(&raw) {
                Some(version) => config.version = version,
                None => log::warn!("ignoring malformed {}={:?}", ENV_VERSION, raw),
            }
        }

        config
    }

    /// Set the search directory.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = Some(dir.into());
        self
    }

    /// Set the CSFML version.
    pub fn with_version(mut self, major: u32, minor: u32) -> Self {
        self.version = (major, minor);
        self
    }
}

fn parse_version(raw: &str) -> Option<(u32, u32)> {
    let (major, minor) = raw.trim().split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

static CONFIG: OnceLock<LoaderConfig> = OnceLock::new();

/// Fix the loader configuration.
pub(crate) fn set(config: LoaderConfig) -> Result<()> {
    CONFIG.set(config).map_err(|_| Error::AlreadyInitialized)
}

/// The active configuration, defaulting to [`LoaderConfig::from_env`].
pub(crate) fn current() -> &'static LoaderConfig {
    CONFIG.get_or_init(LoaderConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("2.6"), Some((2, 6)));
        assert_eq!(parse_version(" 3.0 "), Some((3, 0)));
        assert_eq!(parse_version("2"), None);
        assert_eq!(parse_version("two.six"), None);
    }

    #[test]
    fn test_from_vars() {
        let config = LoaderConfig::from_vars(Some("/usr/local/lib".into()), Some("2.5".into()));
        assert_eq!(config.search_dir, Some(PathBuf::from("/usr/local/lib")));
        assert_eq!(config.version, (2, 5));

        let config = LoaderConfig::from_vars(Some(String::new()), Some("bad".into()));
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = LoaderConfig::default()
            .with_search_dir("/opt/csfml")
            .with_version(2, 5);
        assert_eq!(config.search_dir, Some(PathBuf::from("/opt/csfml")));
        assert_eq!(config.version, (2, 5));
    }
}
