//! Locating and opening the CSFML shared libraries.

use std::path::PathBuf;
use std::sync::OnceLock;

use libloading::Library;

use super::raw::{AudioApi, GraphicsApi, SystemApi};
use crate::config::{self, LoaderConfig};
use crate::error::{Error, Result};

/// A CSFML module, shipped as its own shared library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// csfml-system
    System,
    /// csfml-window
    Window,
    /// csfml-graphics
    Graphics,
    /// csfml-audio
    Audio,
}

impl Module {
    /// Module name as used in the library file name.
    pub fn name(self) -> &'static str {
        match self {
            Module::System => "system",
            Module::Window => "window",
            Module::Graphics => "graphics",
            Module::Audio => "audio",
        }
    }
}

/// Host platform, which decides the library file naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows (`.dll`).
    Windows,
    /// Linux (`.so`).
    Linux,
    /// macOS (`.dylib`).
    MacOs,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name (as in `std::env::consts::OS`) to a platform.
    pub fn from_os_name(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOs),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Library file names to try for a module, most specific first.
    pub fn library_candidates(self, module: Module, version: (u32, u32)) -> Vec<String> {
        let name = module.name();
        let (major, minor) = version;
        match self {
            Platform::Windows => vec![
                format!("csfml-{}-{}.dll", name, major),
                format!("csfml-{}.dll", name),
            ],
            Platform::Linux => vec![
                format!("libcsfml-{}.so.{}.{}", name, major, minor),
                format!("libcsfml-{}.so", name),
            ],
            Platform::MacOs => vec![
                format!("libcsfml-{}.{}.{}.dylib", name, major, minor),
                format!("libcsfml-{}.dylib", name),
            ],
        }
    }
}

/// Resolve the full candidate paths for a module under a configuration.
pub fn candidate_paths(platform: Platform, module: Module, config: &LoaderConfig) -> Vec<PathBuf> {
    platform
        .library_candidates(module, config.version)
        .into_iter()
        .map(|file| match &config.search_dir {
            Some(dir) => dir.join(file),
            None => PathBuf::from(file),
        })
        .collect()
}

/// Open the first candidate library for a module.
fn open(module: Module, config: &LoaderConfig) -> Result<Library> {
    let platform = Platform::current()?;
    let mut last_error = String::from("no candidates");

    for path in candidate_paths(platform, module, config) {
        match unsafe { Library::new(&path) } {
            Ok(library) => {
                log::debug!("loaded csfml-{} from {}", module.name(), path.display());
                return Ok(library);
            }
            Err(e) => {
                log::trace!("could not open {}: {}", path.display(), e);
                last_error = e.to_string();
            }
        }
    }

    Err(Error::LibraryLoad {
        library: format!("csfml-{}", module.name()),
        message: last_error,
    })
}

static SYSTEM: OnceLock<Result<SystemApi>> = OnceLock::new();
static GRAPHICS: OnceLock<Result<GraphicsApi>> = OnceLock::new();
static AUDIO: OnceLock<Result<AudioApi>> = OnceLock::new();

/// csfml-system function table, loaded on first use.
pub fn system() -> Result<&'static SystemApi> {
    SYSTEM
        .get_or_init(|| SystemApi::resolve(open(SystemApi::MODULE, config::current())?))
        .as_ref()
        .map_err(Clone::clone)
}

/// csfml-graphics function table, loaded on first use.
pub fn graphics() -> Result<&'static GraphicsApi> {
    GRAPHICS
        .get_or_init(|| GraphicsApi::resolve(open(GraphicsApi::MODULE, config::current())?))
        .as_ref()
        .map_err(Clone::clone)
}

/// csfml-audio function table, loaded on first use.
pub fn audio() -> Result<&'static AudioApi> {
    AUDIO
        .get_or_init(|| AudioApi::resolve(open(AudioApi::MODULE, config::current())?))
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_os_name() {
        assert_eq!(Platform::from_os_name("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os_name("macos").unwrap(), Platform::MacOs);
        assert_eq!(Platform::from_os_name("windows").unwrap(), Platform::Windows);

        let err = Platform::from_os_name("haiku").unwrap_err();
        assert!(err.is_unsupported_platform());
    }

    #[test]
    fn test_library_candidates() {
        assert_eq!(
            Platform::Windows.library_candidates(Module::Graphics, (2, 6)),
            vec!["csfml-graphics-2.dll", "csfml-graphics.dll"]
        );
        assert_eq!(
            Platform::Linux.library_candidates(Module::Audio, (2, 6)),
            vec!["libcsfml-audio.so.2.6", "libcsfml-audio.so"]
        );
        assert_eq!(
            Platform::MacOs.library_candidates(Module::System, (2, 5)),
            vec!["libcsfml-system.2.5.dylib", "libcsfml-system.dylib"]
        );
    }

    #[test]
    fn test_candidate_paths_use_search_dir() {
        let config = LoaderConfig {
            search_dir: Some(PathBuf::from("/opt/csfml/lib")),
            ..Default::default()
        };
        let paths = candidate_paths(Platform::Linux, Module::Window, &config);
        assert_eq!(paths[0], Path::new("/opt/csfml/lib/libcsfml-window.so.2.6"));
        assert_eq!(paths[1], Path::new("/opt/csfml/lib/libcsfml-window.so"));
    }

    #[test]
    fn test_candidate_paths_without_search_dir() {
        let paths = candidate_paths(Platform::Windows, Module::System, &LoaderConfig::default());
        assert_eq!(paths[0], Path::new("csfml-system-2.dll"));
    }
}
