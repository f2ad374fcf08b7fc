//! Well-known system directory registry.

use std::path::PathBuf;

/// Identifier for a platform-provided, well-known directory.
///
/// The mapping to a concrete location is platform-specific and partial:
/// [`resolve`](SystemDir::resolve) returns `None` for identifiers the
/// host platform has no registry entry for. Constructing a
/// [`Path`](crate::Path) through [`Path::system`](crate::Path::system)
/// degrades to the home directory in that case instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemDir {
    /// Music / audio files.
    Audio,
    /// Per-user cache data.
    Caches,
    /// Per-user configuration.
    Config,
    /// Per-user roaming application data.
    Data,
    /// Per-user local (non-roaming) application data.
    DataLocal,
    /// The user's desktop.
    Desktop,
    /// The user's documents.
    Documents,
    /// The user's downloads.
    Downloads,
    /// User-installed executables.
    Executables,
    /// User fonts.
    Fonts,
    /// The user's home directory.
    Home,
    /// The user's pictures.
    Pictures,
    /// The user's shared/public directory.
    Public,
    /// The user's runtime directory (sockets, named pipes).
    Runtime,
    /// Per-user state data (logs, history).
    State,
    /// The user's document templates.
    Templates,
    /// The user's trash. No host registry exposes this portably, so it
    /// never resolves and falls back like any unsupported identifier.
    Trash,
    /// The user's videos / movies.
    Videos,
}

impl SystemDir {
    /// Look up the canonical location for this identifier.
    ///
    /// Pure and side-effect free: the same identifier yields the same
    /// answer for the life of the process environment. `None` means the
    /// platform has no mapping, not that an error occurred.
    pub fn resolve(self) -> Option<PathBuf> {
        match self {
            SystemDir::Audio => dirs::audio_dir(),
            SystemDir::Caches => dirs::cache_dir(),
            SystemDir::Config => dirs::config_dir(),
            SystemDir::Data => dirs::data_dir(),
            SystemDir::DataLocal => dirs::data_local_dir(),
            SystemDir::Desktop => dirs::desktop_dir(),
            SystemDir::Documents => dirs::document_dir(),
            SystemDir::Downloads => dirs::download_dir(),
            SystemDir::Executables => dirs::executable_dir(),
            SystemDir::Fonts => dirs::font_dir(),
            SystemDir::Home => dirs::home_dir(),
            SystemDir::Pictures => dirs::picture_dir(),
            SystemDir::Public => dirs::public_dir(),
            SystemDir::Runtime => dirs::runtime_dir(),
            SystemDir::State => dirs::state_dir(),
            SystemDir::Templates => dirs::template_dir(),
            SystemDir::Trash => None,
            SystemDir::Videos => dirs::video_dir(),
        }
    }
}
