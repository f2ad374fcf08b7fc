//! The filesystem-access provider trait.
//!
//! Every [`Path`](crate::Path) value holds a provider and forwards its
//! filesystem-backed queries and mutations to it. The default is
//! [`OsFileSystem`](crate::OsFileSystem); tests substitute their own
//! implementation to run path logic against a fake filesystem.

use std::path::{Path, PathBuf};

use crate::{FileType, PathError, Permissions};

/// Strategy trait for filesystem access.
///
/// One method per OS concern, each a direct blocking call. Providers are
/// stateless configuration: they carry no lifecycle beyond being held
/// alongside a [`Path`](crate::Path) value behind an `Arc`.
///
/// All fallible methods return `Result`; the graceful-degradation policy
/// (missing paths reading as `false`, listing failures reading as empty)
/// is applied by the `Path` wrapper, not by providers.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and is used as `Arc<dyn FileSystem>`.
pub trait FileSystem: Send + Sync {
    /// Classify an entry, following symlinks.
    ///
    /// Never returns [`FileType::Symlink`]; a link is reported as its
    /// target's type, and a dangling link as an error.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if the path does not exist
    fn file_type(&self, path: &Path) -> Result<FileType, PathError>;

    /// Classify an entry without following symlinks.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if the path does not exist
    fn symlink_file_type(&self, path: &Path) -> Result<FileType, PathError>;

    /// Check whether the path exists (following symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Read the target of a symbolic link.
    ///
    /// Returns the raw target path, not canonicalized.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if the path does not exist
    /// - [`PathError::Io`] if the path is not a symlink
    fn read_link(&self, path: &Path) -> Result<PathBuf, PathError>;

    /// List directory entries as full paths, in unspecified order.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if the path does not exist
    /// - [`PathError::NotADirectory`] if the path is not a directory
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, PathError>;

    /// Create a directory, with ancestors when `intermediates` is set.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if `intermediates` is unset and the parent is missing
    /// - [`PathError::AlreadyExists`] if a non-directory occupies the path
    fn create_dir(&self, path: &Path, intermediates: bool) -> Result<(), PathError>;

    /// Remove a file, a symlink, or a directory tree recursively.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if the path does not exist
    fn remove(&self, path: &Path) -> Result<(), PathError>;

    /// Copy a file or a directory tree recursively. The source survives.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if `from` does not exist
    fn copy(&self, from: &Path, to: &Path) -> Result<(), PathError>;

    /// Rename an entry. Subject to OS cross-device constraints.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if `from` does not exist
    fn rename(&self, from: &Path, to: &Path) -> Result<(), PathError>;

    /// Create a symbolic link at `link` pointing at `target`.
    ///
    /// # Errors
    ///
    /// - [`PathError::AlreadyExists`] if `link` already exists
    /// - [`PathError::Unsupported`] on platforms without symlinks
    fn symlink(&self, target: &Path, link: &Path) -> Result<(), PathError>;

    /// Query the POSIX permission bits.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if the path does not exist
    /// - [`PathError::Unsupported`] on platforms without POSIX modes
    fn permissions(&self, path: &Path) -> Result<Permissions, PathError>;

    /// Set POSIX permission bits.
    ///
    /// # Errors
    ///
    /// - [`PathError::NotFound`] if the path does not exist
    /// - [`PathError::Unsupported`] on platforms without POSIX modes
    fn set_permissions(&self, path: &Path, perm: Permissions) -> Result<(), PathError>;
}
