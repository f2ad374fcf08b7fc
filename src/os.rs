//! The default, OS-backed filesystem provider.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::{FileSystem, FileType, PathError, Permissions};

/// Filesystem provider that forwards directly to `std::fs`.
///
/// Zero-sized and stateless; the crate hands out one shared instance as
/// the default provider for every [`Path`](crate::Path) constructed
/// without an explicit provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    /// Create a new OS provider.
    pub const fn new() -> Self {
        Self
    }
}

/// The process-wide default provider, handed out per `Path` value.
pub(crate) fn default_provider() -> Arc<dyn FileSystem> {
    static DEFAULT: OnceLock<Arc<OsFileSystem>> = OnceLock::new();
    DEFAULT.get_or_init(|| Arc::new(OsFileSystem)).clone()
}

fn classify(meta: &fs::Metadata) -> FileType {
    let ft = meta.file_type();
    if ft.is_symlink() {
        FileType::Symlink
    } else if ft.is_dir() {
        FileType::Directory
    } else {
        FileType::File
    }
}

impl FileSystem for OsFileSystem {
    fn file_type(&self, path: &Path) -> Result<FileType, PathError> {
        let meta = fs::metadata(path).map_err(|e| PathError::io("stat", path, e))?;
        Ok(classify(&meta))
    }

    fn symlink_file_type(&self, path: &Path) -> Result<FileType, PathError> {
        let meta = fs::symlink_metadata(path).map_err(|e| PathError::io("stat", path, e))?;
        Ok(classify(&meta))
    }

    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn read_link(&self, path: &Path) -> Result<PathBuf, PathError> {
        fs::read_link(path).map_err(|e| PathError::io("read_link", path, e))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, PathError> {
        let meta = fs::metadata(path).map_err(|e| PathError::io("read_dir", path, e))?;
        if !meta.is_dir() {
            return Err(PathError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        let entries = fs::read_dir(path).map_err(|e| PathError::io("read_dir", path, e))?;
        // Entries that fail to read are skipped; the listing is best effort.
        Ok(entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
    }

    fn create_dir(&self, path: &Path, intermediates: bool) -> Result<(), PathError> {
        let result = if intermediates {
            fs::create_dir_all(path)
        } else {
            fs::create_dir(path)
        };
        result.map_err(|e| PathError::io("create", path, e))
    }

    fn remove(&self, path: &Path) -> Result<(), PathError> {
        let meta = fs::symlink_metadata(path).map_err(|e| PathError::io("delete", path, e))?;
        let result = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| PathError::io("delete", path, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<(), PathError> {
        match self.symlink_file_type(from)? {
            FileType::Directory => {
                fs::create_dir_all(to).map_err(|e| PathError::io("copy", to, e))?;
                for entry in self.read_dir(from)? {
                    let name = entry.file_name().ok_or_else(|| PathError::NotFound {
                        path: entry.clone(),
                    })?;
                    self.copy(&entry, &to.join(name))?;
                }
                Ok(())
            }
            FileType::Symlink => {
                let target = self.read_link(from)?;
                self.symlink(&target, to)
            }
            FileType::File => {
                fs::copy(from, to)
                    .map(|_| ())
                    .map_err(|e| PathError::io("copy", from, e))
            }
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), PathError> {
        fs::rename(from, to).map_err(|e| PathError::io("move", from, e))
    }

    #[cfg(unix)]
    fn symlink(&self, target: &Path, link: &Path) -> Result<(), PathError> {
        std::os::unix::fs::symlink(target, link).map_err(|e| PathError::io("link", link, e))
    }

    #[cfg(not(unix))]
    fn symlink(&self, _target: &Path, _link: &Path) -> Result<(), PathError> {
        Err(PathError::Unsupported { operation: "link" })
    }

    #[cfg(unix)]
    fn permissions(&self, path: &Path) -> Result<Permissions, PathError> {
        use std::os::unix::fs::PermissionsExt;

        let meta = fs::metadata(path).map_err(|e| PathError::io("permissions", path, e))?;
        Ok(Permissions::from_mode(meta.permissions().mode()))
    }

    #[cfg(not(unix))]
    fn permissions(&self, _path: &Path) -> Result<Permissions, PathError> {
        Err(PathError::Unsupported {
            operation: "permissions",
        })
    }

    #[cfg(unix)]
    fn set_permissions(&self, path: &Path, perm: Permissions) -> Result<(), PathError> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(perm.mode()))
            .map_err(|e| PathError::io("chmod", path, e))
    }

    #[cfg(not(unix))]
    fn set_permissions(&self, _path: &Path, _perm: Permissions) -> Result<(), PathError> {
        Err(PathError::Unsupported { operation: "chmod" })
    }
}
