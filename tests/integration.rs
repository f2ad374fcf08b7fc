//! Integration tests for the `Path` value type.
//!
//! Two halves:
//! 1. An in-memory [`FileSystem`] provider proves the provider seam works
//!    end-to-end and lets path logic run against a fake filesystem.
//! 2. Real-OS scenarios under a temporary directory exercise the
//!    directory-mutation operation set against `std::fs`.

use pathkit::{FileSystem, FileType, Path, PathError, Permissions};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

// =============================================================================
// In-memory provider
// =============================================================================

/// A small in-memory filesystem implementing the full provider trait.
#[derive(Default)]
struct MemoryFs {
    files: RwLock<HashSet<PathBuf>>,
    dirs: RwLock<HashSet<PathBuf>>,
    symlinks: RwLock<HashMap<PathBuf, PathBuf>>,
    modes: RwLock<HashMap<PathBuf, Permissions>>,
}

impl MemoryFs {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn entry_type(&self, path: &std::path::Path) -> Option<FileType> {
        if self.symlinks.read().unwrap().contains_key(path) {
            Some(FileType::Symlink)
        } else if self.dirs.read().unwrap().contains(path) {
            Some(FileType::Directory)
        } else if self.files.read().unwrap().contains(path) {
            Some(FileType::File)
        } else {
            None
        }
    }

    fn resolved_type(&self, path: &std::path::Path, depth: u8) -> Option<FileType> {
        match self.entry_type(path)? {
            FileType::Symlink if depth > 0 => {
                let target = self.symlinks.read().unwrap().get(path).cloned()?;
                self.resolved_type(&target, depth - 1)
            }
            FileType::Symlink => None,
            other => Some(other),
        }
    }
}

impl FileSystem for MemoryFs {
    fn file_type(&self, path: &std::path::Path) -> Result<FileType, PathError> {
        self.resolved_type(path, 8).ok_or_else(|| PathError::NotFound {
            path: path.to_path_buf(),
        })
    }

    fn symlink_file_type(&self, path: &std::path::Path) -> Result<FileType, PathError> {
        self.entry_type(path).ok_or_else(|| PathError::NotFound {
            path: path.to_path_buf(),
        })
    }

    fn exists(&self, path: &std::path::Path) -> bool {
        self.resolved_type(path, 8).is_some()
    }

    fn read_link(&self, path: &std::path::Path) -> Result<PathBuf, PathError> {
        self.symlinks
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| PathError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn read_dir(&self, path: &std::path::Path) -> Result<Vec<PathBuf>, PathError> {
        match self.entry_type(path) {
            Some(FileType::Directory) => {}
            Some(_) => {
                return Err(PathError::NotADirectory {
                    path: path.to_path_buf(),
                });
            }
            None => {
                return Err(PathError::NotFound {
                    path: path.to_path_buf(),
                });
            }
        }

        let mut entries = Vec::new();
        for set in [&self.files, &self.dirs] {
            for candidate in set.read().unwrap().iter() {
                if candidate.parent() == Some(path) {
                    entries.push(candidate.clone());
                }
            }
        }
        for candidate in self.symlinks.read().unwrap().keys() {
            if candidate.parent() == Some(path) {
                entries.push(candidate.clone());
            }
        }
        Ok(entries)
    }

    fn create_dir(&self, path: &std::path::Path, intermediates: bool) -> Result<(), PathError> {
        if self.entry_type(path).is_some_and(|t| !t.is_dir()) {
            return Err(PathError::AlreadyExists {
                path: path.to_path_buf(),
                operation: "create",
            });
        }
        if intermediates {
            let mut current = PathBuf::new();
            for component in path.components() {
                current.push(component);
                self.dirs.write().unwrap().insert(current.clone());
            }
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !self.dirs.read().unwrap().contains(parent) {
                    return Err(PathError::NotFound {
                        path: parent.to_path_buf(),
                    });
                }
            }
            self.dirs.write().unwrap().insert(path.to_path_buf());
        }
        Ok(())
    }

    fn remove(&self, path: &std::path::Path) -> Result<(), PathError> {
        match self.entry_type(path) {
            Some(FileType::Symlink) => {
                self.symlinks.write().unwrap().remove(path);
            }
            Some(FileType::File) => {
                self.files.write().unwrap().remove(path);
            }
            Some(FileType::Directory) => {
                self.dirs
                    .write()
                    .unwrap()
                    .retain(|p| !p.starts_with(path));
                self.files
                    .write()
                    .unwrap()
                    .retain(|p| !p.starts_with(path));
                self.symlinks
                    .write()
                    .unwrap()
                    .retain(|p, _| !p.starts_with(path));
            }
            None => {
                return Err(PathError::NotFound {
                    path: path.to_path_buf(),
                });
            }
        }
        self.modes.write().unwrap().remove(path);
        Ok(())
    }

    fn copy(&self, from: &std::path::Path, to: &std::path::Path) -> Result<(), PathError> {
        match self.symlink_file_type(from)? {
            FileType::File => {
                self.files.write().unwrap().insert(to.to_path_buf());
            }
            FileType::Symlink => {
                let target = self.read_link(from)?;
                self.symlinks.write().unwrap().insert(to.to_path_buf(), target);
            }
            FileType::Directory => {
                self.dirs.write().unwrap().insert(to.to_path_buf());
                for entry in self.read_dir(from)? {
                    let name = entry.file_name().expect("listed entries have names");
                    self.copy(&entry, &to.join(name))?;
                }
            }
        }
        Ok(())
    }

    fn rename(&self, from: &std::path::Path, to: &std::path::Path) -> Result<(), PathError> {
        self.copy(from, to)?;
        self.remove(from)
    }

    fn symlink(&self, target: &std::path::Path, link: &std::path::Path) -> Result<(), PathError> {
        if self.entry_type(link).is_some() {
            return Err(PathError::AlreadyExists {
                path: link.to_path_buf(),
                operation: "link",
            });
        }
        self.symlinks
            .write()
            .unwrap()
            .insert(link.to_path_buf(), target.to_path_buf());
        Ok(())
    }

    fn permissions(&self, path: &std::path::Path) -> Result<Permissions, PathError> {
        if self.entry_type(path).is_none() {
            return Err(PathError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(self
            .modes
            .read()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or_default())
    }

    fn set_permissions(&self, path: &std::path::Path, perm: Permissions) -> Result<(), PathError> {
        if self.entry_type(path).is_none() {
            return Err(PathError::NotFound {
                path: path.to_path_buf(),
            });
        }
        self.modes.write().unwrap().insert(path.to_path_buf(), perm);
        Ok(())
    }
}

fn mem_path(fs: &Arc<MemoryFs>, raw: &str) -> Path {
    Path::with_provider(raw, fs.clone() as Arc<dyn FileSystem>)
}

// =============================================================================
// Provider substitution
// =============================================================================

#[test]
fn substitute_provider_never_touches_disk() {
    let fs = MemoryFs::new();
    let root = mem_path(&fs, "/memfs-only-root");

    root.create().unwrap();
    let docs = root.add("docs").unwrap();
    assert!(docs.is_directory());
    assert!(docs.exists());

    // Nothing was created on the real filesystem.
    assert!(!std::path::Path::new("/memfs-only-root").exists());
}

#[test]
fn derivations_are_provider_independent() {
    let fs = MemoryFs::new();
    let p = mem_path(&fs, "/a/b/archive.tar.gz");

    assert_eq!(p.name(), "archive.tar");
    assert_eq!(p.basename(), "archive");
    assert_eq!(p.extension().as_deref(), Some("gz"));
    assert!(p.is_absolute());
}

#[test]
fn children_of_non_directory_is_empty() {
    let fs = MemoryFs::new();
    let missing = mem_path(&fs, "/nowhere");
    assert!(missing.children().is_empty());

    fs.files.write().unwrap().insert(PathBuf::from("/plain"));
    let file = mem_path(&fs, "/plain");
    assert!(file.children().is_empty());
}

#[test]
fn children_of_fresh_directory_is_empty() {
    let fs = MemoryFs::new();
    let dir = mem_path(&fs, "/fresh");
    dir.create().unwrap();
    assert!(dir.children().is_empty());
}

#[test]
fn delete_missing_path_is_silent() {
    let fs = MemoryFs::new();
    mem_path(&fs, "/never/was").delete().unwrap();
}

#[test]
fn copy_requires_force_for_existing_destination() {
    let fs = MemoryFs::new();
    let root = mem_path(&fs, "/r");
    root.create().unwrap();
    let a = root.add("a").unwrap();
    let b = root.add("b").unwrap();

    let result = a.copy_to(&b, false);
    assert!(matches!(
        result,
        Err(PathError::AlreadyExists {
            operation: "copy",
            ..
        })
    ));

    a.copy_to(&b, true).unwrap();
    assert!(a.is_directory());
    assert!(b.is_directory());
}

#[test]
fn move_removes_the_source() {
    let fs = MemoryFs::new();
    let root = mem_path(&fs, "/r");
    root.create().unwrap();
    let a = root.add("a").unwrap();

    a.move_to(&root.child("e"), true).unwrap();
    assert!(root.child("e").is_directory());
    assert!(!a.is_directory());
    assert!(!a.exists());
}

#[test]
fn link_is_visible_through_queries() {
    let fs = MemoryFs::new();
    let root = mem_path(&fs, "/r");
    root.create().unwrap();
    let a = root.add("a").unwrap();
    let c = root.child("c");

    a.link_to(&c, false).unwrap();
    assert!(c.is_link());
    // A link to a directory reads as a directory when followed.
    assert!(c.is_directory());
    assert!(!c.is_file());

    let target = c.link_path().expect("link target");
    assert_eq!(target.location(), a.location());
}

#[test]
fn dangling_link_is_deleted_not_skipped() {
    let fs = MemoryFs::new();
    let root = mem_path(&fs, "/r");
    root.create().unwrap();
    let a = root.add("a").unwrap();
    let c = root.child("c");
    a.link_to(&c, false).unwrap();
    a.delete().unwrap();

    // Dangling: present as a link, absent when followed.
    assert!(c.is_link());
    assert!(!c.exists());

    c.delete().unwrap();
    assert!(!c.is_link());
}

#[test]
fn permissions_errors_are_recoverable() {
    let fs = MemoryFs::new();
    let missing = mem_path(&fs, "/nope");

    // A failing query is an Err value, not a process abort.
    assert!(matches!(
        missing.permissions(),
        Err(PathError::NotFound { .. })
    ));

    let dir = mem_path(&fs, "/d");
    dir.create().unwrap();
    dir.chmod(0o700).unwrap();
    assert_eq!(dir.permissions().unwrap().mode(), 0o700);
}

// =============================================================================
// Real-OS scenarios
// =============================================================================

fn temp_root() -> (tempfile::TempDir, Path) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = Path::from(dir.path().to_path_buf());
    (dir, path)
}

#[test]
fn invalid_path_is_not_a_directory() {
    let invalid = Path::new("ZCQv1XRkC5BbwAmGW9pqLWnDCr3");
    assert!(!invalid.is_directory());
    assert!(!invalid.exists());
}

#[test]
fn created_directory_exists() {
    let (_guard, root) = temp_root();
    let dir = root.child("made");

    dir.create().unwrap();
    assert!(dir.exists());
    assert!(dir.is_directory());
    assert!(dir.children().is_empty());

    // Idempotent: creating again is a no-op.
    dir.create().unwrap();
}

#[test]
fn create_without_intermediates_requires_parent() {
    let (_guard, root) = temp_root();
    let nested = root.child("missing").child("leaf");
    assert!(nested.create_with(false, None).is_err());
    assert!(nested.create_with(true, None).is_ok());
}

#[test]
fn delete_is_silent_for_missing_and_thorough_for_trees() {
    let (_guard, root) = temp_root();

    root.child("never-created").delete().unwrap();

    let tree = root.add("tree").unwrap();
    tree.add("inner").unwrap();
    tree.delete().unwrap();
    assert!(!tree.exists());
}

#[test]
fn copy_keeps_source_and_move_does_not() {
    let (_guard, root) = temp_root();
    let a = root.add("a").unwrap();

    a.copy_to(&root.child("b"), true).unwrap();
    assert!(root.child("b").is_directory());
    assert!(a.is_directory());

    a.move_to(&root.child("e"), true).unwrap();
    assert!(root.child("e").is_directory());
    assert!(!a.is_directory());
}

#[test]
#[cfg(unix)]
fn permissions_round_trip_through_chmod() {
    let (_guard, root) = temp_root();
    let dir = root.add("perms").unwrap();

    dir.chmod(0o755).unwrap();
    assert_eq!(dir.permissions().unwrap().mode(), 0o755);

    dir.chmod(0o700).unwrap();
    assert_eq!(dir.permissions().unwrap().mode(), 0o700);
}

#[test]
#[cfg(unix)]
fn directory_structure_scenario() {
    let (_guard, test) = temp_root();

    let a = test.add("a").unwrap();
    let b = test.child("b");
    let c = test.child("c");
    let d = test.child("d");
    let e = test.child("e");
    test.add(".h").unwrap();

    a.copy_to(&b, true).unwrap();
    assert!(b.is_directory());

    a.link_to(&c, true).unwrap();
    assert!(c.is_directory());

    d.create().unwrap();
    assert!(d.is_directory());

    a.move_to(&e, true).unwrap();
    assert!(e.is_directory());
    assert!(!a.is_directory());

    // Listing order is unspecified; compare as sets.
    let visible_dirs: HashSet<String> = test
        .children()
        .into_iter()
        .filter(|p| p.is_directory())
        .filter(|p| p.is_visible())
        .filter(|p| !p.is_link())
        .map(|p| p.name())
        .collect();
    assert_eq!(
        visible_dirs,
        HashSet::from(["b".to_string(), "d".to_string(), "e".to_string()])
    );

    // c dangles after the move: still a link, no longer a directory.
    let links: HashSet<String> = test
        .children()
        .into_iter()
        .filter(|p| p.is_link())
        .map(|p| p.name())
        .collect();
    assert_eq!(links, HashSet::from(["c".to_string()]));
    assert!(!c.is_directory());

    b.delete().unwrap();
    let remaining: HashSet<String> = test
        .children()
        .into_iter()
        .filter(|p| p.is_directory())
        .map(|p| p.name())
        .collect();
    assert_eq!(
        remaining,
        HashSet::from(["d".to_string(), "e".to_string(), ".h".to_string()])
    );
}

#[test]
#[cfg(unix)]
fn link_path_points_at_the_target() {
    let (_guard, root) = temp_root();
    let target = root.add("target").unwrap();
    let link = root.child("alias");

    target.link_to(&link, false).unwrap();
    assert!(link.is_link());
    assert!(!link.is_file());

    let resolved = link.link_path().expect("link target");
    assert_eq!(resolved.location(), target.location());

    assert!(root.child("target").link_path().is_none());
}

#[test]
fn children_yield_usable_paths() {
    let (_guard, root) = temp_root();
    root.add("x").unwrap();
    root.add("y").unwrap();

    let names: HashSet<String> = root.children().into_iter().map(|p| p.name()).collect();
    assert_eq!(names, HashSet::from(["x".to_string(), "y".to_string()]));

    for child in root.children() {
        assert!(child.is_absolute());
        assert_eq!(child.parent().location(), root.location());
    }
}
