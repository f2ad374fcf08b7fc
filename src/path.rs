//! The `Path` value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{MAIN_SEPARATOR, PathBuf};
use std::sync::Arc;

use crate::os::default_provider;
use crate::{FileSystem, PathError, Permissions, SystemDir};

/// The platform path separator.
pub const SEPARATOR: char = MAIN_SEPARATOR;

/// An immutable, value-typed identifier for a filesystem location.
///
/// A `Path` stores the string it was constructed from verbatim; all
/// derived properties (`location`, `name`, `extension`, ...) are computed
/// on demand and never mutate the value. Operations that produce another
/// location ([`child`](Path::child), [`parent`](Path::parent),
/// [`add`](Path::add)) return a new value.
///
/// Filesystem-backed queries and mutations go through the value's
/// [`FileSystem`] provider, which defaults to the real OS filesystem and
/// can be substituted per value for testing. Queries can race with
/// concurrent external mutation; no locking is attempted.
///
/// Equality and hashing compare the raw string only: two values with
/// equal standardized [`location`](Path::location) denote the same place
/// on disk but are not considered equal unless their raw forms match.
///
/// # Examples
///
/// ```rust
/// use pathkit::Path;
///
/// let readme = Path::new("~/project").child("README.md");
/// assert!(readme.is_relative());
/// assert_eq!(readme.extension().as_deref(), Some("md"));
/// assert_eq!(readme.name(), "README");
/// ```
#[derive(Clone)]
pub struct Path {
    raw: String,
    fs: Arc<dyn FileSystem>,
}

impl Path {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a path from a string, stored verbatim, with the default OS
    /// provider.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            fs: default_provider(),
        }
    }

    /// Create a path with an explicit filesystem provider.
    ///
    /// This is the crate's only configuration point; providers are
    /// stateless strategy objects, typically substituted in tests.
    pub fn with_provider(raw: impl Into<String>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            raw: raw.into(),
            fs,
        }
    }

    /// Create a path for a well-known system directory.
    ///
    /// Best effort: identifiers the platform has no registry entry for
    /// degrade to the home directory rather than failing.
    pub fn system(dir: SystemDir) -> Self {
        match dir.resolve() {
            Some(path) => Self::new(path.to_string_lossy().into_owned()),
            None => Self::home(),
        }
    }

    /// The home directory, as the unexpanded `~` shorthand.
    pub fn home() -> Self {
        Self::new("~")
    }

    /// The filesystem root.
    pub fn root() -> Self {
        Self::new(SEPARATOR.to_string())
    }

    /// The process's current working directory.
    ///
    /// Degrades to `.` if the OS query fails.
    pub fn current() -> Self {
        match std::env::current_dir() {
            Ok(cwd) => Self::new(cwd.to_string_lossy().into_owned()),
            Err(_) => Self::new("."),
        }
    }

    // ------------------------------------------------------------------
    // Pure derivations
    // ------------------------------------------------------------------

    /// The raw string this path was constructed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The standardized form of the raw string: a leading `~` expanded,
    /// `.` and `..` collapsed, redundant and trailing separators removed.
    ///
    /// Purely lexical; relative paths stay relative and the filesystem is
    /// never consulted.
    pub fn location(&self) -> String {
        crate::location::standardize(&self.raw)
    }

    /// The standardized location as an owned [`PathBuf`].
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.location())
    }

    /// The standardized location as a `file://` URL string.
    pub fn file_url(&self) -> String {
        format!("file://{}", self.location())
    }

    /// The path one directory level up from [`location`](Path::location).
    ///
    /// The root is its own parent; the parent of a bare relative
    /// component is `.`.
    pub fn parent(&self) -> Self {
        let loc = self.location();
        let raw = match std::path::Path::new(&loc).parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_string_lossy().into_owned(),
            Some(_) => String::from("."),
            None => loc,
        };
        Self {
            raw,
            fs: self.fs.clone(),
        }
    }

    /// A new path for `component` under this one.
    ///
    /// The component is appended verbatim after a separator. Embedded
    /// separators are preserved literally, so a single call can produce a
    /// multi-level path; this quirk is intentional and not validated
    /// against.
    pub fn child(&self, component: &str) -> Self {
        Self {
            raw: format!("{}{}{}", self.raw, SEPARATOR, component),
            fs: self.fs.clone(),
        }
    }

    /// Whether the raw string starts with the platform separator.
    ///
    /// Deliberately checked against the raw form, not the standardized
    /// one: a path written as `~/...` is classified relative even though
    /// its location expands to an absolute path.
    pub fn is_absolute(&self) -> bool {
        self.raw.starts_with(SEPARATOR)
    }

    /// Negation of [`is_absolute`](Path::is_absolute).
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// The final component of the standardized location.
    fn final_component(&self) -> String {
        let loc = self.location();
        match std::path::Path::new(&loc).file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => loc,
        }
    }

    /// Byte index of the dot starting the final extension in `n`, if any.
    ///
    /// A dot at the start of the component never begins an extension, so
    /// dot-files like `.gitignore` report no extension. A trailing dot
    /// yields an empty extension and also counts as none.
    fn extension_index(n: &str) -> Option<usize> {
        let first = n.chars().next()?;
        let rest = &n[first.len_utf8()..];
        let idx = first.len_utf8() + rest.rfind('.')?;
        if idx + 1 == n.len() { None } else { Some(idx) }
    }

    /// The file name: the final component with its extension stripped.
    ///
    /// Only the final extension is removed, so `archive.tar.gz` has the
    /// name `archive.tar`.
    pub fn name(&self) -> String {
        let n = self.final_component();
        match Self::extension_index(&n) {
            Some(idx) => n[..idx].to_string(),
            None => n,
        }
    }

    /// The file extension: the substring after the last dot of the final
    /// component. `None` when there is no dot or nothing follows it.
    pub fn extension(&self) -> Option<String> {
        let n = self.final_component();
        let idx = Self::extension_index(&n)?;
        Some(n[idx + 1..].to_string())
    }

    /// The final component up to its *first* dot.
    ///
    /// Note the asymmetry with [`name`](Path::name): a multi-dotted
    /// component splits at the first dot, so `archive.tar.gz` has the
    /// basename `archive`, not `archive.tar`.
    pub fn basename(&self) -> String {
        let n = self.final_component();
        let Some(first) = n.chars().next() else {
            return n;
        };
        let rest = &n[first.len_utf8()..];
        match rest.find('.') {
            Some(i) => n[..first.len_utf8() + i].to_string(),
            None => n,
        }
    }

    /// Whether the final component begins with a dot.
    pub fn is_hidden(&self) -> bool {
        self.final_component().starts_with('.')
    }

    /// Negation of [`is_hidden`](Path::is_hidden).
    pub fn is_visible(&self) -> bool {
        !self.is_hidden()
    }

    // ------------------------------------------------------------------
    // Filesystem-backed queries
    // ------------------------------------------------------------------

    /// Whether anything exists at this location (symlinks followed).
    pub fn exists(&self) -> bool {
        self.fs.exists(&self.to_path_buf())
    }

    /// Whether a directory exists at this location. Symlinks are
    /// followed, so a link to a directory reads as a directory. `false`
    /// when the path is absent.
    pub fn is_directory(&self) -> bool {
        self.fs
            .file_type(&self.to_path_buf())
            .map(|t| t.is_dir())
            .unwrap_or(false)
    }

    /// Whether a regular file exists at this location: present, not a
    /// directory, not a symlink.
    pub fn is_file(&self) -> bool {
        self.exists() && !self.is_directory() && !self.is_link()
    }

    /// Whether a symbolic link sits at this location. `false` when the
    /// path is absent or the platform cannot answer the check.
    pub fn is_link(&self) -> bool {
        self.fs
            .symlink_file_type(&self.to_path_buf())
            .map(|t| t.is_symlink())
            .unwrap_or(false)
    }

    /// The symlink target when [`is_link`](Path::is_link), else `None`.
    pub fn link_path(&self) -> Option<Self> {
        if !self.is_link() {
            return None;
        }
        self.fs
            .read_link(&self.to_path_buf())
            .ok()
            .map(|target| Self {
                raw: target.to_string_lossy().into_owned(),
                fs: self.fs.clone(),
            })
    }

    /// The directory entries under this path, in unspecified OS order.
    ///
    /// Best effort: a path that is not a directory, or a listing that
    /// fails (permissions, concurrent removal), yields an empty vector
    /// rather than an error.
    pub fn children(&self) -> Vec<Self> {
        if !self.is_directory() {
            return Vec::new();
        }
        self.fs
            .read_dir(&self.to_path_buf())
            .unwrap_or_default()
            .into_iter()
            .map(|entry| Self {
                raw: entry.to_string_lossy().into_owned(),
                fs: self.fs.clone(),
            })
            .collect()
    }

    /// The POSIX permission bits at this location.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying query fails, including for a
    /// missing path. Recoverable by design, unlike the other read-side
    /// queries.
    pub fn permissions(&self) -> Result<Permissions, PathError> {
        self.fs.permissions(&self.to_path_buf())
    }

    // ------------------------------------------------------------------
    // Mutating operations
    // ------------------------------------------------------------------

    /// Create this directory, including missing ancestors.
    ///
    /// No-op when a directory already exists here.
    ///
    /// # Errors
    ///
    /// Surfaces the OS error when creation is impossible, e.g. permission
    /// denied or a parent that is a file.
    pub fn create(&self) -> Result<(), PathError> {
        self.create_with(true, None)
    }

    /// Create this directory with explicit options.
    ///
    /// `intermediates` controls whether missing ancestors are created;
    /// `mode` optionally applies POSIX permission bits after creation.
    ///
    /// # Errors
    ///
    /// Surfaces the OS error from creation or from applying `mode`.
    pub fn create_with(&self, intermediates: bool, mode: Option<u32>) -> Result<(), PathError> {
        if !self.is_directory() {
            self.fs.create_dir(&self.to_path_buf(), intermediates)?;
        }
        if let Some(mode) = mode {
            self.fs
                .set_permissions(&self.to_path_buf(), Permissions::from_mode(mode))?;
        }
        Ok(())
    }

    /// Create a child directory and return its path.
    ///
    /// Equivalent to [`child`](Path::child) followed by
    /// [`create`](Path::create).
    ///
    /// # Errors
    ///
    /// Surfaces the OS error when creation fails.
    pub fn add(&self, component: &str) -> Result<Self, PathError> {
        let path = self.child(component);
        path.create()?;
        Ok(path)
    }

    /// Remove whatever sits at this location: a file, a symlink, or a
    /// directory tree (recursively).
    ///
    /// No-op when nothing is there. A dangling symlink counts as present
    /// and is removed.
    ///
    /// # Errors
    ///
    /// Surfaces the OS error when removal fails.
    pub fn delete(&self) -> Result<(), PathError> {
        if !self.exists() && !self.is_link() {
            return Ok(());
        }
        self.fs.remove(&self.to_path_buf())
    }

    /// Copy this entry to `destination`, recursively for directories.
    /// The source survives.
    ///
    /// With `force`, an existing destination is deleted first. The
    /// delete-then-copy sequence is not atomic: a concurrent actor can
    /// recreate the destination in between.
    ///
    /// # Errors
    ///
    /// - [`PathError::AlreadyExists`] when the destination exists and
    ///   `force` is false
    /// - [`PathError::NotFound`] when the source is missing
    pub fn copy_to(&self, destination: &Path, force: bool) -> Result<(), PathError> {
        self.clear_destination(destination, force, "copy")?;
        self.fs
            .copy(&self.to_path_buf(), &destination.to_path_buf())
    }

    /// Move this entry to `destination` via OS rename. The source is
    /// gone afterwards.
    ///
    /// Same `force` semantics and non-atomicity as
    /// [`copy_to`](Path::copy_to). Cross-device constraints surface per
    /// OS semantics and are not abstracted away.
    ///
    /// # Errors
    ///
    /// - [`PathError::AlreadyExists`] when the destination exists and
    ///   `force` is false
    /// - [`PathError::NotFound`] when the source is missing
    pub fn move_to(&self, destination: &Path, force: bool) -> Result<(), PathError> {
        self.clear_destination(destination, force, "move")?;
        self.fs
            .rename(&self.to_path_buf(), &destination.to_path_buf())
    }

    /// Create a symbolic link at `destination` pointing at this path.
    ///
    /// Same `force` semantics and non-atomicity as
    /// [`copy_to`](Path::copy_to).
    ///
    /// # Errors
    ///
    /// - [`PathError::AlreadyExists`] when the destination exists and
    ///   `force` is false
    /// - [`PathError::Unsupported`] on platforms without symlinks
    pub fn link_to(&self, destination: &Path, force: bool) -> Result<(), PathError> {
        self.clear_destination(destination, force, "link")?;
        self.fs
            .symlink(&self.to_path_buf(), &destination.to_path_buf())
    }

    /// Set POSIX permission bits from a plain integer mode.
    ///
    /// The value is passed through as-is; writing it in octal (`0o755`)
    /// is caller convention, not enforced.
    ///
    /// # Errors
    ///
    /// Surfaces the OS error when the change fails.
    pub fn chmod(&self, mode: u32) -> Result<(), PathError> {
        self.fs
            .set_permissions(&self.to_path_buf(), Permissions::from_mode(mode))
    }

    fn clear_destination(
        &self,
        destination: &Path,
        force: bool,
        operation: &'static str,
    ) -> Result<(), PathError> {
        if destination.exists() || destination.is_link() {
            if !force {
                return Err(PathError::AlreadyExists {
                    path: destination.to_path_buf(),
                    operation,
                });
            }
            destination.delete()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path").field("raw", &self.raw).finish()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<PathBuf> for Path {
    fn from(path: PathBuf) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer).map(Path::new)
    }
}
