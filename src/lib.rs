//! # pathkit
//!
//! Value-typed filesystem paths with pluggable filesystem access.
//!
//! A [`Path`] is an immutable value wrapping the string it was built
//! from. Derived properties (standardized location, name, extension,
//! hidden/visible, absolute/relative) are pure computations; existence
//! checks, listing, and the mutating operations (create, delete, copy,
//! move, symlink, chmod) forward one-to-one to the host OS through a
//! substitutable [`FileSystem`] provider.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pathkit::Path;
//!
//! fn stage_build() -> Result<(), pathkit::PathError> {
//!     let work = Path::current().add("build")?;
//!     let assets = work.add("assets")?;
//!
//!     assets.copy_to(&work.child("assets.bak"), true)?;
//!     work.child("assets.bak").chmod(0o755)?;
//!
//!     for entry in work.children() {
//!         println!("{} (hidden: {})", entry, entry.is_hidden());
//!     }
//!
//!     assets.delete()?;
//!     Ok(())
//! }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Path`] | Value-typed location with derivations and OS-delegating operations |
//! | [`FileSystem`] | Provider trait — the single substitution point, for tests |
//! | [`OsFileSystem`] | Default provider forwarding to `std::fs` |
//! | [`SystemDir`] | Well-known directory registry (best effort, partial) |
//! | [`PathError`] | Error type with path and operation context |
//! | [`FileType`] / [`Permissions`] | Entry classification and POSIX mode bits |
//!
//! ---
//!
//! ## Error Policy
//!
//! Two deliberate regimes coexist:
//!
//! - **Graceful**: queries degrade instead of failing. A missing path
//!   reads as not-a-directory and not-a-link, [`Path::children`] returns
//!   empty on any listing failure, [`Path::create`] is a no-op when the
//!   directory exists, [`Path::delete`] is a no-op when nothing is there.
//! - **Hard**: mutating operations and [`Path::permissions`] surface the
//!   underlying OS error as a recoverable [`PathError`].
//!
//! There is no retry and no transactionality; the `force` variants of
//! copy/move/link delete-then-act without atomicity.
//!
//! ---
//!
//! ## Concurrency
//!
//! Everything is synchronous and blocking. `Path` values are plain
//! immutable data, `Send + Sync`, and safe to share for derivation;
//! filesystem-backed calls can always race with concurrent external
//! mutation, and no synchronization is attempted.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`Path`] (as its raw string), [`FileType`], [`Permissions`], [`SystemDir`] |

// Private modules
mod error;
mod location;
mod os;
mod path;
mod provider;
mod system_dir;
mod types;

// Public re-exports - error type
pub use error::PathError;

// Public re-exports - the path value type
pub use path::{Path, SEPARATOR};

// Public re-exports - provider abstraction and default
pub use os::OsFileSystem;
pub use provider::FileSystem;

// Public re-exports - supporting types
pub use system_dir::SystemDir;
pub use types::{FileType, Permissions};
