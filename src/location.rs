//! Lexical path standardization.
//!
//! Expands a leading `~`, collapses `.` and `..` components, and removes
//! redundant separators, all without touching the filesystem. Relative
//! paths stay relative; a `..` run at the head of a relative path is kept
//! because there is nothing to pop it against.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Expand a leading `~` to the home directory.
///
/// Handles `~` and `~/rest`; `~user` syntax is left untouched, as is
/// everything else when the home directory cannot be determined. Never
/// fails.
pub(crate) fn expand_tilde(raw: &str) -> String {
    if !raw.starts_with('~') {
        return raw.to_string();
    }
    let Some(home) = dirs::home_dir() else {
        return raw.to_string();
    };
    if raw == "~" {
        home.to_string_lossy().into_owned()
    } else if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        home.join(rest).to_string_lossy().into_owned()
    } else {
        // ~user is not resolved
        raw.to_string()
    }
}

/// Standardize a raw path string.
///
/// Tilde-expands, drops `.` components and redundant separators, and
/// resolves `..` against preceding normal components. Excess `..` at an
/// absolute root is dropped; at the head of a relative path it is kept.
/// An empty input standardizes to `.`.
pub(crate) fn standardize(raw: &str) -> String {
    let expanded = expand_tilde(raw);
    let mut out = PathBuf::new();
    let mut has_root = false;

    for component in Path::new(&expanded).components() {
        match component {
            Component::Prefix(prefix) => {
                out.push(prefix.as_os_str());
                has_root = true;
            }
            Component::RootDir => {
                out.push(component);
                has_root = true;
            }
            Component::CurDir => {}
            Component::Normal(c) => out.push(c),
            Component::ParentDir => {
                let poppable = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if poppable {
                    out.pop();
                } else if !has_root {
                    // Head of a relative path; nothing to pop against.
                    out.push("..");
                }
            }
        }
    }

    if out.as_os_str().is_empty() {
        if has_root {
            out.push(MAIN_SEPARATOR.to_string());
        } else {
            out.push(".");
        }
    }
    out.to_string_lossy().into_owned()
}
