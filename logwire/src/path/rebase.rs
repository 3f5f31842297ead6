//! The generic rebase operation.
//!
//! This module provides the primitives behind [`rebase`]:
//! - Home-marker classification and expansion
//! - Lexical resolution of `.` and `..` components
//! - Relativization between two absolute paths
//! - Forward-slash canonicalization of separators

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// The home marker prefix.
///
/// In plugin configuration, `~` means "relative to the build output
/// directory", not the filesystem user's home directory.
pub const HOME_MARKER: char = '~';

/// Expand a leading home marker to the given base directory.
///
/// Values without a marker pass through unchanged. The marker must stand
/// alone (`~`) or be followed by a separator (`~/path` or `~\path`).
///
/// # Errors
///
/// Returns an error for `~user`-style values, where the marker is followed
/// by something other than a separator.
///
/// # Examples
///
/// ```
/// use logwire::path::expand_marker;
/// use std::path::{Path, PathBuf};
///
/// let expanded = expand_marker("~/logs", Path::new("/app/src")).unwrap();
/// assert_eq!(expanded, PathBuf::from("/app/src/logs"));
///
/// // No marker: value passes through
/// let expanded = expand_marker("/var/log", Path::new("/app/src")).unwrap();
/// assert_eq!(expanded, PathBuf::from("/var/log"));
/// ```
pub fn expand_marker(value: &str, base: &Path) -> Result<PathBuf> {
    let Some(rest) = value.strip_prefix(HOME_MARKER) else {
        return Ok(PathBuf::from(value));
    };

    if rest.is_empty() {
        Ok(base.to_path_buf())
    } else if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        Ok(base.join(tail))
    } else {
        Err(Error::InvalidPath {
            path: PathBuf::from(value),
            reason: "home marker must stand alone or be followed by a separator".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in a path, lexically.
///
/// No filesystem access is performed; symlinks are not followed.
///
/// # Errors
///
/// Returns an error if the path contains more `..` components than can be
/// popped, which would escape the root.
///
/// # Examples
///
/// ```
/// use logwire::path::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut resolved = PathBuf::new();
    let mut rooted = false;

    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                resolved.push(component);
                rooted = true;
            }
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "too many '..' components (escapes root)".to_string(),
                    });
                }
            }
        }
    }

    if rooted && resolved.as_os_str().is_empty() {
        resolved.push(Component::RootDir);
    }

    Ok(resolved)
}

/// Compute `target` expressed relative to the `from` directory.
///
/// Both paths must be absolute; `.` and `..` components are resolved first.
/// Diverging prefixes produce leading `..` segments. Equal paths produce an
/// empty path.
///
/// # Errors
///
/// Returns an error if either path is not absolute or cannot be resolved.
///
/// # Examples
///
/// ```
/// use logwire::path::relative_between;
/// use std::path::{Path, PathBuf};
///
/// let rel = relative_between(Path::new("/app/dist"), Path::new("/app/src/my-logs")).unwrap();
/// assert_eq!(rel, PathBuf::from("../src/my-logs"));
/// ```
pub fn relative_between(from: &Path, target: &Path) -> Result<PathBuf> {
    for (name, path) in [("from", from), ("target", target)] {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: format!("'{name}' must be absolute"),
            });
        }
    }

    let from = resolve_components(from)?;
    let target = resolve_components(target)?;

    let from_parts: Vec<Component<'_>> = from.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();

    let shared = from_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..from_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[shared..] {
        relative.push(part);
    }

    Ok(relative)
}

/// Rejoin a path on forward slashes.
///
/// The input is split on both separator styles, so the output never contains
/// a backslash even on hosts whose native separator differs.
///
/// # Examples
///
/// ```
/// use logwire::path::to_forward_slashes;
/// use std::path::Path;
///
/// assert_eq!(to_forward_slashes(Path::new("../src/my-logs")), "../src/my-logs");
/// assert_eq!(to_forward_slashes(Path::new(r"logs\archive")), "logs/archive");
/// ```
#[must_use]
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy()
        .split(['/', '\\'])
        .collect::<Vec<_>>()
        .join("/")
}

/// Rebase a configured path value onto the `from` directory.
///
/// This is the three-step conversion applied to every path the plugin reads
/// from configuration:
///
/// 1. A value that is neither absolute nor marker-prefixed is treated as
///    home-marker-relative.
/// 2. The leading marker is replaced with `to` and `.`/`..` components are
///    resolved.
/// 3. The result is expressed relative to `from` and rejoined on forward
///    slashes.
///
/// # Errors
///
/// Returns an error if `value` is empty, if `from` or `to` is not absolute,
/// or if resolution escapes the root.
///
/// # Examples
///
/// ```
/// use logwire::path::rebase;
/// use std::path::Path;
///
/// // Relative values are anchored under `to`
/// let rebased = rebase("my-logs", Path::new("/app/dist"), Path::new("/app/src")).unwrap();
/// assert_eq!(rebased, "../src/my-logs");
///
/// // Absolute values ignore `to`
/// let rebased = rebase("/var/log/app", Path::new("/app/dist"), Path::new("/app/src")).unwrap();
/// assert_eq!(rebased, "../../var/log/app");
/// ```
pub fn rebase(value: &str, from: &Path, to: &Path) -> Result<String> {
    if value.is_empty() {
        return Err(Error::Validation {
            field: "path".to_string(),
            message: "cannot be empty".to_string(),
        });
    }
    for (name, path) in [("from", from), ("to", to)] {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: format!("reference directory '{name}' must be absolute"),
            });
        }
    }

    let marked = if Path::new(value).is_absolute() || value.starts_with(HOME_MARKER) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{HOME_MARKER}/{value}"))
    };

    let expanded = expand_marker(&marked, to)?;
    let expanded = resolve_components(&expanded)?;
    let relative = relative_between(from, &expanded)?;

    Ok(to_forward_slashes(&relative))
}
