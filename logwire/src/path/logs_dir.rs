//! Log directory resolution and materialization.
//!
//! The log directory is the one configured path the plugin also touches on
//! the filesystem. Resolution anchors it against the build output directory
//! in a single pass, so the result is always reachable from the build dir;
//! materialization creates it on first startup and is a no-op on later ones.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::rebase::{rebase, resolve_components};

/// Resolve the configured log directory relative to the build directory.
///
/// Home-marker and plain relative values are anchored directly under the
/// build directory; absolute values are re-expressed relative to it. The
/// result uses forward slashes.
///
/// # Errors
///
/// Returns an error if the value is empty, the build directory is not
/// absolute, or resolution escapes the root.
///
/// # Examples
///
/// ```
/// use logwire::path::resolve_logs_dir;
/// use std::path::Path;
///
/// // The default `~/logs` lands directly under the build dir
/// assert_eq!(resolve_logs_dir("~/logs", Path::new("/app/dist")).unwrap(), "logs");
///
/// // Absolute locations are re-expressed relative to the build dir
/// assert_eq!(
///     resolve_logs_dir("/var/log/app", Path::new("/app/dist")).unwrap(),
///     "../../var/log/app",
/// );
/// ```
pub fn resolve_logs_dir(value: &str, build_dir: &Path) -> Result<String> {
    rebase(value, build_dir, build_dir)
}

/// Materialize the resolved log directory under the build directory.
///
/// The relative form produced by [`resolve_logs_dir`] is joined back onto the
/// build directory and created, along with any missing parents, if it does
/// not already exist. Returns the absolute directory path.
///
/// # Errors
///
/// Returns [`Error::LogsDirCreation`] if the directory cannot be created,
/// for example on permission denial.
pub fn ensure_logs_dir(build_dir: &Path, relative: &str) -> Result<PathBuf> {
    if !build_dir.is_absolute() {
        return Err(Error::InvalidPath {
            path: build_dir.to_path_buf(),
            reason: "build directory must be absolute".to_string(),
        });
    }

    let dir = resolve_components(&build_dir.join(relative))?;
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|source| Error::LogsDirCreation {
            path: dir.clone(),
            source,
        })?;
    }

    Ok(dir)
}
