//! Path rebasing onto the build directory.
//!
//! The plugin accepts paths in three shapes: absolute, relative, and
//! home-marker-relative (prefixed with `~`, meaning "relative to the build
//! output directory" rather than the user's home directory). This module
//! converts all three into a single canonical form: a path expressed relative
//! to the build directory, using forward slashes regardless of the host
//! platform's native separator.
//!
//! # Rebasing
//!
//! [`rebase`] performs the three-step conversion:
//!
//! 1. **Classify**: a value that is neither absolute nor `~`-prefixed is
//!    treated as home-marker-relative.
//! 2. **Expand**: the leading marker is replaced with the `to` directory and
//!    `.`/`..` components are resolved lexically.
//! 3. **Canonicalize separators**: the result, relative to `from`, is rejoined
//!    with forward slashes.
//!
//! # Log directory resolution
//!
//! [`resolve_logs_dir`] is the specialization used for the log storage
//! directory: the marker and plain relative values are anchored directly
//! against the build directory, so the result is always reachable from it.
//! [`ensure_logs_dir`] then materializes the directory, creating it (and any
//! missing parents) on first startup and leaving it untouched on later ones.
//!
//! # Examples
//!
//! ```
//! use logwire::path::{rebase, resolve_logs_dir};
//! use std::path::Path;
//!
//! // Factory paths are anchored under the source dir, expressed from build.
//! let factory = rebase("logger/client.js", Path::new("/app/dist"), Path::new("/app/src")).unwrap();
//! assert_eq!(factory, "../src/logger/client.js");
//!
//! // The log directory is anchored under the build dir itself.
//! let logs = resolve_logs_dir("~/logs", Path::new("/app/dist")).unwrap();
//! assert_eq!(logs, "logs");
//! ```

pub mod logs_dir;
pub mod rebase;

// Re-export key functions
pub use logs_dir::{ensure_logs_dir, resolve_logs_dir};
pub use rebase::{
    expand_marker, rebase, relative_between, resolve_components, to_forward_slashes, HOME_MARKER,
};
