//! The seam to the host framework.
//!
//! Everything the plugin hands to the host is a plain descriptor: the
//! middleware mount names a URL prefix and the directory it serves, the
//! injections carry their merged options as JSON, and the hooks are boxed
//! callbacks. The request handler and factory implementations behind those
//! descriptors live outside this crate.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A lifecycle event the plugin hooks into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The application finished starting up.
    Ready,
    /// The application is shutting down.
    Close,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::Close => write!(f, "close"),
        }
    }
}

/// A callback registered for a lifecycle event.
pub type HookFn = Box<dyn Fn() + Send + Sync>;

/// A middleware registration: serve the log directory at a URL prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddlewareMount {
    /// URL path prefix at which the middleware is mounted.
    pub path: String,
    /// Absolute path of the log directory being served.
    pub logs_dir: PathBuf,
    /// Whether the log-viewing capability is enabled.
    pub enable_view: bool,
}

/// A runtime plugin injected into the host application.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInjection {
    /// Injection name, e.g. `logger.client`.
    pub name: String,
    /// Whether the plugin runs during server-side rendering.
    pub ssr: bool,
    /// Merged options delivered to the plugin.
    pub options: serde_json::Value,
}

/// The host framework, as seen by the plugin.
///
/// Implementations receive the plugin's registrations during setup. The
/// order is fixed: the middleware mount first, then the `ready` and `close`
/// hooks, then the client and server injections.
pub trait Host {
    /// Register a server middleware mount.
    fn register_middleware(&mut self, mount: MiddlewareMount);

    /// Register a lifecycle hook.
    fn register_hook(&mut self, event: LifecycleEvent, hook: HookFn);

    /// Inject a runtime plugin.
    fn inject_plugin(&mut self, injection: PluginInjection);
}

/// The host project's reference directories.
///
/// Both must be absolute: the source directory anchors home-marker factory
/// paths, and the build directory is what every resolved path is expressed
/// relative to.
///
/// # Examples
///
/// ```
/// use logwire::ProjectDirs;
/// use std::path::{Path, PathBuf};
///
/// let dirs = ProjectDirs::new(PathBuf::from("/app/src"), PathBuf::from("/app/dist")).unwrap();
/// assert_eq!(dirs.build_dir(), Path::new("/app/dist"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDirs {
    src_dir: PathBuf,
    build_dir: PathBuf,
}

impl ProjectDirs {
    /// Create validated reference directories.
    ///
    /// # Errors
    ///
    /// Returns an error if either directory is not absolute.
    pub fn new(src_dir: PathBuf, build_dir: PathBuf) -> Result<Self> {
        for (name, dir) in [("source", &src_dir), ("build", &build_dir)] {
            if !dir.is_absolute() {
                return Err(Error::InvalidPath {
                    path: dir.clone(),
                    reason: format!("{name} directory must be absolute"),
                });
            }
        }
        Ok(Self { src_dir, build_dir })
    }

    /// The directory containing the project's authored source files.
    #[must_use]
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    /// The directory into which the host emits build output.
    #[must_use]
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_event_display() {
        assert_eq!(format!("{}", LifecycleEvent::Ready), "ready");
        assert_eq!(format!("{}", LifecycleEvent::Close), "close");
    }

    #[test]
    fn test_project_dirs_accessors() {
        let dirs =
            ProjectDirs::new(PathBuf::from("/app/src"), PathBuf::from("/app/dist")).unwrap();
        assert_eq!(dirs.src_dir(), Path::new("/app/src"));
        assert_eq!(dirs.build_dir(), Path::new("/app/dist"));
    }

    #[test]
    fn test_project_dirs_reject_relative() {
        let result = ProjectDirs::new(PathBuf::from("src"), PathBuf::from("/app/dist"));
        assert!(result.unwrap_err().is_invalid_path());

        let result = ProjectDirs::new(PathBuf::from("/app/src"), PathBuf::from("dist"));
        assert!(result.unwrap_err().is_invalid_path());
    }
}
