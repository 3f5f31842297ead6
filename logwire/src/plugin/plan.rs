//! The pure setup description.
//!
//! A [`SetupPlan`] is everything the plugin will register, computed from the
//! merged options, the project directories, and the run mode — with no
//! filesystem access. Building the plan validates the options, rebases both
//! factory paths onto the build directory (anchoring home-marker values under
//! the source directory), and resolves the log directory against the build
//! directory itself.

use serde_json::json;

use crate::config::{
    Options, OptionsValidator, RunMode, DEFAULT_CLIENT_FACTORY, DEFAULT_LOGS_DIR,
    DEFAULT_LOGS_PATH, DEFAULT_SERVER_FACTORY,
};
use crate::error::Result;
use crate::logging::LogLevel;
use crate::path::{rebase, resolve_logs_dir};
use crate::plugin::host::{MiddlewareMount, PluginInjection, ProjectDirs};

/// Everything the plugin will register with the host.
///
/// All paths are relative to the build directory and use forward slashes.
///
/// # Examples
///
/// ```
/// use logwire::{Options, ProjectDirs, RunMode, SetupPlan};
/// use std::path::PathBuf;
///
/// let dirs = ProjectDirs::new(PathBuf::from("/app/src"), PathBuf::from("/app/dist")).unwrap();
/// let plan = SetupPlan::build(&Options::default(), &dirs, RunMode::Development).unwrap();
///
/// assert_eq!(plan.logs_dir, "logs");
/// assert_eq!(plan.logs_path, "/logger/logs");
/// assert_eq!(plan.client_factory, "../src/logger/client.js");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    /// Derived logging level.
    pub level: LogLevel,
    /// Client factory path, relative to the build directory.
    pub client_factory: String,
    /// Server factory path, relative to the build directory.
    pub server_factory: String,
    /// Log directory, relative to the build directory.
    pub logs_dir: String,
    /// URL path for the middleware mount.
    pub logs_path: String,
    /// Whether the log-viewing capability is enabled.
    pub enable_view: bool,
}

impl SetupPlan {
    /// Build the plan from merged options.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or a path cannot be rebased.
    pub fn build(options: &Options, dirs: &ProjectDirs, mode: RunMode) -> Result<Self> {
        OptionsValidator::validate(options)?;

        let client = options.client.clone().unwrap_or_default();
        let server = options.server.clone().unwrap_or_default();

        let client_factory = rebase(
            client.factory.as_deref().unwrap_or(DEFAULT_CLIENT_FACTORY),
            dirs.build_dir(),
            dirs.src_dir(),
        )?;
        let server_factory = rebase(
            server.factory.as_deref().unwrap_or(DEFAULT_SERVER_FACTORY),
            dirs.build_dir(),
            dirs.src_dir(),
        )?;
        let logs_dir = resolve_logs_dir(
            server.logs_dir.as_deref().unwrap_or(DEFAULT_LOGS_DIR),
            dirs.build_dir(),
        )?;

        Ok(Self {
            level: mode.level(),
            client_factory,
            server_factory,
            logs_dir,
            logs_path: server
                .logs_path
                .unwrap_or_else(|| DEFAULT_LOGS_PATH.to_string()),
            enable_view: server.enable_view.unwrap_or_else(|| mode.default_enable_view()),
        })
    }

    /// The middleware mount this plan registers.
    #[must_use]
    pub fn middleware_mount(&self, dirs: &ProjectDirs) -> MiddlewareMount {
        MiddlewareMount {
            path: self.logs_path.clone(),
            logs_dir: dirs.build_dir().join(&self.logs_dir),
            enable_view: self.enable_view,
        }
    }

    /// The two plugin injections this plan delivers.
    ///
    /// The client plugin skips server-side rendering; the server plugin
    /// participates in it. Each carries its merged options as JSON.
    #[must_use]
    pub fn injections(&self) -> Vec<PluginInjection> {
        vec![
            PluginInjection {
                name: "logger.client".to_string(),
                ssr: false,
                options: json!({
                    "level": self.level.to_string(),
                    "factory": self.client_factory,
                }),
            },
            PluginInjection {
                name: "logger.server".to_string(),
                ssr: true,
                options: json!({
                    "level": self.level.to_string(),
                    "factory": self.server_factory,
                    "logs_dir": self.logs_dir,
                    "logs_path": self.logs_path,
                    "enable_view": self.enable_view,
                }),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientOptions, ServerOptions};
    use std::path::{Path, PathBuf};

    fn dirs() -> ProjectDirs {
        ProjectDirs::new(PathBuf::from("/app/src"), PathBuf::from("/app/dist")).unwrap()
    }

    #[test]
    #[cfg(unix)]
    fn test_build_with_defaults() {
        let plan = SetupPlan::build(&Options::default(), &dirs(), RunMode::Development).unwrap();

        assert_eq!(plan.level, LogLevel::Debug);
        assert_eq!(plan.client_factory, "../src/logger/client.js");
        assert_eq!(plan.server_factory, "../src/logger/server.js");
        assert_eq!(plan.logs_dir, "logs");
        assert_eq!(plan.logs_path, "/logger/logs");
        assert!(plan.enable_view);
    }

    #[test]
    #[cfg(unix)]
    fn test_build_production_derivations() {
        let plan = SetupPlan::build(&Options::default(), &dirs(), RunMode::Production).unwrap();

        assert_eq!(plan.level, LogLevel::Info);
        assert!(!plan.enable_view);
    }

    #[test]
    #[cfg(unix)]
    fn test_build_explicit_enable_view_survives_production() {
        let options = Options {
            server: Some(ServerOptions {
                enable_view: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let plan = SetupPlan::build(&options, &dirs(), RunMode::Production).unwrap();
        assert!(plan.enable_view);
    }

    #[test]
    #[cfg(unix)]
    fn test_build_custom_factories_rebased() {
        let options = Options {
            client: Some(ClientOptions {
                factory: Some("custom/client.js".to_string()),
            }),
            server: Some(ServerOptions {
                factory: Some("/opt/shared/server.js".to_string()),
                ..Default::default()
            }),
        };
        let plan = SetupPlan::build(&options, &dirs(), RunMode::Development).unwrap();

        assert_eq!(plan.client_factory, "../src/custom/client.js");
        assert_eq!(plan.server_factory, "../../opt/shared/server.js");
    }

    #[test]
    #[cfg(unix)]
    fn test_build_absolute_logs_dir() {
        let options = Options {
            server: Some(ServerOptions {
                logs_dir: Some("/var/log/app".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let plan = SetupPlan::build(&options, &dirs(), RunMode::Development).unwrap();
        assert_eq!(plan.logs_dir, "../../var/log/app");
    }

    #[test]
    fn test_build_rejects_invalid_options() {
        let options = Options {
            server: Some(ServerOptions {
                logs_path: Some("no-leading-slash".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = SetupPlan::build(&options, &dirs(), RunMode::Development).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    #[cfg(unix)]
    fn test_middleware_mount_anchored_under_build_dir() {
        let plan = SetupPlan::build(&Options::default(), &dirs(), RunMode::Development).unwrap();
        let mount = plan.middleware_mount(&dirs());

        assert_eq!(mount.path, "/logger/logs");
        assert_eq!(mount.logs_dir, Path::new("/app/dist/logs"));
        assert!(mount.enable_view);
    }

    #[test]
    #[cfg(unix)]
    fn test_injections_shape() {
        let plan = SetupPlan::build(&Options::default(), &dirs(), RunMode::Production).unwrap();
        let injections = plan.injections();

        assert_eq!(injections.len(), 2);
        assert_eq!(injections[0].name, "logger.client");
        assert!(!injections[0].ssr);
        assert_eq!(injections[0].options["level"], "info");

        assert_eq!(injections[1].name, "logger.server");
        assert!(injections[1].ssr);
        assert_eq!(injections[1].options["logs_dir"], "logs");
        assert_eq!(injections[1].options["enable_view"], false);
    }
}
