//! Applying a setup plan against the host.
//!
//! This is the only part of the plugin that touches the filesystem: the log
//! directory is materialized and the server logger opened before any
//! registration happens, so a failing environment aborts startup without
//! leaving the host half-wired.

use std::path::Path;
use std::sync::Arc;

use crate::config::{Options, OptionsLoader, OptionsMerger, RunMode};
use crate::error::Result;
use crate::logging::{Logger, LoggerHandle};
use crate::path::ensure_logs_dir;
use crate::plugin::host::{Host, LifecycleEvent, ProjectDirs};
use crate::plugin::plan::SetupPlan;

/// File the server logger writes to, inside the log directory.
pub const SERVER_LOG_FILE: &str = "server.log";

/// Executes a [`SetupPlan`] against a host.
///
/// # Examples
///
/// ```no_run
/// use logwire::{PluginSetup, ProjectDirs};
/// use std::path::{Path, PathBuf};
/// # struct App;
/// # impl logwire::Host for App {
/// #     fn register_middleware(&mut self, _: logwire::MiddlewareMount) {}
/// #     fn register_hook(&mut self, _: logwire::LifecycleEvent, _: logwire::plugin::HookFn) {}
/// #     fn inject_plugin(&mut self, _: logwire::PluginInjection) {}
/// # }
///
/// let dirs = ProjectDirs::new(PathBuf::from("/app/src"), PathBuf::from("/app/dist")).unwrap();
/// let mut app = App;
/// let logger = PluginSetup::run(Path::new("/app"), &dirs, None, &mut app).unwrap();
/// logger.info("plugin wired");
/// ```
pub struct PluginSetup;

impl PluginSetup {
    /// Apply a built plan: create the log directory, open the logger, and
    /// register the mount, hooks, and injections.
    ///
    /// Returns the logger handle; the `ready` and `close` hooks hold clones
    /// of it and emit one info line each when fired.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory cannot be created or the log
    /// file cannot be opened.
    pub fn apply<H: Host + ?Sized>(
        plan: &SetupPlan,
        dirs: &ProjectDirs,
        host: &mut H,
    ) -> Result<LoggerHandle> {
        let logs_dir = ensure_logs_dir(dirs.build_dir(), &plan.logs_dir)?;
        let logger = Logger::to_file(&logs_dir.join(SERVER_LOG_FILE), plan.level)?;
        let handle: LoggerHandle = Arc::new(logger);

        host.register_middleware(plan.middleware_mount(dirs));

        for event in [LifecycleEvent::Ready, LifecycleEvent::Close] {
            let hook_logger = Arc::clone(&handle);
            host.register_hook(
                event,
                Box::new(move || hook_logger.info(&format!("app {event}."))),
            );
        }

        for injection in plan.injections() {
            host.inject_plugin(injection);
        }

        Ok(handle)
    }

    /// Load, merge, plan, and apply in one call.
    ///
    /// File options from `logger.yaml` in `project_dir` are merged with the
    /// programmatic `overrides` (highest precedence), the run mode is read
    /// from the environment, and the resulting plan is applied to `host`.
    ///
    /// # Errors
    ///
    /// Returns an error on configuration, validation, path, or filesystem
    /// failure; all are fatal to startup.
    pub fn run<H: Host + ?Sized>(
        project_dir: &Path,
        dirs: &ProjectDirs,
        overrides: Option<Options>,
        host: &mut H,
    ) -> Result<LoggerHandle> {
        let mut sources = Vec::new();
        if let Some(file_options) = OptionsLoader::load(project_dir)? {
            sources.push(file_options);
        }
        if let Some(programmatic) = overrides {
            sources.push(programmatic);
        }

        let merged = OptionsMerger::merge(sources);
        let plan = SetupPlan::build(&merged, dirs, RunMode::from_env())?;
        Self::apply(&plan, dirs, host)
    }
}
