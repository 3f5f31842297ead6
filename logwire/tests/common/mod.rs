//! Common test utilities for integration tests.
//!
//! This module provides a temporary project fixture, a recording double for
//! the host seam, and an RAII guard for environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use logwire::plugin::{Host, HookFn, LifecycleEvent, MiddlewareMount, PluginInjection};
use logwire::ProjectDirs;

/// A temporary host project with `src/` and `dist/` directories.
#[allow(dead_code)]
pub struct TempProject {
    temp: tempfile::TempDir,
    src_dir: PathBuf,
    build_dir: PathBuf,
}

#[allow(dead_code)]
impl TempProject {
    /// Creates a fresh project layout under a temporary directory.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let src_dir = temp.path().join("src");
        let build_dir = temp.path().join("dist");
        fs::create_dir(&src_dir).unwrap();
        fs::create_dir(&build_dir).unwrap();
        Self {
            temp,
            src_dir,
            build_dir,
        }
    }

    /// Writes a `logger.yaml` into the project directory.
    pub fn with_config(self, yaml: &str) -> Self {
        fs::write(self.project_dir().join("logger.yaml"), yaml).unwrap();
        self
    }

    /// The project root (holds `logger.yaml`, `src/`, and `dist/`).
    pub fn project_dir(&self) -> &Path {
        self.temp.path()
    }

    /// The source directory.
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    /// The build output directory.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Validated reference directories for plugin setup.
    pub fn dirs(&self) -> ProjectDirs {
        ProjectDirs::new(self.src_dir.clone(), self.build_dir.clone()).unwrap()
    }
}

/// A host double that records every registration.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingHost {
    pub mounts: Vec<MiddlewareMount>,
    pub hooks: Vec<(LifecycleEvent, HookFn)>,
    pub injections: Vec<PluginInjection>,
}

#[allow(dead_code)]
impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires every hook registered for the given event.
    pub fn fire(&self, event: LifecycleEvent) {
        for (registered, hook) in &self.hooks {
            if *registered == event {
                hook();
            }
        }
    }
}

impl Host for RecordingHost {
    fn register_middleware(&mut self, mount: MiddlewareMount) {
        self.mounts.push(mount);
    }

    fn register_hook(&mut self, event: LifecycleEvent, hook: HookFn) {
        self.hooks.push((event, hook));
    }

    fn inject_plugin(&mut self, injection: PluginInjection) {
        self.injections.push(injection);
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using environment variables must not run in parallel; pair this
/// with the `#[serial]` attribute.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Create a guard that removes the env var.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}
