//! Wiring the plugin into the host application.
//!
//! The host framework itself is an external collaborator, modeled by the
//! [`Host`] trait: it receives a middleware mount, lifecycle hooks, and two
//! plugin injections, and is otherwise opaque to this crate.
//!
//! Setup is split into a pure description and its application, so the whole
//! wiring can be inspected and tested without touching the filesystem:
//!
//! 1. [`SetupPlan::build`] merges and validates options, rebases the factory
//!    paths onto the build directory, resolves the log directory, and derives
//!    the level and view toggle from the run mode.
//! 2. [`PluginSetup::apply`] materializes the log directory, opens the server
//!    logger, and performs every registration against the host, returning the
//!    logger handle.
//!
//! Setup runs once, synchronously, at application startup; any failure aborts
//! startup with a typed error.

pub mod host;
pub mod plan;
pub mod setup;

// Re-export key types
pub use host::{Host, HookFn, LifecycleEvent, MiddlewareMount, PluginInjection, ProjectDirs};
pub use plan::SetupPlan;
pub use setup::{PluginSetup, SERVER_LOG_FILE};
