#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # logwire
//!
//! A library for wiring a logging plugin into a host web application.
//!
//! logwire merges layered logging configuration, rebases user-supplied paths
//! onto the host's build directory, materializes the log directory, opens an
//! explicit server logger handle, and registers an HTTP middleware mount plus
//! `ready`/`close` lifecycle hooks with the host.
//!
//! ## Core Types
//!
//! - [`Options`], [`ClientOptions`], and [`ServerOptions`]: typed plugin
//!   configuration with documented defaults
//! - [`SetupPlan`] and [`PluginSetup`]: describe, then apply, the wiring
//! - [`Host`]: the seam to the host framework receiving registrations
//! - [`Logger`] and [`LoggerHandle`]: the explicit server logger
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use logwire::path::rebase;
//! use std::path::Path;
//!
//! // A plain relative value is anchored under the source directory and
//! // expressed relative to the build directory.
//! let rebased = rebase("my-logs", Path::new("/app/dist"), Path::new("/app/src")).unwrap();
//! assert_eq!(rebased, "../src/my-logs");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod plugin;

// Re-export key types at crate root for convenience
pub use config::{ClientOptions, Options, OptionsMerger, OptionsValidator, RunMode, ServerOptions};
pub use error::{Error, Result};
pub use logging::{LogLevel, Logger, LoggerHandle};
pub use plugin::{
    Host, LifecycleEvent, MiddlewareMount, PluginInjection, PluginSetup, ProjectDirs, SetupPlan,
};
