//! Plugin configuration.
//!
//! Options arrive from two sources and are merged with `Some`-overwrites
//! semantics, lowest to highest precedence:
//!
//! 1. An optional `logger.yaml` in the project directory (the host
//!    application's file-level configuration)
//! 2. Programmatic module options passed by the caller
//!
//! The merged result is validated before any filesystem work happens, so a
//! malformed path fails with a descriptive configuration error rather than a
//! confusing I/O error at startup. The logging level is never configured
//! directly: it is derived from the run mode (`info` in production, `debug`
//! otherwise), as is the default for the log-view toggle.
//!
//! # Examples
//!
//! ```
//! use logwire::config::{Options, OptionsMerger, ServerOptions};
//!
//! let file = Options {
//!     server: Some(ServerOptions {
//!         logs_dir: Some("~/logs".to_string()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! let programmatic = Options {
//!     server: Some(ServerOptions {
//!         logs_dir: Some("/var/log/app".to_string()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let merged = OptionsMerger::merge(vec![file, programmatic]);
//! assert_eq!(merged.server.unwrap().logs_dir.as_deref(), Some("/var/log/app"));
//! ```

pub mod loader;
pub mod merger;
pub mod mode;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use loader::{OptionsLoader, CONFIG_FILE};
pub use merger::OptionsMerger;
pub use mode::RunMode;
pub use schema::{
    ClientOptions, Options, ServerOptions, DEFAULT_CLIENT_FACTORY, DEFAULT_LOGS_DIR,
    DEFAULT_LOGS_PATH, DEFAULT_SERVER_FACTORY,
};
pub use validator::OptionsValidator;
