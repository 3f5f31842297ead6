//! Configuration schema definitions.
//!
//! The plugin's options are explicit typed structs with named fields and
//! documented defaults; unknown keys are rejected at parse time. Every field
//! is optional so that sources can be merged before defaults are applied.

use serde::{Deserialize, Serialize};

/// Default client logger factory path (source-relative).
pub const DEFAULT_CLIENT_FACTORY: &str = "logger/client.js";

/// Default server logger factory path (source-relative).
pub const DEFAULT_SERVER_FACTORY: &str = "logger/server.js";

/// Default log storage directory (build-relative via the home marker).
pub const DEFAULT_LOGS_DIR: &str = "~/logs";

/// Default URL path at which the log middleware is mounted.
pub const DEFAULT_LOGS_PATH: &str = "/logger/logs";

/// Complete plugin options.
///
/// The logging level is deliberately absent: it is derived from the run
/// mode and cannot be overridden.
///
/// # Examples
///
/// ```
/// use logwire::config::{Options, ServerOptions};
///
/// let options = Options {
///     server: Some(ServerOptions {
///         logs_dir: Some("~/logs".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(options.client.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// Client-side logger options.
    pub client: Option<ClientOptions>,

    /// Server-side logger options.
    pub server: Option<ServerOptions>,
}

/// Options for the client-side logger plugin.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientOptions {
    /// Path to the client logger factory.
    ///
    /// Defaults to the bundled factory at [`DEFAULT_CLIENT_FACTORY`].
    pub factory: Option<String>,
}

/// Options for the server-side logger plugin.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerOptions {
    /// Path to the server logger factory.
    ///
    /// Defaults to the bundled factory at [`DEFAULT_SERVER_FACTORY`].
    pub factory: Option<String>,

    /// Directory for log storage.
    ///
    /// Absolute, relative, or home-marker-relative; defaults to
    /// [`DEFAULT_LOGS_DIR`].
    pub logs_dir: Option<String>,

    /// URL path at which the log middleware is mounted.
    ///
    /// Must start with `/`; defaults to [`DEFAULT_LOGS_PATH`].
    pub logs_path: Option<String>,

    /// Toggle for the log-viewing capability.
    ///
    /// Defaults to true outside production and false in production.
    pub enable_view: Option<bool>,
}
