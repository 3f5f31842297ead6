//! Run mode detection and mode-derived settings.
//!
//! The host application's run mode is read from the `APP_ENV` environment
//! variable once, at setup. The mode derives the logging level (never
//! user-overridable) and the default for the log-view toggle.

use std::env;
use std::fmt;

use crate::logging::LogLevel;

/// The environment variable consulted for the run mode.
pub const RUN_MODE_VAR: &str = "APP_ENV";

/// The host application's run mode.
///
/// # Examples
///
/// ```
/// use logwire::config::RunMode;
/// use logwire::LogLevel;
///
/// assert_eq!(RunMode::Production.level(), LogLevel::Info);
/// assert_eq!(RunMode::Development.level(), LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Development mode: verbose logging, log view enabled by default.
    Development,
    /// Production mode: info-level logging, log view disabled by default.
    Production,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl RunMode {
    /// Detects the run mode from the environment.
    ///
    /// Any value of `APP_ENV` other than `production` (including an unset
    /// variable) means development.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(RUN_MODE_VAR) {
            Ok(value) if value == "production" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether this is the production mode.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// The derived logging level for this mode.
    ///
    /// `info` in production, `debug` otherwise. Not user-overridable.
    #[must_use]
    pub const fn level(self) -> LogLevel {
        match self {
            Self::Production => LogLevel::Info,
            Self::Development => LogLevel::Debug,
        }
    }

    /// The default for the log-view toggle in this mode.
    #[must_use]
    pub const fn default_enable_view(self) -> bool {
        !self.is_production()
    }
}
