//! Error types for the logwire library.
//!
//! This module provides the error hierarchy for plugin setup, using
//! `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a logwire error.
///
/// # Examples
///
/// ```
/// use logwire::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("logs".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the logwire library.
///
/// This enum encompasses all failure conditions that can occur while the
/// plugin is being wired into a host application. Setup runs once at process
/// startup, so every variant here is fatal to setup.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration field failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The log directory could not be created.
    #[error("cannot create log directory {}: {source}", path.display())]
    LogsDirCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Check if error is a configuration validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use logwire::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "server.logs_path".to_string(),
    ///     message: "must start with '/'".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error indicates an invalid path.
    ///
    /// # Examples
    ///
    /// ```
    /// use logwire::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::InvalidPath {
    ///     path: PathBuf::from("relative"),
    ///     reason: "must be absolute".to_string(),
    /// };
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}
