//! The server logger handle.
//!
//! The plugin opens one logger during setup and hands it out as an explicit
//! [`LoggerHandle`]; lifecycle hooks and any other consumer receive a clone
//! of the handle rather than reaching for process-global state. The logger
//! appends timestamped lines to a file in the resolved log directory, with a
//! stderr sink available for tools and tests. It also implements [`log::Log`]
//! so a host that talks to the `log` facade can be backed by the same handle.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::Result;

/// Logging verbosity level.
///
/// Levels are ordered from least verbose (Error) to most verbose (Debug).
/// The configured level admits every message at or below it, so a logger at
/// [`LogLevel::Info`] emits errors, warnings, and info lines but drops debug
/// lines.
///
/// # Examples
///
/// ```
/// use logwire::LogLevel;
///
/// assert!(LogLevel::Error < LogLevel::Info);
/// assert!(LogLevel::Info < LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// Everything, including debug messages.
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "error", "warn", "info", "debug" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use logwire::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("info").unwrap(), LogLevel::Info);
    /// assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The uppercase label used in emitted log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

#[derive(Debug)]
enum Sink {
    Stderr,
    File(Mutex<BufWriter<File>>),
}

/// A level-gated logger writing timestamped lines to a file or stderr.
///
/// # Examples
///
/// ```
/// use logwire::{Logger, LogLevel};
///
/// let logger = Logger::stderr(LogLevel::Info);
/// logger.info("server middleware mounted");
/// logger.debug("dropped: requires the debug level");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
    sink: Sink,
}

/// A shared handle to the server logger.
///
/// Created once during plugin setup and cloned into every consumer that
/// needs to log, including the lifecycle hooks.
pub type LoggerHandle = Arc<Logger>;

impl Logger {
    /// Creates a logger that writes to stderr.
    #[must_use]
    pub const fn stderr(level: LogLevel) -> Self {
        Self {
            level,
            sink: Sink::Stderr,
        }
    }

    /// Opens a logger appending to the given file.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending.
    pub fn to_file(path: &Path, level: LogLevel) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            sink: Sink::File(Mutex::new(BufWriter::new(file))),
        })
    }

    /// Returns the configured log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    /// Logs an informational message.
    ///
    /// Dropped when the configured level is below [`LogLevel::Info`].
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    /// Logs a debug message.
    ///
    /// Only emitted at [`LogLevel::Debug`].
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if level > self.level {
            return;
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        let line = format!("{timestamp} {} {message}", level.label());

        match &self.sink {
            Sink::Stderr => eprintln!("{line}"),
            Sink::File(writer) => {
                // A poisoned writer only loses this line; setup-time logging
                // must not panic the host.
                if let Ok(mut writer) = writer.lock() {
                    let _ = writeln!(writer, "{line}");
                    let _ = writer.flush();
                }
            }
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        LogLevel::from(metadata.level()) <= self.level
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            self.emit(record.level().into(), &record.args().to_string());
        }
    }

    fn flush(&self) {
        if let Sink::File(writer) = &self.sink {
            if let Ok(mut writer) = writer.lock() {
                let _ = writer.flush();
            }
        }
    }
}
