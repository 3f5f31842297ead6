//! Option validation.
//!
//! Validation runs on the merged options before any path work or filesystem
//! access, so malformed configuration fails fast with a descriptive error
//! instead of surfacing later as a confusing I/O failure.

use crate::config::schema::Options;
use crate::error::{Error, Result};

/// Validates merged plugin options.
///
/// # Examples
///
/// ```
/// use logwire::config::{Options, OptionsValidator};
///
/// OptionsValidator::validate(&Options::default()).unwrap();
/// ```
pub struct OptionsValidator;

impl OptionsValidator {
    /// Validate merged options.
    ///
    /// Checks every supplied path field for emptiness and null bytes, and
    /// requires the middleware mount path to start with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field.
    pub fn validate(options: &Options) -> Result<()> {
        if let Some(ref client) = options.client {
            if let Some(ref factory) = client.factory {
                Self::validate_path_field("client.factory", factory)?;
            }
        }

        if let Some(ref server) = options.server {
            if let Some(ref factory) = server.factory {
                Self::validate_path_field("server.factory", factory)?;
            }
            if let Some(ref logs_dir) = server.logs_dir {
                Self::validate_path_field("server.logs_dir", logs_dir)?;
            }
            if let Some(ref logs_path) = server.logs_path {
                Self::validate_path_field("server.logs_path", logs_path)?;
                if !logs_path.starts_with('/') {
                    return Err(Error::Validation {
                        field: "server.logs_path".to_string(),
                        message: "must start with '/'".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate a single path-valued field.
    fn validate_path_field(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.to_string(),
                message: "cannot be empty or only whitespace".to_string(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.to_string(),
                message: "cannot contain null bytes".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ClientOptions, ServerOptions};

    fn options_with_server(server: ServerOptions) -> Options {
        Options {
            server: Some(server),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        OptionsValidator::validate(&Options::default()).unwrap();
    }

    #[test]
    fn test_empty_factory_rejected() {
        let options = Options {
            client: Some(ClientOptions {
                factory: Some("  ".to_string()),
            }),
            ..Default::default()
        };
        let err = OptionsValidator::validate(&options).unwrap_err();
        assert!(err.is_validation());
        assert!(format!("{err}").contains("client.factory"));
    }

    #[test]
    fn test_null_byte_rejected() {
        let options = options_with_server(ServerOptions {
            logs_dir: Some("logs\0dir".to_string()),
            ..Default::default()
        });
        assert!(OptionsValidator::validate(&options).is_err());
    }

    #[test]
    fn test_logs_path_must_start_with_slash() {
        let options = options_with_server(ServerOptions {
            logs_path: Some("logger/logs".to_string()),
            ..Default::default()
        });
        let err = OptionsValidator::validate(&options).unwrap_err();
        assert!(format!("{err}").contains("must start with '/'"));
    }

    #[test]
    fn test_well_formed_options_pass() {
        let options = options_with_server(ServerOptions {
            factory: Some("custom/server.js".to_string()),
            logs_dir: Some("~/logs".to_string()),
            logs_path: Some("/internal/logs".to_string()),
            enable_view: Some(true),
        });
        OptionsValidator::validate(&options).unwrap();
    }
}
