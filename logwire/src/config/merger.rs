//! Option merging and precedence handling.
//!
//! Sources are merged lowest to highest precedence with `Some`-overwrites
//! semantics: an explicit value in a higher-precedence source wins, while a
//! missing value never erases one supplied lower down. Nested sections merge
//! field by field.

use crate::config::schema::{ClientOptions, Options, ServerOptions};

/// Merges option sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use logwire::config::{Options, OptionsMerger, ServerOptions};
///
/// let low = Options {
///     server: Some(ServerOptions {
///         logs_path: Some("/logger/logs".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// let high = Options {
///     server: Some(ServerOptions {
///         logs_path: Some("/internal/logs".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// OptionsMerger::merge_into(&mut result, &high);
/// assert_eq!(result.server.unwrap().logs_path.as_deref(), Some("/internal/logs"));
/// ```
pub struct OptionsMerger;

impl OptionsMerger {
    /// Merge option sources into a final options value.
    ///
    /// Sources should be provided in order from lowest to highest
    /// precedence.
    #[must_use]
    pub fn merge(sources: Vec<Options>) -> Options {
        let mut result = Options::default();
        for source in sources {
            Self::merge_into(&mut result, &source);
        }
        result
    }

    /// Merge source options into target (source overwrites target).
    ///
    /// Nested client/server sections merge field by field; a `None` field in
    /// the source preserves the target's value.
    pub fn merge_into(target: &mut Options, source: &Options) {
        if let Some(ref source_client) = source.client {
            target.client = Some(match &target.client {
                Some(target_client) => Self::merge_client(target_client, source_client),
                None => source_client.clone(),
            });
        }

        if let Some(ref source_server) = source.server {
            target.server = Some(match &target.server {
                Some(target_server) => Self::merge_server(target_server, source_server),
                None => source_server.clone(),
            });
        }
    }

    fn merge_client(target: &ClientOptions, source: &ClientOptions) -> ClientOptions {
        ClientOptions {
            factory: source.factory.clone().or_else(|| target.factory.clone()),
        }
    }

    fn merge_server(target: &ServerOptions, source: &ServerOptions) -> ServerOptions {
        ServerOptions {
            factory: source.factory.clone().or_else(|| target.factory.clone()),
            logs_dir: source.logs_dir.clone().or_else(|| target.logs_dir.clone()),
            logs_path: source.logs_path.clone().or_else(|| target.logs_path.clone()),
            enable_view: source.enable_view.or(target.enable_view),
        }
    }
}
