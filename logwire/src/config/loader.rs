//! Configuration file discovery and loading.
//!
//! The host application can provide file-level plugin options in a
//! `logger.yaml` next to its project root. A missing file is not an error;
//! a file that exists but cannot be read or parsed is.

use std::fs;
use std::path::Path;

use crate::config::schema::Options;
use crate::error::Result;

/// The file name searched for in the project directory.
pub const CONFIG_FILE: &str = "logger.yaml";

/// Loads file-level plugin options.
///
/// # Examples
///
/// ```no_run
/// use logwire::config::OptionsLoader;
/// use std::path::Path;
///
/// let options = OptionsLoader::load(Path::new("/app")).unwrap();
/// if options.is_none() {
///     println!("no logger.yaml, using defaults");
/// }
/// ```
pub struct OptionsLoader;

impl OptionsLoader {
    /// Load `logger.yaml` from the project directory, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(project_dir: &Path) -> Result<Option<Options>> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let options = serde_yaml::from_str(&contents)?;
        Ok(Some(options))
    }
}
