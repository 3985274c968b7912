//! Path resolution for quickadd configuration files.
//!
//! All quickadd data is stored in `~/.quickadd/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::QuickAddError;

/// Paths to quickadd configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.quickadd/`
    pub root: PathBuf,
    /// Config file: `~/.quickadd/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QuickAddError> {
        let home = std::env::var("HOME").map_err(|_| {
            QuickAddError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".quickadd")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

}
