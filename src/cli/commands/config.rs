//! Config command implementation.

use std::path::Path;

use crate::cli::args::ConfigCommands;
use crate::config::Config;
use crate::error::QuickAddError;

/// Execute a config subcommand against the already-loaded configuration.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn config(
    command: &ConfigCommands,
    config: &Config,
    path: &Path,
) -> Result<String, QuickAddError> {
    match command {
        ConfigCommands::Show => config.to_yaml(),
        ConfigCommands::Path => Ok(path.display().to_string()),
    }
}
