//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration inspection (path, show)
//! - [`emit`] - Log a message through the bridge (emit, render)

pub mod config;
pub mod emit;

use std::path::{Path, PathBuf};

use logbridge::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Path of the config file in use: `override_path` or the default location.
pub fn resolve_config_path(override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(override_path: Option<&Path>) -> Result<ConfigFile, CliError> {
    Ok(ConfigFile::load_from(&resolve_config_path(override_path))?)
}
