//! Configuration inspection CLI commands.
//!
//! Provides `config path` and `config show` for checking which file the
//! bridge reads and what settings are in effect.

use std::path::Path;

use clap::Subcommand;
use logbridge::config::ConfigFile;
use logbridge::provider::{resolve_identity, OWN_MODULE_NAME};

use super::{load_config, resolve_config_path};
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration settings
    Show,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(config_path),
        ConfigCommands::Show => run_show(config_path),
    }
}

/// Show the configuration file path.
fn run_path(config_path: Option<&Path>) -> Result<(), CliError> {
    let path = resolve_config_path(config_path);
    println!("{}", path.display());

    if !path.exists() {
        eprintln!("(file does not exist, defaults are in effect)");
    }

    Ok(())
}

/// Show all settings, including the identity messages will carry.
fn run_show(config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;

    println!("Configuration Settings");
    println!("======================");
    println!();
    for line in settings_lines(&config) {
        println!("{}", line);
    }

    Ok(())
}

fn settings_lines(config: &ConfigFile) -> Vec<String> {
    let logging = &config.logging;
    let identity = config.bridge.identity.as_deref();

    vec![
        "[logging]".to_string(),
        format!("  directory = {}", logging.directory.display()),
        format!("  file = {}", logging.file),
        format!("  filter = {}", logging.filter),
        format!("  stdout = {}", logging.stdout),
        format!("  minimum_severity = {}", logging.minimum_severity),
        String::new(),
        "[bridge]".to_string(),
        format!("  identity = {}", identity.unwrap_or("(not set)")),
        format!(
            "  effective identity: {}",
            resolve_identity(identity, OWN_MODULE_NAME)
        ),
    ]
}
