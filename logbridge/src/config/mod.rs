//! Configuration file handling for `~/.logbridge/config.ini`.
//!
//! The file has two sections:
//!
//! ```ini
//! [logging]
//! directory = ~/.logbridge/logs
//! file = logbridge.log
//! filter = info
//! stdout = true
//! minimum_severity = verbose
//!
//! [bridge]
//! identity = MyPlugin
//! ```
//!
//! Missing files, sections and keys fall back to [`ConfigFile::default`].

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_FILTER, DEFAULT_LOG_FILE};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{BridgeSettings, ConfigFile, LoggingSettings};
