//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::level::Severity;
use crate::provider::ModuleName;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Logging settings
    pub logging: LoggingSettings,
    /// Adapter settings
    pub bridge: BridgeSettings,
}

/// Where and how log output is written.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory holding the log file
    pub directory: PathBuf,
    /// Log file name inside `directory`
    pub file: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Also write to stdout
    pub stdout: bool,
    /// Lowest severity the tracing sink accepts
    pub minimum_severity: Severity,
}

impl LoggingSettings {
    /// Full path of the log file.
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file)
    }
}

/// Adapter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeSettings {
    /// Identity to use instead of the host module's name
    pub identity: Option<String>,
}

impl BridgeSettings {
    /// Host module described by these settings.
    pub fn host(&self) -> ModuleName {
        match &self.identity {
            Some(identity) => ModuleName::new(identity.clone()),
            None => ModuleName::unknown(),
        }
    }
}
