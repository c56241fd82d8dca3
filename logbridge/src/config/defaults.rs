//! Default values for every configuration key.

use super::file::config_directory;
use super::settings::LoggingSettings;
use crate::level::Severity;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "logbridge.log";

/// Default `EnvFilter` directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: config_directory().join("logs"),
            file: DEFAULT_LOG_FILE.to_string(),
            filter: DEFAULT_FILTER.to_string(),
            stdout: true,
            minimum_severity: Severity::Verbose,
        }
    }
}
