//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::level::Severity;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.contains('/') || v.contains('\\') {
                return Err(invalid(
                    "logging",
                    "file",
                    v,
                    "must be a file name; use 'directory' for the location",
                ));
            }
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
        if let Some(v) = section.get("filter") {
            let v = v.trim();
            if !v.is_empty() {
                EnvFilter::try_new(v)
                    .map_err(|e| invalid("logging", "filter", v, &e.to_string()))?;
                config.logging.filter = v.to_string();
            }
        }
        if let Some(v) = section.get("stdout") {
            config.logging.stdout = parse_bool(v);
        }
        if let Some(v) = section.get("minimum_severity") {
            config.logging.minimum_severity = v
                .parse::<Severity>()
                .map_err(|reason| invalid("logging", "minimum_severity", v, &reason))?;
        }
    }

    // [bridge] section
    if let Some(section) = ini.section(Some("bridge")) {
        if let Some(v) = section.get("identity") {
            let v = v.trim();
            if !v.is_empty() {
                config.bridge.identity = Some(v.to_string());
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
