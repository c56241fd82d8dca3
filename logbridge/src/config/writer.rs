//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented representation written to `config.ini`. Comments
//! sit on their own lines because INI values are read verbatim.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let identity = config.bridge.identity.as_deref().unwrap_or("");

    format!(
        r#"[logging]
; Directory that holds the log file (~ is expanded)
directory = {}
; Log file name, cleared at the start of every session
file = {}
; Filter directive used when RUST_LOG is not set (e.g. info, logbridge=debug)
filter = {}
; Also print log output to stdout
stdout = {}
; Lowest severity forwarded to tracing:
;   verbose, debug, information, warning, error, fatal
minimum_severity = {}

[bridge]
; Identity prefixed to every message; empty uses the host module name
identity = {}
"#,
        config.logging.directory.display(),
        config.logging.file,
        config.logging.filter,
        config.logging.stdout,
        config.logging.minimum_severity,
        identity,
    )
}
