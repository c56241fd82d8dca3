//! logbridge - route a plugin's logging into a host's logging backend
//!
//! A host application exposes a severity-based log sink; plugins and
//! components written against a generic leveled logging interface write
//! through the bridge, which maps levels to severities and renders the
//! category, host identity and active scopes into a single message line.
//!
//! # High-Level API
//!
//! For most use cases, register the host with a [`provider::LoggingBuilder`]
//! and hand out loggers from the resulting factory:
//!
//! ```
//! use logbridge::log_info;
//! use logbridge::logger::LoggerExt;
//! use logbridge::provider::LoggingBuilder;
//! use logbridge::sink::RecordingSink;
//! use std::sync::Arc;
//!
//! let sink = RecordingSink::new();
//! let factory = LoggingBuilder::new()
//!     .add_bridge_logger("MyPlugin", Arc::new(sink.clone()))
//!     .build();
//!
//! let logger = factory.create_logger("Importer");
//! let _scope = logger.scope("job-42");
//! log_info!(logger, "imported {} rows", 10);
//!
//! assert_eq!(sink.messages(), vec!["[MyPlugin] <job-42> Importer: imported 10 rows"]);
//! ```

pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod logging;
pub mod provider;
pub mod scope;
pub mod sink;

pub use error::LogError;
pub use level::{LogLevel, Severity};

/// Version of the logbridge library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty(), "Version should not be empty");
    }
}
