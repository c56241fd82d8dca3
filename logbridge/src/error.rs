//! Error types for the logging adapter.

use thiserror::Error;

/// Errors returned by [`Logger::log`](crate::logger::Logger::log) and the
/// level conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LogError {
    /// `log` was called without a formatter for an enabled level.
    #[error("formatter must be provided")]
    MissingFormatter,

    /// A level value has no counterpart in the target enumeration.
    #[error("log level {0} is out of range")]
    LevelOutOfRange(u8),
}
