//! Front-end log levels and sink severities.
//!
//! [`LogLevel`] is what callers use; [`Severity`] is what sinks understand.
//! Every level except [`LogLevel::None`] maps to exactly one severity and the
//! mapping preserves ordering.

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Log level used by callers of the [`Logger`](crate::logger::Logger) trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Most detailed messages, may contain sensitive data
    Trace = 0,
    /// Interactive debugging output
    Debug = 1,
    /// General flow of the application
    Information = 2,
    /// Abnormal or unexpected events
    Warning = 3,
    /// Failure of the current operation
    Error = 4,
    /// Unrecoverable failure
    Critical = 5,
    /// Never emitted
    None = 6,
}

impl LogLevel {
    /// All levels in ascending order, `None` last.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::None,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Information => "information",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::None => "none",
        }
    }

    /// Map this level to the sink severity it is emitted at.
    ///
    /// Returns [`LogError::LevelOutOfRange`] for [`LogLevel::None`], which has
    /// no severity.
    pub fn to_severity(self) -> Result<Severity, LogError> {
        Severity::try_from(self)
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        LogLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or(LogError::LevelOutOfRange(value))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "information" | "info" => Ok(LogLevel::Information),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            "none" => Ok(LogLevel::None),
            other => Err(format!(
                "unknown log level '{}' (expected trace, debug, information, warning, error, critical or none)",
                other
            )),
        }
    }
}

/// Severity understood by a [`Sink`](crate::sink::Sink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Verbose = 0,
    Debug = 1,
    Information = 2,
    Warning = 3,
    Error = 4,
    Fatal = 5,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Information,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Information => "information",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl TryFrom<LogLevel> for Severity {
    type Error = LogError;

    fn try_from(level: LogLevel) -> Result<Self, LogError> {
        match level {
            LogLevel::Critical => Ok(Severity::Fatal),
            LogLevel::Error => Ok(Severity::Error),
            LogLevel::Warning => Ok(Severity::Warning),
            LogLevel::Information => Ok(Severity::Information),
            LogLevel::Debug => Ok(Severity::Debug),
            LogLevel::Trace => Ok(Severity::Verbose),
            LogLevel::None => Err(LogError::LevelOutOfRange(level as u8)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verbose" | "trace" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            "information" | "info" => Ok(Severity::Information),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            other => Err(format!(
                "unknown severity '{}' (expected verbose, debug, information, warning, error or fatal)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Information);
        assert!(LogLevel::Information < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
        assert!(LogLevel::Critical < LogLevel::None);
    }

    #[test]
    fn test_mapping_table() {
        assert_eq!(LogLevel::Trace.to_severity(), Ok(Severity::Verbose));
        assert_eq!(LogLevel::Debug.to_severity(), Ok(Severity::Debug));
        assert_eq!(
            LogLevel::Information.to_severity(),
            Ok(Severity::Information)
        );
        assert_eq!(LogLevel::Warning.to_severity(), Ok(Severity::Warning));
        assert_eq!(LogLevel::Error.to_severity(), Ok(Severity::Error));
        assert_eq!(LogLevel::Critical.to_severity(), Ok(Severity::Fatal));
    }

    #[test]
    fn test_mapping_is_strictly_monotonic() {
        let mapped: Vec<Severity> = LogLevel::ALL
            .iter()
            .filter(|l| **l != LogLevel::None)
            .map(|l| l.to_severity().unwrap())
            .collect();

        assert_eq!(mapped.len(), Severity::ALL.len());
        for pair in mapped.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should rank below {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_none_has_no_severity() {
        assert_eq!(
            LogLevel::None.to_severity(),
            Err(LogError::LevelOutOfRange(6))
        );
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(LogLevel::try_from(0), Ok(LogLevel::Trace));
        assert_eq!(LogLevel::try_from(5), Ok(LogLevel::Critical));
        assert_eq!(LogLevel::try_from(6), Ok(LogLevel::None));
        assert_eq!(LogLevel::try_from(7), Err(LogError::LevelOutOfRange(7)));
        assert_eq!(
            LogLevel::try_from(255),
            Err(LogError::LevelOutOfRange(255))
        );
    }

    #[test]
    fn test_conversions_through_try_from() {
        fn convert<T: TryFrom<U, Error = LogError>, U>(value: U) -> Result<T, LogError> {
            T::try_from(value)
        }

        assert_eq!(convert::<LogLevel, u8>(4), Ok(LogLevel::Error));
        assert_eq!(convert::<Severity, LogLevel>(LogLevel::Error), Ok(Severity::Error));
        assert_eq!(
            convert::<Severity, LogLevel>(LogLevel::None),
            Err(LogError::LevelOutOfRange(6))
        );
    }

    #[test]
    fn test_level_parse_accepts_aliases() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Information));
        assert_eq!(" WARN ".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("critical".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }
}
