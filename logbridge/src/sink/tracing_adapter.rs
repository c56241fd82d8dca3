//! Tracing library adapter implementation.

use std::sync::Arc;

use tracing::Level;

use super::{ErrorRef, Sink, SinkSource};
use crate::level::Severity;

/// Target every bridged event is emitted under.
pub const TRACING_TARGET: &str = "logbridge";

/// Sink that delegates to the `tracing` crate.
///
/// This adapter bridges rendered messages into the `tracing` ecosystem, so
/// subscribers, filters and file output configured by the host apply to
/// them. Each event carries:
///
/// - `source_context`: the identity this sink was created for
/// - `severity`: the original severity name (`fatal` and `error` both map
///   to [`Level::ERROR`])
/// - `error`: the forwarded error's `Display` output, when present
#[derive(Debug, Clone)]
pub struct TracingSink {
    context: Arc<str>,
    minimum: Severity,
}

impl TracingSink {
    /// Create a sink for `context` accepting every severity.
    pub fn new(context: impl Into<Arc<str>>) -> Self {
        Self {
            context: context.into(),
            minimum: Severity::Verbose,
        }
    }

    /// Drop messages below `minimum` before consulting `tracing`.
    pub fn with_minimum(mut self, minimum: Severity) -> Self {
        self.minimum = minimum;
        self
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// `tracing` level a severity is emitted at.
    pub fn tracing_level(severity: Severity) -> Level {
        match severity {
            Severity::Verbose => Level::TRACE,
            Severity::Debug => Level::DEBUG,
            Severity::Information => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Error | Severity::Fatal => Level::ERROR,
        }
    }
}

// `tracing` needs the level as a constant at each callsite.
macro_rules! emit {
    ($level:expr, $context:ident, $severity:ident, $error:ident, $message:ident) => {
        match $error {
            Some(error) => tracing::event!(
                target: TRACING_TARGET,
                $level,
                source_context = %$context,
                severity = $severity,
                error = %error,
                "{}",
                $message
            ),
            None => tracing::event!(
                target: TRACING_TARGET,
                $level,
                source_context = %$context,
                severity = $severity,
                "{}",
                $message
            ),
        }
    };
}

impl Sink for TracingSink {
    fn is_enabled(&self, severity: Severity) -> bool {
        if severity < self.minimum {
            return false;
        }
        match severity {
            Severity::Verbose => tracing::enabled!(target: TRACING_TARGET, Level::TRACE),
            Severity::Debug => tracing::enabled!(target: TRACING_TARGET, Level::DEBUG),
            Severity::Information => tracing::enabled!(target: TRACING_TARGET, Level::INFO),
            Severity::Warning => tracing::enabled!(target: TRACING_TARGET, Level::WARN),
            Severity::Error | Severity::Fatal => {
                tracing::enabled!(target: TRACING_TARGET, Level::ERROR)
            }
        }
    }

    fn write(&self, severity: Severity, error: Option<&ErrorRef>, message: &str) {
        let context = &*self.context;
        let name = severity.as_str();
        match severity {
            Severity::Verbose => emit!(Level::TRACE, context, name, error, message),
            Severity::Debug => emit!(Level::DEBUG, context, name, error, message),
            Severity::Information => emit!(Level::INFO, context, name, error, message),
            Severity::Warning => emit!(Level::WARN, context, name, error, message),
            Severity::Error | Severity::Fatal => {
                emit!(Level::ERROR, context, name, error, message)
            }
        }
    }
}

/// [`SinkSource`] producing a [`TracingSink`] per identity.
#[derive(Debug, Clone, Copy)]
pub struct TracingSinks {
    minimum: Severity,
}

impl TracingSinks {
    pub fn new() -> Self {
        Self {
            minimum: Severity::Verbose,
        }
    }

    /// Apply `minimum` to every sink handed out.
    pub fn with_minimum(minimum: Severity) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> Severity {
        self.minimum
    }
}

impl Default for TracingSinks {
    fn default() -> Self {
        Self::new()
    }
}

impl SinkSource for TracingSinks {
    fn for_context(&self, identity: &str) -> Arc<dyn Sink> {
        Arc::new(TracingSink::new(identity).with_minimum(self.minimum))
    }
}
