//! No-operation sink implementation.

use std::sync::Arc;

use super::{ErrorRef, Sink, SinkSource};
use crate::level::Severity;

/// A sink that discards all messages and reports every severity disabled.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// Because nothing is enabled, loggers writing here never run their
/// formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl Sink for NoOpSink {
    #[inline]
    fn is_enabled(&self, _severity: Severity) -> bool {
        false
    }

    #[inline]
    fn write(&self, _severity: Severity, _error: Option<&ErrorRef>, _message: &str) {}
}

impl SinkSource for NoOpSink {
    fn for_context(&self, _identity: &str) -> Arc<dyn Sink> {
        Arc::new(NoOpSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpSink>();
    }

    #[test]
    fn test_noop_sink_disables_everything() {
        let sink = NoOpSink;
        for severity in Severity::ALL {
            assert!(!sink.is_enabled(severity));
        }
    }

    #[test]
    fn test_noop_sink_as_source() {
        let sink = NoOpSink.for_context("plugin");
        sink.write(Severity::Fatal, None, "discarded");
        assert!(!sink.is_enabled(Severity::Fatal));
    }
}
