//! In-memory sink for assertions.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::{ErrorRef, Sink, SinkSource};
use crate::level::Severity;

/// A message captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identity the sink was obtained for.
    pub context: String,
    pub severity: Severity,
    /// `Display` output of the forwarded error, if any.
    pub error: Option<String>,
    pub message: String,
}

#[derive(Debug)]
struct Shared {
    records: Mutex<Vec<Record>>,
    minimum: RwLock<Option<Severity>>,
}

/// Thread-safe sink that keeps every written message in memory.
///
/// Clones and the sinks handed out by [`SinkSource::for_context`] share one
/// buffer and one enablement setting; only the recorded context differs.
///
/// # Example
///
/// ```
/// use logbridge::level::Severity;
/// use logbridge::sink::{RecordingSink, Sink, SinkSource};
///
/// let recording = RecordingSink::new();
/// recording.for_context("MyPlugin").write(Severity::Warning, None, "careful");
///
/// let records = recording.records();
/// assert_eq!(records[0].context, "MyPlugin");
/// assert_eq!(records[0].message, "careful");
/// ```
#[derive(Debug, Clone)]
pub struct RecordingSink {
    context: Arc<str>,
    shared: Arc<Shared>,
}

impl RecordingSink {
    /// A sink with every severity enabled.
    pub fn new() -> Self {
        Self::with_minimum(Severity::Verbose)
    }

    /// A sink that accepts `minimum` and above.
    pub fn with_minimum(minimum: Severity) -> Self {
        Self {
            context: Arc::from(""),
            shared: Arc::new(Shared {
                records: Mutex::new(Vec::new()),
                minimum: RwLock::new(Some(minimum)),
            }),
        }
    }

    /// Change the lowest enabled severity.
    pub fn set_minimum(&self, minimum: Severity) {
        *self.shared.minimum.write() = Some(minimum);
    }

    /// Report every severity as disabled.
    pub fn disable(&self) {
        *self.shared.minimum.write() = None;
    }

    /// Context this handle records under.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Snapshot of everything written so far.
    pub fn records(&self) -> Vec<Record> {
        self.shared.records.lock().clone()
    }

    /// Snapshot of the written messages only.
    pub fn messages(&self) -> Vec<String> {
        self.shared
            .records
            .lock()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.shared.records.lock().clear();
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for RecordingSink {
    fn is_enabled(&self, severity: Severity) -> bool {
        matches!(*self.shared.minimum.read(), Some(minimum) if severity >= minimum)
    }

    fn write(&self, severity: Severity, error: Option<&ErrorRef>, message: &str) {
        self.shared.records.lock().push(Record {
            context: self.context.to_string(),
            severity,
            error: error.map(|e| e.to_string()),
            message: message.to_string(),
        });
    }
}

impl SinkSource for RecordingSink {
    fn for_context(&self, identity: &str) -> Arc<dyn Sink> {
        Arc::new(RecordingSink {
            context: Arc::from(identity),
            shared: self.shared.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_records_message_and_error() {
        let sink = RecordingSink::new();
        let err = io::Error::new(io::ErrorKind::Other, "disk full");
        sink.write(Severity::Error, Some(&err), "write failed");

        assert_eq!(
            sink.records(),
            vec![Record {
                context: String::new(),
                severity: Severity::Error,
                error: Some("disk full".to_string()),
                message: "write failed".to_string(),
            }]
        );
    }

    #[test]
    fn test_minimum_severity_controls_enablement() {
        let sink = RecordingSink::with_minimum(Severity::Warning);
        assert!(!sink.is_enabled(Severity::Information));
        assert!(sink.is_enabled(Severity::Warning));
        assert!(sink.is_enabled(Severity::Fatal));

        sink.set_minimum(Severity::Verbose);
        assert!(sink.is_enabled(Severity::Verbose));

        sink.disable();
        assert!(!sink.is_enabled(Severity::Fatal));
    }

    #[test]
    fn test_contexts_share_one_buffer() {
        let sink = RecordingSink::new();
        sink.for_context("a").write(Severity::Debug, None, "from a");
        sink.for_context("b").write(Severity::Debug, None, "from b");

        let contexts: Vec<String> = sink.records().into_iter().map(|r| r.context).collect();
        assert_eq!(contexts, vec!["a", "b"]);

        sink.clear();
        assert!(sink.messages().is_empty());
    }
}
