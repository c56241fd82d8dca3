//! Destinations for rendered log messages.
//!
//! A [`Sink`] receives fully rendered messages together with their
//! [`Severity`] and an optional error. Sinks are obtained per identity from a
//! [`SinkSource`], so every plugin sharing one backend gets its own context.
//!
//! # Implementations
//!
//! - [`TracingSinks`]: production backend, emits `tracing` events
//! - [`RecordingSink`]: keeps messages in memory for assertions
//! - [`NoOpSink`]: discards everything

mod noop;
mod recording;
mod tracing_adapter;

pub use noop::NoOpSink;
pub use recording::{Record, RecordingSink};
pub use tracing_adapter::{TracingSink, TracingSinks, TRACING_TARGET};

use std::sync::Arc;

use crate::level::Severity;

/// Error value forwarded alongside a message.
pub type ErrorRef = dyn std::error::Error + 'static;

/// Destination bound to one identity.
pub trait Sink: Send + Sync {
    /// Whether messages at `severity` would be written.
    fn is_enabled(&self, severity: Severity) -> bool;

    /// Write a rendered message.
    fn write(&self, severity: Severity, error: Option<&ErrorRef>, message: &str);
}

/// Hands out sinks keyed by identity.
pub trait SinkSource: Send + Sync {
    /// Sink whose output is attributed to `identity`.
    fn for_context(&self, identity: &str) -> Arc<dyn Sink>;
}

