//! Logger that renders scopes and forwards to a sink.

use std::fmt;
use std::sync::Arc;

use super::{EventId, Formatter, Logger};
use crate::error::LogError;
use crate::level::LogLevel;
use crate::scope::{Scope, ScopeGuard, ScopeProvider};
use crate::sink::{ErrorRef, Sink, SinkSource};

/// [`Logger`] for one category, bound to an identity and a sink.
///
/// Every message is rendered as
///
/// ```text
/// [identity] <scope> <key=value> category: message
/// ```
///
/// with one `<...>` segment per active scope value, oldest first. The scope
/// provider is captured at construction; replacing the provider on the
/// factory later does not affect existing loggers.
///
/// Instances are immutable and can be shared freely between threads.
pub struct BridgeLogger {
    category: String,
    identity: Arc<str>,
    scopes: Option<Arc<dyn ScopeProvider>>,
    sink: Arc<dyn Sink>,
}

impl BridgeLogger {
    /// Create a logger for `category`, writing to the sink `sinks` hands out
    /// for `identity`.
    pub fn new(
        category: impl Into<String>,
        identity: impl Into<Arc<str>>,
        scopes: Option<Arc<dyn ScopeProvider>>,
        sinks: &dyn SinkSource,
    ) -> Self {
        let identity = identity.into();
        let sink = sinks.for_context(&identity);
        Self::with_sink(category, identity, scopes, sink)
    }

    /// Create a logger writing to an already resolved sink.
    pub fn with_sink(
        category: impl Into<String>,
        identity: impl Into<Arc<str>>,
        scopes: Option<Arc<dyn ScopeProvider>>,
        sink: Arc<dyn Sink>,
    ) -> Self {
        Self {
            category: category.into(),
            identity: identity.into(),
            scopes,
            sink,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Whether scopes pushed through this logger are retained.
    pub fn supports_scopes(&self) -> bool {
        self.scopes.is_some()
    }
}

impl fmt::Debug for BridgeLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeLogger")
            .field("category", &self.category)
            .field("identity", &self.identity)
            .field("supports_scopes", &self.supports_scopes())
            .finish()
    }
}

impl Logger for BridgeLogger {
    fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None
            && level
                .to_severity()
                .map_or(false, |severity| self.sink.is_enabled(severity))
    }

    fn begin_scope(&self, scope: Scope) -> ScopeGuard {
        match &self.scopes {
            Some(scopes) => scopes.push_scope(scope),
            None => ScopeGuard::noop(),
        }
    }

    fn log(
        &self,
        level: LogLevel,
        _event_id: EventId,
        error: Option<&ErrorRef>,
        formatter: Option<&Formatter<'_>>,
    ) -> Result<(), LogError> {
        if level == LogLevel::None {
            return Ok(());
        }

        let severity = level.to_severity()?;
        if !self.sink.is_enabled(severity) {
            return Ok(());
        }

        let formatter = formatter.ok_or(LogError::MissingFormatter)?;
        let message = render_message(
            &self.identity,
            self.scopes.as_deref(),
            &self.category,
            formatter,
        );
        self.sink.write(severity, error, &message);
        Ok(())
    }
}

/// Render `[identity] <scopes...> category: body`.
///
/// The formatter is called once, after the scopes have been rendered, and
/// always receives `None` as its error argument; errors travel to the sink
/// separately.
pub fn render_message(
    identity: &str,
    scopes: Option<&dyn ScopeProvider>,
    category: &str,
    formatter: &Formatter<'_>,
) -> String {
    let mut out = String::with_capacity(identity.len() + category.len() + 64);
    out.push('[');
    out.push_str(identity);
    out.push_str("] ");

    if let Some(scopes) = scopes {
        scopes.for_each_scope(&mut |scope| scope.render_into(&mut out));
    }

    out.push_str(category);
    out.push_str(": ");
    out.push_str(&formatter(None));
    out
}
