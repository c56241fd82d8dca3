//! Front-end logging interface.
//!
//! Components log through the [`Logger`] trait without knowing which backend
//! receives the output. [`BridgeLogger`] is the implementation that renders
//! category, identity and active scopes into a single line and forwards it to
//! a [`Sink`](crate::sink::Sink).
//!
//! # Usage
//!
//! Components that need logging should accept an `Arc<dyn Logger>` and use
//! the provided macros:
//!
//! ```
//! use logbridge::logger::Logger;
//! use logbridge::provider::{BridgeProvider, ModuleName};
//! use logbridge::sink::RecordingSink;
//! use logbridge::{log_debug, log_info};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn do_work(&self) {
//!         log_info!(self.logger, "Starting work");
//!         log_debug!(self.logger, "Work completed in {} steps", 3);
//!     }
//! }
//!
//! let sink = RecordingSink::new();
//! let provider = BridgeProvider::new(&ModuleName::new("MyPlugin"), Arc::new(sink.clone()));
//! let component = MyComponent { logger: Arc::new(provider.create_logger("Worker")) };
//! component.do_work();
//!
//! assert_eq!(sink.messages()[0], "[MyPlugin] Worker: Starting work");
//! ```

mod bridge;

pub use bridge::{render_message, BridgeLogger};

use std::fmt;

use crate::error::LogError;
use crate::level::LogLevel;
use crate::scope::{Scope, ScopeGuard};
use crate::sink::ErrorRef;

/// Lazily produces the message text. Receives the error argument, which
/// [`BridgeLogger`] always passes as `None`.
pub type Formatter<'a> = dyn Fn(Option<&ErrorRef>) -> String + 'a;

/// Identifies a logged event.
///
/// Accepted for compatibility with structured front-ends; it is not part of
/// the rendered message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    pub id: i32,
    pub name: Option<String>,
}

impl EventId {
    pub fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Logging interface for application components.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
pub trait Logger: Send + Sync {
    /// Whether a message at `level` would be written.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Make `scope` part of every message logged while the guard is alive.
    fn begin_scope(&self, scope: Scope) -> ScopeGuard;

    /// Log a message.
    ///
    /// `formatter` is only invoked when the message will actually be written;
    /// a missing formatter is reported as [`LogError::MissingFormatter`] for
    /// enabled levels only. `error` is forwarded to the sink untouched.
    fn log(
        &self,
        level: LogLevel,
        event_id: EventId,
        error: Option<&ErrorRef>,
        formatter: Option<&Formatter<'_>>,
    ) -> Result<(), LogError>;

    /// Log a trace-level message.
    ///
    /// The level helpers report a failed [`log`](Logger::log) as a `tracing`
    /// warning instead of returning it.
    fn trace(&self, args: fmt::Arguments<'_>) {
        log_args(self, LogLevel::Trace, args);
    }

    /// Log a debug-level message.
    fn debug(&self, args: fmt::Arguments<'_>) {
        log_args(self, LogLevel::Debug, args);
    }

    /// Log an information-level message.
    fn info(&self, args: fmt::Arguments<'_>) {
        log_args(self, LogLevel::Information, args);
    }

    /// Log a warning-level message.
    fn warn(&self, args: fmt::Arguments<'_>) {
        log_args(self, LogLevel::Warning, args);
    }

    /// Log an error-level message.
    fn error(&self, args: fmt::Arguments<'_>) {
        log_args(self, LogLevel::Error, args);
    }

    /// Log a critical-level message.
    fn critical(&self, args: fmt::Arguments<'_>) {
        log_args(self, LogLevel::Critical, args);
    }
}

fn log_args<L: Logger + ?Sized>(logger: &L, level: LogLevel, args: fmt::Arguments<'_>) {
    let format = |_: Option<&ErrorRef>| args.to_string();
    // A formatter is always supplied and `level` is never `None`, so only an
    // implementor's own failure can surface here. The helpers return `()`, so
    // it is reported instead of propagated; use `Logger::log` to handle it.
    if let Err(e) = logger.log(level, EventId::default(), None, Some(&format)) {
        tracing::warn!(level = %level, error = %e, "Logger rejected message");
    }
}

/// State-carrying helpers for every [`Logger`], including `dyn Logger`.
pub trait LoggerExt: Logger {
    /// Log `state` through a formatter that receives it by reference.
    ///
    /// ```
    /// use logbridge::level::LogLevel;
    /// use logbridge::logger::{EventId, LoggerExt};
    /// use logbridge::provider::{BridgeProvider, ModuleName};
    /// use logbridge::sink::{ErrorRef, RecordingSink};
    /// use std::sync::Arc;
    ///
    /// let sink = RecordingSink::new();
    /// let logger = BridgeProvider::new(&ModuleName::new("Plugin"), Arc::new(sink.clone()))
    ///     .create_logger("Svc");
    ///
    /// logger
    ///     .log_state(
    ///         LogLevel::Information,
    ///         EventId::new(1),
    ///         &7,
    ///         None,
    ///         Some(|n: &i32, _err: Option<&ErrorRef>| format!("n={}", n)),
    ///     )
    ///     .unwrap();
    /// assert_eq!(sink.messages(), vec!["[Plugin] Svc: n=7"]);
    /// ```
    fn log_state<S, F>(
        &self,
        level: LogLevel,
        event_id: EventId,
        state: &S,
        error: Option<&ErrorRef>,
        formatter: Option<F>,
    ) -> Result<(), LogError>
    where
        S: ?Sized,
        F: Fn(&S, Option<&ErrorRef>) -> String,
    {
        match formatter {
            Some(formatter) => {
                let bound = |err: Option<&ErrorRef>| formatter(state, err);
                self.log(level, event_id, error, Some(&bound))
            }
            None => self.log(level, event_id, error, None),
        }
    }

    /// [`Logger::begin_scope`] accepting anything convertible to a [`Scope`].
    fn scope(&self, scope: impl Into<Scope>) -> ScopeGuard {
        self.begin_scope(scope.into())
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}

/// Convenience macros for logging with format strings.
///
/// Formatting is deferred until the logger has checked that the level is
/// enabled.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::logger::Logger as _;
        $logger.trace(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::logger::Logger as _;
        $logger.debug(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::logger::Logger as _;
        $logger.info(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::logger::Logger as _;
        $logger.warn(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::logger::Logger as _;
        $logger.error(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::logger::Logger as _;
        $logger.critical(format_args!($($arg)*))
    }};
}
