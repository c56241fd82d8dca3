//! Logger factories.
//!
//! A [`LoggerProvider`] turns category names into loggers. [`BridgeProvider`]
//! is the provider for this crate's [`BridgeLogger`](crate::logger::BridgeLogger);
//! [`LoggingBuilder`] registers providers and produces a [`LoggerFactory`]
//! that fans each logger out over all of them.
//!
//! # Example
//!
//! ```
//! use logbridge::logger::LoggerExt;
//! use logbridge::provider::LoggingBuilder;
//! use logbridge::sink::RecordingSink;
//! use logbridge::log_info;
//! use std::sync::Arc;
//!
//! let sink = RecordingSink::new();
//! let factory = LoggingBuilder::new()
//!     .add_bridge_logger("MyPlugin", Arc::new(sink.clone()))
//!     .build();
//!
//! let logger = factory.create_logger("Foo");
//! let _request = logger.scope("req-1");
//! log_info!(logger, "hello");
//!
//! assert_eq!(sink.messages(), vec!["[MyPlugin] <req-1> Foo: hello"]);
//! ```

mod bridge;
mod builder;
mod identity;

pub use bridge::BridgeProvider;
pub use builder::{FactoryLogger, LoggerFactory, LoggingBuilder};
pub use identity::{
    resolve_identity, HostModule, ModuleName, TypeName, OWN_MODULE_NAME, UNKNOWN_IDENTITY,
};

use std::sync::Arc;

use crate::logger::Logger;
use crate::scope::ScopeProvider;

/// Creates loggers by category name.
pub trait LoggerProvider: Send + Sync {
    /// Registration key; a [`LoggingBuilder`] keeps one provider per key.
    fn key(&self) -> &str;

    /// Create a logger for `category`.
    fn create_logger(&self, category: &str) -> Arc<dyn Logger>;

    /// Receive the scope provider shared by a [`LoggerFactory`].
    ///
    /// Providers without scope support ignore it.
    fn set_scope_provider(&self, _scopes: Arc<dyn ScopeProvider>) {}
}
