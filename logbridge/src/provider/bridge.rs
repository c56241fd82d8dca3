//! Factory for [`BridgeLogger`] instances.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::identity::{resolve_identity, HostModule, TypeName, OWN_MODULE_NAME};
use super::LoggerProvider;
use crate::logger::{BridgeLogger, Logger};
use crate::scope::ScopeProvider;
use crate::sink::SinkSource;

/// Creates [`BridgeLogger`]s that share one identity and one sink backend.
///
/// The identity is resolved once, at construction, from the hosting module
/// (see [`resolve_identity`]) and is never empty.
///
/// The scope provider can be set after construction. Each logger captures the
/// provider that was set when it was created; later calls to
/// [`set_scope_provider`](Self::set_scope_provider) only affect loggers
/// created afterwards.
pub struct BridgeProvider {
    identity: Arc<str>,
    sinks: Arc<dyn SinkSource>,
    scopes: RwLock<Option<Arc<dyn ScopeProvider>>>,
}

impl BridgeProvider {
    /// Create a provider for `host`, writing through `sinks`.
    pub fn new<H: HostModule + ?Sized>(host: &H, sinks: Arc<dyn SinkSource>) -> Self {
        let identity = resolve_identity(host.module_name().as_deref(), OWN_MODULE_NAME);
        tracing::debug!(identity = %identity, "Created bridge logger provider");
        Self {
            identity: Arc::from(identity),
            sinks,
            scopes: RwLock::new(None),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Create a logger for `category`. Never fails.
    pub fn create_logger(&self, category: &str) -> BridgeLogger {
        let scopes = self.scopes.read().clone();
        BridgeLogger::new(category, self.identity.clone(), scopes, self.sinks.as_ref())
    }

    /// Create a logger named after `T`.
    ///
    /// Intended for manual acquisition outside a
    /// [`LoggerFactory`](crate::provider::LoggerFactory) pipeline; scopes only
    /// work if a scope provider was set on this provider directly.
    pub fn create_logger_for<T: ?Sized + 'static>(&self) -> BridgeLogger {
        self.create_logger_for_type(TypeName::of::<T>())
    }

    /// Create a logger named after a type known at runtime.
    ///
    /// Same scope caveat as [`create_logger_for`](Self::create_logger_for).
    pub fn create_logger_for_type(&self, ty: TypeName) -> BridgeLogger {
        self.create_logger(&ty.category())
    }

    /// Replace the scope provider handed to loggers created from now on.
    pub fn set_scope_provider(&self, scopes: Arc<dyn ScopeProvider>) {
        *self.scopes.write() = Some(scopes);
    }

    /// The scope provider new loggers will capture.
    pub fn scope_provider(&self) -> Option<Arc<dyn ScopeProvider>> {
        self.scopes.read().clone()
    }
}

impl fmt::Debug for BridgeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeProvider")
            .field("identity", &self.identity)
            .field("has_scope_provider", &self.scopes.read().is_some())
            .finish()
    }
}

impl LoggerProvider for BridgeProvider {
    fn key(&self) -> &str {
        &self.identity
    }

    fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        Arc::new(BridgeProvider::create_logger(self, category))
    }

    fn set_scope_provider(&self, scopes: Arc<dyn ScopeProvider>) {
        BridgeProvider::set_scope_provider(self, scopes);
    }
}
