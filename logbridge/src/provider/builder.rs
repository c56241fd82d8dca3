//! Provider registration and the fan-out factory.

use std::fmt;
use std::sync::Arc;

use super::bridge::BridgeProvider;
use super::identity::HostModule;
use super::LoggerProvider;
use crate::error::LogError;
use crate::level::LogLevel;
use crate::logger::{EventId, Formatter, Logger};
use crate::scope::{Scope, ScopeGuard, ScopeProvider, ThreadScopeProvider};
use crate::sink::{ErrorRef, SinkSource};

/// Collects logger providers before building a [`LoggerFactory`].
///
/// Providers are keyed by [`LoggerProvider::key`]; adding a provider whose key
/// is already registered is a no-op.
pub struct LoggingBuilder {
    providers: Vec<Arc<dyn LoggerProvider>>,
    scopes: Option<Arc<dyn ScopeProvider>>,
    minimum_level: LogLevel,
}

impl LoggingBuilder {
    /// Empty builder using a [`ThreadScopeProvider`] and no level floor.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            scopes: Some(Arc::new(ThreadScopeProvider::new())),
            minimum_level: LogLevel::Trace,
        }
    }

    /// Register `provider` unless one with the same key exists.
    pub fn add_provider(mut self, provider: Arc<dyn LoggerProvider>) -> Self {
        if self.contains(provider.key()) {
            tracing::debug!(key = provider.key(), "Logger provider already registered");
        } else {
            self.providers.push(provider);
        }
        self
    }

    /// Register a [`BridgeProvider`] for `host`, writing through `sinks`.
    pub fn add_bridge_logger<H: HostModule + ?Sized>(
        self,
        host: &H,
        sinks: Arc<dyn SinkSource>,
    ) -> Self {
        self.add_provider(Arc::new(BridgeProvider::new(host, sinks)))
    }

    /// Use `scopes` instead of the default thread-local provider.
    pub fn with_scope_provider(mut self, scopes: Arc<dyn ScopeProvider>) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Do not track scopes at all.
    pub fn without_scopes(mut self) -> Self {
        self.scopes = None;
        self
    }

    /// Drop messages below `level` before they reach any provider.
    pub fn with_minimum_level(mut self, level: LogLevel) -> Self {
        self.minimum_level = level;
        self
    }

    /// Whether a provider with `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.providers.iter().any(|p| p.key() == key)
    }

    /// Hand the scope provider to every registered provider and build the
    /// factory.
    pub fn build(self) -> LoggerFactory {
        if let Some(scopes) = &self.scopes {
            for provider in &self.providers {
                provider.set_scope_provider(scopes.clone());
            }
        }

        LoggerFactory {
            providers: self.providers,
            scopes: self.scopes,
            minimum_level: self.minimum_level,
        }
    }
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates loggers that forward to every registered provider.
pub struct LoggerFactory {
    providers: Vec<Arc<dyn LoggerProvider>>,
    scopes: Option<Arc<dyn ScopeProvider>>,
    minimum_level: LogLevel,
}

impl LoggerFactory {
    /// Create a logger for `category`. Never fails.
    pub fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        Arc::new(FactoryLogger {
            category: category.to_string(),
            loggers: self
                .providers
                .iter()
                .map(|p| p.create_logger(category))
                .collect(),
            scopes: self.scopes.clone(),
            minimum_level: self.minimum_level,
        })
    }

    /// Keys of the registered providers, in registration order.
    pub fn provider_keys(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.key().to_string()).collect()
    }

    pub fn scope_provider(&self) -> Option<Arc<dyn ScopeProvider>> {
        self.scopes.clone()
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("providers", &self.provider_keys())
            .field("minimum_level", &self.minimum_level)
            .finish()
    }
}

/// Logger returned by [`LoggerFactory::create_logger`].
///
/// Scopes are pushed once on the factory's scope provider, which every
/// provider's loggers share.
pub struct FactoryLogger {
    category: String,
    loggers: Vec<Arc<dyn Logger>>,
    scopes: Option<Arc<dyn ScopeProvider>>,
    minimum_level: LogLevel,
}

impl FactoryLogger {
    pub fn category(&self) -> &str {
        &self.category
    }

    fn passes_floor(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level >= self.minimum_level
    }
}

impl Logger for FactoryLogger {
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.passes_floor(level) && self.loggers.iter().any(|l| l.is_enabled(level))
    }

    fn begin_scope(&self, scope: Scope) -> ScopeGuard {
        match &self.scopes {
            Some(scopes) => scopes.push_scope(scope),
            None => ScopeGuard::noop(),
        }
    }

    /// Forward to every provider's logger. All loggers are called even if
    /// one fails; the first error is returned.
    fn log(
        &self,
        level: LogLevel,
        event_id: EventId,
        error: Option<&ErrorRef>,
        formatter: Option<&Formatter<'_>>,
    ) -> Result<(), LogError> {
        if !self.passes_floor(level) {
            return Ok(());
        }

        let mut first_error = None;
        for logger in &self.loggers {
            if let Err(e) = logger.log(level, event_id.clone(), error, formatter) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
