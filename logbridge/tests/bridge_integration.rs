//! Integration tests for the logging bridge.
//!
//! These tests verify the complete flows through the public API:
//! - Logger → level mapping → sink enablement → rendered message
//! - Scopes (flat and key/value) rendered in push order
//! - Provider identity resolution and factory fan-out
//! - Thread-local scope isolation
//!
//! Run with: `cargo test --test bridge_integration`

use std::cell::Cell;
use std::sync::Arc;
use std::thread;

use logbridge::level::{LogLevel, Severity};
use logbridge::logger::{EventId, Logger, LoggerExt};
use logbridge::provider::{
    resolve_identity, BridgeProvider, LoggerProvider, LoggingBuilder, ModuleName,
    OWN_MODULE_NAME, UNKNOWN_IDENTITY,
};
use logbridge::scope::{Scope, ScopeProvider, ThreadScopeProvider};
use logbridge::sink::{ErrorRef, RecordingSink};
use logbridge::{log_info, LogError};

// ============================================================================
// Test Helpers
// ============================================================================

/// Provider for `identity` writing into `sink`, with a fresh scope provider.
fn bridge(identity: &str, sink: &RecordingSink) -> (BridgeProvider, Arc<ThreadScopeProvider>) {
    let provider = BridgeProvider::new(&ModuleName::new(identity), Arc::new(sink.clone()));
    let scopes = Arc::new(ThreadScopeProvider::new());
    provider.set_scope_provider(scopes.clone());
    (provider, scopes)
}

/// Log `level` with a formatter that counts its invocations.
fn log_counting(logger: &dyn Logger, level: LogLevel, calls: &Cell<u32>) -> Result<(), LogError> {
    let formatter = |_: Option<&ErrorRef>| {
        calls.set(calls.get() + 1);
        "counted".to_string()
    };
    logger.log(level, EventId::default(), None, Some(&formatter))
}

#[derive(Debug)]
struct Boom;

impl std::fmt::Display for Boom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boom")
    }
}

impl std::error::Error for Boom {}

// ============================================================================
// Enablement and Formatter Laziness
// ============================================================================

#[test]
fn test_is_enabled_follows_sink_for_every_active_level() {
    let sink = RecordingSink::with_minimum(Severity::Warning);
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");

    for level in LogLevel::ALL {
        let expected = match level.to_severity() {
            Ok(severity) => severity >= Severity::Warning,
            Err(_) => false,
        };
        assert_eq!(logger.is_enabled(level), expected, "level {}", level);
    }
}

#[test]
fn test_none_level_never_enabled_or_formatted() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");
    let calls = Cell::new(0);

    assert!(!logger.is_enabled(LogLevel::None));
    log_counting(&logger, LogLevel::None, &calls).unwrap();

    assert_eq!(calls.get(), 0);
    assert!(sink.records().is_empty());
}

#[test]
fn test_disabled_severity_skips_formatter() {
    let sink = RecordingSink::with_minimum(Severity::Error);
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");
    let calls = Cell::new(0);

    log_counting(&logger, LogLevel::Information, &calls).unwrap();
    assert_eq!(calls.get(), 0);

    log_counting(&logger, LogLevel::Critical, &calls).unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(sink.records()[0].severity, Severity::Fatal);
}

#[test]
fn test_missing_formatter_only_errors_when_emitting() {
    let sink = RecordingSink::with_minimum(Severity::Error);
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");

    assert_eq!(
        logger.log(LogLevel::Debug, EventId::default(), None, None),
        Ok(())
    );
    assert_eq!(
        logger.log(LogLevel::Error, EventId::default(), None, None),
        Err(LogError::MissingFormatter)
    );
}

// ============================================================================
// Level Mapping
// ============================================================================

#[test]
fn test_mapping_is_strictly_monotonic() {
    let severities: Vec<Severity> = LogLevel::ALL
        .iter()
        .filter(|level| **level != LogLevel::None)
        .map(|level| level.to_severity().unwrap())
        .collect();

    assert_eq!(severities.len(), 6);
    assert!(severities.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_unmapped_level_is_out_of_range() {
    assert_eq!(
        LogLevel::None.to_severity(),
        Err(LogError::LevelOutOfRange(6))
    );
    assert!(LogLevel::try_from(7u8).is_err());
}

// ============================================================================
// Message Rendering
// ============================================================================

#[test]
fn test_flat_scope_rendering() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("MyPlugin", &sink);
    let logger = provider.create_logger("Foo");

    let _scope = logger.scope("req-1");
    log_info!(logger, "hello");

    assert_eq!(sink.messages(), vec!["[MyPlugin] <req-1> Foo: hello"]);
}

#[test]
fn test_property_scope_rendering() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");

    let _scope = logger.scope([("user", "alice")]);
    log_info!(logger, "ok");

    assert_eq!(sink.messages(), vec!["[Plugin] <user=alice> Svc: ok"]);
}

#[test]
fn test_no_scopes_renders_no_scope_segment() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");

    log_info!(logger, "plain");

    let message = &sink.messages()[0];
    assert!(message.starts_with("[Plugin] "));
    assert!(!message.contains('<'));
    assert_eq!(message, "[Plugin] Svc: plain");
}

#[test]
fn test_nested_scopes_render_in_push_order() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");

    let _outer = logger.scope("outer");
    let _props = logger.scope(Scope::properties([("a", "1"), ("b", "2")]));
    let _inner = logger.scope("inner");
    log_info!(logger, "m");

    assert_eq!(
        sink.messages(),
        vec!["[Plugin] <outer> <a=1> <b=2> <inner> Svc: m"]
    );
}

#[test]
fn test_error_forwarded_but_not_given_to_formatter() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");
    let seen_error = Cell::new(false);

    let formatter = |err: Option<&ErrorRef>| {
        seen_error.set(err.is_some());
        "failed".to_string()
    };
    logger
        .log(LogLevel::Error, EventId::new(3), Some(&Boom), Some(&formatter))
        .unwrap();

    assert!(!seen_error.get());
    let record = &sink.records()[0];
    assert_eq!(record.error.as_deref(), Some("boom"));
    assert_eq!(record.message, "[Plugin] Svc: failed");
}

// ============================================================================
// Scope Handles
// ============================================================================

#[test]
fn test_scope_release_is_safe_without_provider() {
    let sink = RecordingSink::new();
    let provider = BridgeProvider::new("Plugin", Arc::new(sink.clone()));
    let logger = provider.create_logger("Svc");

    let guard = logger.scope("ignored");
    guard.release();
    drop(logger.scope("dropped"));

    log_info!(logger, "m");
    assert_eq!(sink.messages(), vec!["[Plugin] Svc: m"]);
}

#[test]
fn test_released_scope_no_longer_rendered() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");

    {
        let _scope = logger.scope("temp");
        log_info!(logger, "inside");
    }
    log_info!(logger, "outside");

    assert_eq!(
        sink.messages(),
        vec!["[Plugin] <temp> Svc: inside", "[Plugin] Svc: outside"]
    );
}

#[test]
fn test_out_of_order_release_removes_only_that_scope() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);
    let logger = provider.create_logger("Svc");

    let first = logger.scope("first");
    let _second = logger.scope("second");
    first.release();
    log_info!(logger, "m");

    assert_eq!(sink.messages(), vec!["[Plugin] <second> Svc: m"]);
}

#[test]
fn test_scopes_are_thread_local() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);
    let logger: Arc<dyn Logger> = Arc::new(provider.create_logger("Svc"));

    let _scope = logger.scope("main-only");

    let worker = Arc::clone(&logger);
    thread::spawn(move || log_info!(worker, "from worker"))
        .join()
        .unwrap();

    assert_eq!(sink.messages(), vec!["[Plugin] Svc: from worker"]);
}

#[test]
fn test_scope_providers_are_isolated() {
    let first = ThreadScopeProvider::new();
    let second = ThreadScopeProvider::new();

    let _a = first.push_scope(Scope::value("a"));
    let _b = second.push_scope(Scope::value("b"));

    assert_eq!(first.depth(), 1);
    assert_eq!(second.depth(), 1);

    let mut seen = Vec::new();
    first.for_each_scope(&mut |scope: &Scope| seen.push(scope.clone()));
    assert_eq!(seen, vec![Scope::value("a")]);
}

// ============================================================================
// Provider and Factory
// ============================================================================

#[test]
fn test_create_logger_instances_are_independent() {
    let sink = RecordingSink::new();
    let (provider, _) = bridge("Plugin", &sink);

    let a = provider.create_logger("Same");
    let b = provider.create_logger("Same");
    log_info!(a, "one");
    log_info!(b, "two");

    assert_eq!(
        sink.messages(),
        vec!["[Plugin] Same: one", "[Plugin] Same: two"]
    );
}

#[test]
fn test_logger_keeps_scope_provider_from_creation() {
    let sink = RecordingSink::new();
    let provider = BridgeProvider::new("Plugin", Arc::new(sink.clone()));
    let before = provider.create_logger("Before");

    let scopes = Arc::new(ThreadScopeProvider::new());
    provider.set_scope_provider(scopes.clone());
    let after = provider.create_logger("After");

    let _scope = scopes.push_scope(Scope::value("ctx"));
    log_info!(before, "m");
    log_info!(after, "m");

    assert_eq!(
        sink.messages(),
        vec!["[Plugin] Before: m", "[Plugin] <ctx> After: m"]
    );
}

#[test]
fn test_identity_fallback_chain() {
    let sink = RecordingSink::new();
    let provider = BridgeProvider::new(&ModuleName::unknown(), Arc::new(sink));
    assert_eq!(provider.identity(), OWN_MODULE_NAME.unwrap_or(UNKNOWN_IDENTITY));
    assert_eq!(provider.identity(), "logbridge");

    assert_eq!(resolve_identity(None, None), UNKNOWN_IDENTITY);
    assert_eq!(resolve_identity(Some(""), None), UNKNOWN_IDENTITY);
    assert!(!UNKNOWN_IDENTITY.is_empty());
}

#[test]
fn test_duplicate_host_registers_once() {
    let sink = RecordingSink::new();
    let factory = LoggingBuilder::new()
        .add_bridge_logger("Plugin", Arc::new(sink.clone()))
        .add_bridge_logger(&ModuleName::new("Plugin"), Arc::new(sink.clone()))
        .build();

    assert_eq!(factory.provider_keys(), vec!["Plugin"]);
    log_info!(factory.create_logger("Svc"), "once");
    assert_eq!(sink.messages(), vec!["[Plugin] Svc: once"]);
}

#[test]
fn test_factory_logger_fans_out_with_shared_scopes() {
    let host = RecordingSink::new();
    let audit = RecordingSink::new();
    let factory = LoggingBuilder::new()
        .add_bridge_logger("Host", Arc::new(host.clone()))
        .add_bridge_logger("Audit", Arc::new(audit.clone()))
        .build();
    let logger = factory.create_logger("Importer");

    let _scope = logger.scope("job-7");
    log_info!(logger, "started");

    assert_eq!(host.messages(), vec!["[Host] <job-7> Importer: started"]);
    assert_eq!(audit.messages(), vec!["[Audit] <job-7> Importer: started"]);
}

#[test]
fn test_bridge_provider_through_trait_object() {
    let sink = RecordingSink::new();
    let provider: Arc<dyn LoggerProvider> =
        Arc::new(BridgeProvider::new("Plugin", Arc::new(sink.clone())));

    assert_eq!(provider.key(), "Plugin");
    let logger = provider.create_logger("Dyn");
    logger.warn(format_args!("w"));

    let record = &sink.records()[0];
    assert_eq!(record.severity, Severity::Warning);
    assert_eq!(record.context, "Plugin");
    assert_eq!(record.message, "[Plugin] Dyn: w");
}
