//! `emit` and `render` commands.
//!
//! Both build a [`LoggerFactory`] with a single bridge provider, push the
//! requested scopes and log one message. `emit` writes through the tracing
//! subscriber configured in `[logging]`; `render` records the message in
//! memory and prints the line the host sink would receive.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use clap::Args;
use logbridge::config::ConfigFile;
use logbridge::level::LogLevel;
use logbridge::logger::{EventId, Logger, LoggerExt};
use logbridge::logging::init_logging;
use logbridge::provider::{LoggerFactory, LoggingBuilder, ModuleName};
use logbridge::scope::{Scope, ScopeGuard};
use logbridge::sink::{ErrorRef, RecordingSink, SinkSource, TracingSinks};

use super::load_config;
use crate::error::CliError;

/// Arguments shared by `emit` and `render`.
#[derive(Debug, Clone, Args)]
pub struct EmitArgs {
    /// Logger category (usually a component or type name)
    #[arg(long)]
    pub category: String,

    /// Log level: trace, debug, information, warning, error, critical or none
    #[arg(long, default_value = "information")]
    pub level: LogLevel,

    /// Flat scope value; repeat to nest scopes in order
    #[arg(long = "scope", value_name = "VALUE")]
    pub scopes: Vec<String>,

    /// Key/value scope entry as KEY=VALUE; all entries form one scope
    #[arg(long = "property", value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Error description forwarded to the sink alongside the message
    #[arg(long)]
    pub error: Option<String>,

    /// Host identity (overrides [bridge] identity from the config file)
    #[arg(long)]
    pub identity: Option<String>,

    /// Message text
    pub message: String,
}

/// Error built from `--error`.
#[derive(Debug)]
struct ReportedError(String);

impl fmt::Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ReportedError {}

/// Parse a `KEY=VALUE` pair.
fn parse_property(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid property '{}': expected KEY=VALUE", s))?;
    if key.trim().is_empty() {
        return Err(format!("invalid property '{}': key is empty", s));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

/// Log through the tracing subscriber configured in `[logging]`.
pub fn run_emit(args: EmitArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let _logging_guard =
        init_logging(&config.logging).map_err(|e| CliError::LoggingInit(e.to_string()))?;

    let sinks = TracingSinks::with_minimum(config.logging.minimum_severity);
    let factory = build_factory(&args, &config, Arc::new(sinks));

    tracing::debug!(category = %args.category, level = %args.level, "Emitting message");
    log_message(factory.create_logger(&args.category).as_ref(), &args)
}

/// Print the rendered line without installing a subscriber.
pub fn run_render(args: EmitArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let lines = render_lines(&args, &config)?;

    if lines.is_empty() {
        eprintln!("(nothing logged at level {})", args.level);
    }
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

/// Messages the host sink receives for `args`.
pub fn render_lines(args: &EmitArgs, config: &ConfigFile) -> Result<Vec<String>, CliError> {
    let recording = RecordingSink::with_minimum(config.logging.minimum_severity);
    let factory = build_factory(args, config, Arc::new(recording.clone()));

    log_message(factory.create_logger(&args.category).as_ref(), args)?;
    Ok(recording.messages())
}

fn build_factory(args: &EmitArgs, config: &ConfigFile, sinks: Arc<dyn SinkSource>) -> LoggerFactory {
    let host = match &args.identity {
        Some(identity) => ModuleName::new(identity.clone()),
        None => config.bridge.host(),
    };

    LoggingBuilder::new().add_bridge_logger(&host, sinks).build()
}

fn log_message(logger: &dyn Logger, args: &EmitArgs) -> Result<(), CliError> {
    let mut scopes: Vec<ScopeGuard> = args
        .scopes
        .iter()
        .map(|value| logger.scope(value.as_str()))
        .collect();
    if !args.properties.is_empty() {
        scopes.push(logger.scope(Scope::properties(args.properties.clone())));
    }

    let error = args.error.clone().map(ReportedError);
    let formatter = |_: Option<&ErrorRef>| args.message.clone();
    logger.log(
        args.level,
        EventId::default(),
        error.as_ref().map(|e| e as &ErrorRef),
        Some(&formatter),
    )?;

    drop(scopes);
    Ok(())
}
