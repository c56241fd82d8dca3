//! logbridge CLI - Command-line interface
//!
//! This binary exercises the logbridge library from the shell: log a message
//! through the configured backend, preview the rendered line, or inspect the
//! configuration file.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::emit::EmitArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "logbridge")]
#[command(version = logbridge::VERSION)]
#[command(about = "Route leveled log messages into a host's severity-based sink", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.logbridge/config.ini
    #[arg(long, global = true, value_name = "PATH")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a message through the tracing backend configured in [logging]
    Emit(EmitArgs),

    /// Print the line the host sink would receive, without logging it
    Render(EmitArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config_file.as_deref();

    match cli.command {
        Commands::Emit(args) => commands::emit::run_emit(args, config_path),
        Commands::Render(args) => commands::emit::run_render(args, config_path),
        Commands::Config { command } => commands::config::run(command, config_path),
    }
}
