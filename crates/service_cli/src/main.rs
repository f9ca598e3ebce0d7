//! optschedule CLI - Command Line Operations for Decay Schedules
//!
//! Operational entry point for the `schedule_core` library. Schedules are
//! rendered, never applied: the output is meant to be read by whatever
//! optimiser loop consumes it.
//!
//! # Commands
//!
//! - `optschedule generate --file <schedule.toml>` - Evaluate every schedule in a definition file
//! - `optschedule policy <name> --n-steps N --param key=value` - Evaluate one policy
//! - `optschedule policies` - List supported policies
//!
//! # Logging
//!
//! Logs go to stderr so rendered schedules on stdout stay machine-readable.
//! `RUST_LOG` takes precedence over the configured log level.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod definition;
mod error;
mod render;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel, OutputFormat};

/// Decay schedule generator CLI
#[derive(Parser)]
#[command(name = "optschedule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_parser = LogLevel::from_str)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every schedule in a definition file
    Generate {
        /// Path to schedule definition file (TOML)
        #[arg(short, long)]
        file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (json, csv, table)
        #[arg(long, value_parser = OutputFormat::from_str)]
        format: Option<OutputFormat>,

        /// Decimal places for csv and table output
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Evaluate a single policy from command-line parameters
    Policy {
        /// Policy name (see `optschedule policies`)
        name: String,

        /// Number of steps
        #[arg(short, long)]
        n_steps: usize,

        /// Policy parameter as key=value, value in TOML syntax
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (json, csv, table)
        #[arg(long, value_parser = OutputFormat::from_str)]
        format: Option<OutputFormat>,

        /// Decimal places for csv and table output
        #[arg(long)]
        precision: Option<usize>,
    },

    /// List supported decay policies
    Policies,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (format, precision) = match &cli.command {
        Commands::Generate {
            format, precision, ..
        }
        | Commands::Policy {
            format, precision, ..
        } => (*format, *precision),
        Commands::Policies => (None, None),
    };

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level,
        verbose: cli.verbose,
        format,
        precision,
    })?;

    init_tracing(config.log_level.as_filter_str());

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(
        log_level = %config.log_level,
        format = %config.format,
        precision = config.precision,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Generate { file, output, .. } => {
            commands::generate::run(&file, output.as_deref(), &config)
        }
        Commands::Policy {
            name,
            n_steps,
            params,
            output,
            ..
        } => commands::policy::run(&name, n_steps, &params, output.as_deref(), &config),
        Commands::Policies => commands::policies::run(),
    }
}
