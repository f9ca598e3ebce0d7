//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;
use schedule_core::ScheduleError;

/// Errors surfaced by `optschedule` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid schedule definition: {0}")]
    InvalidDefinition(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
