//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file or environment could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Working-day calculation rejected its input
    #[error("Calendar error: {0}")]
    Calendar(#[from] wd_core::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
