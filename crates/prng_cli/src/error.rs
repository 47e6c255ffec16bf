//! CLI error types

use prng_core::EngineError;
use prng_distributions::DistributionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `prng` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine construction, seeding or state handling failed
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Distribution parameters were rejected
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialisation failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// A self-check found a violated property
    #[error("Self-check failed: {0}")]
    CheckFailed(String),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
