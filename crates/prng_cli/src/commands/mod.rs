//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer and report progress through `tracing`.

pub mod check;
pub mod sample;
pub mod state;

use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}
