//! prng CLI library
//!
//! Configuration, error types and command implementations behind the `prng`
//! binary. Kept in a library so integration tests can drive the commands
//! without spawning a process.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
