//! Error types for structured error handling.
//!
//! This module provides `EngineError`, raised by engine seeding, state
//! save/restore and jumps.

use thiserror::Error;

/// Engine operation errors.
///
/// Every engine operation either succeeds and mutates the engine, or fails
/// with one of these variants before any state has been touched.
///
/// # Variants
/// - `InvalidState`: Saved-state bytes are corrupt or describe a forbidden state
/// - `UnsupportedOperation`: The engine declares it cannot perform the operation
/// - `InvalidArgument`: Seed material could not produce a usable state
///
/// # Examples
/// ```
/// use prng_core::types::EngineError;
///
/// let err = EngineError::UnsupportedOperation("skip_back");
/// assert_eq!(format!("{}", err), "Unsupported operation: skip_back");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EngineError {
    /// Saved state has the wrong length or a forbidden bit pattern.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The engine cannot perform the requested operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Seed material was unusable (e.g. every retry produced a zero state).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl EngineError {
    /// Create an `InvalidState` error for a saved state of the wrong length.
    ///
    /// # Arguments
    /// * `engine` - Engine name used in the message
    /// * `expected` - Required byte length
    /// * `got` - Byte length that was supplied
    pub fn state_length(engine: &str, expected: usize, got: usize) -> Self {
        EngineError::InvalidState(format!(
            "{} state must be {} bytes, got {}",
            engine, expected, got
        ))
    }
}
