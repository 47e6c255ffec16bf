//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for engine state handling
//!
//! # Re-exports
//!
//! For convenience, [`EngineError`] is re-exported at this module level.

pub mod error;

pub use error::EngineError;
