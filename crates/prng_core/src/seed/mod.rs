//! # Seed Diffusion
//!
//! Seed material arrives in many shapes: a single integer, an array of floats,
//! a user-visible string, raw bytes or nothing at all (transient entropy).
//! [`SeedDiffuser`] turns any of them into a well-mixed stream of 32/64-bit
//! values, and is itself a [`BitEngine`](crate::engine::BitEngine) so that every
//! engine only needs to know how to seed from another bit source.
//!
//! ## Module Structure
//!
//! - [`diffuser`]: `SeedDiffuser` and the `SeedValue` conversion trait
//! - [`entropy`]: `EntropyCounter`, the process-scoped counter mixed into
//!   transient seeds

pub mod diffuser;
pub mod entropy;

pub use diffuser::{SeedDiffuser, SeedValue};
pub use entropy::EntropyCounter;
