//! # prng_core: Deterministic Bit Engines for Sampling
//!
//! ## Layer 1 (Foundation) Role
//!
//! prng_core is the bottom layer of the workspace, providing:
//! - The bit-producing engine contract (`engine`)
//! - Seed diffusion from arbitrary seed material (`seed`)
//! - Concrete engines: SplitMix64, XorShift-Add and XorShift128+ (`engines`)
//! - Root-finding used by the spline samplers (`math::solvers`)
//! - Error types: `EngineError` (`types::error`)
//!
//! ## Determinism
//!
//! Every engine is a pure function of its saved state. Two engines built from
//! the same seed material produce the same sequence on every platform, and
//! `restore_state(save_state())` reproduces the future output bit-for-bit.
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::engine::{BitEngine, Engine, EngineSeedExt};
//! use prng_core::engines::XorShiftAdd;
//!
//! let mut engine = XorShiftAdd::from_seed_value(12345_u64).unwrap();
//! let saved = engine.save_state().unwrap();
//! let first = engine.next32();
//!
//! engine.restore_state(&saved).unwrap();
//! assert_eq!(engine.next32(), first);
//!
//! // Reseed from a string
//! engine.seed_text("level-3").unwrap();
//! ```
//!
//! ## Thread Safety
//!
//! Engines are single-owner mutable objects and are not synchronised. The only
//! state shared across instances is the process-wide entropy counter used by
//! transient seeding, which is updated atomically.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod engines;
pub mod math;
pub mod seed;
pub mod types;

pub use engine::{BitEngine, Engine, EngineRng, EngineSeedExt};
pub use engines::{EngineKind, SplitMix64, XorShift128Plus, XorShiftAdd};
pub use seed::{EntropyCounter, SeedDiffuser, SeedValue};
pub use types::EngineError;
