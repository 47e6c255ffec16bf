//! # Engine Contract
//!
//! The minimal capability every random source offers is [`BitEngine`]: produce
//! 32 or 64 bits on demand. [`Engine`] extends it with the lifecycle needed for
//! reproducible simulations: opaque state save/restore, (merge-)seeding from
//! another bit source, single stepping and large deterministic jumps.
//!
//! ## Module Structure
//!
//! - [`traits`]: `BitEngine` and `Engine` with their default behaviours
//! - [`seeding`]: `EngineSeedExt`, seeding from integers, text, bytes or entropy
//! - [`state`]: most-significant-byte-first codec shared by engine state formats
//! - [`adapter`]: `EngineRng`, exposing any `BitEngine` as a `rand::RngCore`
//!
//! ## Default Behaviours
//!
//! | Operation | Default |
//! |-----------|---------|
//! | `next32` | truncates `next64` |
//! | `next64_as_pair` | splits `next64` into (high, low) |
//! | `step` | calls `next64` and discards the output |
//! | `skip_ahead` | a single `step` (magnitude 0) |
//! | `skip_back` | `UnsupportedOperation` (magnitude -1) |
//! | `save_state` / `restore_state` | `UnsupportedOperation` |

pub mod adapter;
pub mod seeding;
pub mod state;
pub mod traits;

pub use adapter::EngineRng;
pub use seeding::EngineSeedExt;
pub use state::{StateReader, StateWriter};
pub use traits::{BitEngine, Engine};
