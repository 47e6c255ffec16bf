//! Seeding overloads for every [`Engine`].

use super::{BitEngine, Engine};
use crate::seed::{EntropyCounter, SeedDiffuser, SeedValue};
use crate::types::EngineError;

/// Convenience seeding for any [`Engine`].
///
/// Every method wraps its material in a [`SeedDiffuser`] and delegates to
/// [`Engine::seed`] or [`Engine::merge_seed`], so engines implement seeding
/// exactly once. The trait is blanket-implemented for all engines, including
/// `dyn Engine`.
///
/// # Examples
///
/// ```rust
/// use prng_core::engine::{BitEngine, EngineSeedExt};
/// use prng_core::engines::SplitMix64;
///
/// let mut a = SplitMix64::new(0);
/// let mut b = SplitMix64::new(0);
/// a.seed_text("harbour").unwrap();
/// b.seed_text("harbour").unwrap();
/// assert_eq!(a.next64(), b.next64());
///
/// a.merge_seed_value(3_u32).unwrap();
/// assert_ne!(a.next64(), b.next64());
/// ```
pub trait EngineSeedExt: Engine {
    /// Seeds from transient entropy using the process-wide counter.
    fn seed_entropy(&mut self) -> Result<(), EngineError> {
        self.seed(&mut SeedDiffuser::from_entropy())
    }

    /// Seeds from transient entropy using an explicit counter.
    fn seed_entropy_with(&mut self, counter: &EntropyCounter) -> Result<(), EngineError> {
        self.seed(&mut SeedDiffuser::from_entropy_with(counter))
    }

    /// Seeds from a single integer or float.
    fn seed_value<V: SeedValue>(&mut self, value: V) -> Result<(), EngineError> {
        self.seed(&mut SeedDiffuser::from_value(value))
    }

    /// Seeds from a sequence of integers or floats.
    fn seed_values<V: SeedValue>(&mut self, values: &[V]) -> Result<(), EngineError> {
        self.seed(&mut SeedDiffuser::from_values(values))
    }

    /// Seeds from the UTF-8 encoding of `text`.
    fn seed_text(&mut self, text: &str) -> Result<(), EngineError> {
        self.seed(&mut SeedDiffuser::from_text(text))
    }

    /// Seeds from raw bytes.
    fn seed_bytes(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        self.seed(&mut SeedDiffuser::from_bytes(bytes))
    }

    /// Mixes transient entropy into the current state.
    fn merge_seed_entropy(&mut self) -> Result<(), EngineError> {
        self.merge_seed(&mut SeedDiffuser::from_entropy())
    }

    /// Mixes a single integer or float into the current state.
    fn merge_seed_value<V: SeedValue>(&mut self, value: V) -> Result<(), EngineError> {
        self.merge_seed(&mut SeedDiffuser::from_value(value))
    }

    /// Mixes a sequence of integers or floats into the current state.
    fn merge_seed_values<V: SeedValue>(&mut self, values: &[V]) -> Result<(), EngineError> {
        self.merge_seed(&mut SeedDiffuser::from_values(values))
    }

    /// Mixes the UTF-8 encoding of `text` into the current state.
    fn merge_seed_text(&mut self, text: &str) -> Result<(), EngineError> {
        self.merge_seed(&mut SeedDiffuser::from_text(text))
    }

    /// Mixes raw bytes into the current state.
    fn merge_seed_bytes(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        self.merge_seed(&mut SeedDiffuser::from_bytes(bytes))
    }

    /// Seeds from another engine's output.
    fn seed_from_engine<B: BitEngine + ?Sized>(&mut self, source: &mut B) -> Result<(), EngineError> {
        let mut source = source;
        self.seed(&mut source)
    }
}

impl<E: Engine + ?Sized> EngineSeedExt for E {}
