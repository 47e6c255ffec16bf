//! SplitMix64 engine.

use crate::engine::{BitEngine, Engine, StateReader, StateWriter};
use crate::seed::{SeedDiffuser, SeedValue};
use crate::types::EngineError;

/// Golden-ratio increment added to the state on every step.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const STATE_BYTES: usize = 8;

/// 64-bit splitting generator.
///
/// The state advances by a fixed odd constant and the output is a bijective
/// mix of the new state; the mixed value is never stored back. Any state,
/// including zero, is valid.
///
/// # Examples
///
/// ```rust
/// use prng_core::engine::BitEngine;
/// use prng_core::engines::SplitMix64;
///
/// let mut engine = SplitMix64::new(1234567);
/// assert_eq!(engine.next64(), 6457827717110365317);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates an engine with the given raw state.
    #[inline]
    pub fn new(state: u64) -> Self {
        Self { state }
    }

    /// Creates an engine seeded from transient entropy.
    pub fn from_entropy() -> Self {
        Self::new(SeedDiffuser::from_entropy().next64())
    }

    /// Creates an engine seeded through a [`SeedDiffuser`] from a single value.
    pub fn from_seed_value<V: SeedValue>(value: V) -> Self {
        Self::new(SeedDiffuser::from_value(value).next64())
    }

    /// Returns the raw 64-bit state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    #[inline]
    fn mix(mut z: u64) -> u64 {
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl BitEngine for SplitMix64 {
    #[inline]
    fn next64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        Self::mix(self.state)
    }
}

impl Engine for SplitMix64 {
    fn save_state(&self) -> Result<Vec<u8>, EngineError> {
        let mut writer = StateWriter::with_capacity(STATE_BYTES);
        writer.write_u64(self.state);
        Ok(writer.finish())
    }

    fn restore_state(&mut self, state: &[u8]) -> Result<(), EngineError> {
        let mut reader = StateReader::new("SplitMix64", state, STATE_BYTES)?;
        self.state = reader.read_u64();
        Ok(())
    }

    fn seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError> {
        self.state = source.next64();
        Ok(())
    }

    fn merge_seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError> {
        self.state ^= source.next64();
        Ok(())
    }

    fn step_bit_count(&self) -> u32 {
        64
    }

    #[inline]
    fn step(&mut self) {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
    }
}
