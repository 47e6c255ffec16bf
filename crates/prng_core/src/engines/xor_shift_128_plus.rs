//! XorShift128+ engine: 128 bits of state in two 64-bit words.

use crate::engine::{BitEngine, Engine, StateReader, StateWriter};
use crate::seed::{SeedDiffuser, SeedValue};
use crate::types::EngineError;
use tracing::warn;

const STATE_BYTES: usize = 16;
const SEED_ATTEMPTS: usize = 4;

/// Jump polynomial for 2^64 steps, least significant word first.
const JUMP_MASKS: [u64; 2] = [0x8A5C_D789_635D_2DFF, 0x121F_D215_5C47_2F96];

/// 64-bit native xorshift generator with an additive output (shifts 23/18/5).
///
/// The all-zero state is forbidden, exactly as for
/// [`XorShiftAdd`](super::XorShiftAdd). `next32` returns the upper half of
/// `next64`, whose bits are statistically stronger than the lower ones.
///
/// # Examples
///
/// ```rust
/// use prng_core::engine::{BitEngine, Engine};
/// use prng_core::engines::XorShift128Plus;
///
/// let mut engine = XorShift128Plus::from_words([1, 2]).unwrap();
/// assert_eq!(engine.next64(), 3);
/// assert_eq!(engine.skip_ahead_magnitude(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift128Plus {
    words: [u64; 2],
}

impl XorShift128Plus {
    /// Creates an engine from raw state words.
    ///
    /// # Errors
    ///
    /// `InvalidState` if both words are zero.
    pub fn from_words(words: [u64; 2]) -> Result<Self, EngineError> {
        if words == [0; 2] {
            return Err(EngineError::InvalidState(
                "XorShift128Plus state must not be all zero".to_string(),
            ));
        }
        Ok(Self { words })
    }

    /// Creates an engine seeded from another bit source.
    pub fn from_bit_engine(source: &mut dyn BitEngine) -> Result<Self, EngineError> {
        let words = draw_non_zero(source, [0; 2])?;
        Ok(Self { words })
    }

    /// Creates an engine seeded through a [`SeedDiffuser`] from a single value.
    pub fn from_seed_value<V: SeedValue>(value: V) -> Result<Self, EngineError> {
        Self::from_bit_engine(&mut SeedDiffuser::from_value(value))
    }

    /// Creates an engine seeded from transient entropy.
    pub fn from_entropy() -> Result<Self, EngineError> {
        Self::from_bit_engine(&mut SeedDiffuser::from_entropy())
    }

    /// Returns the raw state words.
    #[inline]
    pub fn words(&self) -> [u64; 2] {
        self.words
    }

    /// Applies an arbitrary jump polynomial, least significant bit first.
    pub fn jump_by_polynomial(&mut self, masks: &[u64]) {
        let mut accumulator = [0u64; 2];
        for &mask in masks {
            for bit in 0..64 {
                if mask & (1 << bit) != 0 {
                    accumulator[0] ^= self.words[0];
                    accumulator[1] ^= self.words[1];
                }
                self.next64();
            }
        }
        self.words = accumulator;
    }
}

fn draw_non_zero(source: &mut dyn BitEngine, base: [u64; 2]) -> Result<[u64; 2], EngineError> {
    for attempt in 1..=SEED_ATTEMPTS {
        let candidate = [base[0] ^ source.next64(), base[1] ^ source.next64()];
        if candidate != [0; 2] {
            return Ok(candidate);
        }
        warn!(attempt, "XorShift128Plus seed produced an all-zero state, retrying");
    }
    Err(EngineError::InvalidArgument(format!(
        "XorShift128Plus seed source produced an all-zero state {} times",
        SEED_ATTEMPTS
    )))
}

impl BitEngine for XorShift128Plus {
    #[inline]
    fn next32(&mut self) -> u32 {
        (self.next64() >> 32) as u32
    }

    #[inline]
    fn next64(&mut self) -> u64 {
        let mut s1 = self.words[0];
        let s0 = self.words[1];
        let result = s0.wrapping_add(s1);
        self.words[0] = s0;
        s1 ^= s1 << 23;
        self.words[1] = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);
        result
    }
}

impl Engine for XorShift128Plus {
    fn save_state(&self) -> Result<Vec<u8>, EngineError> {
        let mut writer = StateWriter::with_capacity(STATE_BYTES);
        writer.write_u64(self.words[0]);
        writer.write_u64(self.words[1]);
        Ok(writer.finish())
    }

    fn restore_state(&mut self, state: &[u8]) -> Result<(), EngineError> {
        let mut reader = StateReader::new("XorShift128Plus", state, STATE_BYTES)?;
        let words = [reader.read_u64(), reader.read_u64()];
        *self = Self::from_words(words)?;
        Ok(())
    }

    fn seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError> {
        self.words = draw_non_zero(source, [0; 2])?;
        Ok(())
    }

    fn merge_seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError> {
        self.words = draw_non_zero(source, self.words)?;
        Ok(())
    }

    fn skip_ahead_magnitude(&self) -> i32 {
        64
    }

    fn skip_ahead(&mut self) {
        self.jump_by_polynomial(&JUMP_MASKS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// x^1000 mod p(x) for the 23/18/5 recurrence.
    const JUMP_1000: [u64; 2] = [0x7D58_0CFD_E9F6_9CA5, 0x3BF8_2203_E587_5782];

    #[test]
    fn test_reference_sequence() {
        let mut engine = XorShift128Plus::from_words([1, 2]).unwrap();
        for value in [3_u64, 8_388_645, 33_816_707, 70_368_778_527_840] {
            assert_eq!(engine.next64(), value);
        }
    }

    #[test]
    fn test_next32_is_high_half() {
        let mut a = XorShift128Plus::from_words([11, 13]).unwrap();
        let mut b = a.clone();
        assert_eq!(u64::from(a.next32()), b.next64() >> 32);
    }

    #[test]
    fn test_jump_polynomial_matches_stepping() {
        let mut jumped = XorShift128Plus::from_seed_value("jump".len()).unwrap();
        let mut stepped = jumped.clone();
        jumped.jump_by_polynomial(&JUMP_1000);
        for _ in 0..1_000 {
            stepped.step();
        }
        assert_eq!(jumped, stepped);
    }

    #[test]
    fn test_round_trip_and_zero_rejection() {
        let mut engine = XorShift128Plus::from_seed_value(31_i64).unwrap();
        let saved = engine.save_state().unwrap();
        let expected: Vec<u64> = (0..8).map(|_| engine.next64()).collect();

        let mut restored = XorShift128Plus::from_words([1, 1]).unwrap();
        restored.restore_state(&saved).unwrap();
        let actual: Vec<u64> = (0..8).map(|_| restored.next64()).collect();
        assert_eq!(expected, actual);

        assert!(restored.restore_state(&[0u8; 16]).is_err());
    }
}
