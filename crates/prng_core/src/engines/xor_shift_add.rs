//! XorShift-Add engine: 128 bits of state in four 32-bit words.

use crate::engine::{BitEngine, Engine, StateReader, StateWriter};
use crate::seed::{SeedDiffuser, SeedValue};
use crate::types::EngineError;
use tracing::warn;

const STATE_BYTES: usize = 16;

/// Number of attempts made to draw a non-zero state before giving up.
const SEED_ATTEMPTS: usize = 4;

/// Jump polynomial for 3^41 steps, least significant bit first.
///
/// Bit `i` of the concatenated masks is the coefficient of `x^i` in
/// `x^(3^41) mod p(x)`, where `p` is the characteristic polynomial of the
/// step's transition matrix over GF(2).
const JUMP_MASKS: [u32; 4] = [0x2340_BA2A, 0xD36F_BF89, 0xDD20_910C, 0x7FCC_01E3];

/// Generalised xorshift generator with an additive output.
///
/// # Recurrence
///
/// ```text
/// t  = w0
/// t ^= t << 15
/// t ^= t >> 18
/// t ^= w3 << 11
/// (w0, w1, w2, w3) = (w1, w2, w3, t)
/// ```
///
/// Each 32-bit output is `w2 + w3` taken before the step. The all-zero state
/// is a fixed point of the recurrence and is rejected by every constructor,
/// seed and restore path.
///
/// # Skip-Ahead
///
/// [`skip_ahead`](Engine::skip_ahead) advances exactly 3^41 (about 2^65)
/// steps by replaying the jump polynomial: for each set coefficient the
/// current state is XORed into an accumulator, then the engine steps once.
///
/// # Examples
///
/// ```rust
/// use prng_core::engine::{BitEngine, Engine};
/// use prng_core::engines::XorShiftAdd;
///
/// let mut engine = XorShiftAdd::from_words([1, 2, 3, 4]).unwrap();
/// assert_eq!(engine.next32(), 7);
///
/// assert!(XorShiftAdd::from_words([0; 4]).is_err());
/// assert_eq!(engine.skip_ahead_magnitude(), 65);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftAdd {
    words: [u32; 4],
}

impl XorShiftAdd {
    /// Creates an engine from raw state words.
    ///
    /// # Errors
    ///
    /// `InvalidState` if all four words are zero.
    pub fn from_words(words: [u32; 4]) -> Result<Self, EngineError> {
        if words == [0; 4] {
            return Err(EngineError::InvalidState(
                "XorShiftAdd state must not be all zero".to_string(),
            ));
        }
        Ok(Self { words })
    }

    /// Creates an engine seeded from another bit source.
    pub fn from_bit_engine(source: &mut dyn BitEngine) -> Result<Self, EngineError> {
        let words = draw_non_zero(source, [0; 4])?;
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
    pub fn words(&self) -> [u32; 4] {
        self.words
    }

    /// Applies an arbitrary jump polynomial, least significant bit first.
    ///
    /// `masks` holds the coefficients of `x^n mod p(x)`; the engine ends up
    /// exactly `n` steps further along. [`skip_ahead`](Engine::skip_ahead)
    /// uses the built-in 3^41 polynomial.
    pub fn jump_by_polynomial(&mut self, masks: &[u32]) {
        let mut accumulator = [0u32; 4];
        for &mask in masks {
            for bit in 0..32 {
                if mask & (1 << bit) != 0 {
                    for (acc, word) in accumulator.iter_mut().zip(self.words.iter()) {
                        *acc ^= *word;
                    }
                }
                self.advance();
            }
        }
        self.words = accumulator;
    }

    /// New fourth word produced from the outgoing first word and the current last word.
    #[inline]
    fn feedback(first: u32, last: u32) -> u32 {
        let mut t = first;
        t ^= t << 15;
        t ^= t >> 18;
        t ^ (last << 11)
    }

    #[inline]
    fn advance(&mut self) {
        let [w0, w1, w2, w3] = self.words;
        self.words = [w1, w2, w3, Self::feedback(w0, w3)];
    }
}

/// Draws four words from `source`, XORed onto `base`, until the result is non-zero.
fn draw_non_zero(source: &mut dyn BitEngine, base: [u32; 4]) -> Result<[u32; 4], EngineError> {
    for attempt in 1..=SEED_ATTEMPTS {
        let (a, b) = source.next64_as_pair();
        let (c, d) = source.next64_as_pair();
        let candidate = [base[0] ^ a, base[1] ^ b, base[2] ^ c, base[3] ^ d];
        if candidate != [0; 4] {
            return Ok(candidate);
        }
        warn!(attempt, "XorShiftAdd seed produced an all-zero state, retrying");
    }
    Err(EngineError::InvalidArgument(format!(
        "XorShiftAdd seed source produced an all-zero state {} times",
        SEED_ATTEMPTS
    )))
}

impl BitEngine for XorShiftAdd {
    #[inline]
    fn next32(&mut self) -> u32 {
        let output = self.words[2].wrapping_add(self.words[3]);
        self.advance();
        output
    }

    /// Two chained 32-bit outputs, the first in the high half.
    #[inline]
    fn next64(&mut self) -> u64 {
        let [w0, w1, w2, w3] = self.words;
        let high = w2.wrapping_add(w3);
        let t0 = Self::feedback(w0, w3);
        let low = w3.wrapping_add(t0);
        let t1 = Self::feedback(w1, t0);
        self.words = [w2, w3, t0, t1];
        (u64::from(high) << 32) | u64::from(low)
    }
}

impl Engine for XorShiftAdd {
    fn save_state(&self) -> Result<Vec<u8>, EngineError> {
        let mut writer = StateWriter::with_capacity(STATE_BYTES);
        for word in self.words {
            writer.write_u32(word);
        }
        Ok(writer.finish())
    }

    fn restore_state(&mut self, state: &[u8]) -> Result<(), EngineError> {
        let mut reader = StateReader::new("XorShiftAdd", state, STATE_BYTES)?;
        let mut words = [0u32; 4];
        for word in words.iter_mut() {
            *word = reader.read_u32();
        }
        *self = Self::from_words(words)?;
        Ok(())
    }

    fn seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError> {
        self.words = draw_non_zero(source, [0; 4])?;
        Ok(())
    }

    fn merge_seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError> {
        self.words = draw_non_zero(source, self.words)?;
        Ok(())
    }

    fn step_bit_count(&self) -> u32 {
        32
    }

    #[inline]
    fn step(&mut self) {
        self.advance();
    }

    fn skip_ahead_magnitude(&self) -> i32 {
        65
    }

    fn skip_ahead(&mut self) {
        self.jump_by_polynomial(&JUMP_MASKS);
    }
}
