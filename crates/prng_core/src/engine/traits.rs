//! `BitEngine` and `Engine` traits.

use crate::types::EngineError;

/// A source of uniformly distributed bits.
///
/// Implementors must provide [`next64`](BitEngine::next64); natively 32-bit
/// sources should also override [`next32`](BitEngine::next32) so that a 32-bit
/// request costs a single internal step.
///
/// # Examples
///
/// ```rust
/// use prng_core::engine::BitEngine;
///
/// struct Counter(u64);
///
/// impl BitEngine for Counter {
///     fn next64(&mut self) -> u64 {
///         self.0 += 1;
///         self.0
///     }
/// }
///
/// let mut counter = Counter(0);
/// assert_eq!(counter.next32(), 1);
/// assert_eq!(counter.next64_as_pair(), (0, 2));
/// ```
pub trait BitEngine {
    /// Returns the next 32 bits. Defaults to the low half of `next64`.
    #[inline]
    fn next32(&mut self) -> u32 {
        self.next64() as u32
    }

    /// Returns the next 64 bits.
    fn next64(&mut self) -> u64;

    /// Returns the next 64 bits split into `(high, low)` halves.
    #[inline]
    fn next64_as_pair(&mut self) -> (u32, u32) {
        let value = self.next64();
        ((value >> 32) as u32, value as u32)
    }
}

impl<E: BitEngine + ?Sized> BitEngine for &mut E {
    #[inline]
    fn next32(&mut self) -> u32 {
        (**self).next32()
    }

    #[inline]
    fn next64(&mut self) -> u64 {
        (**self).next64()
    }

    #[inline]
    fn next64_as_pair(&mut self) -> (u32, u32) {
        (**self).next64_as_pair()
    }
}

/// A reproducible, seedable random engine.
///
/// All seeding paths funnel through [`seed`](Engine::seed) and
/// [`merge_seed`](Engine::merge_seed); the convenience overloads for integers,
/// text and bytes live on [`EngineSeedExt`](super::EngineSeedExt) and wrap the
/// material in a [`SeedDiffuser`](crate::seed::SeedDiffuser) first.
///
/// # Jump Magnitudes
///
/// [`skip_ahead_magnitude`](Engine::skip_ahead_magnitude) and
/// [`skip_back_magnitude`](Engine::skip_back_magnitude) report the guaranteed
/// minimum jump distance as a power of two. A negative skip-back magnitude
/// means `skip_back` is unsupported and will fail.
///
/// # Failure Atomicity
///
/// Fallible operations validate before mutating: a failed `restore_state`,
/// `seed` or `merge_seed` leaves the engine exactly as it was.
pub trait Engine: BitEngine {
    /// Serialises the engine state to bytes (most significant byte first).
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` if the engine cannot serialise its state.
    fn save_state(&self) -> Result<Vec<u8>, EngineError> {
        Err(EngineError::UnsupportedOperation("save_state"))
    }

    /// Restores state previously produced by [`save_state`](Engine::save_state).
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the length or content is incompatible
    /// - `UnsupportedOperation` if the engine cannot serialise its state
    fn restore_state(&mut self, _state: &[u8]) -> Result<(), EngineError> {
        Err(EngineError::UnsupportedOperation("restore_state"))
    }

    /// Replaces the state with bits drawn from `source`.
    fn seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError>;

    /// Mixes bits drawn from `source` into the current state.
    fn merge_seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError>;

    /// Number of bits produced natively by one internal step.
    fn step_bit_count(&self) -> u32 {
        64
    }

    /// Advances the engine by one step, discarding the output.
    fn step(&mut self) {
        let _ = self.next64();
    }

    /// Guaranteed minimum log2 distance covered by [`skip_ahead`](Engine::skip_ahead).
    fn skip_ahead_magnitude(&self) -> i32 {
        0
    }

    /// Guaranteed minimum log2 distance covered by [`skip_back`](Engine::skip_back),
    /// or a negative value when skipping back is unsupported.
    fn skip_back_magnitude(&self) -> i32 {
        -1
    }

    /// Jumps forward through the sequence. Degrades to a single step.
    fn skip_ahead(&mut self) {
        self.step();
    }

    /// Jumps backward through the sequence.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` unless the engine overrides it.
    fn skip_back(&mut self) -> Result<(), EngineError> {
        Err(EngineError::UnsupportedOperation("skip_back"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal engine relying on every default.
    struct Counting {
        value: u64,
    }

    impl BitEngine for Counting {
        fn next64(&mut self) -> u64 {
            self.value = self.value.wrapping_add(0x1_0000_0001);
            self.value
        }
    }

    impl Engine for Counting {
        fn seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError> {
            self.value = source.next64();
            Ok(())
        }

        fn merge_seed(&mut self, source: &mut dyn BitEngine) -> Result<(), EngineError> {
            self.value ^= source.next64();
            Ok(())
        }
    }

    #[test]
    fn test_next32_truncates_next64() {
        let mut a = Counting { value: 0 };
        let mut b = Counting { value: 0 };
        assert_eq!(a.next32(), b.next64() as u32);
    }

    #[test]
    fn test_next64_as_pair_splits_high_low() {
        let mut engine = Counting { value: 0 };
        let (high, low) = engine.next64_as_pair();
        assert_eq!(high, 1);
        assert_eq!(low, 1);
    }

    #[test]
    fn test_default_step_and_skip_ahead_advance_once() {
        let mut stepped = Counting { value: 0 };
        let mut skipped = Counting { value: 0 };
        stepped.step();
        skipped.skip_ahead();
        assert_eq!(stepped.value, skipped.value);
        assert_eq!(skipped.skip_ahead_magnitude(), 0);
    }

    #[test]
    fn test_default_unsupported_operations() {
        let mut engine = Counting { value: 7 };
        assert_eq!(engine.skip_back_magnitude(), -1);
        assert_eq!(
            engine.skip_back(),
            Err(EngineError::UnsupportedOperation("skip_back"))
        );
        assert!(matches!(
            engine.save_state(),
            Err(EngineError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            engine.restore_state(&[0; 8]),
            Err(EngineError::UnsupportedOperation(_))
        ));
        assert_eq!(engine.value, 7);
    }

    #[test]
    fn test_mut_reference_forwards() {
        let mut engine = Counting { value: 0 };
        let expected = Counting { value: 0 }.next64();
        let mut borrowed = &mut engine;
        assert_eq!(BitEngine::next64(&mut borrowed), expected);
    }
}
