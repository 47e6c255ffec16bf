//! Bridge from [`BitEngine`] to the `rand` ecosystem.
//!
//! Wrapping an engine in [`EngineRng`] lets any `rand::distributions`
//! or `rand_distr` sampler draw from it without copying the engine.

use super::BitEngine;
use rand::RngCore;

/// Borrowed view of a [`BitEngine`] as a [`rand::RngCore`].
///
/// # Examples
///
/// ```rust
/// use prng_core::engine::EngineRng;
/// use prng_core::engines::SplitMix64;
/// use rand::Rng;
///
/// let mut engine = SplitMix64::new(7);
/// let value: f64 = EngineRng::new(&mut engine).gen();
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Debug)]
pub struct EngineRng<'a, E: BitEngine + ?Sized> {
    engine: &'a mut E,
}

impl<'a, E: BitEngine + ?Sized> EngineRng<'a, E> {
    /// Wraps a mutable borrow of `engine`.
    #[inline]
    pub fn new(engine: &'a mut E) -> Self {
        Self { engine }
    }
}

impl<E: BitEngine + ?Sized> RngCore for EngineRng<'_, E> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.engine.next32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.engine.next64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.engine.next64().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.engine.next64().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::SplitMix64;

    #[test]
    fn test_next_u64_forwards() {
        let mut a = SplitMix64::new(3);
        let mut b = SplitMix64::new(3);
        assert_eq!(EngineRng::new(&mut a).next_u64(), b.next64());
    }

    #[test]
    fn test_fill_bytes_uses_little_endian_words() {
        let mut a = SplitMix64::new(3);
        let mut b = SplitMix64::new(3);
        let mut dest = [0u8; 11];
        EngineRng::new(&mut a).fill_bytes(&mut dest);

        let first = b.next64().to_le_bytes();
        let second = b.next64().to_le_bytes();
        assert_eq!(&dest[..8], &first);
        assert_eq!(&dest[8..], &second[..3]);
    }

    #[test]
    fn test_works_through_dyn_engine() {
        let mut engine = SplitMix64::new(5);
        let dyn_engine: &mut dyn BitEngine = &mut engine;
        let mut rng = EngineRng::new(dyn_engine);
        let mut buffer = [0u8; 4];
        assert!(rng.try_fill_bytes(&mut buffer).is_ok());
    }
}
