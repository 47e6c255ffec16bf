//! Precomputed samplers bound to a shared engine handle.

use prng_core::engine::BitEngine;
use std::cell::RefCell;

/// A validated distribution that turns engine bits into values.
///
/// Implementors hold only precomputed shape data; `sample` performs no
/// validation and never fails.
pub trait Sampler {
    /// Type of value produced.
    type Output;

    /// Draws one value, consuming bits from `engine`.
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> Self::Output;

    /// Fills `out` with consecutive draws.
    fn sample_into<E: BitEngine + ?Sized>(&self, engine: &mut E, out: &mut [Self::Output]) {
        for slot in out.iter_mut() {
            *slot = self.sample(engine);
        }
    }
}

/// A [`Sampler`] paired with a borrowed engine handle.
///
/// The engine lives in a [`RefCell`] owned by the caller, so several
/// generators can draw from one engine in turn. The lifetime `'a` ties every
/// generator to the engine it was built on.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::SplitMix64;
/// use prng_distributions::closed_form::UniformDistribution;
/// use prng_distributions::Generator;
/// use std::cell::RefCell;
///
/// let engine = RefCell::new(SplitMix64::new(42));
/// let dice = Generator::new(UniformDistribution::new(1.0, 6.0).unwrap(), &engine);
/// let coin = Generator::new(UniformDistribution::new(0.0, 1.0).unwrap(), &engine);
///
/// let roll: f64 = dice.sample();
/// let flip: f64 = coin.sample();
/// assert!((1.0..=6.0).contains(&roll));
/// assert!((0.0..=1.0).contains(&flip));
/// ```
#[derive(Debug)]
pub struct Generator<'a, S, E: ?Sized> {
    sampler: S,
    engine: &'a RefCell<E>,
}

impl<'a, S, E> Generator<'a, S, E>
where
    S: Sampler,
    E: BitEngine + ?Sized,
{
    /// Binds `sampler` to `engine`.
    pub fn new(sampler: S, engine: &'a RefCell<E>) -> Self {
        Self { sampler, engine }
    }

    /// Draws one value.
    ///
    /// # Panics
    ///
    /// Panics if the engine is already mutably borrowed elsewhere.
    pub fn sample(&self) -> S::Output {
        self.sampler.sample(&mut *self.engine.borrow_mut())
    }

    /// Fills `out` with consecutive draws under a single engine borrow.
    pub fn fill(&self, out: &mut [S::Output]) {
        self.sampler
            .sample_into(&mut *self.engine.borrow_mut(), out);
    }

    /// The precomputed sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// The engine handle.
    pub fn engine(&self) -> &'a RefCell<E> {
        self.engine
    }
}

impl<S, E> Iterator for Generator<'_, S, E>
where
    S: Sampler,
    E: BitEngine + ?Sized,
{
    type Item = S::Output;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sample())
    }
}
