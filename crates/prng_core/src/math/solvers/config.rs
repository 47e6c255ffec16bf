//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (`f32` or `f64`)
///
/// # Example
///
/// ```
/// use prng_core::math::solvers::SolverConfig;
///
/// let sampling: SolverConfig<f32> = SolverConfig::sampling();
/// assert_eq!(sampling.max_iterations, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the absolute step size.
    ///
    /// The solver stops once `|x_{n+1} - x_n| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl<T: Float> SolverConfig<T> {
    /// Iteration cap used when inverting spline CDFs during sampling.
    pub const SAMPLING_ITERATIONS: usize = 32;

    /// Configuration used by the spline samplers.
    ///
    /// The tolerance is eight machine epsilons of `T`, so `f32` and `f64`
    /// both iterate until the step is at the limit of their precision.
    pub fn sampling() -> Self {
        let eight = T::one() + T::one();
        let eight = eight * eight * eight;
        Self {
            tolerance: T::epsilon() * eight,
            max_iterations: Self::SAMPLING_ITERATIONS,
        }
    }
}
