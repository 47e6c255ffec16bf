//! Process-scoped entropy counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Large odd increment applied on every draw from the counter.
///
/// Consecutive transient seeds created within the same clock tick therefore
/// differ in many bits rather than only the lowest one.
const ENTROPY_INCREMENT: u64 = 0xD1B5_4A32_D192_ED03;

static PROCESS_ENTROPY: EntropyCounter = EntropyCounter::new();

/// Monotonically advancing counter mixed into transient seed material.
///
/// The counter starts at zero and is advanced atomically, so it may be shared
/// across threads even though the engines seeded from it may not.
///
/// Tests can inject their own counter through
/// [`SeedDiffuser::from_entropy_with`](super::SeedDiffuser::from_entropy_with)
/// instead of touching the process-wide instance.
///
/// # Examples
///
/// ```rust
/// use prng_core::seed::EntropyCounter;
///
/// let counter = EntropyCounter::new();
/// let first = counter.next();
/// let second = counter.next();
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Default)]
pub struct EntropyCounter {
    value: AtomicU64,
}

impl EntropyCounter {
    /// Creates a counter starting at zero.
    pub const fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Returns the process-wide counter used by parameterless seeding.
    pub fn process() -> &'static EntropyCounter {
        &PROCESS_ENTROPY
    }

    /// Returns the current value and advances the counter.
    pub fn next(&self) -> u64 {
        self.value.fetch_add(ENTROPY_INCREMENT, Ordering::Relaxed)
    }

    /// Collects transient seed material: wall clock, process id and a counter draw.
    ///
    /// The bytes are written most significant byte first.
    pub fn transient_material(&self) -> Vec<u8> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut material = Vec::with_capacity(28);
        material.extend_from_slice(&nanos.to_be_bytes());
        material.extend_from_slice(&std::process::id().to_be_bytes());
        material.extend_from_slice(&self.next().to_be_bytes());
        material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let counter = EntropyCounter::new();
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), ENTROPY_INCREMENT);
    }

    #[test]
    fn test_transient_material_layout() {
        let counter = EntropyCounter::new();
        let material = counter.transient_material();
        assert_eq!(material.len(), 28);
        // The trailing eight bytes carry the counter draw (zero on first use).
        assert!(material[20..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_transient_material_differs_between_calls() {
        let counter = EntropyCounter::new();
        let a = counter.transient_material();
        let b = counter.transient_material();
        assert_ne!(a, b);
    }

    #[test]
    fn test_process_counter_is_shared() {
        let a = EntropyCounter::process() as *const EntropyCounter;
        let b = EntropyCounter::process() as *const EntropyCounter;
        assert_eq!(a, b);
    }
}
