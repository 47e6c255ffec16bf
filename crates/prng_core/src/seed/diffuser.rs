//! FNV-1a seed diffuser.

use super::EntropyCounter;
use crate::engine::BitEngine;

const FNV32_BASIS: u32 = 2_166_136_261;
const FNV32_PRIME: u32 = 16_777_619;
const FNV64_BASIS: u64 = 14_695_981_039_346_656_037;
const FNV64_PRIME: u64 = 1_099_511_628_211;

/// Odd increment applied to the call counter after every draw.
const COUNTER_INCREMENT: i64 = 0x9E37_79B9_7F4A_7C15_u64 as i64;

/// Candidate offset strides, ascending. The largest one not dividing the
/// buffer length is used.
const OFFSET_PRIMES: [usize; 10] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

/// A value that can be turned into seed bytes.
///
/// Integers and floats of every width are supported. Bytes are written most
/// significant byte first; `usize`/`isize` are widened to 64 bits so that the
/// same seed produces the same stream on every platform.
pub trait SeedValue: Copy {
    /// Appends this value's seed bytes to `out`.
    fn write_seed_bytes(&self, out: &mut Vec<u8>);
}

macro_rules! impl_seed_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl SeedValue for $t {
                #[inline]
                fn write_seed_bytes(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

impl_seed_value!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl SeedValue for usize {
    #[inline]
    fn write_seed_bytes(&self, out: &mut Vec<u8>) {
        (*self as u64).write_seed_bytes(out);
    }
}

impl SeedValue for isize {
    #[inline]
    fn write_seed_bytes(&self, out: &mut Vec<u8>) {
        (*self as i64).write_seed_bytes(out);
    }
}

/// Turns arbitrary seed material into a stream of well-mixed bits.
///
/// Each draw runs FNV-1a over the call counter and then over every byte of the
/// seed buffer exactly once, starting at a rotating offset and wrapping to the
/// start. Afterwards the offset advances by a prime stride and the counter by
/// a large odd constant, so consecutive draws over the same buffer diverge.
///
/// Two diffusers built from identical material produce identical streams.
///
/// # Examples
///
/// ```rust
/// use prng_core::engine::BitEngine;
/// use prng_core::seed::SeedDiffuser;
///
/// let mut a = SeedDiffuser::from_text("forest");
/// let mut b = SeedDiffuser::from_text("forest");
/// assert_eq!(a.next64(), b.next64());
/// assert_ne!(a.next64(), SeedDiffuser::from_text("forest").next64());
/// ```
#[derive(Debug, Clone)]
pub struct SeedDiffuser {
    buffer: Vec<u8>,
    offset: usize,
    offset_increment: usize,
    counter: i64,
}

impl SeedDiffuser {
    /// Creates a diffuser that owns the given seed bytes.
    pub fn from_buffer(buffer: Vec<u8>) -> Self {
        let offset_increment = offset_increment_for(buffer.len());
        Self {
            buffer,
            offset: 0,
            offset_increment,
            counter: 0,
        }
    }

    /// Creates a diffuser from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_buffer(bytes.to_vec())
    }

    /// Creates a diffuser from the UTF-8 encoding of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Creates a diffuser from a single integer or float.
    pub fn from_value<V: SeedValue>(value: V) -> Self {
        let mut buffer = Vec::with_capacity(16);
        value.write_seed_bytes(&mut buffer);
        Self::from_buffer(buffer)
    }

    /// Creates a diffuser from a sequence of integers or floats.
    pub fn from_values<V: SeedValue>(values: &[V]) -> Self {
        let mut buffer = Vec::with_capacity(values.len() * 8);
        for value in values {
            value.write_seed_bytes(&mut buffer);
        }
        Self::from_buffer(buffer)
    }

    /// Creates a diffuser from transient entropy using the process-wide counter.
    pub fn from_entropy() -> Self {
        Self::from_entropy_with(EntropyCounter::process())
    }

    /// Creates a diffuser from transient entropy using an explicit counter.
    pub fn from_entropy_with(counter: &EntropyCounter) -> Self {
        Self::from_buffer(counter.transient_material())
    }

    /// Number of seed bytes hashed per draw.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the seed buffer is empty (only the counter is hashed).
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stride by which the read offset advances after each draw.
    pub fn offset_increment(&self) -> usize {
        self.offset_increment
    }

    /// Current read offset into the seed buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn rotated_bytes(&self) -> impl Iterator<Item = &u8> {
        let (head, tail) = self.buffer.split_at(self.offset);
        tail.iter().chain(head.iter())
    }

    #[inline]
    fn advance(&mut self) {
        if !self.buffer.is_empty() {
            self.offset = (self.offset + self.offset_increment) % self.buffer.len();
        }
        self.counter = self.counter.wrapping_add(COUNTER_INCREMENT);
    }
}

impl BitEngine for SeedDiffuser {
    fn next32(&mut self) -> u32 {
        let mut hash = FNV32_BASIS;
        for &byte in (self.counter as u32).to_be_bytes().iter() {
            hash = (hash ^ u32::from(byte)).wrapping_mul(FNV32_PRIME);
        }
        for &byte in self.rotated_bytes() {
            hash = (hash ^ u32::from(byte)).wrapping_mul(FNV32_PRIME);
        }
        self.advance();
        hash
    }

    fn next64(&mut self) -> u64 {
        let mut hash = FNV64_BASIS;
        for &byte in self.counter.to_be_bytes().iter() {
            hash = (hash ^ u64::from(byte)).wrapping_mul(FNV64_PRIME);
        }
        for &byte in self.rotated_bytes() {
            hash = (hash ^ u64::from(byte)).wrapping_mul(FNV64_PRIME);
        }
        self.advance();
        hash
    }
}

/// Chooses the offset stride for a buffer of `len` bytes.
///
/// 0 for buffers of at most one byte; otherwise the largest candidate prime
/// that does not divide `len`, or 1 if every candidate does.
fn offset_increment_for(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    OFFSET_PRIMES
        .iter()
        .rev()
        .copied()
        .find(|&p| len % p != 0)
        .unwrap_or(1)
}
