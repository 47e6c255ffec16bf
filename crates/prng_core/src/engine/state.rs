//! Saved-state codec.
//!
//! Engine states are written one byte at a time, most significant byte first,
//! so the format is independent of host endianness. Engines compose these
//! helpers rather than inheriting a shared implementation.

use crate::types::EngineError;

/// Byte-at-a-time state writer (most significant byte first).
///
/// # Examples
///
/// ```rust
/// use prng_core::engine::StateWriter;
///
/// let mut writer = StateWriter::with_capacity(4);
/// writer.write_u32(0x0102_0304);
/// assert_eq!(writer.finish(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Default)]
pub struct StateWriter {
    bytes: Vec<u8>,
}

impl StateWriter {
    /// Creates a writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a 32-bit word.
    pub fn write_u32(&mut self, value: u32) {
        for shift in (0..4).rev() {
            self.bytes.push((value >> (shift * 8)) as u8);
        }
    }

    /// Appends a 64-bit word.
    pub fn write_u64(&mut self, value: u64) {
        for shift in (0..8).rev() {
            self.bytes.push((value >> (shift * 8)) as u8);
        }
    }

    /// Consumes the writer and returns the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Length-checked state reader (most significant byte first).
///
/// The length is validated once in [`StateReader::new`]; the read methods
/// assume the caller reads exactly the declared layout.
#[derive(Debug)]
pub struct StateReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> StateReader<'a> {
    /// Creates a reader after checking that `bytes` has the expected length.
    ///
    /// # Errors
    ///
    /// `InvalidState` naming `engine` if the length differs.
    pub fn new(engine: &str, bytes: &'a [u8], expected_len: usize) -> Result<Self, EngineError> {
        if bytes.len() != expected_len {
            return Err(EngineError::state_length(engine, expected_len, bytes.len()));
        }
        Ok(Self { bytes, position: 0 })
    }

    /// Reads the next 32-bit word.
    pub fn read_u32(&mut self) -> u32 {
        let mut value = 0u32;
        for _ in 0..4 {
            value = (value << 8) | u32::from(self.bytes[self.position]);
            self.position += 1;
        }
        value
    }

    /// Reads the next 64-bit word.
    pub fn read_u64(&mut self) -> u64 {
        let mut value = 0u64;
        for _ in 0..8 {
            value = (value << 8) | u64::from(self.bytes[self.position]);
            self.position += 1;
        }
        value
    }
}
