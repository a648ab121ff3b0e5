//! Reproducible entropy streams for fixtures and failure tests.

use crate::entropy::EntropySource;
use std::collections::VecDeque;
use std::io;

/// Entropy source cycling through a fixed byte pattern.
///
/// Bytes are packed little-endian, eight per value, wrapping around the
/// pattern as often as needed. `FixedEntropy::zeros()` is the all-`0x00`
/// stream: every draw is `0`, which makes every extracted digit `0`.
#[derive(Clone, Debug)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
    position: usize,
    reads: u64,
}

impl FixedEntropy {
    /// Create a source repeating `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is empty.
    pub fn from_bytes(pattern: &[u8]) -> Self {
        assert!(!pattern.is_empty(), "FixedEntropy requires a non-empty pattern");
        Self {
            pattern: pattern.to_vec(),
            position: 0,
            reads: 0,
        }
    }

    /// The all-zero stream.
    pub fn zeros() -> Self {
        Self::from_bytes(&[0x00])
    }

    /// Number of values drawn so far.
    pub fn reads(&self) -> u64 {
        self.reads
    }
}

impl EntropySource for FixedEntropy {
    fn next_u64(&mut self) -> io::Result<u64> {
        let mut bytes = [0u8; 8];
        for byte in bytes.iter_mut() {
            *byte = self.pattern[self.position];
            self.position = (self.position + 1) % self.pattern.len();
        }
        self.reads += 1;
        Ok(u64::from_le_bytes(bytes))
    }
}

/// Entropy source yielding a scripted list of values, then failing.
///
/// Once the script is exhausted every read fails with
/// `io::ErrorKind::UnexpectedEof`, which lets tests stop an operation at an
/// exact point.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEntropy {
    values: VecDeque<u64>,
    reads: u64,
}

impl ScriptedEntropy {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            reads: 0,
        }
    }

    /// A source that fails on its first read.
    pub fn exhausted() -> Self {
        Self::default()
    }

    /// Number of values handed out so far.
    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Number of scripted values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl EntropySource for ScriptedEntropy {
    fn next_u64(&mut self) -> io::Result<u64> {
        match self.values.pop_front() {
            Some(value) => {
                self.reads += 1;
                Ok(value)
            }
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted entropy exhausted",
            )),
        }
    }
}
