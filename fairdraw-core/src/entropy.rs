//! Entropy source abstraction.
//!
//! This module provides a provider pattern for raw 64-bit randomness. The
//! sampling algorithms only ever ask a source for the next `u64`; whether that
//! comes from the operating system or a seeded stream is the source's concern.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng, TryRngCore};
use rand_chacha::ChaCha8Rng;
use std::io;

/// Provider trait for raw 64-bit entropy.
///
/// A source yields uniformly distributed `u64` values. Reads may block
/// briefly while the OS pool is seeding. A failed read is reported as an
/// `io::Error`; callers treat the whole operation as unusable.
pub trait EntropySource {
    /// Draw the next uniformly distributed 64-bit value.
    fn next_u64(&mut self) -> io::Result<u64>;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn next_u64(&mut self) -> io::Result<u64> {
        (**self).next_u64()
    }
}

impl<E: EntropySource + ?Sized> EntropySource for Box<E> {
    fn next_u64(&mut self) -> io::Result<u64> {
        (**self).next_u64()
    }
}

/// Production entropy source backed by the operating system.
///
/// Every read goes to the OS secure generator through `rand::rngs::OsRng`.
/// The type holds no state, so constructing one per call is free.
///
/// # Example
///
/// ```rust
/// use fairdraw_core::{EntropySource, OsEntropy};
///
/// let mut entropy = OsEntropy::new();
/// let value = entropy.next_u64().expect("os entropy");
/// # let _ = value;
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Create a new OS-backed entropy source.
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn next_u64(&mut self) -> io::Result<u64> {
        OsRng
            .try_next_u64()
            .map_err(|e| io::Error::other(format!("os random source: {e}")))
    }
}

/// Deterministic entropy source seeded from a `u64`.
///
/// Uses ChaCha8Rng for reproducible streams: the same seed always produces
/// the same sequence. Not for production secrets; the seed is the whole key.
#[derive(Clone, Debug)]
pub struct SeededEntropy {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededEntropy {
    /// Create a source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created with.
    ///
    /// Useful in failure messages so a run can be reproduced.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntropySource for SeededEntropy {
    fn next_u64(&mut self) -> io::Result<u64> {
        Ok(self.rng.next_u64())
    }
}

/// Adapter turning any `rand` generator into an [`EntropySource`].
///
/// Fallible generators keep their failures: the generator's error is carried
/// as the message of an `io::Error`. Infallible generators never fail.
#[derive(Clone, Debug)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: TryRngCore> RngEntropy<R> {
    /// Wrap a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: TryRngCore> EntropySource for RngEntropy<R> {
    fn next_u64(&mut self) -> io::Result<u64> {
        self.rng
            .try_next_u64()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}
