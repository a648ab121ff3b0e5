//! Free functions drawing from the operating system's secure generator.
//!
//! Each call builds its own [`Sampler`] over [`OsEntropy`], so nothing is
//! shared between calls and they can run concurrently from any thread.

use fairdraw_core::{OsEntropy, SampleError, SampleResult};

use crate::alphabet::Alphabet;
use crate::sampler::Sampler;

fn sampler() -> Sampler<OsEntropy> {
    Sampler::os()
}

/// Draw an integer uniformly from `[0, bound)`. See [`Sampler::uniform_int`].
pub fn uniform_int(bound: u64) -> SampleResult<u64> {
    sampler().uniform_int(bound)
}

/// Emit `count` digits uniform over `[0, bound)`. See [`Sampler::extract_digits`].
pub fn extract_digits<F>(count: usize, bound: u64, callback: F) -> SampleResult<()>
where
    F: FnMut(u64),
{
    sampler().extract_digits(count, bound, callback)
}

/// Shuffle `n` elements through `swap`. See [`Sampler::shuffle`].
pub fn shuffle<F>(n: usize, swap: F) -> SampleResult<()>
where
    F: FnMut(usize, usize),
{
    sampler().shuffle(n, swap)
}

/// Shuffle a slice in place. See [`Sampler::shuffle_slice`].
pub fn shuffle_slice<T>(items: &mut [T]) -> SampleResult<()> {
    sampler().shuffle_slice(items)
}

/// Choose an index proportionally to its weight. See [`Sampler::weighted_choice`].
pub fn weighted_choice(weights: &[f64]) -> SampleResult<usize> {
    sampler().weighted_choice(weights)
}

/// Visit positive-weight indices in weighted order. See [`Sampler::weighted_shuffle`].
pub fn weighted_shuffle<F, Error>(weights: &[f64], visit: F) -> Result<(), Error>
where
    F: FnMut(usize) -> Result<(), Error>,
    Error: From<SampleError>,
{
    sampler().weighted_shuffle(weights, visit)
}

/// Draw a random string over `alphabet`. See [`Sampler::random_string`].
pub fn random_string(len: usize, alphabet: &Alphabet) -> SampleResult<String> {
    sampler().random_string(len, alphabet)
}
