//! Uniform draws without modulo bias.
//!
//! A raw draw `v` covers `[0, 2^64)`. To split it into values over a span `s`
//! without bias, the top `2^64 mod s` values are rejected and redrawn; what
//! remains is an exact multiple of `s`, so `v mod s` is uniform.

use std::io;
use std::ops::Range;

use fairdraw_core::{EntropySource, SampleError, SampleResult};

use crate::sampler::Sampler;

/// Size of the raw draw space.
pub(crate) const TWO_POW_64: u128 = 1 << 64;

/// 2^-53, the spacing of the `[0, 1)` grid built from 53 random bits.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

impl<E: EntropySource> Sampler<E> {
    /// Draw a raw value that can be split over `span` without bias.
    ///
    /// `span` must be in `2..=2^64`. Draws in the biased tail are rejected;
    /// after `rejection_limit` consecutive rejections the source is declared
    /// failed.
    pub(crate) fn draw_within(&mut self, span: u128) -> SampleResult<u64> {
        debug_assert!((2..=TWO_POW_64).contains(&span), "span out of range: {span}");

        let accept_below = TWO_POW_64 - TWO_POW_64 % span;
        let mut rejected = 0u32;
        loop {
            let value = self.draw_raw()?;
            if u128::from(value) < accept_below {
                return Ok(value);
            }

            rejected += 1;
            tracing::trace!(width = %span, rejected, "rejected draw in biased tail");
            if rejected >= self.config().rejection_limit {
                tracing::warn!(
                    width = %span,
                    rejected,
                    "entropy source stuck in rejection zone"
                );
                return Err(io::Error::other(format!(
                    "{rejected} consecutive draws rejected for span {span}"
                ))
                .into());
            }
        }
    }

    /// Draw an integer uniformly from `[0, bound)`.
    ///
    /// `bound == 1` returns `0` without reading entropy.
    ///
    /// # Errors
    ///
    /// - [`SampleError::InvalidArgument`] if `bound == 0`
    /// - [`SampleError::EntropySourceFailure`] if the source fails
    pub fn uniform_int(&mut self, bound: u64) -> SampleResult<u64> {
        match bound {
            0 => Err(SampleError::invalid_argument("bound must be > 0")),
            1 => Ok(0),
            _ => Ok(self.draw_within(u128::from(bound))? % bound),
        }
    }

    /// Draw an integer uniformly from `range` (exclusive of the end).
    pub fn uniform_range(&mut self, range: Range<u64>) -> SampleResult<u64> {
        if range.start >= range.end {
            return Err(SampleError::invalid_argument(format!(
                "empty range {}..{}",
                range.start, range.end
            )));
        }
        Ok(range.start + self.uniform_int(range.end - range.start)?)
    }

    /// Draw an `f64` uniformly from `[0, 1)`.
    ///
    /// Uses the top 53 bits of one raw draw, so every result is a multiple
    /// of `2^-53`.
    pub fn uniform_f64(&mut self) -> SampleResult<f64> {
        Ok((self.draw_raw()? >> 11) as f64 * F64_UNIT)
    }

    /// Choose an element of `items` uniformly.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidArgument`] if `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> SampleResult<&'a T> {
        if items.is_empty() {
            return Err(SampleError::invalid_argument("cannot choose from an empty slice"));
        }
        let index = self.uniform_int(items.len() as u64)? as usize;
        Ok(&items[index])
    }
}
