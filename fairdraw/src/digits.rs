//! Batched digit extraction.
//!
//! One accepted 64-bit draw holds several independent digits: if the draw is
//! uniform over a multiple of `b1 * b2 * ... * bk`, then peeling it with
//! `v mod b1, v /= b1, v mod b2, ...` yields `k` independent uniform digits.
//! Planning the batch up front fixes how many digits a draw yields and keeps
//! every digit exact.

use fairdraw_core::{EntropySource, SampleError, SampleResult};

use crate::sampler::Sampler;
use crate::uniform::TWO_POW_64;

/// One accepted draw, consumed digit by digit.
///
/// The radix may change between pulls, which is what the shuffle needs:
/// each position has its own bound.
#[derive(Debug)]
pub(crate) struct DigitBatch {
    value: u64,
}

impl DigitBatch {
    pub(crate) fn new(value: u64) -> Self {
        Self { value }
    }

    /// Pull the next digit in base `radix`.
    pub(crate) fn take(&mut self, radix: u64) -> u64 {
        let digit = self.value % radix;
        self.value /= radix;
        digit
    }
}

/// Number of base-`bound` digits one 64-bit draw can carry, with their span.
///
/// The largest `m` with `bound^m <= 2^64`, which is `floor(64 / log2(bound))`
/// unless `bound` is a power of two.
fn batch_plan(bound: u64) -> (usize, u128) {
    debug_assert!(bound > 1);
    let radix = u128::from(bound);
    let mut span = 1u128;
    let mut digits = 0;
    while span * radix <= TWO_POW_64 {
        span *= radix;
        digits += 1;
    }
    (digits, span)
}

/// Number of base-`bound` digits a single entropy read yields.
///
/// Returns `0` for `bound <= 1`, which carries no information.
pub fn digits_per_draw(bound: u64) -> usize {
    if bound <= 1 {
        0
    } else {
        batch_plan(bound).0
    }
}

impl<E: EntropySource> Sampler<E> {
    /// Emit `count` digits, each uniform over `[0, bound)`, through `callback`.
    ///
    /// Digits are produced in batches of [`digits_per_draw`]`(bound)` per
    /// entropy read, which saves reads when `bound` is small.
    ///
    /// # Errors
    ///
    /// - [`SampleError::InvalidArgument`] if `count == 0` or `bound <= 1`,
    ///   before any entropy is read
    /// - [`SampleError::EntropySourceFailure`] if the source fails; digits
    ///   already emitted stay emitted
    ///
    /// # Example
    ///
    /// ```rust
    /// use fairdraw::Sampler;
    ///
    /// let mut sampler = Sampler::seeded(1);
    /// let mut digits = Vec::new();
    /// sampler.extract_digits(5, 62, |d| digits.push(d)).expect("seeded");
    /// assert_eq!(digits.len(), 5);
    /// assert!(digits.iter().all(|&d| d < 62));
    /// ```
    pub fn extract_digits<F>(
        &mut self,
        count: usize,
        bound: u64,
        mut callback: F,
    ) -> SampleResult<()>
    where
        F: FnMut(u64),
    {
        if count == 0 {
            return Err(SampleError::invalid_argument("digit count must be > 0"));
        }
        if bound <= 1 {
            return Err(SampleError::invalid_argument(format!(
                "digit bound must be > 1, got {bound}"
            )));
        }

        let (per_draw, span) = batch_plan(bound);
        let mut remaining = count;
        while remaining > 0 {
            let mut batch = DigitBatch::new(self.draw_within(span)?);
            let take = per_draw.min(remaining);
            for _ in 0..take {
                callback(batch.take(bound));
            }
            remaining -= take;
        }
        Ok(())
    }
}
