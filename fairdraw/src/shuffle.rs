//! Unbiased Fisher–Yates shuffle over caller-owned data.
//!
//! The shuffle never touches the collection: it only decides which index
//! pairs to exchange and hands them to a `swap(i, j)` callback, walking `i`
//! from `n - 1` down to `1` with `j` uniform over `[0, i]`.
//!
//! In batched mode one 64-bit draw serves several consecutive positions. The
//! radix shrinks with the position, so a batch covering positions
//! `i, i - 1, ..., k` is drawn over the span `(i + 1) * i * ... * (k + 1)` and
//! peeled mixed-radix, re-deriving the radix before every pull.

use fairdraw_core::{EntropySource, SampleResult};

use crate::digits::DigitBatch;
use crate::sampler::Sampler;
use crate::uniform::TWO_POW_64;

/// Plan the batch starting at position `top` (inclusive, `top >= 1`).
///
/// Returns the lowest position the batch covers and the product of the
/// radices of all covered positions. Position 0 is never covered: its only
/// choice is itself.
fn plan_positions(top: usize) -> (usize, u128) {
    debug_assert!(top >= 1);
    let mut span = 1u128;
    let mut position = top;
    loop {
        let radix = position as u128 + 1;
        if span * radix > TWO_POW_64 {
            return (position + 1, span);
        }
        span *= radix;
        if position == 1 {
            return (1, span);
        }
        position -= 1;
    }
}

impl<E: EntropySource> Sampler<E> {
    /// Shuffle `n` caller-owned elements through `swap`.
    ///
    /// Calls `swap(i, j)` exactly `n - 1` times, for `i` from `n - 1` down to
    /// `1`, with `0 <= j <= i` (`swap(i, i)` included). `n <= 1` is a no-op
    /// and reads no entropy. Calls are sequential, each one returning before
    /// the next is issued.
    ///
    /// # Errors
    ///
    /// [`SampleError::EntropySourceFailure`](fairdraw_core::SampleError::EntropySourceFailure)
    /// if the source fails. Swaps issued before the failure are not undone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fairdraw::Sampler;
    ///
    /// let mut deck: Vec<u32> = (0..52).collect();
    /// Sampler::seeded(7)
    ///     .shuffle(deck.len(), |i, j| deck.swap(i, j))
    ///     .expect("seeded");
    /// ```
    pub fn shuffle<F>(&mut self, n: usize, mut swap: F) -> SampleResult<()>
    where
        F: FnMut(usize, usize),
    {
        if n <= 1 {
            return Ok(());
        }

        tracing::debug!(n, batched = self.config().batched_shuffle, "shuffling");
        if self.config().batched_shuffle {
            self.shuffle_batched(n, &mut swap)
        } else {
            self.shuffle_stepwise(n, &mut swap)
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle_slice<T>(&mut self, items: &mut [T]) -> SampleResult<()> {
        self.shuffle(items.len(), |i, j| items.swap(i, j))
    }

    fn shuffle_stepwise<F>(&mut self, n: usize, swap: &mut F) -> SampleResult<()>
    where
        F: FnMut(usize, usize),
    {
        for i in (1..n).rev() {
            let j = self.uniform_int(i as u64 + 1)? as usize;
            swap(i, j);
        }
        Ok(())
    }

    fn shuffle_batched<F>(&mut self, n: usize, swap: &mut F) -> SampleResult<()>
    where
        F: FnMut(usize, usize),
    {
        let mut top = n - 1;
        loop {
            let (lowest, span) = plan_positions(top);
            let mut batch = DigitBatch::new(self.draw_within(span)?);
            tracing::trace!(top, lowest, "shuffle batch");

            for i in (lowest..=top).rev() {
                let j = batch.take(i as u64 + 1) as usize;
                swap(i, j);
            }

            if lowest == 1 {
                return Ok(());
            }
            top = lowest - 1;
        }
    }
}
