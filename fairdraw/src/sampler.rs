//! The [`Sampler`]: an entropy source plus its configuration.

use fairdraw_core::{EntropySource, OsEntropy, SampleResult, SeededEntropy};

use crate::config::SamplerConfiguration;

/// Entry point for every sampling operation.
///
/// A sampler owns one [`EntropySource`] and draws from it on behalf of the
/// algorithms in this crate. It holds no other state between calls, so a
/// failed call leaves it usable (though the source that failed may keep
/// failing).
///
/// # Example
///
/// ```rust
/// use fairdraw::Sampler;
///
/// let mut sampler = Sampler::seeded(42);
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// sampler.shuffle_slice(&mut items).expect("seeded entropy never fails");
/// assert_eq!(items.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler<E> {
    entropy: E,
    config: SamplerConfiguration,
}

impl<E: EntropySource> Sampler<E> {
    /// Create a sampler over `entropy` with the default configuration.
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            config: SamplerConfiguration::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: SamplerConfiguration) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SamplerConfiguration {
        &self.config
    }

    /// Borrow the entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Give back the entropy source.
    pub fn into_entropy(self) -> E {
        self.entropy
    }

    /// Draw one raw 64-bit value.
    ///
    /// Drawn values never reach the logs: tokens and orders are pure
    /// functions of them.
    pub(crate) fn draw_raw(&mut self) -> SampleResult<u64> {
        match self.entropy.next_u64() {
            Ok(value) => {
                tracing::trace!("drew raw entropy");
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, "entropy source failed");
                Err(e.into())
            }
        }
    }
}

impl Sampler<OsEntropy> {
    /// Sampler backed by the operating system's secure generator.
    pub fn os() -> Self {
        Self::new(OsEntropy::new())
    }
}

impl Default for Sampler<OsEntropy> {
    fn default() -> Self {
        Self::os()
    }
}

impl Sampler<SeededEntropy> {
    /// Deterministic sampler for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededEntropy::new(seed))
    }
}
