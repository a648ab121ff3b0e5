//! # Sampler Configuration
//!
//! | Parameter | Config Field | Default | Description |
//! |-----------|--------------|---------|-------------|
//! | Batched shuffle | `batched_shuffle` | `true` | Split one draw across several shuffle positions |
//! | Rejection limit | `rejection_limit` | 64 | Consecutive biased-tail draws before the source is declared failed |
//!
//! ## Configuration Examples
//!
//! ### Default (batched)
//! ```rust
//! use fairdraw::SamplerConfiguration;
//!
//! let config = SamplerConfiguration::default();
//! assert!(config.batched_shuffle);
//! ```
//!
//! ### One read per shuffle position
//! ```rust
//! use fairdraw::SamplerConfiguration;
//!
//! let config = SamplerConfiguration::unbatched();
//! assert!(!config.batched_shuffle);
//! ```

/// Configuration for a [`Sampler`](crate::Sampler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfiguration {
    /// Whether shuffles split one 64-bit draw across consecutive positions.
    ///
    /// Both modes produce the same distribution. Batching divides the number
    /// of entropy reads by roughly `64 / log2(n)`; the per-step mode issues
    /// one read per position and is easier to follow in a trace.
    pub batched_shuffle: bool,

    /// Maximum consecutive draws rejected for falling in the biased tail.
    ///
    /// A healthy source is rejected with probability below one half per draw,
    /// so hitting the default of 64 means the source is stuck. Reaching the
    /// limit fails the call with an entropy error. The limit is checked
    /// after each rejection, so `0` behaves exactly like `1`: the first
    /// rejected draw fails the call.
    pub rejection_limit: u32,
}

impl Default for SamplerConfiguration {
    fn default() -> Self {
        Self {
            batched_shuffle: true,
            rejection_limit: 64,
        }
    }
}

impl SamplerConfiguration {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration drawing once per shuffle position.
    pub fn unbatched() -> Self {
        Self {
            batched_shuffle: false,
            ..Self::default()
        }
    }

    /// Set the rejection limit.
    pub fn with_rejection_limit(mut self, limit: u32) -> Self {
        self.rejection_limit = limit;
        self
    }
}
