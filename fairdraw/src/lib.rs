//! # fairdraw
//!
//! Unbiased random sampling on a cryptographically secure entropy source.
//!
//! ## Components
//!
//! - **Uniform draws**: [`Sampler::uniform_int`] rejects the biased tail of
//!   each 64-bit draw instead of reducing it with a bare modulo
//! - **Batched digits**: [`Sampler::extract_digits`] splits one draw into as
//!   many bounded digits as it can carry exactly
//! - **Shuffle**: [`Sampler::shuffle`] runs Fisher–Yates through a
//!   `swap(i, j)` callback, batching positions with a shrinking radix
//! - **Weighted choice**: [`Sampler::weighted_choice`] picks an index in
//!   proportion to its weight
//! - **Weighted shuffle**: [`Sampler::weighted_shuffle`] visits every
//!   positive-weight index once, heavier ones tending to come first
//! - **Random strings**: [`Sampler::random_string`] over [`BASE36`],
//!   [`BASE62`] or a custom [`Alphabet`]
//!
//! ## Quick Start
//!
//! ```rust
//! let mut cards: Vec<u8> = (1..=10).collect();
//! fairdraw::shuffle_slice(&mut cards).expect("os entropy");
//!
//! let winner = fairdraw::weighted_choice(&[1.0, 3.0, 0.0]).expect("os entropy");
//! assert!(winner < 2);
//! ```
//!
//! Reproducible runs use a seeded sampler:
//!
//! ```rust
//! use fairdraw::Sampler;
//!
//! let mut a = Sampler::seeded(42);
//! let mut b = Sampler::seeded(42);
//! assert_eq!(a.uniform_int(1_000).unwrap(), b.uniform_int(1_000).unwrap());
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`SampleResult`]. Invalid arguments and weight
//! vectors are rejected before any entropy is read; an entropy failure stops
//! the operation where it is, with no retry.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

// Re-export core types for convenience
pub use fairdraw_core::{
    EntropySource, FixedEntropy, OsEntropy, RngEntropy, SampleError, SampleResult,
    ScriptedEntropy, SeededEntropy,
};

mod alphabet;
mod config;
mod digits;
mod os;
mod sampler;
mod shuffle;
mod uniform;
mod weighted;

pub use alphabet::{Alphabet, BASE36, BASE62};
pub use config::SamplerConfiguration;
pub use digits::digits_per_draw;
pub use os::{
    extract_digits, random_string, shuffle, shuffle_slice, uniform_int, weighted_choice,
    weighted_shuffle,
};
pub use sampler::Sampler;
