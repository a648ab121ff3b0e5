//! # fairdraw-core
//!
//! Core abstractions for the fairdraw sampling library.
//!
//! This crate provides the pieces every sampling algorithm builds on:
//!
//! - **Entropy sources**: the [`EntropySource`] trait and its implementations
//! - **Errors**: the [`SampleError`] taxonomy shared by all operations
//!
//! ## Entropy Sources
//!
//! The source trait lets the same algorithms run against the operating
//! system's secure generator in production and against reproducible streams
//! in tests:
//!
//! - [`OsEntropy`]: cryptographically secure, backed by the OS
//! - [`SeededEntropy`]: ChaCha8 stream from a `u64` seed
//! - [`RngEntropy`]: adapter for any `rand` generator
//! - [`FixedEntropy`]: a repeating byte pattern, for golden-value fixtures
//! - [`ScriptedEntropy`]: a finite list of values, then failure

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod entropy;
mod error;
mod fixture;

// Error exports
pub use error::{SampleError, SampleResult};

// Entropy source exports
pub use entropy::{EntropySource, OsEntropy, RngEntropy, SeededEntropy};
pub use fixture::{FixedEntropy, ScriptedEntropy};
