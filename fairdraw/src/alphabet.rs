//! Random strings over fixed alphabets.

use std::collections::HashSet;

use fairdraw_core::{EntropySource, SampleError, SampleResult};

use crate::sampler::Sampler;

/// Digits and lowercase ASCII letters.
pub const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Digits, lowercase and uppercase ASCII letters.
pub const BASE62: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An ordered set of at least two distinct characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidArgument`] if there are fewer than two
    /// characters or a character repeats.
    pub fn new(symbols: &str) -> SampleResult<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(SampleError::invalid_argument(
                "alphabet needs at least two characters",
            ));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        if let Some(duplicate) = symbols.iter().find(|c| !seen.insert(**c)) {
            return Err(SampleError::invalid_argument(format!(
                "alphabet repeats {duplicate:?}"
            )));
        }
        Ok(Self { symbols })
    }

    /// The [`BASE36`] alphabet.
    pub fn base36() -> Self {
        Self {
            symbols: BASE36.chars().collect(),
        }
    }

    /// The [`BASE62`] alphabet.
    pub fn base62() -> Self {
        Self {
            symbols: BASE62.chars().collect(),
        }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: an alphabet has at least two characters.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    fn symbol(&self, digit: u64) -> char {
        self.symbols[digit as usize]
    }
}

impl<E: EntropySource> Sampler<E> {
    /// Draw a string of `len` characters, each uniform over `alphabet`.
    ///
    /// # Errors
    ///
    /// - [`SampleError::InvalidArgument`] if `len == 0`
    /// - [`SampleError::EntropySourceFailure`] if the source fails
    ///
    /// # Example
    ///
    /// ```rust
    /// use fairdraw::{Alphabet, Sampler};
    ///
    /// let token = Sampler::seeded(9)
    ///     .random_string(16, &Alphabet::base62())
    ///     .expect("seeded");
    /// assert_eq!(token.chars().count(), 16);
    /// ```
    pub fn random_string(&mut self, len: usize, alphabet: &Alphabet) -> SampleResult<String> {
        if len == 0 {
            return Err(SampleError::invalid_argument("string length must be > 0"));
        }

        let mut out = String::with_capacity(len);
        self.extract_digits(len, alphabet.len() as u64, |digit| {
            out.push(alphabet.symbol(digit))
        })?;
        Ok(out)
    }
}
