//! Random sequence generation.
//!
//! Builds fixed-length strings over a chosen [`Alphabet`] while drawing from
//! the entropy source as rarely as possible: each 63-bit draw is sliced into
//! index-sized chunks and every chunk is spent, accepted or not, before the
//! next draw. Chunks whose value falls outside the alphabet are rejected to
//! keep the distribution uniform.

use crate::entropy::{DRAW_BITS, Entropy, RandomStream};
use crate::error::{Error, Result};

/// An ordered, fixed set of symbols that generated strings draw from.
///
/// The number of bits needed to index the alphabet is derived from its size,
/// so small alphabets waste fewer random bits per chunk and alphabets larger
/// than 64 symbols work without any constant changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static str,
    idx_bits: u32,
    idx_mask: u64,
    chunks_per_draw: u32,
}

impl Alphabet {
    /// Mixed-case letters, `[a-zA-Z]`.
    pub const LETTERS: Self =
        Self::from_symbols("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ");

    /// Decimal digits, `[0-9]`.
    pub const DIGITS: Self = Self::from_symbols("0123456789");

    /// Create an alphabet from a custom symbol set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabet`] if the symbol set is empty or
    /// contains non-ASCII characters.
    pub fn new(symbols: &'static str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::InvalidAlphabet("must not be empty".to_string()));
        }
        if !symbols.is_ascii() {
            return Err(Error::InvalidAlphabet(
                "symbols must be ASCII".to_string(),
            ));
        }
        Ok(Self::from_symbols(symbols))
    }

    const fn from_symbols(symbols: &'static str) -> Self {
        let idx_bits = index_bits(symbols.len());
        Self {
            symbols,
            idx_bits,
            idx_mask: (1u64 << idx_bits) - 1,
            chunks_per_draw: DRAW_BITS / idx_bits,
        }
    }

    /// Number of symbols in the alphabet.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols. Always `false` for alphabets
    /// built through [`Alphabet::new`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol set as a string slice.
    #[must_use]
    pub const fn symbols(&self) -> &'static str {
        self.symbols
    }

    /// Whether `c` is one of the alphabet's symbols.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(c)
    }
}

/// Bits needed to index `len` symbols.
const fn index_bits(len: usize) -> u32 {
    if len <= 1 { 1 } else { (len - 1).ilog2() + 1 }
}

/// Generate a string of exactly `n` symbols drawn uniformly from `alphabet`.
///
/// The output is filled from the last position to the first. A fresh 63-bit
/// value is drawn from `stream` only when the previous one has no unspent
/// chunks left; rejected chunks are discarded, never reused. `n == 0` yields
/// the empty string without touching the stream.
pub fn generate<R: RandomStream + ?Sized>(stream: &R, alphabet: &Alphabet, n: usize) -> String {
    if n == 0 {
        return String::new();
    }

    let symbols = alphabet.symbols.as_bytes();
    let mut out = vec![0u8; n];
    let mut cache = stream.draw();
    let mut remain = alphabet.chunks_per_draw;
    let mut i = n;

    while i > 0 {
        if remain == 0 {
            cache = stream.draw();
            remain = alphabet.chunks_per_draw;
        }
        let idx = (cache & alphabet.idx_mask) as usize;
        if idx < symbols.len() {
            i -= 1;
            out[i] = symbols[idx];
        }
        cache >>= alphabet.idx_bits;
        remain -= 1;
    }

    // Symbols are validated ASCII, so the buffer is valid UTF-8.
    out.into_iter().map(char::from).collect()
}

/// Generate `n` random mixed-case letters from the shared entropy source.
#[must_use]
pub fn random_letters(n: usize) -> String {
    generate(Entropy::shared(), &Alphabet::LETTERS, n)
}

/// Generate `n` random decimal digits from the shared entropy source.
#[must_use]
pub fn random_digits(n: usize) -> String {
    generate(Entropy::shared(), &Alphabet::DIGITS, n)
}
