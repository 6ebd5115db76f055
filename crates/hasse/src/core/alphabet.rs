//! The fixed symbol alphabet of a structure.
//!
//! An alphabet of size `n` is the first `n` lower-case letters, in order.
//! Alphabet order is the tie-breaker everywhere a deterministic choice
//! among symbols is needed (canonical representatives, brace groups).

use crate::error::{AlgebraError, Result};

/// First symbol of every alphabet.
pub const FIRST_SYMBOL: char = 'a';

/// Largest supported alphabet (`a..=z`).
pub const MAX_SYMBOLS: usize = 26;

/// An ordered, immutable set of single-character symbols.
///
/// # Example
///
/// ```
/// use hasse::Alphabet;
///
/// let alphabet = Alphabet::new(8).unwrap();
/// assert_eq!(alphabet.len(), 8);
/// assert_eq!(alphabet.symbols(), &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']);
/// assert_eq!(alphabet.index_of('c'), Some(2));
/// assert!(!alphabet.contains('i'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Creates the alphabet `a..` of `bits` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidAlphabetSize`] unless `1 <= bits <= 26`.
    pub fn new(bits: usize) -> Result<Self> {
        if bits == 0 || bits > MAX_SYMBOLS {
            return Err(AlgebraError::InvalidAlphabetSize {
                bits,
                max: MAX_SYMBOLS,
            });
        }
        let symbols = (FIRST_SYMBOL..='z').take(bits).collect();
        Ok(Self { symbols })
    }

    /// Number of symbols.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet has at least one symbol.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in alphabet order.
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Index of `symbol` in alphabet order, if it belongs to the alphabet.
    #[inline]
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        let offset = (symbol as u32).checked_sub(FIRST_SYMBOL as u32)? as usize;
        (offset < self.symbols.len()).then_some(offset)
    }

    /// True if `symbol` belongs to the alphabet.
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Symbol at `index`, if in range.
    #[inline]
    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }
}
