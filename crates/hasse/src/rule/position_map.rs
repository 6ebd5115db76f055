//! Symbol → position map built from a +1 rule.

use crate::core::alphabet::Alphabet;
use crate::core::digit::{Digit, EquivalenceClass, VACANT};
use crate::core::ring::Cycle;
use crate::error::{AlgebraError, Result};

/// The parsed +1 rule: every symbol's position and, inversely, every
/// position's members.
///
/// The inverse table is precomputed so that stepping to a position and
/// picking its canonical representative is O(1).
///
/// # Example
///
/// ```
/// use hasse::{Alphabet, Digit, PositionMap};
///
/// let alphabet = Alphabet::new(8).unwrap();
/// let map = PositionMap::parse(&alphabet, "bhgecea{d,f}").unwrap();
///
/// assert_eq!(map.cycle_length(), 8);
/// assert_eq!(map.position('b'), Some(0));
/// assert_eq!(map.position('e'), Some(5)); // last occurrence wins
/// assert_eq!(map.members(7), &['d', 'f']);
/// assert_eq!(map.class(Digit::new(7)).to_string(), "{d,f}");
/// assert_eq!(map.successor('a').unwrap(), 'd');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMap {
    alphabet: Alphabet,
    /// Explicit position per alphabet index; `None` = not named by the rule.
    positions: Vec<Option<u32>>,
    /// Members per position, alphabet order.
    classes: Vec<Vec<char>>,
    /// Representative per position.
    canonical: Vec<Option<char>>,
    cycle: Cycle,
}

impl PositionMap {
    /// Parses `rule` over `alphabet`.
    ///
    /// # Errors
    ///
    /// See [`crate::rule::parse`].
    pub fn parse(alphabet: &Alphabet, rule: &str) -> Result<Self> {
        super::parse(alphabet, rule)
    }

    /// Builds the inverse tables from per-symbol positions.
    pub(crate) fn from_positions(alphabet: Alphabet, positions: Vec<Option<u32>>, length: u32) -> Self {
        let cycle = Cycle::new(length);
        let mut classes = vec![Vec::new(); cycle.length() as usize];
        for (symbol, position) in alphabet.symbols().iter().zip(&positions) {
            if let Some(class) = position.and_then(|p| classes.get_mut(p as usize)) {
                class.push(*symbol);
            }
        }

        let first_unmapped = alphabet
            .symbols()
            .iter()
            .zip(&positions)
            .find(|(_, p)| p.is_none())
            .map(|(s, _)| *s);
        let canonical = classes
            .iter()
            .enumerate()
            .map(|(position, members)| match members.first() {
                Some(first) => Some(*first),
                None if position == 0 => first_unmapped,
                None => None,
            })
            .collect();

        Self {
            alphabet,
            positions,
            classes,
            canonical,
            cycle,
        }
    }

    /// The alphabet this map covers.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The cycle of positions, for single-element arithmetic.
    #[inline]
    #[must_use]
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Number of positions; the base of multi-digit numerals.
    #[inline]
    #[must_use]
    pub fn cycle_length(&self) -> u32 {
        self.cycle.length()
    }

    /// Position the rule assigned to `symbol`, or `None` when the rule never
    /// named it (or it is not in the alphabet).
    #[inline]
    #[must_use]
    pub fn position(&self, symbol: char) -> Option<u32> {
        self.alphabet
            .index_of(symbol)
            .and_then(|i| self.positions.get(i).copied().flatten())
    }

    /// Digit value of `symbol`. Symbols the rule never named are zero.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] if `symbol` is outside the alphabet.
    pub fn digit(&self, symbol: char) -> Result<Digit> {
        self.digit_at(symbol, 0)
    }

    /// As [`Self::digit`], reporting `offset` on error.
    pub(crate) fn digit_at(&self, symbol: char, offset: usize) -> Result<Digit> {
        let index = self
            .alphabet
            .index_of(symbol)
            .ok_or(AlgebraError::UnknownSymbol { symbol, offset })?;
        Ok(Digit::new(
            self.positions.get(index).copied().flatten().unwrap_or(0),
        ))
    }

    /// Symbols mapped to `position`, alphabet order. Empty for vacant or
    /// out-of-range positions.
    #[inline]
    #[must_use]
    pub fn members(&self, position: u32) -> &[char] {
        self.classes
            .get(position as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The equivalence class of `digit`.
    #[must_use]
    pub fn class(&self, digit: Digit) -> EquivalenceClass<'_> {
        EquivalenceClass {
            digit,
            members: self.members(digit.position()),
            canonical: self.canonical(digit),
        }
    }

    /// Canonical symbol of `digit`: first member in alphabet order. Position
    /// 0 falls back to the first unmapped symbol. `None` if vacant.
    #[inline]
    #[must_use]
    pub fn canonical(&self, digit: Digit) -> Option<char> {
        self.canonical.get(digit.position() as usize).copied().flatten()
    }

    /// Canonical symbol of `digit`, or [`VACANT`].
    #[inline]
    #[must_use]
    pub fn symbol(&self, digit: Digit) -> char {
        self.canonical(digit).unwrap_or(VACANT)
    }

    /// Positions inside the cycle that no symbol occupies.
    pub fn vacant_positions(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.cycle.length()).filter(|p| self.canonical(Digit::new(*p)).is_none())
    }

    /// Symbols the rule never named, alphabet order.
    pub fn unmapped(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet
            .symbols()
            .iter()
            .zip(&self.positions)
            .filter(|(_, p)| p.is_none())
            .map(|(s, _)| *s)
    }

    /// One +1 step from `symbol`, as the canonical symbol of the next position.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] if `symbol` is outside the alphabet.
    pub fn successor(&self, symbol: char) -> Result<char> {
        let digit = self.digit(symbol)?;
        Ok(self.symbol(self.cycle.successor(digit)))
    }
}
