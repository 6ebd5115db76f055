//! Signed multi-digit numerals in base `cycle_length`.
//!
//! A [`Numeral`] is a sign plus digits, most significant first. Parsing
//! keeps the input exactly as written (leading zero digits, `-` on zero) so
//! the formatter can echo it; arithmetic results are always
//! [normalized](Numeral::normalized).
//!
//! # Example
//!
//! ```
//! use hasse::{Alphabet, Numeral, PositionMap};
//!
//! let map = PositionMap::parse(&Alphabet::new(8).unwrap(), "abcdefgh").unwrap();
//! let n = Numeral::parse(&map, "-bc").unwrap();
//! assert!(n.is_negative());
//! assert_eq!(n.to_integer(map.cycle()), Some(-10)); // -(1·8 + 2)
//! assert_eq!(n.render(&map), "-bc");
//!
//! let padded = Numeral::parse(&map, "aab").unwrap();
//! assert_eq!(padded.normalized().render(&map), "b");
//! ```

pub mod arith;

use crate::core::digit::{Digit, VACANT};
use crate::core::ring::Cycle;
use crate::error::{AlgebraError, Result};
use crate::rule::PositionMap;
use core::fmt;

/// Sign marker of negative numerals.
pub const MINUS: char = '-';

/// A signed digit string, most significant digit first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Numeral {
    negative: bool,
    digits: Vec<Digit>,
}

impl Numeral {
    /// The single-digit zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_digit(Digit::ZERO)
    }

    /// A one-digit numeral.
    #[must_use]
    pub fn from_digit(digit: Digit) -> Self {
        Self {
            negative: false,
            digits: vec![digit],
        }
    }

    /// Builds a numeral from raw parts. No digits means zero.
    #[must_use]
    pub fn new(negative: bool, digits: Vec<Digit>) -> Self {
        if digits.is_empty() {
            return Self {
                negative,
                digits: vec![Digit::ZERO],
            };
        }
        Self { negative, digits }
    }

    /// Digits, most significant first.
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of digits as written.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; a numeral has at least one digit.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True if the sign marker is present.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True if every digit is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d.is_zero())
    }

    /// Strips leading zero digits and drops the sign of zero.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let leading = self
            .digits
            .iter()
            .take_while(|d| d.is_zero())
            .count()
            .min(self.digits.len().saturating_sub(1));
        self.digits.drain(..leading);
        if self.is_zero() {
            self.negative = false;
        }
        self
    }

    /// The absolute value (sign cleared, digits untouched).
    #[must_use]
    pub fn magnitude(&self) -> Self {
        Self {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    /// Sets the sign; zero stays unsigned.
    #[must_use]
    pub fn with_sign(mut self, negative: bool) -> Self {
        self.negative = negative && !self.is_zero();
        self
    }

    /// Flips the sign; zero stays unsigned.
    #[must_use]
    pub fn negated(self) -> Self {
        let negative = !self.negative;
        self.with_sign(negative)
    }

    /// Parses a digit string over `map`.
    ///
    /// Accepts an optional leading `-`, bare symbols, and brace groups
    /// (`{d,f}`) whose members all share one position. [`VACANT`] stands for
    /// the map's vacant position, so rendered results parse back.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::UnknownSymbol`] for a character outside the alphabet.
    /// - [`AlgebraError::MalformedNumber`] for an empty body, a bad group, or
    ///   a [`VACANT`] digit when the map has no vacant position or several.
    pub fn parse(map: &PositionMap, input: &str) -> Result<Self> {
        let (negative, body, base) = match input.strip_prefix(MINUS) {
            Some(rest) => (true, rest, MINUS.len_utf8()),
            None => (false, input, 0),
        };
        if body.is_empty() {
            return Err(malformed(input, "no digits"));
        }

        let mut digits = Vec::with_capacity(body.len());
        let mut chars = body.char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                '{' => {
                    let mut group: Option<Digit> = None;
                    let mut closed = false;
                    for (offset, c) in chars.by_ref() {
                        match c {
                            '}' => {
                                closed = true;
                                break;
                            }
                            ',' => {}
                            c if c.is_whitespace() => {}
                            symbol => {
                                let digit = map.digit_at(symbol, base + offset)?;
                                if group.is_some_and(|g| g != digit) {
                                    return Err(malformed(input, "brace group mixes positions"));
                                }
                                group = Some(digit);
                            }
                        }
                    }
                    if !closed {
                        return Err(malformed(input, "unclosed brace group"));
                    }
                    digits.push(group.ok_or_else(|| malformed(input, "empty brace group"))?);
                }
                '}' => return Err(malformed(input, "unmatched '}'")),
                VACANT => digits.push(vacant_digit(map, input)?),
                symbol => digits.push(map.digit_at(symbol, base + offset)?),
            }
        }
        Ok(Self { negative, digits })
    }

    /// Renders with each digit's canonical symbol (`?` for vacant positions).
    #[must_use]
    pub fn render(&self, map: &PositionMap) -> String {
        let mut out = String::with_capacity(self.digits.len() + 1);
        if self.negative {
            out.push(MINUS);
        }
        out.extend(self.digits.iter().map(|d| map.symbol(*d)));
        out
    }

    /// Writes `value` in base `cycle.length()`.
    ///
    /// A cycle of one position can only express zero.
    #[must_use]
    pub fn from_integer(value: i128, cycle: Cycle) -> Self {
        let base = u128::from(cycle.length());
        let mut rest = value.unsigned_abs();
        if base < 2 || rest == 0 {
            return Self::zero();
        }
        let mut digits = Vec::new();
        while rest > 0 {
            // The remainder is below the base, itself a u32.
            digits.push(Digit::new((rest % base) as u32));
            rest /= base;
        }
        digits.reverse();
        Self::new(value < 0, digits)
    }

    /// Reads the value back as an integer, if it fits in an `i128`.
    #[must_use]
    pub fn to_integer(&self, cycle: Cycle) -> Option<i128> {
        let base = i128::from(cycle.length());
        let magnitude = self.digits.iter().try_fold(0i128, |acc, d| {
            acc.checked_mul(base)?
                .checked_add(i128::from(d.position()))
        })?;
        Some(if self.negative { -magnitude } else { magnitude })
    }
}

impl Default for Numeral {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<u32> = self.digits.iter().map(|d| d.position()).collect();
        write!(
            f,
            "Numeral({}{:?})",
            if self.negative { "-" } else { "" },
            positions
        )
    }
}

/// The digit [`VACANT`] stands for; only defined with exactly one vacancy.
fn vacant_digit(map: &PositionMap, input: &str) -> Result<Digit> {
    let mut vacant = map.vacant_positions();
    match (vacant.next(), vacant.next()) {
        (Some(position), None) => Ok(Digit::new(position)),
        (None, _) => Err(malformed(input, "no vacant position")),
        (Some(_), Some(_)) => Err(malformed(input, "ambiguous vacant position")),
    }
}

fn malformed(input: &str, reason: &'static str) -> AlgebraError {
    AlgebraError::MalformedNumber {
        input: input.to_string(),
        reason,
    }
}
