//! Display notation for numerals.
//!
//! Each digit prints as its equivalence class: the lone member, or
//! `{x,y,...}` when several symbols share the position. The sign is kept and
//! no digit is added or dropped.

use crate::numeral::{Numeral, MINUS};
use crate::rule::PositionMap;
use core::fmt;

/// A numeral paired with the map that names its digits.
///
/// # Example
///
/// ```
/// use hasse::{Alphabet, Digit, Formatted, Numeral, PositionMap};
///
/// let map = PositionMap::parse(&Alphabet::new(8).unwrap(), "bhgecea{d,f}").unwrap();
/// let n = Numeral::new(true, vec![Digit::new(7), Digit::new(1)]);
/// assert_eq!(Formatted::new(&map, &n).to_string(), "-{d,f}h");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    map: &'a PositionMap,
    numeral: &'a Numeral,
}

impl<'a> Formatted<'a> {
    /// Wraps `numeral` for display over `map`.
    #[must_use]
    pub fn new(map: &'a PositionMap, numeral: &'a Numeral) -> Self {
        Self { map, numeral }
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numeral.is_negative() {
            write!(f, "{MINUS}")?;
        }
        for digit in self.numeral.digits() {
            write!(f, "{}", self.map.class(*digit))?;
        }
        Ok(())
    }
}

/// Formats `numeral` in display notation.
#[must_use]
pub fn format(map: &PositionMap, numeral: &Numeral) -> String {
    Formatted::new(map, numeral).to_string()
}
