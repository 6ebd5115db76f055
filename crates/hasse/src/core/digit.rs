//! Digit values and the equivalence classes that display them.
//!
//! Arithmetic never looks at symbols. A [`Digit`] is the position a symbol
//! stands for; the [`EquivalenceClass`] of a digit is the set of symbols
//! that share that position and is only consulted when rendering.

use core::fmt;

/// Placeholder rendered for a position that no symbol currently occupies.
pub const VACANT: char = '?';

/// A position in the cycle, i.e. one digit value.
///
/// # Example
///
/// ```
/// use hasse::Digit;
///
/// let d = Digit::new(3);
/// assert_eq!(d.position(), 3);
/// assert!(Digit::ZERO.is_zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Digit(u32);

impl Digit {
    /// Position 0, the additive identity.
    pub const ZERO: Self = Self(0);

    /// Position 1, the multiplicative identity (in cycles longer than 1).
    pub const ONE: Self = Self(1);

    /// Creates a digit for `position`.
    #[inline]
    #[must_use]
    pub const fn new(position: u32) -> Self {
        Self(position)
    }

    /// The position this digit stands for.
    #[inline]
    #[must_use]
    pub const fn position(self) -> u32 {
        self.0
    }

    /// True for position 0.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

/// The symbols sharing one position.
///
/// `members` is in alphabet order; its first entry is the canonical
/// representative. It is empty for a vacant position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquivalenceClass<'a> {
    /// The digit value all members stand for.
    pub digit: Digit,
    /// Members in alphabet order.
    pub members: &'a [char],
    /// Symbol used when a single character is required.
    pub canonical: Option<char>,
}

impl EquivalenceClass<'_> {
    /// True if more than one symbol shares this position.
    #[inline]
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.members.len() > 1
    }

    /// The canonical symbol, or [`VACANT`].
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> char {
        self.canonical.unwrap_or(VACANT)
    }
}

/// Display form: the lone member, `{x,y,...}` for a shared position, the
/// canonical stand-in when no symbol is mapped there, else [`VACANT`].
impl fmt::Display for EquivalenceClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.members {
            [] => write!(f, "{}", self.symbol()),
            [only] => write!(f, "{only}"),
            members => {
                f.write_str("{")?;
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{m}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_display() {
        let single = EquivalenceClass {
            digit: Digit::new(1),
            members: &['h'],
            canonical: Some('h'),
        };
        assert_eq!(single.to_string(), "h");
        assert!(!single.is_ambiguous());

        let shared = EquivalenceClass {
            digit: Digit::new(7),
            members: &['d', 'f'],
            canonical: Some('d'),
        };
        assert_eq!(shared.to_string(), "{d,f}");
        assert!(shared.is_ambiguous());

        let vacant = EquivalenceClass {
            digit: Digit::new(3),
            members: &[],
            canonical: None,
        };
        assert_eq!(vacant.to_string(), "?");
    }
}
