//! Fixed-width saturating range.
//!
//! In bounded mode every multi-digit result is clamped into
//! `[-max, max]`, where `max` is `width` copies of the highest digit.
//! Out-of-range values saturate to the nearer bound; they never wrap.

use crate::core::digit::Digit;
use crate::core::ring::Cycle;
use crate::numeral::arith::{Arithmetic, PowerOutcome};
use crate::numeral::Numeral;
use core::cmp::Ordering;

/// The representable range for one cycle and width.
///
/// Recomputed on demand; never stored in the structure.
///
/// # Example
///
/// ```
/// use hasse::{Bounds, Cycle, Numeral};
///
/// let cycle = Cycle::new(8);
/// let bounds = Bounds::new(cycle, 2);
/// assert_eq!(bounds.max().to_integer(cycle), Some(63));
/// assert_eq!(bounds.min().to_integer(cycle), Some(-63));
///
/// let big = Numeral::from_integer(1000, cycle);
/// assert_eq!(bounds.clamp(big), (bounds.max().clone(), true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    arith: Arithmetic,
    width: usize,
    max: Numeral,
    min: Numeral,
}

impl Bounds {
    /// The range of `width`-digit numerals in `cycle`. A width of zero is
    /// treated as one.
    #[must_use]
    pub fn new(cycle: Cycle, width: usize) -> Self {
        let width = width.max(1);
        let max = Numeral::new(false, vec![cycle.max_digit(); width]).normalized();
        let min = max.clone().negated();
        Self {
            arith: Arithmetic::new(cycle),
            width,
            max,
            min,
        }
    }

    /// Digit width of the range.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Largest representable value.
    #[inline]
    #[must_use]
    pub fn max(&self) -> &Numeral {
        &self.max
    }

    /// Smallest representable value.
    #[inline]
    #[must_use]
    pub fn min(&self) -> &Numeral {
        &self.min
    }

    /// True if `value` lies in `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: &Numeral) -> bool {
        self.arith.compare(value, &self.max) != Ordering::Greater
            && self.arith.compare(value, &self.min) != Ordering::Less
    }

    /// Saturates `value` into range; the flag reports whether it moved.
    #[must_use]
    pub fn clamp(&self, value: Numeral) -> (Numeral, bool) {
        if self.arith.compare(&value, &self.max) == Ordering::Greater {
            (self.max.clone(), true)
        } else if self.arith.compare(&value, &self.min) == Ordering::Less {
            (self.min.clone(), true)
        } else {
            (value, false)
        }
    }

    /// [`Self::clamp`], logging a warning when the value saturates.
    #[must_use]
    pub fn enforce(&self, operation: &'static str, value: Numeral) -> Numeral {
        let (clamped, saturated) = self.clamp(value);
        if saturated {
            tracing::warn!(
                operation,
                width = self.width,
                negative = clamped.is_negative(),
                "bounded result saturated"
            );
        }
        clamped
    }

    /// Resolves a width-limited power into range.
    #[must_use]
    pub fn enforce_power(&self, outcome: PowerOutcome) -> Numeral {
        match outcome {
            PowerOutcome::Exact(n) => self.enforce("power", n),
            PowerOutcome::Exceeds { negative } => {
                tracing::warn!(operation = "power", width = self.width, negative, "bounded result saturated");
                if negative {
                    self.min.clone()
                } else {
                    self.max.clone()
                }
            }
        }
    }

    /// The highest digit, repeated across the width.
    #[inline]
    #[must_use]
    pub fn max_digit(&self) -> Digit {
        self.arith.cycle().max_digit()
    }
}
