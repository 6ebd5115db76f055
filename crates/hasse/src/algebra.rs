//! Immutable snapshot of a configured structure.
//!
//! An [`Algebra`] is what one computation runs against: the position map,
//! the bounded flag and the width, frozen. Every request flows
//! parse → single-element core → multi-digit engine → bounds → formatter,
//! and inputs are fully parsed before any arithmetic starts.

use crate::bounded::Bounds;
use crate::core::digit::Digit;
use crate::core::ring::Cycle;
use crate::error::{AlgebraError, Result};
use crate::format::format;
use crate::numeral::arith::Arithmetic;
use crate::numeral::Numeral;
use crate::rule::PositionMap;
use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

/// Multi-digit operations selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/` (quotient only through [`Algebra::apply`])
    Divide,
    /// `^`
    Power,
    /// `%`
    Modulo,
    /// `gcd`
    Gcd,
    /// `lcm`
    Lcm,
}

impl Op {
    /// Every operation, in display order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Modulo,
        Self::Gcd,
        Self::Lcm,
    ];

    /// Operator token.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Modulo => "%",
            Self::Gcd => "gcd",
            Self::Lcm => "lcm",
        }
    }

    /// Lower-case name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Modulo => "mod",
            Self::Gcd => "gcd",
            Self::Lcm => "lcm",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Op {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s || op.name() == s)
            .ok_or(AlgebraError::UnsupportedOperation("unknown operator"))
    }
}

/// A frozen configuration plus every operation over it.
///
/// Cloning is cheap: the position map is shared.
///
/// # Example
///
/// ```
/// use hasse::{Algebra, Alphabet, PositionMap};
///
/// let map = PositionMap::parse(&Alphabet::new(8).unwrap(), "bhgecea{d,f}").unwrap();
/// let algebra = Algebra::new(map);
///
/// assert_eq!(algebra.add("hg", "g").unwrap(), "hc");
/// assert_eq!(algebra.add_single('b', 'b').unwrap(), 'b');
/// assert_eq!(algebra.format("d").unwrap(), "{d,f}");
///
/// let bounded = algebra.with_bounds(true, 2);
/// assert_eq!(bounded.multiply("dd", "dd").unwrap(), "{d,f}{d,f}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Algebra {
    map: Arc<PositionMap>,
    bounded: bool,
    width: usize,
}

impl Algebra {
    /// Unbounded algebra over `map`; the bounded width defaults to the
    /// alphabet size.
    #[must_use]
    pub fn new(map: PositionMap) -> Self {
        let width = map.alphabet().len();
        Self::from_shared(Arc::new(map), false, width)
    }

    pub(crate) fn from_shared(map: Arc<PositionMap>, bounded: bool, width: usize) -> Self {
        Self { map, bounded, width }
    }

    pub(crate) fn shared_map(&self) -> &Arc<PositionMap> {
        &self.map
    }

    /// The same map with a different bounded setting.
    #[must_use]
    pub fn with_bounds(mut self, bounded: bool, width: usize) -> Self {
        self.bounded = bounded;
        self.width = width;
        self
    }

    /// The position map.
    #[inline]
    #[must_use]
    pub fn map(&self) -> &PositionMap {
        &self.map
    }

    /// The cycle of positions.
    #[inline]
    #[must_use]
    pub fn cycle(&self) -> Cycle {
        self.map.cycle()
    }

    /// Whether results saturate.
    #[inline]
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.bounded
    }

    /// Digit width of the bounded range.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The bounded range at the configured width.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.cycle(), self.width)
    }

    /// The multi-digit engine for this cycle.
    #[inline]
    #[must_use]
    pub fn arithmetic(&self) -> Arithmetic {
        Arithmetic::new(self.cycle())
    }

    // ========================================================================
    // Typed multi-digit operations
    // ========================================================================

    /// Parses a digit string.
    ///
    /// # Errors
    ///
    /// See [`Numeral::parse`].
    pub fn parse(&self, input: &str) -> Result<Numeral> {
        Numeral::parse(&self.map, input)
    }

    /// Display notation of `numeral`.
    #[must_use]
    pub fn render(&self, numeral: &Numeral) -> String {
        format(&self.map, numeral)
    }

    /// Applies `op` and, in bounded mode, saturates the result.
    /// [`Op::Divide`] yields the quotient; see [`Self::divmod`].
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::DivisionByZero`] for division, `mod` or `lcm` by zero.
    /// - [`AlgebraError::UnsupportedOperation`] for a negative exponent, or an
    ///   unbounded power too large to compute.
    pub fn apply(&self, op: Op, a: &Numeral, b: &Numeral) -> Result<Numeral> {
        let arith = self.arithmetic();
        let raw = match op {
            Op::Add => arith.add(a, b),
            Op::Subtract => arith.sub(a, b),
            Op::Multiply => arith.mul(a, b),
            Op::Divide => arith.divmod(a, b)?.0,
            Op::Modulo => arith.modulo(a, b)?,
            Op::Gcd => arith.gcd(a, b),
            Op::Lcm => arith.lcm(a, b)?,
            Op::Power if self.bounded => {
                let bounds = self.bounds();
                let outcome = arith.pow_limited(a, b, bounds.width())?;
                let result = bounds.enforce_power(outcome);
                trace(op, &result);
                return Ok(result);
            }
            Op::Power => arith.pow(a, b)?,
        };
        let result = self.enforce(op, raw);
        trace(op, &result);
        Ok(result)
    }

    /// Truncating division with both parts saturated independently.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] if `b` is zero.
    pub fn divmod(&self, a: &Numeral, b: &Numeral) -> Result<(Numeral, Numeral)> {
        let (q, r) = self.arithmetic().divmod(a, b)?;
        let (q, r) = (self.enforce(Op::Divide, q), self.enforce(Op::Modulo, r));
        trace(Op::Divide, &q);
        Ok((q, r))
    }

    fn enforce(&self, op: Op, value: Numeral) -> Numeral {
        if self.bounded {
            self.bounds().enforce(op.name(), value)
        } else {
            value
        }
    }

    /// Parses both operands, applies `op`, and formats the result.
    ///
    /// # Errors
    ///
    /// Parse errors, then those of [`Self::apply`].
    pub fn evaluate(&self, op: Op, a: &str, b: &str) -> Result<String> {
        let (a, b) = (self.parse(a)?, self.parse(b)?);
        self.apply(op, &a, &b).map(|n| self.render(&n))
    }

    // ========================================================================
    // String operations
    // ========================================================================

    /// `a + b`.
    ///
    /// # Errors
    ///
    /// Parse errors only.
    pub fn add(&self, a: &str, b: &str) -> Result<String> {
        self.evaluate(Op::Add, a, b)
    }

    /// `a - b`.
    ///
    /// # Errors
    ///
    /// Parse errors only.
    pub fn subtract(&self, a: &str, b: &str) -> Result<String> {
        self.evaluate(Op::Subtract, a, b)
    }

    /// `a * b`.
    ///
    /// # Errors
    ///
    /// Parse errors only.
    pub fn multiply(&self, a: &str, b: &str) -> Result<String> {
        self.evaluate(Op::Multiply, a, b)
    }

    /// `(a / b, a % b)`.
    ///
    /// # Errors
    ///
    /// Parse errors, or [`AlgebraError::DivisionByZero`].
    pub fn divide(&self, a: &str, b: &str) -> Result<(String, String)> {
        let (a, b) = (self.parse(a)?, self.parse(b)?);
        let (q, r) = self.divmod(&a, &b)?;
        Ok((self.render(&q), self.render(&r)))
    }

    /// `base ^ exp`.
    ///
    /// # Errors
    ///
    /// Parse errors, or [`AlgebraError::UnsupportedOperation`].
    pub fn power(&self, base: &str, exp: &str) -> Result<String> {
        self.evaluate(Op::Power, base, exp)
    }

    /// `a mod b`, signed like `a`.
    ///
    /// # Errors
    ///
    /// Parse errors, or [`AlgebraError::DivisionByZero`].
    pub fn modulo(&self, a: &str, b: &str) -> Result<String> {
        self.evaluate(Op::Modulo, a, b)
    }

    /// Non-negative greatest common divisor.
    ///
    /// # Errors
    ///
    /// Parse errors only.
    pub fn gcd(&self, a: &str, b: &str) -> Result<String> {
        self.evaluate(Op::Gcd, a, b)
    }

    /// Least common multiple.
    ///
    /// # Errors
    ///
    /// Parse errors, or [`AlgebraError::DivisionByZero`] for `lcm(0, 0)`.
    pub fn lcm(&self, a: &str, b: &str) -> Result<String> {
        self.evaluate(Op::Lcm, a, b)
    }

    /// Re-expands a digit string into display notation, digit for digit.
    ///
    /// # Errors
    ///
    /// Parse errors only.
    pub fn format(&self, digits: &str) -> Result<String> {
        self.parse(digits).map(|n| self.render(&n))
    }

    /// Largest value of the bounded range, formatted.
    #[must_use]
    pub fn max_value(&self) -> String {
        self.render(self.bounds().max())
    }

    /// Smallest value of the bounded range, formatted.
    #[must_use]
    pub fn min_value(&self) -> String {
        self.render(self.bounds().min())
    }

    // ========================================================================
    // Single-element operations
    // ========================================================================

    // Results are canonical symbols. A position that no symbol occupies comes
    // back as VACANT, which is not an alphabet symbol.

    fn digits(&self, a: char, b: char) -> Result<(Digit, Digit)> {
        Ok((self.map.digit(a)?, self.map.digit(b)?))
    }

    /// `a + b` within the cycle.
    ///
    /// Returns [`VACANT`](crate::VACANT) when the result lands on a position no symbol
    /// occupies.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn add_single(&self, a: char, b: char) -> Result<char> {
        let (a, b) = self.digits(a, b)?;
        Ok(self.map.symbol(self.cycle().add(a, b).0))
    }

    /// `a - b` within the cycle.
    ///
    /// Returns [`VACANT`](crate::VACANT) when the result lands on a position no symbol
    /// occupies.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn subtract_single(&self, a: char, b: char) -> Result<char> {
        let (a, b) = self.digits(a, b)?;
        Ok(self.map.symbol(self.cycle().sub(a, b).0))
    }

    /// `a * b` within the cycle.
    ///
    /// Returns [`VACANT`](crate::VACANT) when the result lands on a position no symbol
    /// occupies.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn multiply_single(&self, a: char, b: char) -> Result<char> {
        let (a, b) = self.digits(a, b)?;
        Ok(self.map.symbol(self.cycle().mul(a, b).0))
    }

    /// `a · b⁻¹` within the cycle.
    ///
    /// Returns [`VACANT`](crate::VACANT) when the result lands on a position no symbol
    /// occupies.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::NotInvertible`] if `b` shares a factor with the
    ///   cycle length.
    /// - [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn divide_single(&self, a: char, b: char) -> Result<char> {
        let (da, db) = self.digits(a, b)?;
        self.cycle()
            .div(da, db)
            .map(|d| self.map.symbol(d))
            .ok_or(AlgebraError::NotInvertible {
                divisor: b,
                cycle_length: self.map.cycle_length(),
            })
    }

    /// `base ^ exp` within the cycle, reading `exp` as its position.
    ///
    /// Returns [`VACANT`](crate::VACANT) when the result lands on a position no symbol
    /// occupies.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn power_single(&self, base: char, exp: char) -> Result<char> {
        let (base, exp) = self.digits(base, exp)?;
        Ok(self.map.symbol(self.cycle().pow(base, exp)))
    }

    /// Greatest common divisor within the cycle; see [`Cycle::gcd`].
    ///
    /// Returns [`VACANT`](crate::VACANT) when the result lands on a position no symbol
    /// occupies.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn gcd_single(&self, a: char, b: char) -> Result<char> {
        let (a, b) = self.digits(a, b)?;
        Ok(self.map.symbol(self.cycle().gcd(a, b)))
    }

    /// Least common multiple within the cycle; see [`Cycle::lcm`].
    ///
    /// Returns [`VACANT`](crate::VACANT) when the result lands on a position no symbol
    /// occupies.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn lcm_single(&self, a: char, b: char) -> Result<char> {
        let (a, b) = self.digits(a, b)?;
        Ok(self.map.symbol(self.cycle().lcm(a, b)))
    }

    /// Number of wraps past the top of the cycle in `a + b`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn addition_carry(&self, a: char, b: char) -> Result<u32> {
        let (a, b) = self.digits(a, b)?;
        Ok(self.cycle().add(a, b).1)
    }

    /// Whether `a - b` wrapped below zero.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn subtraction_borrow(&self, a: char, b: char) -> Result<bool> {
        let (a, b) = self.digits(a, b)?;
        Ok(self.cycle().sub(a, b).1)
    }

    /// Carry of `a * b`: wraps accumulated over the repeated additions.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn multiplication_carry(&self, a: char, b: char) -> Result<u32> {
        let (a, b) = self.digits(a, b)?;
        Ok(self.cycle().mul(a, b).1)
    }
}

fn trace(op: Op, result: &Numeral) {
    tracing::trace!(
        operation = op.name(),
        digits = result.len(),
        negative = result.is_negative(),
        "multi-digit operation"
    );
}
