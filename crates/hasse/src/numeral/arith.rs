//! Multi-digit arithmetic built on single-element carries.
//!
//! Numerals are aligned at their least significant digit and processed right
//! to left. Every digit-level step goes through [`Cycle`], so carries come
//! from wrapping around the cycle rather than from integer overflow.
//!
//! # Algorithms
//!
//! | Operation | Method | Digit primitive |
//! |-----------|--------|-----------------|
//! | add | ripple carry | `Cycle::add` |
//! | sub | ripple borrow | `Cycle::sub` |
//! | mul | long multiplication, shifted partial products | `Cycle::mul` + `Cycle::add` |
//! | divmod | long division, trial subtraction per digit (at most `L - 1`) | `sub` |
//! | pow | square-and-multiply, exponent halved digit-wise | `mul` |
//! | gcd | Euclid on remainders | `divmod` |
//! | lcm | `|a·b| / gcd(a, b)` | `mul`, `divmod` |
//!
//! Results are normalized: no leading zero digits, and zero has no sign.
//! Division truncates toward zero and the remainder takes the dividend's sign.
//!
//! # Example
//!
//! ```
//! use hasse::{Arithmetic, Cycle, Numeral};
//!
//! let cycle = Cycle::new(10);
//! let arith = Arithmetic::new(cycle);
//! let n = |v| Numeral::from_integer(v, cycle);
//!
//! assert_eq!(arith.add(&n(95), &n(7)), n(102));
//! assert_eq!(arith.sub(&n(7), &n(95)), n(-88));
//! assert_eq!(arith.mul(&n(-12), &n(34)), n(-408));
//! assert_eq!(arith.divmod(&n(-47), &n(5)).unwrap(), (n(-9), n(-2)));
//! assert_eq!(arith.pow(&n(-3), &n(5)).unwrap(), n(-243));
//! assert_eq!(arith.gcd(&n(84), &n(-36)), n(12));
//! assert_eq!(arith.lcm(&n(4), &n(6)).unwrap(), n(12));
//! ```

use super::Numeral;
use crate::core::digit::Digit;
use crate::core::ring::Cycle;
use crate::error::{AlgebraError, Result};
use core::cmp::Ordering;

/// Largest power result, in digits, computed outside bounded mode.
pub const MAX_POWER_DIGITS: usize = 4096;

/// Result of a size-limited exponentiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerOutcome {
    /// The power fits in the limit.
    Exact(Numeral),
    /// The magnitude needs more digits than allowed; `negative` is the sign
    /// the exact result would carry.
    Exceeds {
        /// Sign of the true result.
        negative: bool,
    },
}

/// Multi-digit arithmetic over one cycle.
///
/// Stateless apart from the cycle; cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    cycle: Cycle,
}

impl Arithmetic {
    /// Arithmetic in base `cycle.length()`.
    #[inline]
    #[must_use]
    pub const fn new(cycle: Cycle) -> Self {
        Self { cycle }
    }

    /// The underlying cycle.
    #[inline]
    #[must_use]
    pub const fn cycle(&self) -> Cycle {
        self.cycle
    }

    // ========================================================================
    // Signed operations
    // ========================================================================

    /// Signed comparison by value.
    #[must_use]
    pub fn compare(&self, a: &Numeral, b: &Numeral) -> Ordering {
        let (a_neg, b_neg) = (a.is_negative() && !a.is_zero(), b.is_negative() && !b.is_zero());
        match (a_neg, b_neg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(a.digits(), b.digits()),
            (true, true) => cmp_magnitude(b.digits(), a.digits()),
        }
    }

    /// `a + b`.
    #[must_use]
    pub fn add(&self, a: &Numeral, b: &Numeral) -> Numeral {
        match (a.is_negative(), b.is_negative()) {
            (false, false) => Numeral::new(false, self.add_magnitudes(a.digits(), b.digits())),
            (true, true) => Numeral::new(true, self.add_magnitudes(a.digits(), b.digits())),
            (false, true) => self.sub_unsigned(a.digits(), b.digits()),
            (true, false) => self.sub_unsigned(b.digits(), a.digits()),
        }
        .normalized()
    }

    /// `a - b`.
    #[must_use]
    pub fn sub(&self, a: &Numeral, b: &Numeral) -> Numeral {
        match (a.is_negative(), b.is_negative()) {
            (false, true) => Numeral::new(false, self.add_magnitudes(a.digits(), b.digits())),
            (true, false) => Numeral::new(true, self.add_magnitudes(a.digits(), b.digits())),
            (false, false) => self.sub_unsigned(a.digits(), b.digits()),
            (true, true) => self.sub_unsigned(b.digits(), a.digits()),
        }
        .normalized()
    }

    /// `a * b`; the sign is the XOR of the operand signs.
    #[must_use]
    pub fn mul(&self, a: &Numeral, b: &Numeral) -> Numeral {
        let digits = self.mul_magnitudes(a.digits(), b.digits());
        Numeral::new(a.is_negative() != b.is_negative(), digits).normalized()
    }

    /// Truncating division: `(quotient, remainder)` with
    /// `a = quotient·b + remainder` and the remainder signed like `a`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] if `b` is zero.
    pub fn divmod(&self, a: &Numeral, b: &Numeral) -> Result<(Numeral, Numeral)> {
        if b.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let (q, r) = self.divmod_magnitudes(a.digits(), b.digits());
        Ok((
            Numeral::new(a.is_negative() != b.is_negative(), q).normalized(),
            Numeral::new(a.is_negative(), r).normalized(),
        ))
    }

    /// Remainder of [`Self::divmod`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] if `b` is zero.
    pub fn modulo(&self, a: &Numeral, b: &Numeral) -> Result<Numeral> {
        self.divmod(a, b).map(|(_, r)| r)
    }

    /// `base ^ exp`, refusing results longer than [`MAX_POWER_DIGITS`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnsupportedOperation`] for a negative exponent or an
    /// oversized result.
    pub fn pow(&self, base: &Numeral, exp: &Numeral) -> Result<Numeral> {
        match self.pow_limited(base, exp, MAX_POWER_DIGITS)? {
            PowerOutcome::Exact(n) => Ok(n),
            PowerOutcome::Exceeds { .. } => Err(AlgebraError::UnsupportedOperation(
                "power result exceeds the digit limit",
            )),
        }
    }

    /// `base ^ exp`, stopping as soon as the magnitude is known to need more
    /// than `max_digits` digits.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnsupportedOperation`] for a negative exponent.
    pub fn pow_limited(&self, base: &Numeral, exp: &Numeral, max_digits: usize) -> Result<PowerOutcome> {
        let exp = exp.clone().normalized();
        if exp.is_negative() {
            return Err(AlgebraError::UnsupportedOperation("negative exponent"));
        }
        let (_, odd) = self.halve(exp.digits());
        let negative = base.is_negative() && odd;

        let mut result = Numeral::from_digit(self.cycle.one());
        let mut square = base.magnitude().normalized();
        let mut rest = exp;
        while !rest.is_zero() {
            let (half, bit) = self.halve(rest.digits());
            if bit {
                result = self.mul(&result, &square);
                if result.len() > max_digits {
                    return Ok(PowerOutcome::Exceeds { negative });
                }
            }
            rest = half;
            if !rest.is_zero() {
                square = self.mul(&square, &square);
                // The final result is at least this square in magnitude.
                if square.len() > max_digits {
                    return Ok(PowerOutcome::Exceeds { negative });
                }
            }
        }
        Ok(PowerOutcome::Exact(result.with_sign(negative)))
    }

    /// Greatest common divisor by Euclid; never negative, `gcd(0, 0) = 0`.
    #[must_use]
    pub fn gcd(&self, a: &Numeral, b: &Numeral) -> Numeral {
        let mut x = trim(a.digits()).to_vec();
        let mut y = trim(b.digits()).to_vec();
        while !is_zero(&y) {
            let (_, r) = self.divmod_magnitudes(&x, &y);
            x = y;
            y = r;
        }
        Numeral::new(false, x).normalized()
    }

    /// Least common multiple, `|a·b| / gcd(a, b)`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] when both operands are zero.
    pub fn lcm(&self, a: &Numeral, b: &Numeral) -> Result<Numeral> {
        let g = self.gcd(a, b);
        if g.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let product = self.mul(&a.magnitude(), &b.magnitude());
        self.divmod(&product, &g).map(|(q, _)| q)
    }

    // ========================================================================
    // Magnitude kernels (most significant digit first)
    // ========================================================================

    /// Ripple-carry addition.
    fn add_magnitudes(&self, a: &[Digit], b: &[Digit]) -> Vec<Digit> {
        let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
        let (mut ia, mut ib) = (a.iter().rev(), b.iter().rev());
        let mut carry = 0u32;
        loop {
            let (da, db) = (ia.next(), ib.next());
            if da.is_none() && db.is_none() && carry == 0 {
                break;
            }
            let da = da.copied().unwrap_or(Digit::ZERO);
            let db = db.copied().unwrap_or(Digit::ZERO);
            let (sum, c1) = self.cycle.add(da, db);
            let (sum, c2) = self.cycle.add(sum, self.cycle.digit(carry));
            carry = c1 + c2;
            out.push(sum);
        }
        out.reverse();
        out
    }

    /// Ripple-borrow subtraction; requires `|a| >= |b|`.
    fn sub_magnitudes(&self, a: &[Digit], b: &[Digit]) -> Vec<Digit> {
        let mut out = Vec::with_capacity(a.len());
        let mut ib = b.iter().rev();
        let mut borrow = false;
        for &da in a.iter().rev() {
            let db = ib.next().copied().unwrap_or(Digit::ZERO);
            let (diff, b1) = self.cycle.sub(da, db);
            let (diff, b2) = if borrow {
                self.cycle.sub(diff, self.cycle.one())
            } else {
                (diff, false)
            };
            borrow = b1 || b2;
            out.push(diff);
        }
        out.reverse();
        trim(&out).to_vec()
    }

    /// `|a| - |b|` with the sign of whichever magnitude is larger.
    fn sub_unsigned(&self, a: &[Digit], b: &[Digit]) -> Numeral {
        match cmp_magnitude(a, b) {
            Ordering::Less => Numeral::new(true, self.sub_magnitudes(b, a)),
            _ => Numeral::new(false, self.sub_magnitudes(a, b)),
        }
    }

    /// One row of long multiplication: `a · m`.
    fn mul_digit(&self, a: &[Digit], m: Digit) -> Vec<Digit> {
        let mut out = Vec::with_capacity(a.len() + 1);
        let mut carry = 0u32;
        for &da in a.iter().rev() {
            let (product, c1) = self.cycle.mul(da, m);
            let (sum, c2) = self.cycle.add(product, self.cycle.digit(carry));
            carry = c1 + c2;
            out.push(sum);
        }
        // carry < L in every cycle longer than one; a cycle of one never carries.
        while carry > 0 && self.cycle.length() > 1 {
            out.push(self.cycle.digit(carry));
            carry /= self.cycle.length();
        }
        out.reverse();
        out
    }

    /// Long multiplication: shifted rows summed with ripple addition.
    fn mul_magnitudes(&self, a: &[Digit], b: &[Digit]) -> Vec<Digit> {
        let a = trim(a);
        let mut acc = vec![Digit::ZERO];
        for (shift, &db) in b.iter().rev().enumerate() {
            if db.is_zero() {
                continue;
            }
            let mut row = self.mul_digit(a, db);
            row.resize(row.len() + shift, Digit::ZERO);
            acc = self.add_magnitudes(&acc, &row);
        }
        acc
    }

    /// Long division of magnitudes; `b` must be non-zero.
    fn divmod_magnitudes(&self, a: &[Digit], b: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
        let b = trim(b);
        let mut quotient = Vec::with_capacity(a.len());
        let mut rem: Vec<Digit> = Vec::with_capacity(b.len() + 1);
        for &d in a {
            rem.push(d);
            let mut q = 0u32;
            while cmp_magnitude(&rem, b) != Ordering::Less {
                rem = self.sub_magnitudes(&rem, b);
                q += 1;
            }
            quotient.push(Digit::new(q));
        }
        if rem.is_empty() {
            rem.push(Digit::ZERO);
        }
        (quotient, trim(&rem).to_vec())
    }

    /// Halves a magnitude digit by digit; returns the quotient and whether
    /// the value was odd.
    fn halve(&self, a: &[Digit]) -> (Numeral, bool) {
        let base = self.cycle.length();
        let mut rem = 0u32;
        let mut digits = Vec::with_capacity(a.len());
        for &d in a {
            let current = rem * base + d.position();
            digits.push(Digit::new(current / 2));
            rem = current % 2;
        }
        (Numeral::new(false, digits).normalized(), rem == 1)
    }
}

/// Drops leading zero digits, keeping at least one digit.
fn trim(digits: &[Digit]) -> &[Digit] {
    let leading = digits
        .iter()
        .take_while(|d| d.is_zero())
        .count()
        .min(digits.len().saturating_sub(1));
    &digits[leading..]
}

fn is_zero(digits: &[Digit]) -> bool {
    digits.iter().all(|d| d.is_zero())
}

/// Compares magnitudes: length first, then the leftmost differing digit.
fn cmp_magnitude(a: &[Digit], b: &[Digit]) -> Ordering {
    let (a, b) = (trim(a), trim(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(length: u32) -> (Arithmetic, impl Fn(i128) -> Numeral) {
        let cycle = Cycle::new(length);
        (Arithmetic::new(cycle), move |v| Numeral::from_integer(v, cycle))
    }

    #[test]
    fn test_add_carries_into_new_digit() {
        let (arith, n) = setup(8);
        let sum = arith.add(&n(63), &n(1));
        assert_eq!(sum.digits(), &[Digit::new(1), Digit::ZERO, Digit::ZERO]);
        assert_eq!(sum, n(64));
    }

    #[test]
    fn test_add_sign_cases() {
        let (arith, n) = setup(8);
        assert_eq!(arith.add(&n(-5), &n(-9)), n(-14));
        assert_eq!(arith.add(&n(-5), &n(9)), n(4));
        assert_eq!(arith.add(&n(5), &n(-9)), n(-4));
        assert_eq!(arith.add(&n(9), &n(-9)), n(0));
    }

    #[test]
    fn test_sub_sign_cases() {
        let (arith, n) = setup(8);
        assert_eq!(arith.sub(&n(100), &n(37)), n(63));
        assert_eq!(arith.sub(&n(37), &n(100)), n(-63));
        assert_eq!(arith.sub(&n(-5), &n(9)), n(-14));
        assert_eq!(arith.sub(&n(5), &n(-9)), n(14));
        assert_eq!(arith.sub(&n(-5), &n(-9)), n(4));
        assert_eq!(arith.sub(&n(64), &n(1)), n(63));
    }

    #[test]
    fn test_sub_self_is_zero() {
        let (arith, n) = setup(7);
        for v in [-300, -1, 0, 1, 48, 343, 9999] {
            let x = n(v);
            assert_eq!(arith.sub(&x, &x), Numeral::zero());
        }
    }

    #[test]
    fn test_leading_zero_inputs() {
        let (arith, n) = setup(8);
        let padded = Numeral::new(false, vec![Digit::ZERO, Digit::ZERO, Digit::new(5)]);
        assert_eq!(arith.add(&padded, &n(0)), n(5));
        assert_eq!(arith.sub(&n(4), &padded), n(-1));
        assert_eq!(arith.compare(&padded, &n(5)), Ordering::Equal);
    }

    #[test]
    fn test_mul_matches_integers() {
        for length in [2, 3, 7, 8, 10, 26] {
            let (arith, n) = setup(length);
            for (a, b) in [(0, 5), (1, 77), (25, 25), (-13, 999), (-64, -64), (4095, 4097)] {
                assert_eq!(arith.mul(&n(a), &n(b)), n(a * b), "base {length}: {a}*{b}");
            }
        }
    }

    #[test]
    fn test_divmod_truncates() {
        let (arith, n) = setup(8);
        assert_eq!(arith.divmod(&n(100), &n(7)), Ok((n(14), n(2))));
        assert_eq!(arith.divmod(&n(-100), &n(7)), Ok((n(-14), n(-2))));
        assert_eq!(arith.divmod(&n(100), &n(-7)), Ok((n(-14), n(2))));
        assert_eq!(arith.divmod(&n(-100), &n(-7)), Ok((n(14), n(-2))));
        assert_eq!(arith.divmod(&n(6), &n(7)), Ok((n(0), n(6))));
        assert_eq!(arith.divmod(&n(7), &n(7)), Ok((n(1), n(0))));
        assert_eq!(arith.divmod(&n(7), &n(0)), Err(AlgebraError::DivisionByZero));
        assert_eq!(arith.modulo(&n(0), &n(0)), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_divmod_long() {
        let (arith, n) = setup(3);
        let a = 3i128.pow(20) + 12345;
        assert_eq!(arith.divmod(&n(a), &n(101)), Ok((n(a / 101), n(a % 101))));
    }

    #[test]
    fn test_pow() {
        let (arith, n) = setup(8);
        assert_eq!(arith.pow(&n(2), &n(10)), Ok(n(1024)));
        assert_eq!(arith.pow(&n(-2), &n(3)), Ok(n(-8)));
        assert_eq!(arith.pow(&n(-2), &n(4)), Ok(n(16)));
        assert_eq!(arith.pow(&n(0), &n(0)), Ok(n(1)));
        assert_eq!(arith.pow(&n(0), &n(9)), Ok(n(0)));
        assert_eq!(arith.pow(&n(123), &n(1)), Ok(n(123)));
        assert_eq!(
            arith.pow(&n(2), &n(-1)),
            Err(AlgebraError::UnsupportedOperation("negative exponent"))
        );
    }

    #[test]
    fn test_pow_odd_base_parity() {
        // In base 7 the last digit does not decide parity: 10 is "13".
        let (arith, n) = setup(7);
        assert_eq!(arith.pow(&n(-1), &n(10)), Ok(n(1)));
        assert_eq!(arith.pow(&n(-1), &n(7)), Ok(n(-1)));
    }

    #[test]
    fn test_pow_limit() {
        let (arith, n) = setup(8);
        assert_eq!(
            arith.pow_limited(&n(-8), &n(9), 4),
            Ok(PowerOutcome::Exceeds { negative: true })
        );
        assert_eq!(
            arith.pow_limited(&n(8), &n(3), 4),
            Ok(PowerOutcome::Exact(n(512)))
        );
        assert!(arith.pow(&n(7), &n(1 << 20)).is_err());
    }

    #[test]
    fn test_gcd_lcm() {
        let (arith, n) = setup(8);
        assert_eq!(arith.gcd(&n(48), &n(18)), n(6));
        assert_eq!(arith.gcd(&n(-48), &n(18)), n(6));
        assert_eq!(arith.gcd(&n(0), &n(-5)), n(5));
        assert_eq!(arith.gcd(&n(0), &n(0)), n(0));
        assert_eq!(arith.lcm(&n(4), &n(-6)), Ok(n(12)));
        assert_eq!(arith.lcm(&n(0), &n(6)), Ok(n(0)));
        assert_eq!(arith.lcm(&n(0), &n(0)), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_trivial_cycle() {
        let (arith, n) = setup(1);
        assert_eq!(n(12345), Numeral::zero());
        assert_eq!(arith.add(&n(0), &n(0)), Numeral::zero());
        assert_eq!(arith.mul(&n(0), &n(0)), Numeral::zero());
        assert_eq!(arith.pow(&n(0), &n(0)), Ok(Numeral::zero()));
        assert_eq!(arith.divmod(&n(0), &n(0)), Err(AlgebraError::DivisionByZero));
    }
}
