//! Single-element arithmetic on a cycle of positions.
//!
//! The +1 rule arranges the positions `0..L` into one cycle, so digit values
//! form the ring of integers mod `L`. Every operation here is O(1) and works
//! on [`Digit`] values only; mapping symbols to digits is the job of the
//! position map.
//!
//! Adding `b` to `a` is defined as stepping `a` forward `position(b)` times;
//! each step from `L - 1` back to `0` is one carry. The closed forms below
//! compute exactly that count without walking the cycle.
//!
//! # Example
//!
//! ```
//! use hasse::{Cycle, Digit};
//!
//! let cycle = Cycle::new(8);
//! assert_eq!(cycle.add(Digit::new(6), Digit::new(3)), (Digit::new(1), 1));
//! assert_eq!(cycle.sub(Digit::new(2), Digit::new(5)), (Digit::new(5), true));
//! assert_eq!(cycle.mul(Digit::new(5), Digit::new(7)), (Digit::new(3), 4));
//! assert_eq!(cycle.div(Digit::new(3), Digit::new(5)), Some(Digit::new(7)));
//! assert_eq!(cycle.div(Digit::new(3), Digit::new(2)), None);
//! ```

use super::digit::Digit;

/// A cycle of `length` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cycle {
    length: u32,
}

impl Cycle {
    /// Creates a cycle of `length` positions. A zero length is treated as 1.
    #[inline]
    #[must_use]
    pub const fn new(length: u32) -> Self {
        Self {
            length: if length == 0 { 1 } else { length },
        }
    }

    /// Number of positions; the base of multi-digit numerals.
    #[inline]
    #[must_use]
    pub const fn length(self) -> u32 {
        self.length
    }

    /// True if `digit` is a position of this cycle.
    #[inline]
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        digit.position() < self.length
    }

    /// The multiplicative identity (position 1, or 0 in a cycle of one).
    #[inline]
    #[must_use]
    pub const fn one(self) -> Digit {
        Digit::new(1 % self.length)
    }

    /// The highest position.
    #[inline]
    #[must_use]
    pub const fn max_digit(self) -> Digit {
        Digit::new(self.length - 1)
    }

    /// Reduces an arbitrary count to a position.
    #[inline]
    #[must_use]
    pub const fn digit(self, value: u32) -> Digit {
        Digit::new(value % self.length)
    }

    /// One application of the +1 rule.
    #[inline]
    #[must_use]
    pub const fn successor(self, a: Digit) -> Digit {
        self.digit(a.position() + 1)
    }

    /// `a + b` and the number of wraps past the top of the cycle.
    #[inline]
    #[must_use]
    pub const fn add(self, a: Digit, b: Digit) -> (Digit, u32) {
        let sum = a.position() as u64 + b.position() as u64;
        self.split(sum)
    }

    /// `a - b` and whether a borrow occurred (`position(a) < position(b)`).
    #[inline]
    #[must_use]
    pub const fn sub(self, a: Digit, b: Digit) -> (Digit, bool) {
        let (a, b) = (a.position(), b.position());
        if a >= b {
            (Digit::new(a - b), false)
        } else {
            (Digit::new(a + (self.length - b)), true)
        }
    }

    /// `a * b` as `position(b)` repeated additions of `a` onto zero, with the
    /// carries those additions accumulate.
    ///
    /// Zero absorbs and one is the identity; neither produces a carry.
    #[inline]
    #[must_use]
    pub const fn mul(self, a: Digit, b: Digit) -> (Digit, u32) {
        let product = a.position() as u64 * b.position() as u64;
        self.split(product)
    }

    /// Splits a widened result into `(value mod L, value / L)`. Both parts
    /// fit in `u32` for operands below `L`.
    #[inline]
    const fn split(self, value: u64) -> (Digit, u32) {
        let length = self.length as u64;
        (
            Digit::new((value % length) as u32),
            (value / length) as u32,
        )
    }

    /// Multiplicative inverse, if `gcd(position(a), length) == 1`.
    ///
    /// In a cycle of one every element is its own inverse.
    #[must_use]
    pub const fn inverse(self, a: Digit) -> Option<Digit> {
        if self.length == 1 {
            return Some(Digit::ZERO);
        }
        // Extended Euclid on (a, L).
        let m = self.length as i64;
        let (mut old_r, mut r) = (a.position() as i64, m);
        let (mut old_s, mut s) = (1i64, 0i64);
        while r != 0 {
            let q = old_r / r;
            let next_r = old_r - q * r;
            old_r = r;
            r = next_r;
            let next_s = old_s - q * s;
            old_s = s;
            s = next_s;
        }
        if old_r != 1 {
            return None;
        }
        Some(Digit::new(old_s.rem_euclid(m) as u32))
    }

    /// `a / b` as `a * inverse(b)`, if `b` is invertible.
    #[inline]
    #[must_use]
    pub const fn div(self, a: Digit, b: Digit) -> Option<Digit> {
        match self.inverse(b) {
            Some(inv) => Some(self.mul(a, inv).0),
            None => None,
        }
    }

    /// Greatest common divisor in the cycle's ring.
    ///
    /// Zero is neutral: `gcd(0, b) = b` and `gcd(a, 0) = a`. Otherwise the
    /// result is `gcd(position(a), position(b), L)`, the largest divisor of
    /// `L` that divides both.
    #[must_use]
    pub const fn gcd(self, a: Digit, b: Digit) -> Digit {
        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }
        let g = gcd_u32(gcd_u32(a.position(), b.position()), self.length);
        self.digit(g)
    }

    /// Least common multiple in the cycle's ring.
    ///
    /// Zero absorbs. Otherwise the result is the smallest position that both
    /// `a` and `b` divide, `lcm(gcd(a, L), gcd(b, L))`, which wraps to zero
    /// when it reaches `L`.
    #[must_use]
    pub const fn lcm(self, a: Digit, b: Digit) -> Digit {
        if a.is_zero() || b.is_zero() {
            return Digit::ZERO;
        }
        let ga = gcd_u32(a.position(), self.length) as u64;
        let gb = gcd_u32(b.position(), self.length) as u64;
        let lcm = ga / gcd_u32(ga as u32, gb as u32) as u64 * gb;
        self.split(lcm).0
    }

    /// `base ^ position(exp)` by square-and-multiply. `x^0` is one.
    #[must_use]
    pub const fn pow(self, base: Digit, exp: Digit) -> Digit {
        let mut result = self.one();
        let mut b = base;
        let mut e = exp.position();
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, b).0;
            }
            b = self.mul(b, b).0;
            e >>= 1;
        }
        result
    }
}

const fn gcd_u32(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(p: u32) -> Digit {
        Digit::new(p)
    }

    #[test]
    fn test_add_counts_wraps() {
        let c = Cycle::new(8);
        assert_eq!(c.add(d(0), d(0)), (d(0), 0));
        assert_eq!(c.add(d(3), d(4)), (d(7), 0));
        assert_eq!(c.add(d(7), d(1)), (d(0), 1));
        assert_eq!(c.add(d(7), d(7)), (d(6), 1));
    }

    #[test]
    fn test_add_matches_successor_walk() {
        let c = Cycle::new(7);
        for a in 0..7 {
            for b in 0..7 {
                let mut cur = d(a);
                let mut wraps = 0;
                for _ in 0..b {
                    let next = c.successor(cur);
                    if next.position() < cur.position() {
                        wraps += 1;
                    }
                    cur = next;
                }
                assert_eq!(c.add(d(a), d(b)), (cur, wraps), "{a} + {b}");
            }
        }
    }

    #[test]
    fn test_sub_borrow() {
        let c = Cycle::new(8);
        assert_eq!(c.sub(d(5), d(3)), (d(2), false));
        assert_eq!(c.sub(d(3), d(5)), (d(6), true));
        assert_eq!(c.sub(d(4), d(4)), (d(0), false));
    }

    #[test]
    fn test_mul_identities() {
        let c = Cycle::new(8);
        for x in 0..8 {
            assert_eq!(c.mul(d(0), d(x)), (d(0), 0));
            assert_eq!(c.mul(d(x), d(0)), (d(0), 0));
            assert_eq!(c.mul(d(1), d(x)), (d(x), 0));
            assert_eq!(c.mul(d(x), d(1)), (d(x), 0));
        }
        assert_eq!(c.mul(d(7), d(7)), (d(1), 6));
    }

    #[test]
    fn test_inverse() {
        let c = Cycle::new(8);
        for x in (1..8).step_by(2) {
            let inv = c.inverse(d(x));
            assert!(inv.is_some(), "{x} should be invertible mod 8");
            if let Some(inv) = inv {
                assert_eq!(c.mul(d(x), inv).0, d(1));
            }
        }
        for x in (0..8).step_by(2) {
            assert_eq!(c.inverse(d(x)), None, "{x} should not be invertible mod 8");
        }
    }

    #[test]
    fn test_inverse_prime_cycle() {
        let c = Cycle::new(7);
        assert_eq!(c.inverse(d(0)), None);
        for x in 1..7 {
            assert!(c.inverse(d(x)).is_some());
        }
        assert_eq!(c.div(d(3), d(5)), Some(d(2))); // 5 * 2 = 10 = 3 mod 7
    }

    #[test]
    fn test_pow() {
        let c = Cycle::new(8);
        assert_eq!(c.pow(d(3), d(0)), d(1));
        assert_eq!(c.pow(d(0), d(0)), d(1));
        assert_eq!(c.pow(d(2), d(3)), d(0));
        assert_eq!(c.pow(d(3), d(2)), d(1));
        assert_eq!(c.pow(d(5), d(3)), d(5));
    }

    #[test]
    fn test_trivial_cycle() {
        let c = Cycle::new(1);
        assert_eq!(c.one(), d(0));
        assert_eq!(c.successor(d(0)), d(0));
        assert_eq!(c.add(d(0), d(0)), (d(0), 0));
        assert_eq!(c.div(d(0), d(0)), Some(d(0)));
    }

    #[test]
    fn test_wide_cycle_does_not_overflow() {
        let c = Cycle::new(70_000);
        let top = c.max_digit();
        // 69_999^2 = 69_998 * 70_000 + 1
        assert_eq!(c.mul(top, top), (d(1), 69_998));
        assert_eq!(c.add(top, top), (d(69_998), 1));
        assert_eq!(c.sub(d(0), top), (d(1), true));
        assert_eq!(c.pow(top, d(2)), d(1));

        let widest = Cycle::new(u32::MAX);
        let top = widest.max_digit();
        assert_eq!(widest.add(top, top).1, 1);
        assert_eq!(widest.mul(top, top).0, d(1));
    }

    #[test]
    fn test_gcd() {
        let c = Cycle::new(12);
        assert_eq!(c.gcd(d(8), d(6)), d(2));
        assert_eq!(c.gcd(d(9), d(6)), d(3));
        assert_eq!(c.gcd(d(5), d(7)), d(1));
        // Zero is neutral.
        assert_eq!(c.gcd(d(0), d(9)), d(9));
        assert_eq!(c.gcd(d(9), d(0)), d(9));
        assert_eq!(c.gcd(d(0), d(0)), d(0));
        // 10 and 5 share 5 as integers, but 5 does not divide 12.
        assert_eq!(c.gcd(d(10), d(5)), d(1));
        assert_eq!(Cycle::new(8).gcd(d(4), d(4)), d(4));
    }

    #[test]
    fn test_lcm() {
        let c = Cycle::new(12);
        assert_eq!(c.lcm(d(4), d(6)), d(0)); // lcm(4, 6) = 12 wraps
        assert_eq!(c.lcm(d(2), d(3)), d(6));
        assert_eq!(c.lcm(d(5), d(7)), d(1)); // both units
        assert_eq!(c.lcm(d(8), d(3)), d(0));
        assert_eq!(c.lcm(d(0), d(5)), d(0));
        assert_eq!(c.lcm(d(5), d(0)), d(0));

        let c = Cycle::new(8);
        assert_eq!(c.lcm(d(2), d(4)), d(4));
        assert_eq!(c.lcm(d(6), d(3)), d(2));
    }

    #[test]
    fn test_lcm_is_divisible_by_both() {
        let c = Cycle::new(12);
        for a in 1..12 {
            for b in 1..12 {
                let m = c.lcm(d(a), d(b));
                let divides = |x: u32| (0..12).any(|k| c.mul(d(x), d(k)).0 == m);
                assert!(divides(a) && divides(b), "lcm({a}, {b}) = {m:?}");
            }
        }
    }
}
