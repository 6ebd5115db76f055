//! Core value types.
//!
//! - [`alphabet::Alphabet`]: the fixed symbol set `a..`
//! - [`digit::Digit`] / [`digit::EquivalenceClass`]: digit values and their display sets
//! - [`ring::Cycle`]: single-element arithmetic with carry and borrow

pub mod alphabet;
pub mod digit;
pub mod ring;
