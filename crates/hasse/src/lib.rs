//! Hasse - positional arithmetic over a programmable successor cycle
//!
//! A structure is an alphabet of single-character symbols plus a **+1 rule**
//! that arranges them into a cycle. The rule alone defines everything else:
//! single-element addition with carry, subtraction with borrow,
//! multiplication and division, and from those, arbitrary-length signed
//! numerals in base `cycle_length`.
//!
//! # Pipeline
//!
//! ```text
//! rule string ──parse──▶ PositionMap ──▶ Cycle (single-element core)
//!                                      ──▶ Arithmetic (multi-digit engine)
//!                                      ──▶ Bounds (optional saturation)
//!                                      ──▶ Formatted (display notation)
//! ```
//!
//! # Rule Notation
//!
//! | Rule | Meaning |
//! |------|---------|
//! | `bhgecea` | `b` is 0, `h` is 1, ... (contiguous) |
//! | `b-h-g-e` | the same, hyphen separated |
//! | `a{d,f}` | `d` and `f` share position 1 |
//! | `bcb` | last occurrence wins; slot 0 is left vacant |
//!
//! Symbols the rule never names are worth zero. A position shared by several
//! symbols is an **equivalence class**; results print it as `{d,f}`.
//!
//! # Example: Single Elements
//!
//! ```
//! use hasse::Structure;
//!
//! let s = Structure::new(8).unwrap();
//! s.set_rule("bhgecea{d,f}").unwrap();
//!
//! assert_eq!(s.add_single('a', 'h').unwrap(), 'd');   // 6 + 1 = 7
//! assert_eq!(s.addition_carry('d', 'h').unwrap(), 1); // 7 + 1 wraps
//! assert!(s.divide_single('h', 'g').is_err());        // 2 has no inverse mod 8
//! ```
//!
//! # Example: Multi-Digit
//!
//! ```
//! use hasse::Structure;
//!
//! let s = Structure::new(8).unwrap();
//! s.set_rule("bhgecea{d,f}").unwrap();
//!
//! assert_eq!(s.add("hg", "g").unwrap(), "hc");                // 10 + 2 = 12
//! assert_eq!(s.subtract("h", "hg").unwrap(), "-hh");          // 1 - 10 = -9
//! assert_eq!(s.divide("hg", "c").unwrap(), ("g".into(), "g".into()));
//!
//! s.set_bounded(true);
//! s.set_width(2).unwrap();
//! assert_eq!(s.multiply("dd", "g").unwrap(), "{d,f}{d,f}");  // saturated
//! ```
//!
//! # Design Principles
//!
//! - **Immutable snapshots**: computations never see a half-installed rule
//! - **O(1) stepping**: position → canonical symbol is a precomputed table
//! - **Atomic operations**: inputs are fully parsed before any arithmetic
//! - **No panics**: every failure is an [`AlgebraError`]

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(missing_docs)]

// Core value types (alphabet, digit, ring)
pub mod core;

// +1 rule parsing and the position map
pub mod rule;

// Signed numerals and the multi-digit engine
pub mod numeral;

// Fixed-width saturation
pub mod bounded;

// Display notation
pub mod format;

// Frozen configuration and its operations
pub mod algebra;

// Caller-owned handle
pub mod structure;

// Configuration loading
pub mod config;

// Operation tables
pub mod table;

// Cycle listing for visualization tooling
pub mod diagram;

// Error type
mod error;

// Re-export submodules for external access
pub use crate::core::alphabet;
pub use crate::core::digit;
pub use crate::core::ring;
pub use numeral::arith;

// Re-export core types at crate root
pub use crate::core::alphabet::{Alphabet, FIRST_SYMBOL, MAX_SYMBOLS};
pub use crate::core::digit::{Digit, EquivalenceClass, VACANT};
pub use crate::core::ring::Cycle;
pub use error::{AlgebraError, Result};
pub use rule::PositionMap;

// Re-export engine types
pub use algebra::{Algebra, Op};
pub use bounded::Bounds;
pub use format::Formatted;
pub use numeral::arith::{Arithmetic, PowerOutcome, MAX_POWER_DIGITS};
pub use numeral::{Numeral, MINUS};
pub use structure::Structure;

// Re-export configuration and tooling types
pub use config::{StructureConfig, DEFAULT_BITS};
pub use diagram::{DiagramNode, HasseDiagram};
pub use table::{Operation, OperationTable, UNDEFINED};

/// Prelude module for convenient imports.
///
/// ```
/// use hasse::prelude::*;
///
/// let s = Structure::new(4).unwrap();
/// s.set_rule("abcd").unwrap();
/// assert_eq!(s.add("d", "b").unwrap(), "ba");
/// ```
pub mod prelude {
    pub use crate::algebra::{Algebra, Op};
    pub use crate::bounded::Bounds;
    pub use crate::config::StructureConfig;
    pub use crate::core::alphabet::Alphabet;
    pub use crate::core::digit::{Digit, EquivalenceClass};
    pub use crate::core::ring::Cycle;
    pub use crate::diagram::HasseDiagram;
    pub use crate::error::{AlgebraError, Result};
    pub use crate::numeral::arith::Arithmetic;
    pub use crate::numeral::Numeral;
    pub use crate::rule::PositionMap;
    pub use crate::structure::Structure;
    pub use crate::table::{Operation, OperationTable};
}
