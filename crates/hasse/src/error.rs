//! Error type shared by every engine operation.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AlgebraError>;

/// Everything the engine can reject.
///
/// Operations are atomic: when one of these is returned, nothing was
/// computed and no configuration was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// The alphabet size is outside `1..=26`.
    #[error("alphabet size {bits} is outside 1..={max}")]
    InvalidAlphabetSize {
        /// Requested size.
        bits: usize,
        /// Largest supported size.
        max: usize,
    },

    /// The +1 rule is malformed (unbalanced or empty braces, stray commas,
    /// or no positions at all).
    #[error("invalid rule syntax at offset {offset}: {reason}")]
    InvalidRuleSyntax {
        /// Byte offset into the rule string.
        offset: usize,
        /// What was wrong.
        reason: &'static str,
    },

    /// A character that is neither a separator nor part of the alphabet.
    #[error("unknown symbol '{symbol}' at offset {offset}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Byte offset into the input string.
        offset: usize,
    },

    /// A digit string could not be read.
    #[error("malformed number \"{input}\": {reason}")]
    MalformedNumber {
        /// The rejected input.
        input: String,
        /// What was wrong.
        reason: &'static str,
    },

    /// Single-element division by an element that has no inverse.
    #[error("'{divisor}' is not invertible in a cycle of length {cycle_length}")]
    NotInvertible {
        /// The divisor symbol.
        divisor: char,
        /// Cycle length of the structure.
        cycle_length: u32,
    },

    /// Multi-digit division, modulo or lcm by the zero element.
    #[error("division by zero")]
    DivisionByZero,

    /// The operation is not defined for these operands.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// An arithmetic call was made before any rule was installed.
    #[error("structure has no +1 rule yet")]
    UninitializedStructure,

    /// A configuration file could not be decoded.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
