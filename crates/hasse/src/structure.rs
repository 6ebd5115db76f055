//! The caller-owned structure handle.
//!
//! A [`Structure`] owns an alphabet and a reconfigurable snapshot. Rule
//! changes parse outside the lock and swap in under a short write lock;
//! every computation clones the snapshot under a read lock and runs on the
//! resulting [`Algebra`] with no lock held.

use crate::algebra::Algebra;
use crate::config::StructureConfig;
use crate::core::alphabet::Alphabet;
use crate::diagram::HasseDiagram;
use crate::error::{AlgebraError, Result};
use crate::rule::{self, PositionMap};
use crate::table::{Operation, OperationTable};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Snapshot {
    map: Option<Arc<PositionMap>>,
    bounded: bool,
    width: usize,
}

/// A configurable +1 rule structure.
///
/// `Structure` is `Send + Sync`; share it behind an `Arc` if several threads
/// compute against one configuration.
///
/// # Example
///
/// ```
/// use hasse::Structure;
///
/// let s = Structure::new(8).unwrap();
/// s.set_rule("bhgecea{d,f}").unwrap();
///
/// assert_eq!(s.element_position('e').unwrap(), Some(5));
/// assert_eq!(s.add_single('b', 'b').unwrap(), 'b');
/// assert_eq!(s.format("d").unwrap(), "{d,f}");
/// assert_eq!(s.add("a", "h").unwrap(), "{d,f}");
/// ```
#[derive(Debug)]
pub struct Structure {
    alphabet: Alphabet,
    state: RwLock<Snapshot>,
}

impl Structure {
    /// An uninitialized structure over `bits` symbols.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidAlphabetSize`] unless `1 <= bits <= 26`.
    pub fn new(bits: usize) -> Result<Self> {
        let alphabet = Alphabet::new(bits)?;
        Ok(Self {
            alphabet,
            state: RwLock::new(Snapshot {
                map: None,
                bounded: false,
                width: bits,
            }),
        })
    }

    /// Builds and configures a structure in one step; nothing is returned on
    /// failure.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidConfig`] for out-of-range values, or any rule
    /// parsing error.
    pub fn from_config(config: &StructureConfig) -> Result<Self> {
        config.validate()?;
        let alphabet = Alphabet::new(config.bits)?;
        let map = config
            .rule
            .as_deref()
            .map(|r| rule::parse(&alphabet, r).map(Arc::new))
            .transpose()?;
        tracing::debug!(
            bits = config.bits,
            initialized = map.is_some(),
            bounded = config.bounded,
            "structure built from config"
        );
        Ok(Self {
            alphabet,
            state: RwLock::new(Snapshot {
                map,
                bounded: config.bounded,
                width: config.effective_width(),
            }),
        })
    }

    /// The configured alphabet.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Parses and installs a +1 rule. On error the previous rule stays.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidRuleSyntax`] or [`AlgebraError::UnknownSymbol`].
    pub fn set_rule(&self, rule: &str) -> Result<()> {
        let map = Arc::new(rule::parse(&self.alphabet, rule)?);
        self.state.write().map = Some(map);
        Ok(())
    }

    /// Turns saturation on or off. Earlier results are unaffected.
    pub fn set_bounded(&self, enabled: bool) {
        self.state.write().bounded = enabled;
        tracing::debug!(enabled, "bounded mode set");
    }

    /// Whether results saturate.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.state.read().bounded
    }

    /// Sets the bounded digit width.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidConfig`] for a zero width.
    pub fn set_width(&self, width: usize) -> Result<()> {
        if width == 0 {
            return Err(AlgebraError::InvalidConfig("width must be at least 1".into()));
        }
        self.state.write().width = width;
        tracing::debug!(width, "bounded width set");
        Ok(())
    }

    /// The bounded digit width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.state.read().width
    }

    /// True once a rule is installed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.read().map.is_some()
    }

    /// A consistent copy of the current configuration.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] before a rule is set.
    pub fn snapshot(&self) -> Result<Algebra> {
        let state = self.state.read().clone();
        let map = state.map.ok_or(AlgebraError::UninitializedStructure)?;
        Ok(Algebra::from_shared(map, state.bounded, state.width))
    }

    fn map(&self) -> Option<Arc<PositionMap>> {
        self.state.read().map.clone()
    }

    // ========================================================================
    // Multi-digit arithmetic
    // ========================================================================

    /// `a + b`, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`], or a parse error.
    pub fn add(&self, a: &str, b: &str) -> Result<String> {
        self.snapshot()?.add(a, b)
    }

    /// `a - b`, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`], or a parse error.
    pub fn subtract(&self, a: &str, b: &str) -> Result<String> {
        self.snapshot()?.subtract(a, b)
    }

    /// `a * b`, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`], or a parse error.
    pub fn multiply(&self, a: &str, b: &str) -> Result<String> {
        self.snapshot()?.multiply(a, b)
    }

    /// `(quotient, remainder)`, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`], [`AlgebraError::UninitializedStructure`],
    /// or a parse error.
    pub fn divide(&self, a: &str, b: &str) -> Result<(String, String)> {
        self.snapshot()?.divide(a, b)
    }

    /// `base ^ exp`, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnsupportedOperation`] for a negative exponent,
    /// [`AlgebraError::UninitializedStructure`], or a parse error.
    pub fn power(&self, base: &str, exp: &str) -> Result<String> {
        self.snapshot()?.power(base, exp)
    }

    /// `a mod b`, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`], [`AlgebraError::UninitializedStructure`],
    /// or a parse error.
    pub fn modulo(&self, a: &str, b: &str) -> Result<String> {
        self.snapshot()?.modulo(a, b)
    }

    /// `gcd(a, b)`, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`], or a parse error.
    pub fn gcd(&self, a: &str, b: &str) -> Result<String> {
        self.snapshot()?.gcd(a, b)
    }

    /// `lcm(a, b)`, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] for `lcm(0, 0)`,
    /// [`AlgebraError::UninitializedStructure`], or a parse error.
    pub fn lcm(&self, a: &str, b: &str) -> Result<String> {
        self.snapshot()?.lcm(a, b)
    }

    /// Display notation of a digit string.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`], or a parse error.
    pub fn format(&self, digits: &str) -> Result<String> {
        self.snapshot()?.format(digits)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The alphabet, in order.
    #[must_use]
    pub fn elements(&self) -> Vec<char> {
        self.alphabet.symbols().to_vec()
    }

    /// The position the rule gave `symbol`; `None` if unmapped or no rule is
    /// installed.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] if `symbol` is outside the alphabet.
    pub fn element_position(&self, symbol: char) -> Result<Option<u32>> {
        if !self.alphabet.contains(symbol) {
            return Err(AlgebraError::UnknownSymbol { symbol, offset: 0 });
        }
        Ok(self.map().and_then(|m| m.position(symbol)))
    }

    /// Number of positions in the cycle; 0 before a rule is set.
    #[must_use]
    pub fn plus_one_rule_size(&self) -> u32 {
        self.map().map_or(0, |m| m.cycle_length())
    }

    /// Symbols at `position`, alphabet order. Empty for vacant or
    /// out-of-range positions and before a rule is set.
    #[must_use]
    pub fn plus_one_rule_outputs(&self, position: u32) -> Vec<char> {
        self.map()
            .map(|m| m.members(position).to_vec())
            .unwrap_or_default()
    }

    /// Largest bounded value, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] before a rule is set.
    pub fn max_value(&self) -> Result<String> {
        Ok(self.snapshot()?.max_value())
    }

    /// Smallest bounded value, formatted.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] before a rule is set.
    pub fn min_value(&self) -> Result<String> {
        Ok(self.snapshot()?.min_value())
    }

    /// The cycle as diagram data.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] before a rule is set.
    pub fn diagram(&self) -> Result<HasseDiagram> {
        Ok(HasseDiagram::new(self.snapshot()?.map()))
    }

    /// One operation table.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] before a rule is set.
    pub fn table(&self, operation: Operation) -> Result<OperationTable> {
        Ok(OperationTable::new(&self.snapshot()?, operation))
    }

    // ========================================================================
    // Single-element operations
    // ========================================================================

    /// See [`Algebra::add_single`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] or [`AlgebraError::UnknownSymbol`].
    pub fn add_single(&self, a: char, b: char) -> Result<char> {
        self.snapshot()?.add_single(a, b)
    }

    /// See [`Algebra::subtract_single`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] or [`AlgebraError::UnknownSymbol`].
    pub fn subtract_single(&self, a: char, b: char) -> Result<char> {
        self.snapshot()?.subtract_single(a, b)
    }

    /// See [`Algebra::multiply_single`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] or [`AlgebraError::UnknownSymbol`].
    pub fn multiply_single(&self, a: char, b: char) -> Result<char> {
        self.snapshot()?.multiply_single(a, b)
    }

    /// See [`Algebra::divide_single`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotInvertible`], [`AlgebraError::UninitializedStructure`]
    /// or [`AlgebraError::UnknownSymbol`].
    pub fn divide_single(&self, a: char, b: char) -> Result<char> {
        self.snapshot()?.divide_single(a, b)
    }

    /// See [`Algebra::power_single`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] or [`AlgebraError::UnknownSymbol`].
    pub fn power_single(&self, base: char, exp: char) -> Result<char> {
        self.snapshot()?.power_single(base, exp)
    }

    /// See [`Algebra::gcd_single`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] or [`AlgebraError::UnknownSymbol`].
    pub fn gcd_single(&self, a: char, b: char) -> Result<char> {
        self.snapshot()?.gcd_single(a, b)
    }

    /// See [`Algebra::lcm_single`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] or [`AlgebraError::UnknownSymbol`].
    pub fn lcm_single(&self, a: char, b: char) -> Result<char> {
        self.snapshot()?.lcm_single(a, b)
    }

    /// See [`Algebra::addition_carry`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] or [`AlgebraError::UnknownSymbol`].
    pub fn addition_carry(&self, a: char, b: char) -> Result<u32> {
        self.snapshot()?.addition_carry(a, b)
    }

    /// See [`Algebra::multiplication_carry`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UninitializedStructure`] or [`AlgebraError::UnknownSymbol`].
    pub fn multiplication_carry(&self, a: char, b: char) -> Result<u32> {
        self.snapshot()?.multiplication_carry(a, b)
    }
}
