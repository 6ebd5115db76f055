//! Structure configuration.
//!
//! ```toml
//! bits = 8
//! rule = "bhgecea{d,f}"
//! bounded = true
//! width = 4
//! ```

use crate::core::alphabet::MAX_SYMBOLS;
use crate::error::{AlgebraError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default alphabet size.
pub const DEFAULT_BITS: usize = 8;

/// Everything needed to build a configured [`Structure`](crate::Structure).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct StructureConfig {
    /// Alphabet size, `1..=26`.
    pub bits: usize,
    /// +1 rule to install; `None` leaves the structure uninitialized.
    pub rule: Option<String>,
    /// Start in bounded mode.
    pub bounded: bool,
    /// Bounded digit width; defaults to `bits`.
    pub width: Option<usize>,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            bits: DEFAULT_BITS,
            rule: None,
            bounded: false,
            width: None,
        }
    }
}

impl StructureConfig {
    /// A config with the given alphabet size and defaults elsewhere.
    #[must_use]
    pub fn with_bits(bits: usize) -> Self {
        Self {
            bits,
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidConfig`] for malformed TOML, unknown keys, or
    /// values that fail [`Self::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use hasse::StructureConfig;
    ///
    /// let config = StructureConfig::from_toml_str("bits = 4\nrule = \"abcd\"").unwrap();
    /// assert_eq!(config.bits, 4);
    /// assert_eq!(config.effective_width(), 4);
    /// assert!(StructureConfig::from_toml_str("colour = 1").is_err());
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| AlgebraError::InvalidConfig(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidConfig`] if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| AlgebraError::InvalidConfig(e.to_string()))
    }

    /// Checks ranges without building anything.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidConfig`] for an alphabet size outside
    /// `1..=26` or a zero width.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SYMBOLS).contains(&self.bits) {
            return Err(AlgebraError::InvalidConfig(format!(
                "bits must be between 1 and {MAX_SYMBOLS}, got {}",
                self.bits
            )));
        }
        if self.width == Some(0) {
            return Err(AlgebraError::InvalidConfig("width must be at least 1".into()));
        }
        Ok(())
    }

    /// The bounded width actually used.
    #[must_use]
    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or(self.bits)
    }
}
