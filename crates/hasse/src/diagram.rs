//! The +1 cycle as data for visualization tooling.
//!
//! ```text
//! b (0) → h (1) → g (2) → c (4) → e (5) → a (6) → {d,f} (7) → (back to b)
//! ```
//!
//! Vacant positions are skipped. Layout is left to the caller.

use crate::core::digit::{Digit, EquivalenceClass};
use crate::rule::PositionMap;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One occupied position of the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiagramNode {
    /// Position in the cycle.
    pub position: u32,
    /// Symbols at this position, alphabet order.
    pub members: Vec<char>,
}

impl DiagramNode {
    fn label(&self) -> String {
        EquivalenceClass {
            digit: Digit::new(self.position),
            members: &self.members,
            canonical: self.members.first().copied(),
        }
        .to_string()
    }
}

/// The successor cycle in position order.
///
/// # Example
///
/// ```
/// use hasse::{Alphabet, HasseDiagram, PositionMap};
///
/// let map = PositionMap::parse(&Alphabet::new(4).unwrap(), "b{a,c}d").unwrap();
/// let diagram = HasseDiagram::new(&map);
/// assert_eq!(diagram.to_string(), "b (0) → {a,c} (1) → d (2) → (back to b)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HasseDiagram {
    /// Number of positions, vacant ones included.
    pub cycle_length: u32,
    /// Occupied positions in ascending order.
    pub nodes: Vec<DiagramNode>,
}

impl HasseDiagram {
    /// Lists the occupied positions of `map`.
    ///
    /// Position 0 with no mapped member shows its stand-in symbol.
    #[must_use]
    pub fn new(map: &PositionMap) -> Self {
        let nodes = (0..map.cycle_length())
            .filter_map(|position| {
                let members = map.members(position);
                let members = if members.is_empty() {
                    map.canonical(Digit::new(position)).into_iter().collect()
                } else {
                    members.to_vec()
                };
                (!members.is_empty()).then_some(DiagramNode { position, members })
            })
            .collect();
        Self {
            cycle_length: map.cycle_length(),
            nodes,
        }
    }
}

impl fmt::Display for HasseDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.nodes.first() else {
            return Ok(());
        };
        for node in &self.nodes {
            write!(f, "{} ({}) → ", node.label(), node.position)?;
        }
        write!(f, "(back to {})", first.label())
    }
}
