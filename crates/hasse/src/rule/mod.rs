//! +1 rule parsing.
//!
//! A rule lists the cycle in order, one position per entry:
//!
//! ```text
//! bhgecea{d,f}        contiguous
//! b-h-g-e-c-e-a-{d,f} hyphen separated
//! b h g e c e a {d,f} whitespace separated
//! ```
//!
//! Each bare symbol takes the next position. A brace group gives every
//! symbol inside it the same position, then advances once. Whitespace and
//! `-` only separate; `,` separates group members and is illegal outside a
//! group. A symbol named twice keeps its last position, which can leave an
//! earlier slot vacant.
//!
//! # Example
//!
//! ```
//! use hasse::{rule, Alphabet};
//!
//! let alphabet = Alphabet::new(8).unwrap();
//! let map = rule::parse(&alphabet, "b-h-g-{e,c}-a-d-f").unwrap();
//! assert_eq!(map.cycle_length(), 7);
//! assert_eq!(map.members(3), &['c', 'e']);
//!
//! assert!(rule::parse(&alphabet, "bh{g").is_err());
//! assert!(rule::parse(&alphabet, "bhx").is_err());
//! ```

mod position_map;

pub use position_map::PositionMap;

use crate::core::alphabet::Alphabet;
use crate::error::{AlgebraError, Result};

/// An open brace group: where it started and how many symbols it holds.
struct Group {
    open: usize,
    members: usize,
}

/// Parses `rule` over `alphabet` into a [`PositionMap`].
///
/// # Errors
///
/// - [`AlgebraError::InvalidRuleSyntax`] for unbalanced, nested or empty
///   braces, a `,` outside braces, or a rule with no symbols.
/// - [`AlgebraError::UnknownSymbol`] for any other character outside the
///   alphabet.
pub fn parse(alphabet: &Alphabet, rule: &str) -> Result<PositionMap> {
    let mut positions: Vec<Option<u32>> = vec![None; alphabet.len()];
    let mut next: u32 = 0;
    let mut group: Option<Group> = None;

    for (offset, c) in rule.char_indices() {
        match c {
            '{' => {
                if group.is_some() {
                    return Err(syntax(offset, "nested brace group"));
                }
                group = Some(Group {
                    open: offset,
                    members: 0,
                });
            }
            '}' => match group.take() {
                None => return Err(syntax(offset, "unmatched '}'")),
                Some(Group { members: 0, .. }) => {
                    return Err(syntax(offset, "empty brace group"))
                }
                Some(_) => next += 1,
            },
            ',' => {
                if group.is_none() {
                    return Err(syntax(offset, "',' outside a brace group"));
                }
            }
            '-' => {}
            c if c.is_whitespace() => {}
            symbol => {
                let index = alphabet
                    .index_of(symbol)
                    .ok_or(AlgebraError::UnknownSymbol { symbol, offset })?;
                positions[index] = Some(next);
                match group.as_mut() {
                    Some(g) => g.members += 1,
                    None => next += 1,
                }
            }
        }
    }

    if let Some(g) = group {
        return Err(syntax(g.open, "unclosed brace group"));
    }
    if next == 0 {
        return Err(syntax(rule.len(), "rule assigns no positions"));
    }

    let map = PositionMap::from_positions(alphabet.clone(), positions, next);
    tracing::debug!(
        rule,
        cycle_length = map.cycle_length(),
        vacant = map.vacant_positions().count(),
        unmapped = map.unmapped().count(),
        "parsed +1 rule"
    );
    Ok(map)
}

fn syntax(offset: usize, reason: &'static str) -> AlgebraError {
    AlgebraError::InvalidRuleSyntax { offset, reason }
}
