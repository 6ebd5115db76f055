//! Full single-element operation tables.
//!
//! A table has one row and one column per alphabet symbol. Cells hold the
//! result position (or the carry count, for the carry tables) and print as
//! the equivalence class at that position.

use crate::algebra::Algebra;
use crate::core::digit::Digit;
use crate::error::{AlgebraError, Result};
use crate::rule::PositionMap;
use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

/// Marker for an undefined division cell.
pub const UNDEFINED: char = '∅';

/// Cell width in the rendered grid.
const CELL: usize = 7;

/// Which single-element table to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, undefined for non-units
    Divide,
    /// Carry of `a + b`
    AddCarry,
    /// Carry of `a * b`
    MulCarry,
}

impl Operation {
    /// All tables, in print order.
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::AddCarry,
        Self::MulCarry,
    ];

    /// Short name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "sub",
            Self::Multiply => "mul",
            Self::Divide => "div",
            Self::AddCarry => "add-carry",
            Self::MulCarry => "mul-carry",
        }
    }

    /// Heading printed above the grid.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::AddCarry => "Addition carry",
            Self::MulCarry => "Multiplication carry",
        }
    }
}

impl FromStr for Operation {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or(AlgebraError::UnsupportedOperation("unknown table"))
    }
}

/// One operation evaluated over every symbol pair.
///
/// # Example
///
/// ```
/// use hasse::{Algebra, Alphabet, Operation, OperationTable, PositionMap};
///
/// let map = PositionMap::parse(&Alphabet::new(4).unwrap(), "abcd").unwrap();
/// let table = OperationTable::new(&Algebra::new(map), Operation::Divide);
///
/// assert_eq!(table.cell('d', 'd').unwrap().map(|d| d.position()), Some(1));
/// assert_eq!(table.cell('b', 'c').unwrap(), None); // 2 has no inverse mod 4
/// ```
#[derive(Debug, Clone)]
pub struct OperationTable {
    operation: Operation,
    map: Arc<PositionMap>,
    symbols: Vec<char>,
    /// Row-major; `None` where the operation is undefined.
    cells: Vec<Option<Digit>>,
}

impl OperationTable {
    /// Evaluates `operation` for every pair of alphabet symbols.
    #[must_use]
    pub fn new(algebra: &Algebra, operation: Operation) -> Self {
        let map = algebra.map();
        let cycle = map.cycle();
        let symbols = map.alphabet().symbols().to_vec();
        // Alphabet symbols always resolve; unmapped ones read as zero.
        let digits: Vec<Digit> = symbols
            .iter()
            .map(|s| map.digit(*s).unwrap_or(Digit::ZERO))
            .collect();

        let mut cells = Vec::with_capacity(digits.len() * digits.len());
        for &a in &digits {
            for &b in &digits {
                cells.push(match operation {
                    Operation::Add => Some(cycle.add(a, b).0),
                    Operation::Subtract => Some(cycle.sub(a, b).0),
                    Operation::Multiply => Some(cycle.mul(a, b).0),
                    Operation::Divide => cycle.div(a, b),
                    Operation::AddCarry => Some(Digit::new(cycle.add(a, b).1)),
                    Operation::MulCarry => Some(Digit::new(cycle.mul(a, b).1)),
                });
            }
        }

        Self {
            operation,
            map: Arc::clone(algebra.shared_map()),
            symbols,
            cells,
        }
    }

    /// Every table over `algebra`, in [`Operation::ALL`] order.
    #[must_use]
    pub fn all(algebra: &Algebra) -> Vec<Self> {
        Operation::ALL
            .into_iter()
            .map(|op| Self::new(algebra, op))
            .collect()
    }

    /// The tabulated operation.
    #[inline]
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Row and column labels.
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The cell for `row op column`; `None` if undefined.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] if either symbol is outside the
    /// alphabet.
    pub fn cell(&self, row: char, column: char) -> Result<Option<Digit>> {
        let alphabet = self.map.alphabet();
        let r = alphabet
            .index_of(row)
            .ok_or(AlgebraError::UnknownSymbol { symbol: row, offset: 0 })?;
        let c = alphabet
            .index_of(column)
            .ok_or(AlgebraError::UnknownSymbol { symbol: column, offset: 0 })?;
        Ok(self.cells.get(r * self.symbols.len() + c).copied().flatten())
    }
}

impl fmt::Display for OperationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} table:", self.operation.title())?;
        write!(f, "{:CELL$}", "")?;
        for s in &self.symbols {
            write!(f, "{s:^CELL$}")?;
        }
        writeln!(f)?;

        for (row, s) in self.cells.chunks(self.symbols.len().max(1)).zip(&self.symbols) {
            write!(f, "{s:^CELL$}")?;
            for cell in row {
                let text = match cell {
                    Some(d) => self.map.class(*d).to_string(),
                    None => UNDEFINED.to_string(),
                };
                write!(f, "{text:^CELL$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::Alphabet;

    fn reference() -> Result<Algebra> {
        Ok(Algebra::new(PositionMap::parse(&Alphabet::new(8)?, "bhgecea{d,f}")?))
    }

    #[test]
    fn test_cells_agree_with_single_ops() -> Result<()> {
        let alg = reference()?;
        let add = OperationTable::new(&alg, Operation::Add);
        let carry = OperationTable::new(&alg, Operation::AddCarry);
        for &a in add.symbols() {
            for &b in add.symbols() {
                let digit = add.cell(a, b)?.map(|d| alg.map().symbol(d));
                assert_eq!(digit, Some(alg.add_single(a, b)?));
                assert_eq!(
                    carry.cell(a, b)?.map(|d| d.position()),
                    Some(alg.addition_carry(a, b)?)
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_division_marks_undefined() -> Result<()> {
        let alg = reference()?;
        let div = OperationTable::new(&alg, Operation::Divide);
        assert_eq!(div.cell('h', 'g')?, None);
        assert_eq!(div.cell('h', 'e')?, Some(Digit::new(5)));
        assert!(div.to_string().contains(UNDEFINED));
        Ok(())
    }

    #[test]
    fn test_grid_layout() -> Result<()> {
        let map = PositionMap::parse(&Alphabet::new(3)?, "a{b,c}")?;
        let table = OperationTable::new(&Algebra::new(map), Operation::Add);
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Addition table:");
        assert_eq!(lines[1], format!("{:7}{:^7}{:^7}{:^7}", "", "a", "b", "c"));
        assert_eq!(lines[2], format!("{:^7}{:^7}{:^7}{:^7}", "a", "a", "{b,c}", "{b,c}"));
        assert_eq!(lines[3], format!("{:^7}{:^7}{:^7}{:^7}", "b", "{b,c}", "a", "a"));
        assert_eq!(lines.len(), 5);
        Ok(())
    }

    #[test]
    fn test_names_parse() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
        assert!("pow".parse::<Operation>().is_err());
    }

    #[test]
    fn test_unknown_cell_symbol() -> Result<()> {
        let table = OperationTable::new(&reference()?, Operation::Multiply);
        assert!(matches!(
            table.cell('z', 'a'),
            Err(AlgebraError::UnknownSymbol { symbol: 'z', .. })
        ));
        Ok(())
    }
}
