//! Error types for grid construction.

use std::fmt;

/// Errors arising while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no rows, or its rows have no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character outside the track alphabet.
    UnknownCell {
        /// The offending character.
        symbol: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
    /// A dimension does not fit in an `i32` coordinate.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// Maximum allowed size.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one cell"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::UnknownCell { symbol, row, col } => {
                write!(f, "unknown cell symbol {symbol:?} at row {row}, column {col}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
