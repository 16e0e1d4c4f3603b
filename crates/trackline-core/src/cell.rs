//! Cell classifications and directed positions.

use crate::coord::Coordinate;
use crate::direction::Direction;
use std::fmt;

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKind {
    /// Wall or off-track terrain (`'0'`).
    Boundary,
    /// Drivable track surface (`'1'`).
    Traversable,
    /// Part of the start gate line (`'2'`).
    StartGate,
    /// Part of the finish gate line (`'3'`).
    FinishGate,
}

impl CellKind {
    /// Parse a map symbol. Returns `None` outside the `0`–`3` alphabet.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Self::Boundary),
            '1' => Some(Self::Traversable),
            '2' => Some(Self::StartGate),
            '3' => Some(Self::FinishGate),
            _ => None,
        }
    }

    /// The map symbol for this kind.
    pub const fn symbol(self) -> char {
        match self {
            Self::Boundary => '0',
            Self::Traversable => '1',
            Self::StartGate => '2',
            Self::FinishGate => '3',
        }
    }

    /// `true` for either gate kind.
    pub const fn is_gate(self) -> bool {
        matches!(self, Self::StartGate | Self::FinishGate)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boundary => "boundary",
            Self::Traversable => "traversable",
            Self::StartGate => "start gate",
            Self::FinishGate => "finish gate",
        };
        f.write_str(name)
    }
}

/// A directed position: standing at `coordinate`, facing `heading`, on a
/// cell classified `kind`.
///
/// Plain value. Every transformation produces a new `PositionState`;
/// the `with_*` helpers never mutate `self`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionState {
    /// Where the position stands.
    pub coordinate: Coordinate,
    /// Direction of travel.
    pub heading: Direction,
    /// Classification of the cell under the position.
    pub kind: CellKind,
}

impl PositionState {
    /// Create a position.
    pub const fn new(coordinate: Coordinate, heading: Direction, kind: CellKind) -> Self {
        Self {
            coordinate,
            heading,
            kind,
        }
    }

    /// Same place and cell, new heading.
    pub const fn with_heading(self, heading: Direction) -> Self {
        Self { heading, ..self }
    }

    /// Same heading, new place and cell.
    pub const fn moved_to(self, coordinate: Coordinate, kind: CellKind) -> Self {
        Self {
            coordinate,
            kind,
            ..self
        }
    }
}

impl fmt::Display for PositionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {} on {}", self.coordinate, self.heading, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for kind in [
            CellKind::Boundary,
            CellKind::Traversable,
            CellKind::StartGate,
            CellKind::FinishGate,
        ] {
            assert_eq!(CellKind::from_symbol(kind.symbol()), Some(kind));
        }
    }

    #[test]
    fn unknown_symbol_rejected() {
        assert_eq!(CellKind::from_symbol('4'), None);
        assert_eq!(CellKind::from_symbol('#'), None);
    }

    #[test]
    fn gates_are_gates() {
        assert!(CellKind::StartGate.is_gate());
        assert!(CellKind::FinishGate.is_gate());
        assert!(!CellKind::Traversable.is_gate());
    }

    #[test]
    fn with_heading_keeps_place() {
        let p = PositionState::new(Coordinate::new(1, 2), Direction::North, CellKind::Traversable);
        let q = p.with_heading(Direction::East);
        assert_eq!(q.coordinate, p.coordinate);
        assert_eq!(q.kind, p.kind);
        assert_eq!(q.heading, Direction::East);
        assert_eq!(p.heading, Direction::North);
    }

    #[test]
    fn display_reads_naturally() {
        let p = PositionState::new(Coordinate::new(4, 1), Direction::West, CellKind::FinishGate);
        assert_eq!(p.to_string(), "(4, 1) facing west on finish gate");
    }
}
