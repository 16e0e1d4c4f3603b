//! Route configuration and validation.
//!
//! [`RouteConfig`] is the input to [`compute_route_with`](crate::compute_route_with).
//! [`validate()`](RouteConfig::validate) checks it against the grid before
//! any ray is cast; the gate index is checked once the start line is known.

use std::error::Error;
use std::fmt;

use trackline_core::PositionState;
use trackline_grid::Grid;

// ── GateSelection ──────────────────────────────────────────────────

/// Which cell of the start line the route departs from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateSelection {
    /// The middle cell of the ordered start line.
    #[default]
    Middle,
    /// A fixed index into the ordered start line.
    Index(usize),
}

impl GateSelection {
    /// Pick a position from an ordered gate line.
    ///
    /// Returns `Err(ConfigError::GateIndexOutOfRange)` if the line is too
    /// short for the selection.
    pub fn pick(self, line: &[PositionState]) -> Result<PositionState, ConfigError> {
        let index = match self {
            Self::Middle => line.len() / 2,
            Self::Index(i) => i,
        };
        line.get(index)
            .copied()
            .ok_or(ConfigError::GateIndexOutOfRange {
                index,
                len: line.len(),
            })
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`RouteConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Padding cannot fit inside the grid at all.
    PaddingTooLarge {
        /// The configured padding.
        padding: u32,
        /// The grid's larger dimension.
        limit: u32,
    },
    /// `max_legs` is `Some(0)`.
    ZeroLegLimit,
    /// `GateSelection::Index` points past the end of the start line.
    GateIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cells on the start line.
        len: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaddingTooLarge { padding, limit } => {
                write!(f, "min_padding {padding} must be below the grid extent {limit}")
            }
            Self::ZeroLegLimit => write!(f, "max_legs must be at least 1"),
            Self::GateIndexOutOfRange { index, len } => {
                write!(f, "gate index {index} out of range for a start line of {len} cells")
            }
        }
    }
}

impl Error for ConfigError {}

// ── RouteConfig ────────────────────────────────────────────────────

/// Parameters for one route computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteConfig {
    /// Minimum clearance in cells between the route and the walls on
    /// both sides. Default: 2.
    pub min_padding: u32,
    /// Start line cell to depart from. Default: [`GateSelection::Middle`].
    pub gate: GateSelection,
    /// Optional cap on the number of straight legs, including the first
    /// one off the start line. Default: `None`.
    pub max_legs: Option<usize>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            min_padding: 2,
            gate: GateSelection::Middle,
            max_legs: None,
        }
    }
}

impl RouteConfig {
    /// Default configuration with the given padding.
    pub fn with_padding(min_padding: u32) -> Self {
        Self {
            min_padding,
            ..Self::default()
        }
    }

    /// Validate against the grid the route will run on.
    pub fn validate(&self, grid: &Grid) -> Result<(), ConfigError> {
        let limit = grid.width().max(grid.height());
        if self.min_padding >= limit {
            return Err(ConfigError::PaddingTooLarge {
                padding: self.min_padding,
                limit,
            });
        }
        if self.max_legs == Some(0) {
            return Err(ConfigError::ZeroLegLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackline_core::{CellKind, Coordinate, Direction};

    fn line(n: i32) -> Vec<PositionState> {
        (0..n)
            .map(|y| PositionState::new(Coordinate::new(3, y), Direction::East, CellKind::StartGate))
            .collect()
    }

    #[test]
    fn default_matches_documented_values() {
        let cfg = RouteConfig::default();
        assert_eq!(cfg.min_padding, 2);
        assert_eq!(cfg.gate, GateSelection::Middle);
        assert_eq!(cfg.max_legs, None);
    }

    #[test]
    fn pick_middle() {
        assert_eq!(GateSelection::Middle.pick(&line(5)).unwrap().coordinate.y, 2);
        assert_eq!(GateSelection::Middle.pick(&line(4)).unwrap().coordinate.y, 2);
        assert_eq!(GateSelection::Middle.pick(&line(1)).unwrap().coordinate.y, 0);
    }

    #[test]
    fn pick_index_out_of_range() {
        assert_eq!(
            GateSelection::Index(5).pick(&line(3)),
            Err(ConfigError::GateIndexOutOfRange { index: 5, len: 3 })
        );
        assert_eq!(GateSelection::Index(2).pick(&line(3)).unwrap().coordinate.y, 2);
    }

    #[test]
    fn validate_padding_against_grid() {
        let grid = Grid::parse("0000\n0110\n0000").unwrap();
        assert!(RouteConfig::with_padding(3).validate(&grid).is_ok());
        assert_eq!(
            RouteConfig::with_padding(4).validate(&grid),
            Err(ConfigError::PaddingTooLarge {
                padding: 4,
                limit: 4
            })
        );
    }

    #[test]
    fn validate_zero_leg_limit() {
        let grid = Grid::parse("0000\n0110\n0000").unwrap();
        let cfg = RouteConfig {
            max_legs: Some(0),
            ..RouteConfig::with_padding(1)
        };
        assert_eq!(cfg.validate(&grid), Err(ConfigError::ZeroLegLimit));
    }
}
