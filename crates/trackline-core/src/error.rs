//! Error types shared by the grid and engine crates.
//!
//! All three kinds mean the grid is malformed or the caller asked for
//! something outside it. None of them is retryable; they abort the route
//! computation. Blocked turn probes and stalls are not errors and live in
//! the engine's result types instead.

use crate::cell::CellKind;
use crate::coord::Coordinate;
use std::error::Error;
use std::fmt;

/// Failures of grid lookups, gate location and ray casting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackError {
    /// A coordinate lookup fell outside the grid, or a ray ran past the
    /// grid's maximum extent without meeting a non-matching cell.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coordinate,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// No cell of the requested kind exists at or after the search index.
    NotFound {
        /// The kind that was searched for.
        kind: CellKind,
        /// Row-major index the search started from.
        from_index: usize,
    },
    /// A gate cell has no neighbour that fixes its forward direction.
    GateOrientationNotFound {
        /// The gate kind being oriented.
        kind: CellKind,
        /// The gate cell that could not be oriented.
        coord: Coordinate,
    },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::NotFound { kind, from_index } => {
                write!(f, "no {kind} cell found from index {from_index}")
            }
            Self::GateOrientationNotFound { kind, coord } => {
                write!(f, "cannot orient {kind} at {coord}: no adjacent gate or track")
            }
        }
    }
}

impl Error for TrackError {}
