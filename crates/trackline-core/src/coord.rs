//! Grid-space coordinates and directional stepping.

use crate::direction::Direction;
use std::fmt;

/// A position in grid space.
///
/// `x` is the column and `y` is the row, both zero-based. Coordinates are
/// signed so that stepping past an edge yields a representable (if
/// out-of-range) value; bounds checking is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from a column and a row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step `magnitude` cells along `direction`.
    ///
    /// Cardinal directions move along one axis, diagonals move both axes
    /// by the same amount. Total: never fails, may leave the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackline_core::{Coordinate, Direction};
    ///
    /// let c = Coordinate::new(3, 3);
    /// assert_eq!(c.step(Direction::North, 2), Coordinate::new(3, 1));
    /// assert_eq!(c.step(Direction::SouthWest, 1), Coordinate::new(2, 4));
    /// ```
    pub fn step(self, direction: Direction, magnitude: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * magnitude,
            y: self.y + dy * magnitude,
        }
    }

    /// Step a single cell along `direction`.
    pub fn neighbour(self, direction: Direction) -> Self {
        self.step(direction, 1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
