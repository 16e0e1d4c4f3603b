//! Straight-line ray casts over a grid.

use crate::grid::Grid;
use smallvec::SmallVec;
use trackline_core::{CellKind, Coordinate, PositionState, TrackError};

/// The first cell of a cast that failed the kind test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Where the ray stopped.
    pub coordinate: Coordinate,
    /// What it hit.
    pub kind: CellKind,
}

/// Outcome of one [`cast_ray`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceResult {
    /// Every matching cell stepped over, nearest first, each carrying the
    /// ray's heading. Never includes the origin.
    pub path: SmallVec<[PositionState; 16]>,
    /// The first non-matching cell.
    pub boundary: Hit,
}

impl TraceResult {
    /// Number of matching cells before the hit.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` when the very first step already failed the test.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Farthest matching position, if any.
    pub fn last(&self) -> Option<PositionState> {
        self.path.last().copied()
    }
}

/// Step from `origin` along its heading until a cell is not `target`.
///
/// Each matching cell is appended to the path as a new position with the
/// origin's heading; the first non-matching cell becomes the hit. The
/// origin cell itself is never tested.
///
/// A cast makes at most [`Grid::max_extent`] steps. Leaving the grid, or
/// exhausting that budget, returns `Err(TrackError::OutOfBounds)`: on a
/// well-formed track every ray ends on a boundary before either happens.
///
/// # Examples
///
/// ```
/// use trackline_core::{CellKind, Coordinate, Direction, PositionState};
/// use trackline_grid::{cast_ray, Grid};
///
/// let grid = Grid::parse("000000\n011110\n000000").unwrap();
/// let origin = PositionState::new(Coordinate::new(1, 1), Direction::East, CellKind::Traversable);
/// let trace = cast_ray(CellKind::Traversable, origin, &grid).unwrap();
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace.boundary.coordinate, Coordinate::new(5, 1));
/// ```
pub fn cast_ray(
    target: CellKind,
    origin: PositionState,
    grid: &Grid,
) -> Result<TraceResult, TrackError> {
    let limit = grid.max_extent();
    let mut path = SmallVec::new();
    for distance in 1..=limit {
        let coordinate = origin.coordinate.step(origin.heading, distance as i32);
        let kind = grid.cell_at(coordinate)?;
        if kind != target {
            return Ok(TraceResult {
                path,
                boundary: Hit { coordinate, kind },
            });
        }
        path.push(origin.moved_to(coordinate, kind));
    }
    Err(TrackError::OutOfBounds {
        coord: origin.coordinate.step(origin.heading, limit as i32 + 1),
        bounds: format!(
            "ray from {} exceeded the grid extent of {limit} steps",
            origin.coordinate
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use trackline_core::Direction;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn at(x: i32, y: i32, heading: Direction) -> PositionState {
        PositionState::new(c(x, y), heading, CellKind::Traversable)
    }

    #[test]
    fn stops_at_first_mismatch() {
        let g = Grid::parse(
            "0000000
             0111130
             0000000",
        )
        .unwrap();
        let trace = cast_ray(CellKind::Traversable, at(1, 1, Direction::East), &g).unwrap();
        let xs: Vec<i32> = trace.path.iter().map(|p| p.coordinate.x).collect();
        assert_eq!(xs, vec![2, 3, 4]);
        assert_eq!(
            trace.boundary,
            Hit {
                coordinate: c(5, 1),
                kind: CellKind::FinishGate
            }
        );
        assert!(trace.path.iter().all(|p| p.heading == Direction::East));
    }

    #[test]
    fn immediately_blocked_is_empty() {
        let g = Grid::parse("000\n010\n000").unwrap();
        let trace = cast_ray(CellKind::Traversable, at(1, 1, Direction::North), &g).unwrap();
        assert!(trace.is_empty());
        assert_eq!(trace.last(), None);
        assert_eq!(trace.boundary.coordinate, c(1, 0));
        assert_eq!(trace.boundary.kind, CellKind::Boundary);
    }

    #[test]
    fn diagonal_ray() {
        let g = Grid::parse(
            "00000
             01110
             01110
             01110
             00000",
        )
        .unwrap();
        let trace = cast_ray(CellKind::Traversable, at(1, 1, Direction::SouthEast), &g).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().map(|p| p.coordinate), Some(c(3, 3)));
        assert_eq!(trace.boundary.coordinate, c(4, 4));
    }

    #[test]
    fn leaving_the_grid_is_out_of_bounds() {
        // no boundary between the origin and the east edge
        let g = Grid::parse("1111").unwrap();
        assert!(matches!(
            cast_ray(CellKind::Traversable, at(0, 0, Direction::East), &g),
            Err(TrackError::OutOfBounds { coord, .. }) if coord == c(4, 0)
        ));
    }

    #[test]
    fn origin_cell_is_not_tested() {
        let g = Grid::parse("0000\n0210\n0000").unwrap();
        let origin = PositionState::new(c(1, 1), Direction::East, CellKind::StartGate);
        let trace = cast_ray(CellKind::Traversable, origin, &g).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.path[0].kind, CellKind::Traversable);
    }

    proptest! {
        #[test]
        fn corridor_of_length_n(n in 1usize..40) {
            let row: String = format!("0{}0", "1".repeat(n));
            let wall = "0".repeat(n + 2);
            let g = Grid::parse(&format!("{wall}\n{row}\n{wall}")).unwrap();

            let from_west = PositionState::new(c(0, 1), Direction::East, CellKind::Boundary);
            let trace = cast_ray(CellKind::Traversable, from_west, &g).unwrap();
            prop_assert_eq!(trace.len(), n);
            prop_assert_eq!(trace.boundary.kind, CellKind::Boundary);
            prop_assert_eq!(trace.boundary.coordinate, c(n as i32 + 1, 1));

            for (i, p) in trace.path.iter().enumerate() {
                prop_assert_eq!(p.coordinate, c(i as i32 + 1, 1));
            }
        }
    }
}
