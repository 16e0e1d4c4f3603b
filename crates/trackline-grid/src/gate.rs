//! Start and finish gate location.
//!
//! A gate is a straight horizontal or vertical run of gate cells. On a
//! closed circuit the start line sits directly against the finish line,
//! so a gate cell's forward direction points away from the neighbouring
//! gate of the other kind. Where the other gate is not adjacent (open
//! test tracks, or a start line longer than the finish line), the gate
//! faces the first orthogonal neighbour that is drivable track instead.

use crate::grid::Grid;
use smallvec::SmallVec;
use trackline_core::{CellKind, Coordinate, Direction, PositionState, TrackError};

/// Every drivable cell of one gate line, ordered along the line.
pub type GateLine = SmallVec<[PositionState; 8]>;

/// Forward direction of the gate cell at `coord`, if it can be fixed.
///
/// Probes the four orthogonal neighbours in N, E, S, W order for
/// `opposite_kind` and faces away from the first hit. Without one, faces
/// toward the first traversable neighbour. Off-grid neighbours never
/// match.
fn orient(opposite_kind: CellKind, coord: Coordinate, grid: &Grid) -> Option<Direction> {
    Direction::CARDINALS
        .into_iter()
        .find(|&d| grid.is(opposite_kind, coord.neighbour(d)))
        .map(Direction::opposite)
        .or_else(|| {
            Direction::CARDINALS
                .into_iter()
                .find(|&d| grid.is(CellKind::Traversable, coord.neighbour(d)))
        })
}

/// Find the first `gate_kind` cell (row-major) and its forward heading.
///
/// Returns `Err(TrackError::NotFound)` if the grid has no `gate_kind`
/// cell and `Err(TrackError::GateOrientationNotFound)` if the cell has no
/// neighbour that orients it.
///
/// # Examples
///
/// ```
/// use trackline_core::{CellKind, Direction};
/// use trackline_grid::{locate_gate_forward, Grid};
///
/// let grid = Grid::parse("0000\n0321\n0321\n0000").unwrap();
/// let gate = locate_gate_forward(CellKind::StartGate, CellKind::FinishGate, &grid).unwrap();
/// assert_eq!(gate.heading, Direction::East);
/// ```
pub fn locate_gate_forward(
    gate_kind: CellKind,
    opposite_kind: CellKind,
    grid: &Grid,
) -> Result<PositionState, TrackError> {
    let coord = grid.find_first(gate_kind, 0)?;
    let heading = orient(opposite_kind, coord, grid).ok_or(TrackError::GateOrientationNotFound {
        kind: gate_kind,
        coord,
    })?;
    Ok(PositionState::new(coord, heading, gate_kind))
}

/// Enumerate the whole gate line containing the first `gate_kind` cell.
///
/// Scans outward from [`locate_gate_forward`]'s cell along both
/// directions perpendicular to its heading. A scan continues over
/// `gate_kind` cells, keeping those whose own orientation matches the
/// line's heading and skipping the rest, and stops at the first cell of
/// another kind or the grid edge.
///
/// The result is ordered along the line: the counter-clockwise side
/// first (farthest cell leading), then the located cell, then the
/// clockwise side. It always contains at least the located cell.
pub fn find_gate_line(
    gate_kind: CellKind,
    opposite_kind: CellKind,
    grid: &Grid,
) -> Result<GateLine, TrackError> {
    let origin = locate_gate_forward(gate_kind, opposite_kind, grid)?;
    let [clockwise, counter_clockwise] = origin.heading.perpendicular_pair();

    let scan = |direction: Direction| {
        let mut found = GateLine::new();
        for distance in 1.. {
            let coord = origin.coordinate.step(direction, distance);
            if !grid.is(gate_kind, coord) {
                break;
            }
            if orient(opposite_kind, coord, grid) == Some(origin.heading) {
                found.push(origin.moved_to(coord, gate_kind));
            }
        }
        found
    };

    let mut line: GateLine = scan(counter_clockwise).into_iter().rev().collect();
    line.push(origin);
    line.extend(scan(clockwise));
    Ok(line)
}

/// The start line: start gate cells facing away from the finish gate.
pub fn locate_start_line(grid: &Grid) -> Result<GateLine, TrackError> {
    find_gate_line(CellKind::StartGate, CellKind::FinishGate, grid)
}

/// The finish line: finish gate cells facing away from the start gate.
pub fn locate_finish_line(grid: &Grid) -> Result<GateLine, TrackError> {
    find_gate_line(CellKind::FinishGate, CellKind::StartGate, grid)
}
