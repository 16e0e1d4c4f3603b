//! Lateral padding correction.
//!
//! Best effort: a side that is too close to the wall is fixed by shifting
//! away from it, but only onto a traversable cell. Narrow sections simply
//! keep whatever clearance they have.

use trackline_core::{CellKind, PositionState, TrackError};
use trackline_grid::{cast_ray, Grid, TraceResult};

/// Shift `position` sideways so both perpendicular sides keep at least
/// `min_padding` traversable cells of clearance.
///
/// The sides are checked in [`perpendicular_pair`] order. For each, a
/// traversable ray is cast from the position as corrected so far; a short
/// side of length `n` shifts the position `min_padding - n` cells the
/// other way if that cell is traversable, and is left alone otherwise.
/// The heading never changes. A deficit longer than the grid's extent is
/// treated like a shift onto a wall, so any `min_padding` is accepted.
///
/// Returns an error only if a side ray leaves the grid.
///
/// [`perpendicular_pair`]: trackline_core::Direction::perpendicular_pair
pub fn correct_position(
    min_padding: u32,
    position: PositionState,
    grid: &Grid,
) -> Result<PositionState, TrackError> {
    let padding = min_padding as usize;
    let mut corrected = position;
    for side in position.heading.perpendicular_pair() {
        let clearance = cast_ray(CellKind::Traversable, corrected.with_heading(side), grid)?.len();
        if clearance >= padding {
            continue;
        }
        // a shift longer than the grid can never land on it
        let deficit = padding - clearance;
        if deficit > grid.max_extent() {
            continue;
        }
        let Ok(deficit) = i32::try_from(deficit) else {
            continue;
        };
        let shifted = corrected.coordinate.step(side.opposite(), deficit);
        if grid.is(CellKind::Traversable, shifted) {
            corrected = corrected.moved_to(shifted, CellKind::Traversable);
        }
    }
    Ok(corrected)
}

/// Correct every position of a trace.
///
/// With `trim_end`, the last `min_padding` positions are dropped first:
/// they sit inside the clearance zone of the wall the trace ran into.
pub fn correct_path(
    min_padding: u32,
    trace: &TraceResult,
    grid: &Grid,
    trim_end: bool,
) -> Result<Vec<PositionState>, TrackError> {
    let keep = if trim_end {
        trace.len().saturating_sub(min_padding as usize)
    } else {
        trace.len()
    };
    trace.path[..keep]
        .iter()
        .map(|&position| correct_position(min_padding, position, grid))
        .collect()
}
