//! Straight legs and the turn loop.
//!
//! [`advance`] produces one corrected leg along the current heading.
//! [`Navigator`] chains legs: from the end of each, it probes the two
//! perpendicular headings in [`perpendicular_pair`] order and follows the
//! first that moves. The loop keeps an insertion-ordered log of every
//! `(coordinate, heading)` it has stopped at; stopping at one twice ends
//! the run, so navigation terminates on any finite grid.
//!
//! [`perpendicular_pair`]: trackline_core::Direction::perpendicular_pair

use std::fmt;

use crate::correct::correct_path;
use indexmap::IndexSet;
use trackline_core::{CellKind, Coordinate, Direction, PositionState, TrackError};
use trackline_grid::{cast_ray, Grid};

// ── Leg ────────────────────────────────────────────────────────────

/// One straight, padding-corrected run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    heading: Direction,
    steps: Vec<PositionState>,
    end: PositionState,
}

impl Leg {
    /// Direction the leg was driven in.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Corrected positions in driving order. Never empty; the last one is
    /// [`end`](Self::end).
    pub fn steps(&self) -> &[PositionState] {
        &self.steps
    }

    /// Where the leg stops.
    pub fn end(&self) -> PositionState {
        self.end
    }

    /// `true` if the leg crossed onto the finish gate.
    pub fn reached_finish(&self) -> bool {
        self.end.kind == CellKind::FinishGate
    }
}

/// Result of [`advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The position moved along a leg.
    Moved(Leg),
    /// The first cell ahead is not traversable, or padding trimmed the
    /// whole leg away.
    NoPath,
}

/// Drive straight ahead from `position` as far as the track allows.
///
/// Casts a traversable ray along `position.heading` and corrects it with
/// [`correct_path`], trimming the last `min_padding` cells when
/// `trim_end` is set. When the ray ends on the finish gate, nothing is
/// trimmed and the finish cell is appended as the leg's end, so the leg
/// runs unbroken up to the line. An empty ray is [`Advance::NoPath`].
pub fn advance(
    position: PositionState,
    min_padding: u32,
    grid: &Grid,
    trim_end: bool,
) -> Result<Advance, TrackError> {
    let trace = cast_ray(CellKind::Traversable, position, grid)?;
    if trace.is_empty() {
        return Ok(Advance::NoPath);
    }
    let crosses_finish = trace.boundary.kind == CellKind::FinishGate;
    let mut steps = correct_path(min_padding, &trace, grid, trim_end && !crosses_finish)?;
    if crosses_finish {
        steps.push(position.moved_to(trace.boundary.coordinate, CellKind::FinishGate));
    }
    Ok(match steps.last().copied() {
        Some(end) => Advance::Moved(Leg {
            heading: position.heading,
            steps,
            end,
        }),
        None => Advance::NoPath,
    })
}

// ── Navigation ─────────────────────────────────────────────────────

/// Why navigation stopped short of the finish gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StallReason {
    /// Neither perpendicular heading moves.
    NoTurn,
    /// A leg ended on a `(coordinate, heading)` already stopped at.
    Revisit,
    /// The configured leg budget ran out.
    LegLimit,
}

impl fmt::Display for StallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTurn => write!(f, "no viable turn"),
            Self::Revisit => write!(f, "revisited an earlier stop"),
            Self::LegLimit => write!(f, "leg limit reached"),
        }
    }
}

/// Result of a [`Navigator`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Legs driven, in order.
    pub legs: Vec<Leg>,
    /// Final position: on the finish gate, or where the run stalled.
    pub position: PositionState,
    /// `None` when the finish gate was reached.
    pub stall: Option<StallReason>,
}

impl Navigation {
    /// `true` if the run ended on the finish gate.
    pub fn finished(&self) -> bool {
        self.stall.is_none()
    }
}

/// The turn loop, with its visited log and optional leg budget.
#[derive(Debug)]
pub struct Navigator<'g> {
    grid: &'g Grid,
    min_padding: u32,
    max_legs: Option<usize>,
    visited: IndexSet<(Coordinate, Direction)>,
}

impl<'g> Navigator<'g> {
    /// A navigator over `grid` with no leg budget.
    pub fn new(grid: &'g Grid, min_padding: u32) -> Self {
        Self {
            grid,
            min_padding,
            max_legs: None,
            visited: IndexSet::new(),
        }
    }

    /// Stall with [`StallReason::LegLimit`] after `max_legs` legs.
    pub fn with_max_legs(mut self, max_legs: Option<usize>) -> Self {
        self.max_legs = max_legs;
        self
    }

    /// Record a stop. Returns `false` if it was already recorded.
    pub fn mark_visited(&mut self, position: PositionState) -> bool {
        self.visited.insert((position.coordinate, position.heading))
    }

    /// Every recorded stop, oldest first.
    pub fn visited(&self) -> impl Iterator<Item = (Coordinate, Direction)> + '_ {
        self.visited.iter().copied()
    }

    /// Turn and drive from `start` until the finish gate or a stall.
    ///
    /// Each round probes the perpendicular headings of the current
    /// position in order, advancing without trimming, and takes the
    /// first that moves. Errors abort the run: they only come from rays
    /// leaving a malformed grid.
    pub fn run(&mut self, start: PositionState) -> Result<Navigation, TrackError> {
        self.mark_visited(start);
        let mut position = start;
        let mut legs: Vec<Leg> = Vec::new();

        let stall = loop {
            if self.max_legs.is_some_and(|max| legs.len() >= max) {
                break StallReason::LegLimit;
            }

            let Some(leg) = self.turn(position)? else {
                break StallReason::NoTurn;
            };
            let end = leg.end();
            legs.push(leg);
            position = end;

            if end.kind == CellKind::FinishGate {
                return Ok(Navigation {
                    legs,
                    position,
                    stall: None,
                });
            }
            if !self.mark_visited(end) {
                break StallReason::Revisit;
            }
        };

        Ok(Navigation {
            legs,
            position,
            stall: Some(stall),
        })
    }

    /// First perpendicular heading from `position` that moves.
    fn turn(&self, position: PositionState) -> Result<Option<Leg>, TrackError> {
        for candidate in position.heading.perpendicular_pair() {
            let probe = position.with_heading(candidate);
            if let Advance::Moved(leg) = advance(probe, self.min_padding, self.grid, false)? {
                return Ok(Some(leg));
            }
        }
        Ok(None)
    }
}

/// Navigate from `position` with no leg budget.
pub fn navigate(
    position: PositionState,
    min_padding: u32,
    grid: &Grid,
) -> Result<Navigation, TrackError> {
    Navigator::new(grid, min_padding).run(position)
}
