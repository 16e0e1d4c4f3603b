//! Start-to-finish route computation.

use std::error::Error;
use std::fmt;

use tracing::{debug, info, warn};
use trackline_core::{CellKind, PositionState, TrackError};
use trackline_grid::{locate_finish_line, locate_start_line, Grid};

use crate::config::{ConfigError, RouteConfig};
use crate::traverse::{advance, Advance, Leg, Navigator, StallReason};

// ── RouteError ─────────────────────────────────────────────────────

/// Errors that abort a route computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// The grid is malformed: a gate is missing or cannot be oriented,
    /// or a ray left the grid.
    Track(TrackError),
    /// The configuration does not fit the grid.
    Config(ConfigError),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track(e) => write!(f, "track: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for RouteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Track(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<TrackError> for RouteError {
    fn from(e: TrackError) -> Self {
        Self::Track(e)
    }
}

impl From<ConfigError> for RouteError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── Route ──────────────────────────────────────────────────────────

/// How a route ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteStatus {
    /// The route crossed the finish gate.
    Complete,
    /// The route stopped short; the legs so far are still valid.
    Stalled(StallReason),
}

/// A computed route: the start gate position and the legs driven from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    start: PositionState,
    legs: Vec<Leg>,
    status: RouteStatus,
}

impl Route {
    /// The start line cell the route departed from.
    pub fn start(&self) -> PositionState {
        self.start
    }

    /// Straight legs in driving order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// How the route ended.
    pub fn status(&self) -> RouteStatus {
        self.status
    }

    /// `true` if the route reached the finish gate.
    pub fn is_complete(&self) -> bool {
        self.status == RouteStatus::Complete
    }

    /// Where the route stops: on the finish gate when complete.
    pub fn end(&self) -> PositionState {
        self.legs.last().map_or(self.start, Leg::end)
    }

    /// The start followed by the end of every leg.
    pub fn waypoints(&self) -> impl Iterator<Item = PositionState> + '_ {
        std::iter::once(self.start).chain(self.legs.iter().map(Leg::end))
    }

    /// Every position on the route: the start, then each leg's corrected
    /// steps in order.
    pub fn positions(&self) -> impl Iterator<Item = PositionState> + '_ {
        std::iter::once(self.start).chain(self.legs.iter().flat_map(|leg| leg.steps().iter().copied()))
    }
}

// ── compute_route ──────────────────────────────────────────────────

/// Compute a route with `min_padding` and otherwise default settings.
///
/// # Examples
///
/// ```
/// use trackline_engine::compute_route;
/// use trackline_grid::Grid;
///
/// let grid = Grid::parse(
///     "02220
///      01110
///      01110
///      01110
///      03330",
/// )
/// .unwrap();
/// let route = compute_route(1, &grid).unwrap();
/// assert!(route.is_complete());
/// ```
pub fn compute_route(min_padding: u32, grid: &Grid) -> Result<Route, RouteError> {
    compute_route_with(&RouteConfig::with_padding(min_padding), grid)
}

/// Compute a route from the start gate to the finish gate.
///
/// Locates both gate lines (a missing or unorientable gate aborts),
/// departs from the configured start line cell, drives straight ahead
/// with end trimming, then turns and drives until the finish gate is
/// crossed or the engine stalls. A stall is a normal outcome reported in
/// [`Route::status`].
pub fn compute_route_with(config: &RouteConfig, grid: &Grid) -> Result<Route, RouteError> {
    config.validate(grid)?;

    let start_line = locate_start_line(grid)?;
    let finish_line = locate_finish_line(grid)?;
    let start = config.gate.pick(&start_line)?;
    debug!(
        start = %start,
        start_line = start_line.len(),
        finish_line = finish_line.len(),
        min_padding = config.min_padding,
        "route departing"
    );

    let mut legs = Vec::new();
    let mut origin = start;
    if let Advance::Moved(leg) = advance(start, config.min_padding, grid, true)? {
        origin = leg.end();
        legs.push(leg);
    }

    let status = if origin.kind == CellKind::FinishGate {
        RouteStatus::Complete
    } else {
        let budget = config.max_legs.map(|max| max.saturating_sub(legs.len()));
        let mut navigator = Navigator::new(grid, config.min_padding).with_max_legs(budget);
        navigator.mark_visited(start);
        let navigation = navigator.run(origin)?;
        legs.extend(navigation.legs);
        navigation
            .stall
            .map_or(RouteStatus::Complete, RouteStatus::Stalled)
    };

    let route = Route {
        start,
        legs,
        status,
    };
    log_route(&route);
    Ok(route)
}

fn log_route(route: &Route) {
    for (index, leg) in route.legs().iter().enumerate() {
        debug!(
            leg = index,
            heading = %leg.heading(),
            steps = leg.steps().len(),
            end = %leg.end(),
            "leg"
        );
    }
    match route.status() {
        RouteStatus::Complete => {
            info!(legs = route.legs().len(), end = %route.end(), "route complete");
        }
        RouteStatus::Stalled(reason) => {
            warn!(legs = route.legs().len(), at = %route.end(), %reason, "route stalled");
        }
    }
}
