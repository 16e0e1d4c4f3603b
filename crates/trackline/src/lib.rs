//! Trackline: padded racing lines through character-grid tracks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Trackline sub-crates. For most users, adding `trackline` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trackline::prelude::*;
//!
//! let grid = Grid::parse(
//!     "0000000000
//!      0111321110
//!      0111321110
//!      0111000110
//!      0111111110
//!      0111111110
//!      0000000000",
//! )
//! .unwrap();
//!
//! let route = compute_route(0, &grid).unwrap();
//! assert!(route.is_complete());
//! assert_eq!(route.end().kind, CellKind::FinishGate);
//!
//! let picture = trackline::render::render_route(&grid, &route);
//! assert!(picture.contains('*'));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trackline-core` | Coordinates, directions, cell kinds, `TrackError` |
//! | [`grid`] | `trackline-grid` | The grid, gate location and ray casting |
//! | [`engine`] | `trackline-engine` | Padding correction, traversal and route configuration |
//! | [`render`] | this crate | Text rendering of a route over its grid |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions and cell kinds (`trackline-core`).
pub use trackline_core as types;

/// Track grids and spatial queries (`trackline-grid`).
///
/// Provides [`grid::Grid`], the gate locators such as
/// [`grid::locate_start_line`], and [`grid::cast_ray`].
pub use trackline_grid as grid;

/// Route computation (`trackline-engine`).
///
/// [`engine::compute_route_with`] runs a full route under a
/// [`engine::RouteConfig`]; [`engine::Navigator`] exposes the turn loop.
pub use trackline_engine as engine;

pub mod render;

/// Common imports for typical Trackline usage.
///
/// ```rust
/// use trackline::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use trackline_core::{CellKind, Coordinate, Direction, PositionState, TrackError};

    // Grid
    pub use trackline_grid::{Grid, GridError};

    // Engine
    pub use trackline_engine::{
        compute_route, compute_route_with, ConfigError, GateSelection, Leg, Route, RouteConfig,
        RouteError, RouteStatus, StallReason,
    };
}
