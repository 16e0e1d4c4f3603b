//! Route traversal over Trackline grids.
//!
//! The engine walks a closed track from its start gate to its finish gate
//! in straight legs. Each leg is a ray cast along the current heading;
//! every cell of the leg is nudged sideways to keep [`RouteConfig::min_padding`]
//! cells of clearance from the walls where the track allows it. When a
//! leg runs into a wall the engine turns to one of the two perpendicular
//! headings, clockwise first, and repeats until the finish gate is
//! crossed or no turn makes progress.
//!
//! # Entry points
//!
//! - [`compute_route`] / [`compute_route_with`]: full start-to-finish run
//! - [`navigate`] / [`Navigator`]: the turn loop from an arbitrary position
//! - [`advance`]: one corrected straight leg
//! - [`correct_position`] / [`correct_path`]: padding correction

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod correct;
pub mod route;
pub mod traverse;

pub use config::{ConfigError, GateSelection, RouteConfig};
pub use correct::{correct_path, correct_position};
pub use route::{compute_route, compute_route_with, Route, RouteError, RouteStatus};
pub use traverse::{advance, navigate, Advance, Leg, Navigation, Navigator, StallReason};
