//! Core types for the Trackline track traversal engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other Trackline crate passes around: grid
//! [`Coordinate`]s, the 8-way [`Direction`] compass with its fixed
//! relation tables, [`CellKind`] classifications, directed
//! [`PositionState`]s, and the [`TrackError`] failure kinds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod direction;
pub mod error;

pub use cell::{CellKind, PositionState};
pub use coord::Coordinate;
pub use direction::Direction;
pub use error::TrackError;
