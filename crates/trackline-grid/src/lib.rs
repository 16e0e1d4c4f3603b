//! Track grids and the spatial queries the traversal engine runs on them.
//!
//! # Contents
//!
//! - [`Grid`]: the immutable cell map with index/coordinate conversion
//!   and a parser for the `0`/`1`/`2`/`3` track alphabet
//! - [`gate`]: start and finish gate location and orientation
//! - [`ray`]: straight-line casts that stop at the first non-matching cell
//!
//! Everything here is read-only over a borrowed [`Grid`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod gate;
pub mod grid;
pub mod ray;

pub use error::GridError;
pub use gate::{
    find_gate_line, locate_finish_line, locate_gate_forward, locate_start_line, GateLine,
};
pub use grid::Grid;
pub use ray::{cast_ray, Hit, TraceResult};
