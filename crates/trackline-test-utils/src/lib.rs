//! Test utilities for Trackline development.
//!
//! [`tracks`] holds hand-drawn fixture maps with known routes;
//! [`generate`] builds seeded rectangular circuits for property tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod generate;
pub mod tracks;

pub use generate::{ring_track, RingSpec};

use trackline_grid::Grid;

/// Parse a fixture map, panicking with the parse error on failure.
pub fn grid(text: &str) -> Grid {
    match Grid::parse(text) {
        Ok(grid) => grid,
        Err(e) => panic!("fixture does not parse: {e}"),
    }
}
