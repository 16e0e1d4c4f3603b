//! Benchmark tracks for the Trackline route engine.
//!
//! - [`circuit`]: the 28x15 hand-drawn circuit
//! - [`large_ring`]: a 400x300 ring with a 40-cell corridor
//! - [`ring_batch`]: a fixed set of seeded rings

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trackline_grid::Grid;
use trackline_test_utils::{ring_track, tracks, RingSpec};

/// The hand-drawn benchmark circuit.
pub fn circuit() -> Grid {
    trackline_test_utils::grid(tracks::CIRCUIT)
}

/// A 400x300 ring (120K cells). Rays here run hundreds of cells.
pub fn large_ring() -> Grid {
    RingSpec {
        width: 400,
        height: 300,
        corridor: 40,
        gate_x: 100,
    }
    .build()
}

/// `n` rings drawn from seeds `0..n`.
pub fn ring_batch(n: u64) -> Vec<Grid> {
    (0..n).map(ring_track).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_ring_dimensions() {
        let g = large_ring();
        assert_eq!(g.width(), 400);
        assert_eq!(g.height(), 300);
        assert_eq!(g.cell_count(), 120_000);
    }

    #[test]
    fn ring_batch_deterministic() {
        assert_eq!(ring_batch(8), ring_batch(8));
        assert_eq!(ring_batch(8).len(), 8);
    }
}
