//! Seeded rectangular circuits.
//!
//! A ring is a rectangle of track around a solid inner block, walled on
//! all four sides. The finish line sits directly behind the start line on
//! the top straight, so every ring is driven clockwise.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trackline_grid::Grid;

/// Shape of a generated ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingSpec {
    /// Grid width, including the outer wall.
    pub width: u32,
    /// Grid height, including the outer wall.
    pub height: u32,
    /// Corridor width in cells.
    pub corridor: u32,
    /// Column of the finish line; the start line is one column east.
    pub gate_x: u32,
}

impl RingSpec {
    /// Draw a ring shape from `seed`.
    ///
    /// The corridor is 2 to 5 cells wide and the inner block is at least
    /// two cells wide and one cell tall, with both gate columns above it.
    pub fn random(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let corridor = 2 + rng.next_u32() % 4;
        let width = 2 * corridor + 4 + rng.next_u32() % 16;
        let height = 2 * corridor + 3 + rng.next_u32() % 12;
        let gate_x = 1 + corridor + rng.next_u32() % (width - 2 * corridor - 3);
        Self {
            width,
            height,
            corridor,
            gate_x,
        }
    }

    /// Cell symbol at `(x, y)`.
    fn symbol(&self, x: u32, y: u32) -> char {
        let c = self.corridor;
        let outer = x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1;
        let inner = (1 + c..self.width - 1 - c).contains(&x) && (1 + c..self.height - 1 - c).contains(&y);
        if outer || inner {
            '0'
        } else if (1..=c).contains(&y) && x == self.gate_x {
            '3'
        } else if (1..=c).contains(&y) && x == self.gate_x + 1 {
            '2'
        } else {
            '1'
        }
    }

    /// The ring as map text, one row per line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            out.extend((0..self.width).map(|x| self.symbol(x, y)));
            out.push('\n');
        }
        out
    }

    /// Build the grid.
    pub fn build(&self) -> Grid {
        crate::grid(&self.render())
    }
}

/// Build the ring drawn from `seed`.
pub fn ring_track(seed: u64) -> Grid {
    RingSpec::random(seed).build()
}
