//! Hand-drawn fixture tracks.
//!
//! Alphabet: `0` boundary, `1` track, `2` start gate, `3` finish gate.

/// 5×5 open grid: start row on top, finish row at the bottom, a 3-wide
/// straight between them. The start gate faces south toward the track.
pub const OPEN_GATES: &str = "
    02220
    01110
    01110
    01110
    03330
";

/// 12×10 clockwise ring with a 3-wide corridor. The finish line (x=4)
/// sits directly behind the start line (x=5) on the top straight, so the
/// start gate faces east.
///
/// With padding 1 the route departs from (5, 2) and stops at (9, 2),
/// (9, 8), (1, 7) and (2, 1) before crossing the finish at (4, 1).
pub const SMALL_RING: &str = "
    000000000000
    011132111110
    011132111110
    011132111110
    011100001110
    011100001110
    011111111110
    011111111110
    011111111110
    000000000000
";

/// A corridor from (1, 3) up to (1, 1) that turns east into a pocket
/// ending at (5, 1), walled on three sides.
pub const DEAD_END: &str = "
    0000000
    0111110
    0100000
    0100000
    0000000
";

/// A larger clockwise circuit with a 4-wide corridor, used by the demo
/// and benchmarks.
pub const CIRCUIT: &str = "
    0000000000000000000000000000
    0111111132111111111111111110
    0111111132111111111111111110
    0111111132111111111111111110
    0111111132111111111111111110
    0111100000000000000000011110
    0111100000000000000000011110
    0111100000000000000000011110
    0111100000000000000000011110
    0111100000000000000000011110
    0111111111111111111111111110
    0111111111111111111111111110
    0111111111111111111111111110
    0111111111111111111111111110
    0000000000000000000000000000
";
