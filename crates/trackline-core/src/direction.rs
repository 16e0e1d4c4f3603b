//! The 8-way compass and its fixed relation tables.
//!
//! Cardinal directions drive gate orientation, ray casts and turns.
//! Diagonals only exist for diagonal stepping.

use std::fmt;

/// One of the eight compass directions.
///
/// `y` grows southward, so [`North`](Direction::North) has delta `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `(0, -1)`
    North,
    /// `(1, -1)`
    NorthEast,
    /// `(1, 0)`
    East,
    /// `(1, 1)`
    SouthEast,
    /// `(0, 1)`
    South,
    /// `(-1, 1)`
    SouthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, -1)`
    NorthWest,
}

impl Direction {
    /// The four cardinal directions in probe order: N, E, S, W.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit `(dx, dy)` offset.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// `true` for north, east, south and west.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// `true` for the four diagonal directions.
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// The 180° reversal. An involution over all eight directions.
    ///
    /// ```
    /// use trackline_core::Direction;
    ///
    /// assert_eq!(Direction::West.opposite(), Direction::East);
    /// assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
    /// ```
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Rotate 90° clockwise.
    pub const fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::NorthEast => Self::SouthEast,
            Self::East => Self::South,
            Self::SouthEast => Self::SouthWest,
            Self::South => Self::West,
            Self::SouthWest => Self::NorthWest,
            Self::West => Self::North,
            Self::NorthWest => Self::NorthEast,
        }
    }

    /// Rotate 90° counter-clockwise.
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::NorthEast => Self::NorthWest,
            Self::East => Self::North,
            Self::SouthEast => Self::NorthEast,
            Self::South => Self::East,
            Self::SouthWest => Self::SouthEast,
            Self::West => Self::South,
            Self::NorthWest => Self::SouthWest,
        }
    }

    /// The two directions orthogonal to `self`, clockwise first.
    ///
    /// This order is the turn preference of the traversal engine and the
    /// side order of padding correction.
    ///
    /// | heading | pair |
    /// |---------|------|
    /// | north | east, west |
    /// | east | south, north |
    /// | south | west, east |
    /// | west | north, south |
    pub const fn perpendicular_pair(self) -> [Self; 2] {
        [self.clockwise(), self.counter_clockwise()]
    }

    /// Human-readable name, e.g. `"south east"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthEast => "north east",
            Self::East => "east",
            Self::SouthEast => "south east",
            Self::South => "south",
            Self::SouthWest => "south west",
            Self::West => "west",
            Self::NorthWest => "north west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
