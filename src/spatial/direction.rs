//! The four cardinal directions used for adjacency

use std::fmt;

/// Cardinal direction on the output grid
///
/// Discriminants double as indices into per-direction tables, and as the
/// quarter-turn count of the rotation that maps `North` onto the direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards decreasing `y`
    North = 0,
    /// Towards increasing `x`
    East = 1,
    /// Towards increasing `y`
    South = 2,
    /// Towards decreasing `x`
    West = 3,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit step as `(dx, dy)`
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Table index of this direction
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
