//! Rotations and reflections of square windows
//!
//! A variant maps local coordinates of an N×N window to the source coordinates
//! they are read from, so a rotated pattern reads its source window turned by a
//! multiple of a quarter turn.

use std::fmt;

use crate::spatial::direction::Direction;
use crate::spatial::grid::Position;

/// One element of the symmetry group of the square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// Untransformed
    Identity,
    /// Quarter turn
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three quarter turn
    Rotate270,
    /// Mirror across the horizontal axis
    FlipHorizontal,
    /// Mirror across the vertical axis
    FlipVertical,
    /// Mirror across the main diagonal
    FlipDiagonal,
    /// Mirror across the anti-diagonal
    FlipAntiDiagonal,
}

impl Variant {
    /// Every variant
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::FlipHorizontal,
        Self::FlipVertical,
        Self::FlipDiagonal,
        Self::FlipAntiDiagonal,
    ];

    /// The four rotations, identity included
    pub const ROTATIONS: [Self; 4] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
    ];

    /// Rotation that turns north onto `direction`
    pub const fn rotation_towards(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::Identity,
            Direction::East => Self::Rotate90,
            Direction::South => Self::Rotate180,
            Direction::West => Self::Rotate270,
        }
    }

    /// Map a local coordinate inside an `n`×`n` window
    ///
    /// `local` must satisfy `x < n` and `y < n`; the result does too.
    pub const fn apply(self, n: usize, local: Position) -> Position {
        let last = n - 1;
        let (x, y) = (local.x, local.y);
        let (tx, ty) = match self {
            Self::Identity => (x, y),
            Self::Rotate90 => (last - y, x),
            Self::Rotate180 => (last - x, last - y),
            Self::Rotate270 => (y, last - x),
            Self::FlipHorizontal => (x, last - y),
            Self::FlipVertical => (last - x, y),
            Self::FlipDiagonal => (y, x),
            Self::FlipAntiDiagonal => (last - y, last - x),
        };
        Position::new(tx, ty)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "identity",
            Self::Rotate90 => "rot90",
            Self::Rotate180 => "rot180",
            Self::Rotate270 => "rot270",
            Self::FlipHorizontal => "flip-h",
            Self::FlipVertical => "flip-v",
            Self::FlipDiagonal => "flip-diag",
            Self::FlipAntiDiagonal => "flip-anti-diag",
        };
        f.write_str(name)
    }
}
