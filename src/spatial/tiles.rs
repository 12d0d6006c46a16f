//! Dungeon tile symbols and tile maps
//!
//! The tile set is a small closed enum. Every tile has one ASCII glyph, and
//! walkable tiles are the ones chunk borders must agree on.

use std::fmt;

use crate::io::configuration::{
    DOWN_STAIR_GLYPH, FLOOR_GLYPH, NONE_GLYPH, UP_STAIR_GLYPH, WALL_GLYPH,
};
use crate::spatial::grid::Grid2;

/// A single map cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    /// Empty space outside the map, also used for undecided cells
    #[default]
    None,
    /// Solid wall
    Wall,
    /// Walkable floor
    Floor,
    /// Stair leading down
    DownStair,
    /// Stair leading up
    UpStair,
}

impl Tile {
    /// Every tile in declaration order
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Wall,
        Self::Floor,
        Self::DownStair,
        Self::UpStair,
    ];

    /// Whether a character can walk onto this tile
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Floor | Self::DownStair | Self::UpStair)
    }

    /// ASCII glyph used by the text codec
    pub const fn glyph(self) -> char {
        match self {
            Self::None => NONE_GLYPH,
            Self::Wall => WALL_GLYPH,
            Self::Floor => FLOOR_GLYPH,
            Self::DownStair => DOWN_STAIR_GLYPH,
            Self::UpStair => UP_STAIR_GLYPH,
        }
    }

    /// Tile for an ASCII glyph, if the glyph is known
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tile| tile.glyph() == glyph)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Rectangular grid of tiles
pub type TileMap = Grid2<Tile>;
