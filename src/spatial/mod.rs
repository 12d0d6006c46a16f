//! Spatial data structures and grid addressing
//!
//! This module contains spatial-related functionality including:
//! - Flat 2D and 3D grids addressed by position
//! - Cardinal directions and square symmetries
//! - The dungeon tile set and the circular post-filter

/// Cardinal directions and their unit steps
pub mod direction;
/// Position, size, topology and grid containers
pub mod grid;
/// Circular mask applied to finished maps
pub mod mask;
/// Rotations and reflections of pattern windows
pub mod symmetry;
/// Tile symbols and tile maps
pub mod tiles;

pub use direction::Direction;
pub use grid::{Grid2, Grid3, Position, Size, Topology};
pub use symmetry::Variant;
pub use tiles::{Tile, TileMap};
