//! Circular post-filter for finished maps

use crate::spatial::grid::Position;
use crate::spatial::tiles::{Tile, TileMap};

/// Blank every tile outside the largest circle centred in the map
///
/// The centre sits at `((w - 1) / 2, (h - 1) / 2)` in real coordinates and the
/// radius reaches half a tile past the nearer edge centre.
pub fn circular_mask(map: &TileMap) -> TileMap {
    let size = map.size();
    let center_x = (size.width as f64 - 1.0) / 2.0;
    let center_y = (size.height as f64 - 1.0) / 2.0;
    let radius = center_x.min(center_y) + 0.5;

    TileMap::from_fn(size, |position: Position| {
        let dx = position.x as f64 - center_x;
        let dy = position.y as f64 - center_y;
        if dx.hypot(dy) > radius {
            Tile::None
        } else {
            map.get(position).copied().unwrap_or_default()
        }
    })
}
