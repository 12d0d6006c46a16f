//! PNG export with a fixed tile palette

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::configuration::{
    DOWN_STAIR_COLOR, FLOOR_COLOR, NONE_COLOR, UP_STAIR_COLOR, WALL_COLOR,
};
use crate::io::error::{GenerationError, Result, WithPath, invalid_parameter};
use crate::spatial::grid::Position;
use crate::spatial::tiles::{Tile, TileMap};

/// RGBA colour a tile is drawn with
pub const fn tile_color(tile: Tile) -> [u8; 4] {
    match tile {
        Tile::None => NONE_COLOR,
        Tile::Wall => WALL_COLOR,
        Tile::Floor => FLOOR_COLOR,
        Tile::DownStair => DOWN_STAIR_COLOR,
        Tile::UpStair => UP_STAIR_COLOR,
    }
}

/// Export a tile map as a PNG with one `scale`×`scale` block per tile
///
/// Empty tiles are transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The map is empty or `scale` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tile_map_as_png(map: &TileMap, output_path: &Path, scale: u32) -> Result<()> {
    let size = map.size();
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be positive"));
    }
    if size.area() == 0 {
        return Err(GenerationError::InvalidSourceData {
            reason: "cannot export an empty map".to_string(),
        });
    }

    let width = size.width as u32 * scale;
    let height = size.height as u32 * scale;
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let position = Position::new((x / scale) as usize, (y / scale) as usize);
        let tile = map.get(position).copied().unwrap_or_default();
        Rgba(tile_color(tile))
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
