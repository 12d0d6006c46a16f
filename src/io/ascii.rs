//! Text format for tile maps
//!
//! One line per row, one glyph per tile. Lines may end in `\r\n`; trailing
//! blank lines are ignored. Every row must be as wide as the first.

use std::path::Path;

use crate::io::error::{GenerationError, Result, WithPath};
use crate::spatial::grid::{Position, Size};
use crate::spatial::tiles::{Tile, TileMap};

/// Parse a tile map from its ASCII rendering
///
/// # Errors
///
/// Returns an error if:
/// - The text contains no rows
/// - A row differs in width from the first row
/// - A glyph does not name a tile
pub fn parse_map(text: &str) -> Result<TileMap> {
    let mut rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.trim_end_matches('\r').chars().collect())
        .collect();
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(GenerationError::InvalidSourceData {
            reason: "map text has no tiles".to_string(),
        });
    }

    let mut tiles = Vec::with_capacity(width * rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(GenerationError::InvalidSourceData {
                reason: format!(
                    "line {} is {} tiles wide, expected {width}",
                    row_index + 1,
                    row.len()
                ),
            });
        }
        for (column_index, &glyph) in row.iter().enumerate() {
            let tile = Tile::from_glyph(glyph).ok_or(GenerationError::UnknownTile {
                character: glyph,
                line: row_index + 1,
                column: column_index + 1,
            })?;
            tiles.push(tile);
        }
    }

    let size = Size::new(width, rows.len());
    Ok(TileMap::from_fn(size, |position: Position| {
        tiles
            .get(position.y * width + position.x)
            .copied()
            .unwrap_or_default()
    }))
}

/// Render a tile map, one `\n`-terminated line per row
pub fn render_map(map: &TileMap) -> String {
    let size = map.size();
    let mut text = String::with_capacity((size.width + 1) * size.height);
    for row in map.rows() {
        text.extend(row.iter().map(|tile| tile.glyph()));
        text.push('\n');
    }
    text
}

/// Read and parse a tile map file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_map(path: &Path) -> Result<TileMap> {
    let text = std::fs::read_to_string(path).with_path(path, "read map")?;
    parse_map(&text)
}
