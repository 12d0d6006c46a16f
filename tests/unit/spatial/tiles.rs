//! Tests for tile glyphs and walkability

#[cfg(test)]
mod tests {
    use dungeon_wfc::spatial::tiles::Tile;

    // Tests each tile round-trips through its glyph
    // Verified by giving UpStair the DownStair glyph
    #[test]
    fn test_glyph_round_trip() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_glyph(tile.glyph()), Some(tile));
        }
        assert_eq!(Tile::from_glyph('?'), None);
    }

    // Tests the glyphs used by sample maps
    // Verified by changing the wall glyph
    #[test]
    fn test_known_glyphs() {
        assert_eq!(Tile::from_glyph('#'), Some(Tile::Wall));
        assert_eq!(Tile::from_glyph('.'), Some(Tile::Floor));
        assert_eq!(Tile::from_glyph('>'), Some(Tile::DownStair));
        assert_eq!(Tile::from_glyph('<'), Some(Tile::UpStair));
        assert_eq!(Tile::from_glyph(' '), Some(Tile::None));
    }

    // Tests floor and stairs are walkable while walls and empty space are not
    // Verified by dropping UpStair from is_passable
    #[test]
    fn test_passability() {
        assert!(Tile::Floor.is_passable());
        assert!(Tile::DownStair.is_passable());
        assert!(Tile::UpStair.is_passable());
        assert!(!Tile::Wall.is_passable());
        assert!(!Tile::None.is_passable());
    }
}
