//! Tests for generation defaults and tile glyph constants

#[cfg(test)]
mod tests {
    use dungeon_wfc::io::configuration::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_PATTERN_SIZE,
        DOWN_STAIR_GLYPH, ENTROPY_NOISE, FLOOR_GLYPH, MAX_GRID_DIMENSION, MIN_PATTERN_SIZE,
        NONE_GLYPH, UP_STAIR_GLYPH, WALL_GLYPH,
    };

    // Tests the default pattern size is usable
    // Verified by lowering the default below the minimum
    #[test]
    fn test_default_pattern_size() {
        assert_eq!(DEFAULT_PATTERN_SIZE, 3);
        assert!(DEFAULT_PATTERN_SIZE >= MIN_PATTERN_SIZE);
    }

    // Tests default output dimensions fit the grid limit
    // Verified by raising the default past the limit
    #[test]
    fn test_default_output_fits_limit() {
        assert!(DEFAULT_OUTPUT_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_OUTPUT_HEIGHT <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_MAX_ATTEMPTS > 0);
    }

    // Tests the tie-break noise stays far below any entropy difference
    // Verified by increasing the noise to order one
    #[test]
    fn test_entropy_noise_is_small() {
        assert!(ENTROPY_NOISE > 0.0);
        assert!(ENTROPY_NOISE < 1e-3);
    }

    // Tests every glyph is distinct
    // Verified by reusing the wall glyph for stairs
    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs = [NONE_GLYPH, WALL_GLYPH, FLOOR_GLYPH, DOWN_STAIR_GLYPH, UP_STAIR_GLYPH];
        for (i, a) in glyphs.iter().enumerate() {
            for b in glyphs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
