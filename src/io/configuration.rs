//! Generation constants and runtime configuration defaults

// Pattern extraction
/// Side length of extracted patterns
pub const DEFAULT_PATTERN_SIZE: usize = 3;
/// Smallest pattern size that carries any adjacency information
pub const MIN_PATTERN_SIZE: usize = 2;

// Output
/// Output width in tiles when none is given
pub const DEFAULT_OUTPUT_WIDTH: usize = 36;
/// Output height in tiles when none is given
pub const DEFAULT_OUTPUT_HEIGHT: usize = 36;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 4096;

// Solver
/// Upper bound of the uniform noise added to entropy on every heap insertion
pub const ENTROPY_NOISE: f64 = 1e-6;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Attempts the driver makes before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

// ASCII glyphs
/// Glyph for empty space
pub const NONE_GLYPH: char = ' ';
/// Glyph for walls
pub const WALL_GLYPH: char = '#';
/// Glyph for floor
pub const FLOOR_GLYPH: char = '.';
/// Glyph for stairs down
pub const DOWN_STAIR_GLYPH: char = '>';
/// Glyph for stairs up
pub const UP_STAIR_GLYPH: char = '<';

// PNG export
/// Pixel side length of one tile in exported images
pub const DEFAULT_PIXEL_SCALE: u32 = 8;
/// RGBA colour of empty space
pub const NONE_COLOR: [u8; 4] = [0, 0, 0, 0];
/// RGBA colour of walls
pub const WALL_COLOR: [u8; 4] = [64, 58, 52, 255];
/// RGBA colour of floor
pub const FLOOR_COLOR: [u8; 4] = [196, 180, 150, 255];
/// RGBA colour of stairs down
pub const DOWN_STAIR_COLOR: [u8; 4] = [180, 60, 40, 255];
/// RGBA colour of stairs up
pub const UP_STAIR_COLOR: [u8; 4] = [60, 120, 190, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Decided cells between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 64;
