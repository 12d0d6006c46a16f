//! Pattern extraction and deduplication
//!
//! Patterns are N×N windows of the source map read through one of the square
//! symmetries. Two occurrences with identical content collapse into a single
//! pattern whose weight counts the occurrences. Pattern ids are assigned in
//! order of first occurrence, so they are dense and stable for one catalog.

use std::collections::HashMap;

use log::debug;

use crate::io::configuration::{MAX_GRID_DIMENSION, MIN_PATTERN_SIZE};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::grid::{Position, Size};
use crate::spatial::symmetry::Variant;
use crate::spatial::tiles::{Tile, TileMap};

/// Dense index into a [`PatternCatalog`]
pub type PatternId = usize;

/// How windows are taken from the source map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extraction {
    /// Every top-left offset, windows overlap
    Sliding,
    /// N-aligned offsets only, windows tile the source without overlap
    Chunks,
}

/// A deduplicated window of the source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Top-left corner of the first occurrence in the source
    pub offset: Position,
    /// Symmetry the first occurrence was read through
    pub variant: Variant,
    /// Number of occurrences with identical content
    pub weight: u32,
}

/// Immutable set of patterns extracted from one source map
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    source: TileMap,
    pattern_size: usize,
    extraction: Extraction,
    variants: Vec<Variant>,
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Extract and deduplicate every pattern of the source
    ///
    /// Each requested variant is applied to each window offset, so a variant
    /// listed twice doubles every weight.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pattern size is below 2
    /// - No variants are requested
    /// - The source is empty, too large, or smaller than one pattern
    /// - Chunk extraction is used on a source whose sides are not multiples of
    ///   the pattern size
    pub fn build(
        source: &TileMap,
        pattern_size: usize,
        variants: &[Variant],
        extraction: Extraction,
    ) -> Result<Self> {
        validate(source.size(), pattern_size, variants, extraction)?;

        let mut catalog = Self {
            source: source.clone(),
            pattern_size,
            extraction,
            variants: variants.to_vec(),
            patterns: Vec::new(),
        };

        let mut index: HashMap<Vec<Tile>, PatternId> = HashMap::new();
        for offset in catalog.window_offsets() {
            for &variant in variants {
                let content = catalog.read_window(offset, variant);
                if let Some(pattern) = index
                    .get(&content)
                    .and_then(|&id| catalog.patterns.get_mut(id))
                {
                    pattern.weight += 1;
                } else {
                    index.insert(content, catalog.patterns.len());
                    catalog.patterns.push(Pattern {
                        offset,
                        variant,
                        weight: 1,
                    });
                }
            }
        }

        debug!(
            "extracted {} distinct patterns of size {pattern_size} from a {} source ({:?})",
            catalog.patterns.len(),
            source.size(),
            extraction
        );
        Ok(catalog)
    }

    /// Top-left corners of every window the extraction visits
    fn window_offsets(&self) -> Vec<Position> {
        let size = self.source.size();
        let n = self.pattern_size;
        let step = match self.extraction {
            Extraction::Sliding => 1,
            Extraction::Chunks => n,
        };
        (0..=size.height - n)
            .step_by(step)
            .flat_map(|y| {
                (0..=size.width - n)
                    .step_by(step)
                    .map(move |x| Position::new(x, y))
            })
            .collect()
    }

    fn read_window(&self, offset: Position, variant: Variant) -> Vec<Tile> {
        let n = self.pattern_size;
        Size::new(n, n)
            .positions()
            .map(|local| self.read_through(offset, variant, local))
            .collect()
    }

    fn read_through(&self, offset: Position, variant: Variant, local: Position) -> Tile {
        let mapped = variant.apply(self.pattern_size, local);
        self.source
            .get(Position::new(offset.x + mapped.x, offset.y + mapped.y))
            .copied()
            .unwrap_or_default()
    }

    /// Tile shown at `local` inside pattern `id`
    ///
    /// Returns `None` if the id or the local coordinate is out of range.
    pub fn tile_at(&self, id: PatternId, local: Position) -> Option<Tile> {
        let n = self.pattern_size;
        if local.x >= n || local.y >= n {
            return None;
        }
        let pattern = self.patterns.get(id)?;
        Some(self.read_through(pattern.offset, pattern.variant, local))
    }

    /// Full content of pattern `id` in row-major order
    pub fn content(&self, id: PatternId) -> Option<Vec<Tile>> {
        let pattern = self.patterns.get(id)?;
        Some(self.read_window(pattern.offset, pattern.variant))
    }

    /// Pattern metadata by id
    pub fn pattern(&self, id: PatternId) -> Option<&Pattern> {
        self.patterns.get(id)
    }

    /// All patterns in id order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Pattern weights in id order
    pub fn weights(&self) -> impl Iterator<Item = u32> + '_ {
        self.patterns.iter().map(|pattern| pattern.weight)
    }

    /// Weight of pattern `id`, zero if out of range
    pub fn weight(&self, id: PatternId) -> u32 {
        self.patterns.get(id).map_or(0, |pattern| pattern.weight)
    }

    /// Number of distinct patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the catalog holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Side length N of every pattern
    pub const fn pattern_size(&self) -> usize {
        self.pattern_size
    }

    /// Extraction the catalog was built with
    pub const fn extraction(&self) -> Extraction {
        self.extraction
    }

    /// Variants applied to every window, in request order
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// The source map the patterns read from
    pub const fn source(&self) -> &TileMap {
        &self.source
    }
}

fn validate(
    size: Size,
    pattern_size: usize,
    variants: &[Variant],
    extraction: Extraction,
) -> Result<()> {
    if pattern_size < MIN_PATTERN_SIZE {
        return Err(invalid_parameter(
            "pattern_size",
            &pattern_size,
            &format!("must be at least {MIN_PATTERN_SIZE}"),
        ));
    }
    if variants.is_empty() {
        return Err(invalid_parameter(
            "variants",
            &"[]",
            &"at least one symmetry variant is required",
        ));
    }
    if size.area() == 0 {
        return Err(GenerationError::InvalidSourceData {
            reason: "source map is empty".to_string(),
        });
    }
    if size.width > MAX_GRID_DIMENSION || size.height > MAX_GRID_DIMENSION {
        return Err(GenerationError::InvalidSourceData {
            reason: format!("source map {size} exceeds the {MAX_GRID_DIMENSION} tile limit"),
        });
    }
    if size.width < pattern_size || size.height < pattern_size {
        return Err(GenerationError::InvalidSourceData {
            reason: format!("source map {size} is smaller than one {pattern_size}x{pattern_size} pattern"),
        });
    }
    if extraction == Extraction::Chunks && !size.is_divisible_by(pattern_size) {
        return Err(GenerationError::IndivisibleSize {
            subject: "source",
            width: size.width,
            height: size.height,
            pattern_size,
        });
    }
    Ok(())
}
