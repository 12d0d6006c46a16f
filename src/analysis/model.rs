//! Generation models
//!
//! A model fixes how patterns are read from the source, when two patterns may
//! sit next to each other, how big the wave is for a requested output, and how
//! decided patterns turn back into tiles. The solver itself is model-agnostic.

use crate::analysis::patterns::{Extraction, PatternCatalog, PatternId};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Grid2, Position, Size};
use crate::spatial::symmetry::Variant;
use crate::spatial::tiles::{Tile, TileMap};

/// Strategy plugged into rule construction and output reconstruction
pub trait Model {
    /// Short name for logs and the command line
    fn name(&self) -> &'static str;

    /// Window extraction this model expects its catalog to use
    fn extraction(&self) -> Extraction;

    /// Whether `to` may sit one cell in `direction` from `from`
    ///
    /// Implementations must satisfy
    /// `is_compatible(a, d, b) == is_compatible(b, d.opposite(), a)`.
    fn is_compatible(
        &self,
        catalog: &PatternCatalog,
        from: PatternId,
        direction: Direction,
        to: PatternId,
    ) -> bool;

    /// Wave dimensions needed to produce an output of `output` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the output size cannot be produced with patterns of
    /// side `pattern_size`.
    fn wave_size(&self, output: Size, pattern_size: usize) -> Result<Size>;

    /// Turn decided wave cells into an output map
    ///
    /// Undecided cells become [`Tile::None`].
    fn reconstruct(
        &self,
        catalog: &PatternCatalog,
        decided: &Grid2<Option<PatternId>>,
        output: Size,
    ) -> TileMap;
}

/// Sliding-window model where neighbouring patterns overlap
///
/// Each wave cell is one output tile, taken from its pattern's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlapping;

impl Model for Overlapping {
    fn name(&self) -> &'static str {
        "overlapping"
    }

    fn extraction(&self) -> Extraction {
        Extraction::Sliding
    }

    fn is_compatible(
        &self,
        catalog: &PatternCatalog,
        from: PatternId,
        direction: Direction,
        to: PatternId,
    ) -> bool {
        let n = catalog.pattern_size();
        let turn = Variant::rotation_towards(direction);
        // Turned so that `to` sits north, row r of `from` coincides with row r + 1 of `to`
        (0..n - 1).all(|row| {
            (0..n).all(|col| {
                let near = turn.apply(n, Position::new(col, row));
                let far = turn.apply(n, Position::new(col, row + 1));
                catalog.tile_at(from, near) == catalog.tile_at(to, far)
            })
        })
    }

    fn wave_size(&self, output: Size, _pattern_size: usize) -> Result<Size> {
        ensure_nonempty(output)?;
        Ok(output)
    }

    fn reconstruct(
        &self,
        catalog: &PatternCatalog,
        decided: &Grid2<Option<PatternId>>,
        output: Size,
    ) -> TileMap {
        TileMap::from_fn(output, |position| {
            decided
                .get(position)
                .copied()
                .flatten()
                .and_then(|id| catalog.tile_at(id, Position::new(0, 0)))
                .unwrap_or(Tile::None)
        })
    }
}

/// Disjoint-chunk model where patterns are stamped edge to edge
///
/// Each wave cell covers an N×N block of the output. Two chunks fit together
/// when every pair of touching border tiles agrees on being walkable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chunked;

impl Model for Chunked {
    fn name(&self) -> &'static str {
        "chunked"
    }

    fn extraction(&self) -> Extraction {
        Extraction::Chunks
    }

    fn is_compatible(
        &self,
        catalog: &PatternCatalog,
        from: PatternId,
        direction: Direction,
        to: PatternId,
    ) -> bool {
        let n = catalog.pattern_size();
        let turn = Variant::rotation_towards(direction);
        (0..n).all(|col| {
            let near = catalog.tile_at(from, turn.apply(n, Position::new(col, 0)));
            let far = catalog.tile_at(to, turn.apply(n, Position::new(col, n - 1)));
            match (near, far) {
                (Some(a), Some(b)) => a.is_passable() == b.is_passable(),
                _ => false,
            }
        })
    }

    fn wave_size(&self, output: Size, pattern_size: usize) -> Result<Size> {
        ensure_nonempty(output)?;
        if !output.is_divisible_by(pattern_size) {
            return Err(GenerationError::IndivisibleSize {
                subject: "output",
                width: output.width,
                height: output.height,
                pattern_size,
            });
        }
        Ok(Size::new(
            output.width / pattern_size,
            output.height / pattern_size,
        ))
    }

    fn reconstruct(
        &self,
        catalog: &PatternCatalog,
        decided: &Grid2<Option<PatternId>>,
        output: Size,
    ) -> TileMap {
        let n = catalog.pattern_size();
        TileMap::from_fn(output, |position| {
            let cell = Position::new(position.x / n, position.y / n);
            let local = Position::new(position.x % n, position.y % n);
            decided
                .get(cell)
                .copied()
                .flatten()
                .and_then(|id| catalog.tile_at(id, local))
                .unwrap_or(Tile::None)
        })
    }
}

fn ensure_nonempty(output: Size) -> Result<()> {
    if output.area() == 0 {
        return Err(invalid_parameter(
            "output_size",
            &output,
            &"output must contain at least one tile",
        ));
    }
    Ok(())
}
