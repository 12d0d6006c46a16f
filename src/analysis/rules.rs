//! Precomputed adjacency rules between patterns
//!
//! Only the upper triangle `from <= to` is stored, four bits per pair. A query
//! with `from > to` is answered from the swapped pair with the inverted
//! direction.

use bitvec::prelude::*;
use log::debug;

use crate::analysis::model::Model;
use crate::analysis::patterns::{PatternCatalog, PatternId};
use crate::io::error::{Result, invalid_parameter};
use crate::math::pairs::{canonical_pair, triangle_len, triangular_index};
use crate::spatial::direction::Direction;

/// Symmetric compatibility relation over pattern pairs and directions
#[derive(Clone, Debug)]
pub struct CompatibilityRule {
    pattern_count: usize,
    legal: BitVec,
}

impl CompatibilityRule {
    /// Evaluate the model's compatibility test for every stored pair
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog was extracted differently from what the
    /// model expects.
    pub fn build(catalog: &PatternCatalog, model: &impl Model) -> Result<Self> {
        if catalog.extraction() != model.extraction() {
            return Err(invalid_parameter(
                "model",
                &model.name(),
                &format!(
                    "catalog was built with {:?} extraction",
                    catalog.extraction()
                ),
            ));
        }

        let n = catalog.len();
        let mut legal = bitvec![0; triangle_len(n) * Direction::ALL.len()];
        for from in 0..n {
            for to in from..n {
                let Some(pair) = triangular_index(n, from, to) else {
                    continue;
                };
                for direction in Direction::ALL {
                    if model.is_compatible(catalog, from, direction, to) {
                        legal.set(pair * Direction::ALL.len() + direction.index(), true);
                    }
                }
            }
        }

        debug!(
            "built {} rule: {} legal adjacencies over {n} patterns",
            model.name(),
            legal.count_ones()
        );
        Ok(Self {
            pattern_count: n,
            legal,
        })
    }

    /// Whether `to` may sit one cell in `direction` from `from`
    ///
    /// Out-of-range ids are never legal.
    pub fn is_legal(&self, from: PatternId, direction: Direction, to: PatternId) -> bool {
        let (low, direction, high) = canonical_pair(from, direction, to);
        triangular_index(self.pattern_count, low, high)
            .and_then(|pair| {
                self.legal
                    .get(pair * Direction::ALL.len() + direction.index())
                    .as_deref()
                    .copied()
            })
            .unwrap_or(false)
    }

    /// Patterns that may sit in `direction` from `from`
    pub fn compatible(
        &self,
        from: PatternId,
        direction: Direction,
    ) -> impl Iterator<Item = PatternId> + '_ {
        (0..self.pattern_count).filter(move |&to| self.is_legal(from, direction, to))
    }

    /// Number of patterns that may sit in `direction` from `from`
    pub fn compatible_count(&self, from: PatternId, direction: Direction) -> usize {
        self.compatible(from, direction).count()
    }

    /// Number of patterns the rule covers
    pub const fn pattern_count(&self) -> usize {
        self.pattern_count
    }
}
