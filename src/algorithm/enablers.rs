//! Arc-consistency support counts

use crate::analysis::patterns::PatternId;
use crate::analysis::rules::CompatibilityRule;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Grid3, Position, Size};

/// Per-cell count of neighbour patterns that still support each pattern
///
/// Entry `(cell, pattern, direction)` counts the patterns possible in the
/// neighbour across `direction` that allow `pattern` here. When it reaches
/// zero the pattern can no longer stand in that cell.
#[derive(Clone, Debug)]
pub struct EnablerCounter {
    counts: Grid3<u32>,
}

impl EnablerCounter {
    /// Seed every cell with the unconstrained support counts of the rule
    pub fn initial(size: Size, rule: &CompatibilityRule) -> Self {
        let lane: Vec<u32> = (0..rule.pattern_count())
            .flat_map(|pattern| {
                Direction::ALL
                    .map(|direction| rule.compatible_count(pattern, direction) as u32)
            })
            .collect();
        Self {
            counts: Grid3::from_lane(size, &lane),
        }
    }

    /// Current support count, `None` if out of range
    pub fn get(&self, position: Position, pattern: PatternId, direction: Direction) -> Option<u32> {
        self.counts
            .get(position, Self::layer(pattern, direction))
            .copied()
    }

    /// Lower a support count, returning whether it just reached zero
    ///
    /// A count already at zero stays there and does not report again.
    pub fn decrement(&mut self, position: Position, pattern: PatternId, direction: Direction) -> bool {
        match self.counts.get_mut(position, Self::layer(pattern, direction)) {
            Some(count) if *count > 0 => {
                *count -= 1;
                *count == 0
            }
            _ => false,
        }
    }

    const fn layer(pattern: PatternId, direction: Direction) -> usize {
        pattern * Direction::ALL.len() + direction.index()
    }
}
