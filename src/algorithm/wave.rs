//! Per-cell solver state for one generation attempt
//!
//! The wave holds, for every cell, the set of still-possible patterns, the
//! entropy cache over their weights and the enabler counts. Possibility bits
//! are only ever cleared, and every clearing goes through
//! [`Wave::remove_pattern`] so the cached total weight stays equal to the sum
//! of the remaining weights.

use crate::algorithm::bitset::PatternSet;
use crate::algorithm::enablers::EnablerCounter;
use crate::algorithm::entropy::EntropyCache;
use crate::analysis::patterns::{PatternCatalog, PatternId};
use crate::analysis::rules::CompatibilityRule;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Grid2, Position, Topology};

/// Two decided neighbours whose patterns may not touch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    /// First cell
    pub position: Position,
    /// Direction from the first cell to the second
    pub direction: Direction,
    /// Second cell
    pub neighbor: Position,
}

/// Cell whose cached total weight disagrees with its possibility set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightMismatch {
    /// Offending cell
    pub position: Position,
    /// Weight summed from the possibility set
    pub expected: u64,
    /// Weight held by the entropy cache
    pub cached: u64,
}

/// Possibility sets, entropy caches and enabler counts of every cell
#[derive(Clone, Debug)]
pub struct Wave {
    topology: Topology,
    possible: Grid2<PatternSet>,
    entropy: Grid2<EntropyCache>,
    enablers: EnablerCounter,
    decided: Grid2<Option<PatternId>>,
}

impl Wave {
    /// Unconstrained wave where every pattern is possible everywhere
    pub fn new(topology: Topology, catalog: &PatternCatalog, rule: &CompatibilityRule) -> Self {
        let size = topology.size;
        Self {
            topology,
            possible: Grid2::filled(size, PatternSet::all(catalog.len())),
            entropy: Grid2::filled(size, EntropyCache::initial(catalog.weights())),
            enablers: EnablerCounter::initial(size, rule),
            decided: Grid2::filled(size, None),
        }
    }

    /// Grid extent and edge behaviour
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Whether `pattern` may still stand at `position`
    pub fn is_possible(&self, position: Position, pattern: PatternId) -> bool {
        self.possible
            .get(position)
            .is_some_and(|set| set.contains(pattern))
    }

    /// Possibility set of a cell
    pub fn possible(&self, position: Position) -> Option<&PatternSet> {
        self.possible.get(position)
    }

    /// Entropy cache of a cell
    pub fn entropy(&self, position: Position) -> Option<&EntropyCache> {
        self.entropy.get(position)
    }

    /// Enabler counts of the wave
    pub const fn enablers(&self) -> &EnablerCounter {
        &self.enablers
    }

    /// Lower the support count of `pattern` at `position` from `direction`
    ///
    /// Returns whether the count just reached zero.
    pub fn decrement_enabler(
        &mut self,
        position: Position,
        pattern: PatternId,
        direction: Direction,
    ) -> bool {
        self.enablers.decrement(position, pattern, direction)
    }

    /// Clear a possibility bit and subtract its weight from the entropy cache
    ///
    /// Returns the updated cache, or `None` if the pattern was not possible.
    pub fn remove_pattern(
        &mut self,
        position: Position,
        pattern: PatternId,
        weight: u32,
    ) -> Option<EntropyCache> {
        let removed = self
            .possible
            .get_mut(position)
            .is_some_and(|set| set.remove(pattern));
        if !removed {
            return None;
        }
        let cache = self.entropy.get_mut(position)?;
        cache.reduce_weight(weight);
        Some(*cache)
    }

    /// Fix a cell to `chosen`, clearing every other possibility
    ///
    /// Returns the patterns that were cleared. The cell's total weight is
    /// pinned to `weight`; enabler counts of the cell itself are left alone.
    pub fn decide(&mut self, position: Position, chosen: PatternId, weight: u32) -> Vec<PatternId> {
        let Some(set) = self.possible.get_mut(position) else {
            return Vec::new();
        };
        let others: Vec<PatternId> = set.iter().filter(|&id| id != chosen).collect();
        for &id in &others {
            set.remove(id);
        }
        if let Some(cache) = self.entropy.get_mut(position) {
            cache.decide(weight);
        }
        self.decided.set(position, Some(chosen));
        others
    }

    /// Pattern a cell was decided as
    pub fn pattern_at(&self, position: Position) -> Option<PatternId> {
        self.decided.get(position).copied().flatten()
    }

    /// Decided pattern of every cell
    pub const fn decided(&self) -> &Grid2<Option<PatternId>> {
        &self.decided
    }

    /// Number of decided cells
    pub fn decided_count(&self) -> usize {
        self.decided.iter().filter(|cell| cell.is_some()).count()
    }

    /// Adjacent decided cells whose patterns the rule forbids side by side
    ///
    /// Each pair is reported once, from its western or northern cell.
    pub fn violations(&self, rule: &CompatibilityRule) -> Vec<Violation> {
        let mut found = Vec::new();
        for (position, decided) in self.decided.indexed_iter() {
            let Some(pattern) = *decided else {
                continue;
            };
            for direction in [Direction::East, Direction::South] {
                let Some(neighbor) = self.topology.neighbor(position, direction) else {
                    continue;
                };
                let Some(other) = self.pattern_at(neighbor) else {
                    continue;
                };
                if !rule.is_legal(pattern, direction, other) {
                    found.push(Violation {
                        position,
                        direction,
                        neighbor,
                    });
                }
            }
        }
        found
    }

    /// First cell whose cached total weight is not the sum of its possible weights
    pub fn check_weights(&self, catalog: &PatternCatalog) -> Option<WeightMismatch> {
        self.possible.indexed_iter().find_map(|(position, set)| {
            let expected: u64 = set.iter().map(|id| u64::from(catalog.weight(id))).sum();
            let cached = self
                .entropy
                .get(position)
                .map_or(0, EntropyCache::total_weight);
            (expected != cached).then_some(WeightMismatch {
                position,
                expected,
                cached,
            })
        })
    }
}
