//! Observe, collapse and propagate loop for one attempt
//!
//! An [`Attempt`] exclusively owns the wave, the entropy heap and the removal
//! worklist. Each [`Attempt::advance`] decides one cell and propagates the
//! consequences. A contradiction ends the attempt for good; recovery means
//! building a new one.

use log::{debug, trace};
use rand::Rng;

use crate::algorithm::entropy::EntropyCache;
use crate::algorithm::heap::EntropyHeap;
use crate::algorithm::propagation::{Propagation, Removal, propagate};
use crate::algorithm::wave::Wave;
use crate::analysis::patterns::{PatternCatalog, PatternId};
use crate::analysis::rules::CompatibilityRule;
use crate::io::error::{Result, invariant_violation};
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Position, Topology};

/// Result of one solver step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStatus {
    /// Cells remain undecided and no contradiction has occurred
    Continue,
    /// Every cell is decided
    Success,
    /// A cell ran out of possible patterns; the attempt must be discarded
    Fail,
}

/// Mutable state of a single generation attempt
#[derive(Clone, Debug)]
pub struct Attempt {
    wave: Wave,
    heap: EntropyHeap,
    worklist: Vec<Removal>,
    undecided: usize,
    failed: bool,
}

impl Attempt {
    /// Fresh attempt with patterns that can never be supported already pruned
    ///
    /// A pattern with no compatible neighbour pattern in some direction cannot
    /// stand in any cell that has a neighbour in that direction. If pruning
    /// empties a cell the attempt starts out failed.
    pub fn new(
        topology: Topology,
        catalog: &PatternCatalog,
        rule: &CompatibilityRule,
        rng: &mut impl Rng,
    ) -> Self {
        let mut attempt = Self {
            wave: Wave::new(topology, catalog, rule),
            heap: EntropyHeap::new(),
            worklist: Vec::new(),
            undecided: topology.size.area(),
            failed: false,
        };

        let unsupported: Vec<(PatternId, Direction)> = (0..catalog.len())
            .flat_map(|pattern| Direction::ALL.map(|direction| (pattern, direction)))
            .filter(|&(pattern, direction)| rule.compatible_count(pattern, direction) == 0)
            .collect();

        'cells: for position in topology.size.positions() {
            for &(pattern, direction) in &unsupported {
                if topology.neighbor(position, direction).is_none() {
                    continue;
                }
                let weight = catalog.weight(pattern);
                let Some(cache) = attempt.wave.remove_pattern(position, pattern, weight) else {
                    continue;
                };
                attempt.worklist.push(Removal { position, pattern });
                if cache.is_contradiction() {
                    debug!("contradiction at {position} while pruning unsupported patterns");
                    attempt.failed = true;
                    break 'cells;
                }
            }
        }

        if !attempt.failed {
            attempt.failed = matches!(
                attempt.propagate(catalog, rule, rng),
                Propagation::Contradiction(_)
            );
        }

        for position in topology.size.positions() {
            if let Some(cache) = attempt.wave.entropy(position) {
                let entropy = cache.entropy();
                attempt.heap.push(position, entropy, rng);
            }
        }
        attempt
    }

    /// Decide one cell and propagate
    ///
    /// Once `Fail` or `Success` has been returned, every further call returns
    /// the same status.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvariantViolation`](crate::GenerationError::InvariantViolation)
    /// if the heap runs dry while cells are undecided, or if a selected cell has
    /// no weight left to draw from.
    pub fn advance(
        &mut self,
        catalog: &PatternCatalog,
        rule: &CompatibilityRule,
        rng: &mut impl Rng,
    ) -> Result<AdvanceStatus> {
        if self.failed {
            return Ok(AdvanceStatus::Fail);
        }
        if self.undecided == 0 {
            return Ok(AdvanceStatus::Success);
        }

        let position = self.select_cell()?;
        let chosen = self.observe(position, catalog, rng)?;
        self.collapse(position, chosen, catalog);

        match self.propagate(catalog, rule, rng) {
            Propagation::Contradiction(_) => {
                self.failed = true;
                Ok(AdvanceStatus::Fail)
            }
            Propagation::Settled if self.undecided == 0 => Ok(AdvanceStatus::Success),
            Propagation::Settled => Ok(AdvanceStatus::Continue),
        }
    }

    /// Pop cells until one is still undecided
    fn select_cell(&mut self) -> Result<Position> {
        while let Some(position) = self.heap.pop() {
            let undecided = self
                .wave
                .entropy(position)
                .is_some_and(|cache| !cache.is_decided());
            if undecided {
                return Ok(position);
            }
        }
        Err(invariant_violation(
            "select_cell",
            &format!(
                "entropy heap is empty with {} cells undecided",
                self.undecided
            ),
        ))
    }

    /// Draw a pattern for the cell with probability proportional to its weight
    fn observe(
        &self,
        position: Position,
        catalog: &PatternCatalog,
        rng: &mut impl Rng,
    ) -> Result<PatternId> {
        let total = self
            .wave
            .entropy(position)
            .map_or(0, EntropyCache::total_weight);
        if total == 0 {
            return Err(invariant_violation(
                "observe",
                &format!("cell {position} has no weight left"),
            ));
        }

        let draw = rng.random_range(0..total);
        let mut cumulative = 0_u64;
        if let Some(set) = self.wave.possible(position) {
            for id in set.iter() {
                cumulative += u64::from(catalog.weight(id));
                if cumulative > draw {
                    trace!("decided {position} as pattern {id}");
                    return Ok(id);
                }
            }
        }
        Err(invariant_violation(
            "observe",
            &format!("cell {position} weights sum to {cumulative}, cache says {total}"),
        ))
    }

    /// Fix the cell and queue every other pattern for propagation
    fn collapse(&mut self, position: Position, chosen: PatternId, catalog: &PatternCatalog) {
        let removed = self.wave.decide(position, chosen, catalog.weight(chosen));
        self.worklist
            .extend(removed.into_iter().map(|pattern| Removal { position, pattern }));
        self.undecided = self.undecided.saturating_sub(1);
    }

    fn propagate(
        &mut self,
        catalog: &PatternCatalog,
        rule: &CompatibilityRule,
        rng: &mut impl Rng,
    ) -> Propagation {
        propagate(
            &mut self.wave,
            &mut self.heap,
            &mut self.worklist,
            catalog,
            rule,
            rng,
        )
    }

    /// Solver state of every cell
    pub const fn wave(&self) -> &Wave {
        &self.wave
    }

    /// Cells still waiting to be decided
    pub const fn undecided(&self) -> usize {
        self.undecided
    }

    /// Whether a contradiction has ended the attempt
    pub const fn is_failed(&self) -> bool {
        self.failed
    }
}
