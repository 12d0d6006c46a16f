//! Arc-consistency propagation of pattern removals
//!
//! Removals are processed depth-first from a worklist. Removing pattern R from
//! a cell takes one enabler away from every neighbour pattern that R
//! supported; a neighbour pattern left without enablers in some direction is
//! removed in turn.

use log::debug;
use rand::Rng;

use crate::algorithm::heap::EntropyHeap;
use crate::algorithm::wave::Wave;
use crate::analysis::patterns::{PatternCatalog, PatternId};
use crate::analysis::rules::CompatibilityRule;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Position;

/// A pattern cleared from a cell whose consequences are still pending
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    /// Cell the pattern was cleared from
    pub position: Position,
    /// Cleared pattern
    pub pattern: PatternId,
}

/// Outcome of draining the worklist
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Fixed point reached, the worklist is empty
    Settled,
    /// The cell lost its last possible pattern
    Contradiction(Position),
}

/// Drain the worklist until a fixed point or the first contradiction
///
/// Cells whose entropy drops are pushed onto the heap again. On contradiction
/// the remaining worklist is left as is; the attempt is over.
pub fn propagate(
    wave: &mut Wave,
    heap: &mut EntropyHeap,
    worklist: &mut Vec<Removal>,
    catalog: &PatternCatalog,
    rule: &CompatibilityRule,
    rng: &mut impl Rng,
) -> Propagation {
    while let Some(removal) = worklist.pop() {
        for direction in Direction::ALL {
            let Some(neighbor) = wave.topology().neighbor(removal.position, direction) else {
                continue;
            };
            // The removed cell lies in the opposite direction as seen from the neighbour
            let back = direction.opposite();

            for pattern in rule.compatible(removal.pattern, direction) {
                if !wave.is_possible(neighbor, pattern) {
                    continue;
                }
                if !wave.decrement_enabler(neighbor, pattern, back) {
                    continue;
                }
                let Some(cache) = wave.remove_pattern(neighbor, pattern, catalog.weight(pattern))
                else {
                    continue;
                };
                if cache.is_contradiction() {
                    debug!("contradiction at {neighbor} after removing pattern {pattern}");
                    return Propagation::Contradiction(neighbor);
                }
                if !cache.is_decided() {
                    heap.push(neighbor, cache.entropy(), rng);
                }
                worklist.push(Removal {
                    position: neighbor,
                    pattern,
                });
            }
        }
    }
    Propagation::Settled
}
