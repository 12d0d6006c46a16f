//! Minimum-entropy cell queue with lazy deletion
//!
//! Cells are pushed again whenever their entropy drops; stale entries stay in
//! the heap and are skipped by the caller when popped.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rand::Rng;

use crate::io::configuration::ENTROPY_NOISE;
use crate::spatial::grid::Position;

#[derive(Clone, Copy, Debug)]
struct Entry {
    entropy: f64,
    position: Position,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entropy
            .total_cmp(&other.entropy)
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// Priority queue yielding the cell with the lowest noisy entropy first
#[derive(Clone, Debug, Default)]
pub struct EntropyHeap {
    entries: BinaryHeap<Reverse<Entry>>,
}

impl EntropyHeap {
    /// Create an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell with its entropy plus a small random perturbation
    ///
    /// The noise breaks ties between equally constrained cells.
    pub fn push(&mut self, position: Position, entropy: f64, rng: &mut impl Rng) {
        let noise = rng.random::<f64>() * ENTROPY_NOISE;
        self.entries.push(Reverse(Entry {
            entropy: entropy + noise,
            position,
        }));
    }

    /// Remove and return the lowest-entropy cell, stale or not
    pub fn pop(&mut self) -> Option<Position> {
        self.entries.pop().map(|Reverse(entry)| entry.position)
    }

    /// Number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap has no entries left
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
