use bitvec::prelude::*;
use std::fmt;

use crate::analysis::patterns::PatternId;

/// Fixed-size bitset of still-possible patterns for one cell
///
/// Indexed directly by pattern id. Provides O(1) membership testing and
/// removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    bits: BitVec,
}

impl PatternSet {
    /// Create a set with no patterns present
    pub fn new(pattern_count: usize) -> Self {
        Self {
            bits: bitvec![0; pattern_count],
        }
    }

    /// Create a set containing every pattern
    pub fn all(pattern_count: usize) -> Self {
        Self {
            bits: bitvec![1; pattern_count],
        }
    }

    /// Insert a pattern id, ignoring ids out of range
    pub fn insert(&mut self, id: PatternId) {
        if id < self.bits.len() {
            self.bits.set(id, true);
        }
    }

    /// Remove a pattern id, returning whether it was present
    pub fn remove(&mut self, id: PatternId) -> bool {
        let present = self.contains(id);
        if present {
            self.bits.set(id, false);
        }
        present
    }

    /// Test pattern membership
    pub fn contains(&self, id: PatternId) -> bool {
        self.bits.get(id).as_deref() == Some(&true)
    }

    /// Test if no patterns are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count patterns in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Present pattern ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = PatternId> + '_ {
        self.bits.iter_ones()
    }

    /// Whether every pattern of `self` is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|id| other.contains(id))
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PatternSet({} patterns: {:?})",
            self.count(),
            self.iter().collect::<Vec<_>>()
        )
    }
}
