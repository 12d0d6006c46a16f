//! Incremental per-cell entropy bookkeeping

use crate::math::information::{shannon_entropy, weighted_log};

/// Running weight statistics of one cell
///
/// Keeps the total weight and `Σ w·log2(w)` of the still-possible patterns so
/// entropy is available in O(1) after each removal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EntropyCache {
    decided: bool,
    total_weight: u64,
    weighted_log_sum: f64,
}

impl EntropyCache {
    /// Statistics of an unconstrained cell where every weight is possible
    pub fn initial(weights: impl IntoIterator<Item = u32>) -> Self {
        weights
            .into_iter()
            .fold(Self::default(), |mut cache, weight| {
                cache.total_weight += u64::from(weight);
                cache.weighted_log_sum += weighted_log(weight);
                cache
            })
    }

    /// Shannon entropy of the remaining distribution in bits
    pub fn entropy(&self) -> f64 {
        shannon_entropy(self.total_weight, self.weighted_log_sum)
    }

    /// Account for the removal of a pattern of the given weight
    pub fn reduce_weight(&mut self, weight: u32) {
        self.total_weight = self.total_weight.saturating_sub(u64::from(weight));
        self.weighted_log_sum -= weighted_log(weight);
        if self.total_weight == 0 {
            self.weighted_log_sum = 0.0;
        }
    }

    /// Pin the cell to a single chosen pattern
    pub fn decide(&mut self, weight: u32) {
        self.decided = true;
        self.total_weight = u64::from(weight);
        self.weighted_log_sum = weighted_log(weight);
    }

    /// Whether the cell has been observed
    pub const fn is_decided(&self) -> bool {
        self.decided
    }

    /// Sum of the weights of the still-possible patterns
    pub const fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Whether no possible pattern remains
    pub const fn is_contradiction(&self) -> bool {
        self.total_weight == 0
    }
}
