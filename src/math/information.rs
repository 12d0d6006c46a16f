/// Contribution `w · log2(w)` of one pattern weight to the entropy sum
///
/// Zero for a zero weight, matching the limit of `w · log2(w)` as `w → 0`.
pub fn weighted_log(weight: u32) -> f64 {
    if weight == 0 {
        return 0.0;
    }
    let w = f64::from(weight);
    w * w.log2()
}

/// Shannon entropy of a weighted distribution in bits
///
/// Computed from the total weight `T` and the sum `Σ w·log2(w)` as
/// `log2(T) - Σ / T`. An empty distribution has zero entropy.
pub fn shannon_entropy(total_weight: u64, weighted_log_sum: f64) -> f64 {
    if total_weight == 0 {
        return 0.0;
    }
    let total = total_weight as f64;
    // Rounding in the running sum can push a single-pattern cell slightly negative
    (total.log2() - weighted_log_sum / total).max(0.0)
}

/// Entropy of a distribution given directly by its weights
pub fn entropy_of(weights: impl IntoIterator<Item = u32>) -> f64 {
    let (total, sum) = weights
        .into_iter()
        .fold((0_u64, 0.0_f64), |(total, sum), weight| {
            (total + u64::from(weight), sum + weighted_log(weight))
        });
    shannon_entropy(total, sum)
}
