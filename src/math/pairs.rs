//! Packed storage index for unordered pattern pairs
//!
//! Symmetric relations over `n` ids keep only the upper triangle `from <= to`.
//! Row `from` of the triangle starts after the `from` longer rows above it, so
//! its offset is `from * n - from * (from - 1) / 2`, which simplifies to the
//! closed form used below.

use crate::spatial::direction::Direction;

/// Number of stored cells for `n` ids, diagonal included
pub const fn triangle_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Storage index of the ordered pair `(from, to)` with `from <= to < n`
///
/// Returns `None` for pairs outside the upper triangle.
pub const fn triangular_index(n: usize, from: usize, to: usize) -> Option<usize> {
    if from > to || to >= n {
        return None;
    }
    Some(from * (2 * n - from + 1) / 2 + (to - from))
}

/// Reorder a directional pair query so that `from <= to`
///
/// "`to` lies in `direction` from `from`" is the same statement as "`from`
/// lies in the opposite direction from `to`", so swapping the ids requires
/// inverting the direction.
pub const fn canonical_pair(
    from: usize,
    direction: Direction,
    to: usize,
) -> (usize, Direction, usize) {
    if from > to {
        (to, direction.opposite(), from)
    } else {
        (from, direction, to)
    }
}
