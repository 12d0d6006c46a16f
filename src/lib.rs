//! Wave function collapse generator for tile-based dungeon layouts
//!
//! Patterns are extracted from a small sample map, their adjacency rules are
//! precomputed once, and each generation attempt fills a fresh wave by
//! repeatedly deciding the lowest-entropy cell and propagating the
//! consequences. A contradiction discards the attempt; the caller retries.

#![forbid(unsafe_code)]

/// Solver state, propagation and the generation context
pub mod algorithm;
/// Pattern extraction, models and compatibility rules
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Entropy and pair-indexing utilities
pub mod math;
/// Grids, directions, symmetries and tiles
pub mod spatial;

pub use io::error::{GenerationError, Result};
