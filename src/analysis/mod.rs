//! Pattern analysis of the source map
//!
//! Builds the immutable inputs of a generation run: the deduplicated pattern
//! catalog and the compatibility rule, both reusable across attempts.

/// Overlapping and chunked generation models
pub mod model;
/// Pattern extraction with symmetry variants and weight counting
pub mod patterns;
/// Symmetric compatibility cache between patterns
pub mod rules;

pub use model::{Chunked, Model, Overlapping};
pub use patterns::{Extraction, Pattern, PatternCatalog, PatternId};
pub use rules::CompatibilityRule;
