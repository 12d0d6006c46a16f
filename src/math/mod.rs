//! Mathematical utilities for the solver

/// Shannon entropy over weighted pattern distributions
pub mod information;
/// Triangular indexing for symmetric pair tables
pub mod pairs;
