/// Per-cell possibility sets over pattern ids
pub mod bitset;
/// Context owning one attempt, with run-to-completion and stepwise APIs
pub mod context;
/// Arc-consistency enabler counts
pub mod enablers;
/// Incremental entropy caches
pub mod entropy;
/// Lazy-deletion minimum-entropy queue
pub mod heap;
/// Worklist propagation of pattern removals
pub mod propagation;
/// Bounded restart loop over fresh contexts
pub mod retry;
/// Observe, collapse and propagate state machine
pub mod solver;
/// Possibility, entropy and enabler state of every cell
pub mod wave;
