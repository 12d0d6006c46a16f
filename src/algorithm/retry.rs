//! Bounded restart loop around [`Context`]

use log::{info, warn};

use crate::algorithm::context::{Context, ContextConfig};
use crate::algorithm::solver::AdvanceStatus;
use crate::analysis::model::Model;
use crate::analysis::patterns::PatternCatalog;
use crate::analysis::rules::CompatibilityRule;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::tiles::TileMap;

/// A successful generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// The finished output map
    pub map: TileMap,
    /// Attempts used, the successful one included
    pub attempts: usize,
}

/// Seed of the 0-based attempt `attempt` when the base configuration is seeded
pub const fn attempt_seed(base: Option<u64>, attempt: usize) -> Option<u64> {
    match base {
        Some(seed) => Some(seed.wrapping_add(attempt as u64)),
        None => None,
    }
}

/// Reject an attempt limit that would never run the solver
///
/// # Errors
///
/// Returns an error if `max_attempts` is zero.
pub fn validate_attempts(max_attempts: usize) -> Result<()> {
    if max_attempts == 0 {
        return Err(invalid_parameter(
            "max_attempts",
            &max_attempts,
            &"at least one attempt is required",
        ));
    }
    Ok(())
}

/// Construct, run and discard contexts until one succeeds
///
/// Attempt `k` of a seeded configuration uses seed `seed + k`, so a whole
/// retry sequence is reproducible.
///
/// # Errors
///
/// Returns an error if:
/// - `max_attempts` is zero
/// - A context cannot be constructed
/// - The solver reports an invariant violation
/// - Every attempt ends in a contradiction
pub fn generate<M: Model>(
    catalog: &PatternCatalog,
    rule: &CompatibilityRule,
    model: &M,
    config: ContextConfig,
    max_attempts: usize,
) -> Result<Generated> {
    validate_attempts(max_attempts)?;

    for attempt in 0..max_attempts {
        let attempt_config = ContextConfig {
            seed: attempt_seed(config.seed, attempt),
            ..config
        };
        let mut context = Context::new(catalog, rule, model, attempt_config)?;
        if context.run()? == AdvanceStatus::Success {
            info!("generation succeeded on attempt {}", attempt + 1);
            return Ok(Generated {
                map: context.output(),
                attempts: attempt + 1,
            });
        }
        warn!(
            "attempt {} of {max_attempts} hit a contradiction, restarting",
            attempt + 1
        );
    }

    Err(GenerationError::AttemptsExhausted {
        attempts: max_attempts,
    })
}
