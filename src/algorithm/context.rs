//! Generation context tying catalog, rule, model and randomness together
//!
//! A context runs exactly one attempt. The catalog and rule are borrowed so they
//! can be shared by every retry; on [`AdvanceStatus::Fail`] the caller drops the
//! context and builds a new one.

use log::info;
use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::solver::{AdvanceStatus, Attempt};
use crate::algorithm::wave::{Violation, Wave};
use crate::analysis::model::Model;
use crate::analysis::patterns::{PatternCatalog, PatternId};
use crate::analysis::rules::CompatibilityRule;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Position, Size, Topology};
use crate::spatial::tiles::TileMap;

/// Parameters of a single attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextConfig {
    /// Output dimensions in tiles
    pub output_size: Size,
    /// Random seed, `None` draws one from the operating system
    pub seed: Option<u64>,
    /// Whether the output wraps around its edges
    pub periodic: bool,
}

impl ContextConfig {
    /// Non-periodic, unseeded configuration for the given output size
    pub const fn new(output_size: Size) -> Self {
        Self {
            output_size,
            seed: None,
            periodic: false,
        }
    }

    /// Same configuration with a fixed seed
    #[must_use]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Same configuration with wrap-around toggled
    #[must_use]
    pub const fn with_periodic(self, periodic: bool) -> Self {
        Self { periodic, ..self }
    }
}

/// One generation attempt over a shared catalog and rule
pub struct Context<'a, M: Model> {
    catalog: &'a PatternCatalog,
    rule: &'a CompatibilityRule,
    model: &'a M,
    config: ContextConfig,
    rng: StdRng,
    attempt: Attempt,
}

impl<'a, M: Model> Context<'a, M> {
    /// Validate the inputs and set up a fresh wave
    ///
    /// Patterns that can never be supported are pruned before the first step.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model expects a different extraction than the catalog used
    /// - The rule was built for a different number of patterns
    /// - The output size is empty, too large, or (chunked model) not a
    ///   multiple of the pattern size
    pub fn new(
        catalog: &'a PatternCatalog,
        rule: &'a CompatibilityRule,
        model: &'a M,
        config: ContextConfig,
    ) -> Result<Self> {
        if catalog.extraction() != model.extraction() {
            return Err(invalid_parameter(
                "model",
                &model.name(),
                &format!(
                    "catalog was built with {:?} extraction",
                    catalog.extraction()
                ),
            ));
        }
        if rule.pattern_count() != catalog.len() {
            return Err(invalid_parameter(
                "rule",
                &rule.pattern_count(),
                &format!("catalog holds {} patterns", catalog.len()),
            ));
        }
        let output = config.output_size;
        if output.width > MAX_GRID_DIMENSION || output.height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "output_size",
                &output,
                &format!("dimensions must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        let wave_size = model.wave_size(output, catalog.pattern_size())?;

        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let topology = Topology::new(wave_size, config.periodic);
        let attempt = Attempt::new(topology, catalog, rule, &mut rng);

        Ok(Self {
            catalog,
            rule,
            model,
            config,
            rng,
            attempt,
        })
    }

    /// Step until the attempt succeeds or fails
    ///
    /// # Errors
    ///
    /// Propagates invariant violations from [`Context::step`].
    pub fn run(&mut self) -> Result<AdvanceStatus> {
        loop {
            match self.step()? {
                AdvanceStatus::Continue => {}
                status => return Ok(status),
            }
        }
    }

    /// Decide one cell and propagate its consequences
    ///
    /// # Errors
    ///
    /// Returns an error if solver bookkeeping is found inconsistent.
    pub fn step(&mut self) -> Result<AdvanceStatus> {
        let status = self.attempt.advance(self.catalog, self.rule, &mut self.rng)?;
        if status == AdvanceStatus::Success {
            info!(
                "{} model filled {} cells",
                self.model.name(),
                self.cell_count()
            );
        }
        Ok(status)
    }

    /// Reconstruct the output map from the decided cells
    ///
    /// Cells not yet decided come out as [`Tile::None`](crate::spatial::tiles::Tile::None).
    pub fn output(&self) -> TileMap {
        self.model.reconstruct(
            self.catalog,
            self.attempt.wave().decided(),
            self.config.output_size,
        )
    }

    /// Pattern a wave cell was decided as
    pub fn pattern_at(&self, position: Position) -> Option<PatternId> {
        self.attempt.wave().pattern_at(position)
    }

    /// Number of decided wave cells
    pub fn decided_count(&self) -> usize {
        self.cell_count() - self.attempt.undecided()
    }

    /// Number of wave cells
    pub const fn cell_count(&self) -> usize {
        self.attempt.wave().topology().size.area()
    }

    /// Decided neighbours the rule forbids side by side
    pub fn violations(&self) -> Vec<Violation> {
        self.attempt.wave().violations(self.rule)
    }

    /// Whether every pair of decided neighbours is legal
    pub fn is_consistent(&self) -> bool {
        self.violations().is_empty()
    }

    /// Whether a contradiction has ended this attempt
    pub const fn is_failed(&self) -> bool {
        self.attempt.is_failed()
    }

    /// Solver state, for inspection between steps
    pub const fn wave(&self) -> &Wave {
        self.attempt.wave()
    }

    /// Configuration this context was built with
    pub const fn config(&self) -> &ContextConfig {
        &self.config
    }
}
