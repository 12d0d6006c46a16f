//! Command-line interface for generating dungeon maps from an ASCII sample

use crate::algorithm::context::{Context, ContextConfig};
use crate::algorithm::retry::{attempt_seed, validate_attempts};
use crate::algorithm::solver::AdvanceStatus;
use crate::analysis::model::{Chunked, Model, Overlapping};
use crate::analysis::patterns::PatternCatalog;
use crate::analysis::rules::CompatibilityRule;
use crate::io::ascii::{load_map, render_map};
use crate::io::configuration::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_PATTERN_SIZE,
    DEFAULT_PIXEL_SCALE, DEFAULT_SEED, PROGRESS_UPDATE_INTERVAL,
};
use crate::io::error::{GenerationError, Result, WithPath, invariant_violation};
use crate::io::image::export_tile_map_as_png;
use crate::io::logging;
use crate::io::progress::GenerationProgress;
use crate::spatial::grid::Size;
use crate::spatial::mask::circular_mask;
use crate::spatial::symmetry::Variant;
use crate::spatial::tiles::TileMap;
use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which generation model to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// Overlapping sliding windows, one tile per cell
    Overlapping,
    /// Disjoint N×N chunks stamped edge to edge
    Chunked,
}

/// Which symmetry variants of each window to extract
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SymmetryMode {
    /// All rotations and reflections
    All,
    /// The four rotations
    Rotations,
    /// Windows as they appear in the source
    Identity,
}

impl SymmetryMode {
    /// Variants applied to every window
    pub const fn variants(self) -> &'static [Variant] {
        match self {
            Self::All => &Variant::ALL,
            Self::Rotations => &Variant::ROTATIONS,
            Self::Identity => &[Variant::Identity],
        }
    }
}

#[derive(Parser)]
#[command(name = "dungeon-wfc")]
#[command(
    author,
    version,
    about = "Generate dungeon layouts from an ASCII sample using wave function collapse"
)]
/// Command-line arguments for the dungeon generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// ASCII sample map to learn patterns from
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Side length of extracted patterns
    #[arg(short = 'n', long, default_value_t = DEFAULT_PATTERN_SIZE)]
    pub pattern_size: usize,

    /// Output width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: usize,

    /// Output height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: usize,

    /// Generation model
    #[arg(long, value_enum, default_value_t = ModelKind::Overlapping)]
    pub model: ModelKind,

    /// Symmetry variants extracted from each window
    #[arg(long, value_enum, default_value_t = SymmetryMode::All)]
    pub symmetry: SymmetryMode,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Draw the seed from the operating system instead
    #[arg(long, conflicts_with = "seed")]
    pub random: bool,

    /// Attempts before giving up
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Wrap the output around its edges
    #[arg(long)]
    pub periodic: bool,

    /// Blank everything outside the inscribed circle
    #[arg(long)]
    pub circle: bool,

    /// Also write the map as a PNG image
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Check that every pair of neighbouring cells is legal
    #[arg(long)]
    pub verify: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> LevelFilter {
        logging::level_for(self.verbose, self.quiet)
    }

    /// Attempt configuration selected by the flags
    pub const fn context_config(&self) -> ContextConfig {
        ContextConfig {
            output_size: Size::new(self.width, self.height),
            seed: if self.random { None } else { Some(self.seed) },
            periodic: self.periodic,
        }
    }
}

/// Drives one generation from the command line with progress tracking
pub struct Generator {
    cli: Cli,
    progress: Option<GenerationProgress>,
}

impl Generator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| GenerationProgress::new(cli.attempts));
        Self { cli, progress }
    }

    /// Generate, post-process and emit the map
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded, generation fails, or
    /// an output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let mut map = self.generate()?;
        if self.cli.circle {
            map = circular_mask(&map);
        }

        if let Some(ref path) = self.cli.png {
            export_tile_map_as_png(&map, path, DEFAULT_PIXEL_SCALE)?;
            info!("wrote {}", path.display());
        }

        let stdout_path = Path::new("<stdout>");
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(render_map(&map).as_bytes())
            .with_path(stdout_path, "write map")?;
        stdout.flush().with_path(stdout_path, "flush map")
    }

    /// Load the source and run attempts with the selected model
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded, the inputs or the
    /// attempt limit are rejected, verification fails, or every attempt hits
    /// a contradiction
    pub fn generate(&mut self) -> Result<TileMap> {
        let source = load_map(&self.cli.source)?;
        info!(
            "loaded {} sample from {}",
            source.size(),
            self.cli.source.display()
        );

        let result = match self.cli.model {
            ModelKind::Overlapping => self.generate_with(&source, &Overlapping),
            ModelKind::Chunked => self.generate_with(&source, &Chunked),
        };

        if let Some(ref progress) = self.progress {
            progress.finish(if result.is_ok() { "done" } else { "failed" });
        }
        result
    }

    fn generate_with<M: Model>(&self, source: &TileMap, model: &M) -> Result<TileMap> {
        validate_attempts(self.cli.attempts)?;
        let catalog = PatternCatalog::build(
            source,
            self.cli.pattern_size,
            self.cli.symmetry.variants(),
            model.extraction(),
        )?;
        let rule = CompatibilityRule::build(&catalog, model)?;
        let base = self.cli.context_config();

        for attempt in 0..self.cli.attempts {
            let config = ContextConfig {
                seed: attempt_seed(base.seed, attempt),
                ..base
            };
            let mut context = Context::new(&catalog, &rule, model, config)?;
            if let Some(ref progress) = self.progress {
                progress.start_attempt(attempt, context.cell_count());
            }

            if self.run_attempt(&mut context)? == AdvanceStatus::Success {
                if self.cli.verify {
                    Self::verify(&context)?;
                }
                info!("succeeded on attempt {}", attempt + 1);
                return Ok(context.output());
            }

            warn!("attempt {} hit a contradiction, restarting", attempt + 1);
            if let Some(ref progress) = self.progress {
                progress.fail_attempt();
            }
        }

        Err(GenerationError::AttemptsExhausted {
            attempts: self.cli.attempts,
        })
    }

    fn run_attempt<M: Model>(&self, context: &mut Context<'_, M>) -> Result<AdvanceStatus> {
        loop {
            let status = context.step()?;
            if let Some(ref progress) = self.progress {
                let decided = context.decided_count();
                if status != AdvanceStatus::Continue || decided % PROGRESS_UPDATE_INTERVAL == 0 {
                    progress.update_cells(decided);
                }
            }
            if status != AdvanceStatus::Continue {
                return Ok(status);
            }
        }
    }

    fn verify<M: Model>(context: &Context<'_, M>) -> Result<()> {
        let violations = context.violations();
        if let Some(first) = violations.first() {
            return Err(invariant_violation(
                "verify",
                &format!(
                    "{} neighbouring cells break the rule, first at {} towards {}",
                    violations.len(),
                    first.position,
                    first.direction
                ),
            ));
        }
        info!("verified {} cells", context.cell_count());
        Ok(())
    }
}
