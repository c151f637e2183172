//! Command-line interface for batch generation of kolam patterns

use crate::algorithm::generator::KolamGenerator;
use crate::algorithm::synthesis::{SynthesisStats, validate_size};
use crate::geometry::svg::SvgOptions;
use crate::io::configuration::{DEFAULT_CELL_SPACING, DEFAULT_COUNT, DEFAULT_SEED, GeneratorConfig};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{ExportFormat, output_path, write_pattern};
use crate::io::logging::level_for;
use crate::io::progress::ProgressManager;
use crate::tiles::catalog::TileCatalog;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kolamgen")]
#[command(
    author,
    version,
    about = "Generate symmetric kolam dot-and-curve patterns"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Grid size in dots per side (at least 2)
    #[arg(value_name = "SIZE", allow_negative_numbers = true)]
    pub size: i64,

    /// Random seed of the first pattern; later patterns use consecutive seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of patterns to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Distance between neighbouring dots in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SPACING)]
    pub spacing: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Svg)]
    pub format: ExportFormat,

    /// Directory receiving the generated files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Replacement tile catalog in JSON format
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Background color for SVG output
    #[arg(long)]
    pub background: Option<String>,

    /// Overwrite files that already exist
    #[arg(long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.verbose, self.quiet)
    }

    /// Seed of the pattern at `index` within the batch
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the seed would pass `u64::MAX`
    pub fn seed_for(&self, index: usize) -> Result<u64> {
        u64::try_from(index)
            .ok()
            .and_then(|offset| self.seed.checked_add(offset))
            .ok_or_else(|| {
                invalid_parameter(
                    "seed",
                    &self.seed,
                    &format!(
                        "a batch of {} patterns would overflow the seed range",
                        index.saturating_add(1)
                    ),
                )
            })
    }
}

/// Generates a batch of patterns and writes them to the output directory
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested pattern and return the paths written
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The size is invalid, the count is zero or the seeds would overflow
    /// - The catalog cannot be loaded or fails validation
    /// - The spacing is not a positive number
    /// - An output file cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let size = validate_size(self.cli.size)?;
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one pattern must be requested",
            ));
        }
        self.cli.seed_for(self.cli.count - 1)?;

        let generator = self.build_generator()?;
        let svg_options = SvgOptions {
            background: self.cli.background.clone(),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::new();
        let mut totals = SynthesisStats::default();
        for index in 0..self.cli.count {
            let seed = self.cli.seed_for(index)?;
            let path = output_path(&self.cli.output, size, seed, self.cli.format);

            if let Some(ref pm) = self.progress_manager {
                pm.start_pattern(size, seed);
            }

            if self.cli.skip_existing() && path.exists() {
                log::warn!("Skipping: {} (output exists)", path.display());
            } else {
                let mut synthesizer = generator.synthesizer();
                let matrix = synthesizer.synthesize(self.cli.size, &mut StdRng::seed_from_u64(seed))?;
                let pattern = generator.compile(&matrix)?;
                write_pattern(&pattern, self.cli.format, &svg_options, &path)?;
                log::info!("Wrote {}", path.display());

                let stats = synthesizer.stats();
                totals.grids += stats.grids;
                totals.cells += stats.cells;
                totals.fallbacks += stats.fallbacks;
                written.push(path);
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_pattern();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        log::info!(
            "Generated {} patterns ({} cells, {} empty-tile fallbacks)",
            totals.grids,
            totals.cells,
            totals.fallbacks
        );
        Ok(written)
    }

    fn build_generator(&self) -> Result<KolamGenerator> {
        let catalog = match &self.cli.catalog {
            Some(path) => TileCatalog::from_path(path)?,
            None => TileCatalog::builtin()?,
        };
        KolamGenerator::new(catalog, GeneratorConfig::with_spacing(self.cli.spacing))
    }
}
