//! Entry point composing synthesis and geometry compilation
//!
//! The catalog and its derived rules are built once per generator and shared
//! read-only by every generation request.

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::LazyLock;

use crate::algorithm::synthesis::Synthesizer;
use crate::geometry::compiler::compile;
use crate::geometry::pattern::RenderedPattern;
use crate::io::configuration::GeneratorConfig;
use crate::io::error::{Result, catalog_error};
use crate::spatial::matrix::TileMatrix;
use crate::tiles::catalog::TileCatalog;
use crate::tiles::rules::CompatibilityRules;

static DEFAULT_GENERATOR: LazyLock<std::result::Result<KolamGenerator, String>> =
    LazyLock::new(|| KolamGenerator::builtin().map_err(|e| e.to_string()));

/// Generate a pattern with the built-in catalog and default spacing
///
/// Uses a freshly seeded random source on every call; use
/// [`KolamGenerator::generate_with_seed`] for reproducible output.
///
/// # Errors
///
/// Returns `InvalidSize` if `size` is below 2, or a catalog integrity error if
/// the built-in catalog fails validation
pub fn generate(size: i64) -> Result<RenderedPattern> {
    let generator = DEFAULT_GENERATOR.as_ref().map_err(catalog_error)?;
    generator.generate(size)
}

/// Validated catalog, rules and drawing configuration
#[derive(Debug, Clone)]
pub struct KolamGenerator {
    catalog: TileCatalog,
    rules: CompatibilityRules,
    config: GeneratorConfig,
}

impl KolamGenerator {
    /// Build a generator for a catalog
    ///
    /// # Errors
    ///
    /// Returns a catalog integrity error if the rules cannot be derived, or an
    /// invalid parameter error if the configuration is invalid
    pub fn new(catalog: TileCatalog, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rules = CompatibilityRules::build(&catalog)?;
        Ok(Self {
            catalog,
            rules,
            config,
        })
    }

    /// Build a generator over the built-in catalog with default configuration
    ///
    /// # Errors
    ///
    /// Returns a catalog integrity error if the built-in data fails validation
    pub fn builtin() -> Result<Self> {
        Self::new(TileCatalog::builtin()?, GeneratorConfig::default())
    }

    /// Tile catalog in use
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Derived compatibility rules
    pub const fn rules(&self) -> &CompatibilityRules {
        &self.rules
    }

    /// Drawing configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fresh synthesizer over this generator's rules
    pub const fn synthesizer(&self) -> Synthesizer<'_> {
        Synthesizer::new(&self.rules)
    }

    /// Compile a matrix with this generator's catalog and configuration
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the configuration is invalid
    pub fn compile(&self, matrix: &TileMatrix) -> Result<RenderedPattern> {
        compile(matrix, &self.catalog, &self.config)
    }

    /// Synthesize and compile a pattern with a caller-provided random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is below 2
    pub fn generate_with_rng<R: Rng>(&self, size: i64, rng: &mut R) -> Result<RenderedPattern> {
        let matrix = self.synthesizer().synthesize(size, rng)?;
        self.compile(&matrix)
    }

    /// Synthesize and compile a reproducible pattern
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is below 2
    pub fn generate_with_seed(&self, size: i64, seed: u64) -> Result<RenderedPattern> {
        self.generate_with_rng(size, &mut StdRng::seed_from_u64(seed))
    }

    /// Synthesize and compile a pattern from an operating system seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is below 2
    pub fn generate(&self, size: i64) -> Result<RenderedPattern> {
        self.generate_with_rng(size, &mut StdRng::from_os_rng())
    }
}
