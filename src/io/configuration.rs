//! Generation constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

/// Number of tiles in the catalog
pub const TILE_COUNT: usize = 16;

/// Identifier of the empty tile used for padding and degenerate fallback
pub const EMPTY_TILE: u8 = 1;

/// Smallest grid size that produces a non-empty quadrant
pub const MIN_KOLAM_SIZE: usize = 2;

// Guards against runaway allocations from a mistyped size
/// Largest accepted grid size
pub const MAX_KOLAM_SIZE: usize = 1000;

/// Distance in pixels between neighbouring dots
pub const DEFAULT_CELL_SPACING: f64 = 60.0;

/// Radius of generated dots in pixels
pub const DEFAULT_DOT_RADIUS: f64 = 3.0;

/// Stroke width of generated curves in pixels
pub const DEFAULT_STROKE_WIDTH: f64 = 1.5;

/// Color used for dots and curves
pub const DEFAULT_COLOR: &str = "#ffffff";

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Number of patterns generated per invocation
pub const DEFAULT_COUNT: usize = 1;

// Output settings
/// Prefix of generated file names
pub const OUTPUT_PREFIX: &str = "kolam";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Drawing parameters applied when compiling a tile matrix into geometry
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Distance between neighbouring dots in pixels
    pub cell_spacing: f64,
    /// Radius of each dot in pixels
    pub dot_radius: f64,
    /// Stroke width of each curve in pixels
    pub stroke_width: f64,
    /// Color of dots and curves
    pub color: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cell_spacing: DEFAULT_CELL_SPACING,
            dot_radius: DEFAULT_DOT_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with a different cell spacing
    pub fn with_spacing(cell_spacing: f64) -> Self {
        Self {
            cell_spacing,
            ..Self::default()
        }
    }

    /// Check that all lengths are positive and finite
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the first offending field
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("cell_spacing", self.cell_spacing),
            ("dot_radius", self.dot_radius),
            ("stroke_width", self.stroke_width),
        ];
        for (parameter, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a positive finite number",
                ));
            }
        }
        Ok(())
    }
}
