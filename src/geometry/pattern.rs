//! Renderable kolam geometry in absolute pixel coordinates
//!
//! A pattern is built once per generation and never mutated; regenerating
//! produces a new pattern.

use serde::{Deserialize, Serialize};

use crate::tiles::catalog::{CurvePoint, TileId};

/// Absolute position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// Grid dot drawn at the centre of a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    /// Stable identifier `dot-{row}-{col}`
    pub id: String,
    /// Dot centre
    pub center: Point,
    /// Radius in pixels
    pub radius: f64,
    /// Fill and stroke color
    pub color: String,
    /// Whether the dot is filled or drawn as an outline
    pub filled: bool,
}

/// Curve of one placed tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curve {
    /// Stable identifier `curve-{row}-{col}`
    pub id: String,
    /// First point of the curve
    pub start: Point,
    /// Last point of the curve
    pub end: Point,
    /// Every curve point with its optional control point
    pub curve_points: Vec<CurvePoint>,
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// Stroke color
    pub color: String,
}

/// Tile placement recorded in the pattern grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Placed tile
    pub pattern_id: TileId,
    /// Centre of the cell's dot
    pub dot_center: Point,
}

/// Tile assignment the pattern was compiled from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternGrid {
    /// Larger of the row and column counts
    pub size: usize,
    /// Cells by row then column
    pub cells: Vec<Vec<GridCell>>,
    /// Distance between neighbouring dots in pixels
    pub cell_spacing: f64,
}

/// Kind of symmetry a pattern was generated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymmetryType {
    /// Mirror symmetric across the grid axes
    #[serde(rename = "1D")]
    Mirror,
    /// Mirror and rotationally symmetric
    #[serde(rename = "2D")]
    Rotational,
    /// No guaranteed symmetry
    #[serde(rename = "none")]
    Asymmetric,
}

/// Overall pixel extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

/// Compiled dots and curves ready for a renderer or exporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPattern {
    /// Identifier `kolam-{rows}x{cols}`
    pub id: String,
    /// Display name
    pub name: String,
    /// Source tile assignment
    pub grid: PatternGrid,
    /// Curves in row-major cell order
    pub curves: Vec<Curve>,
    /// Dots in row-major cell order
    pub dots: Vec<Dot>,
    /// Symmetry of the source grid
    pub symmetry_type: SymmetryType,
    /// Pixel extent of the drawing
    pub dimensions: Dimensions,
}

impl RenderedPattern {
    /// Tile ids of the source grid by row
    pub fn tile_rows(&self) -> Vec<Vec<TileId>> {
        self.grid
            .cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.pattern_id).collect())
            .collect()
    }
}
