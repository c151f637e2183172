//! Conversion of tile matrices into absolute dot and curve geometry
//!
//! Dots sit on integer grid points offset by one cell from the origin, so the
//! dot of cell `(row, col)` is at `((col + 1) * spacing, (row + 1) * spacing)`.
//! Compilation is deterministic: the same matrix and configuration always give
//! identical output.

use crate::geometry::pattern::{
    Curve, Dimensions, Dot, GridCell, PatternGrid, Point, RenderedPattern, SymmetryType,
};
use crate::io::configuration::GeneratorConfig;
use crate::io::error::Result;
use crate::spatial::matrix::TileMatrix;
use crate::tiles::catalog::{CurvePoint, TileCatalog};

const fn to_point(point: &CurvePoint) -> Point {
    Point {
        x: point.x,
        y: point.y,
    }
}

/// Compile a tile matrix into a renderable pattern
///
/// Every cell holding a tile id greater than zero gets a dot. Cells whose tile
/// has curve points also get one curve, translated from cell-local offsets into
/// pixels. Ids missing from the catalog only produce a dot.
///
/// # Errors
///
/// Returns an invalid parameter error if the configuration has a non-positive length
pub fn compile(
    matrix: &TileMatrix,
    catalog: &TileCatalog,
    config: &GeneratorConfig,
) -> Result<RenderedPattern> {
    config.validate()?;

    let spacing = config.cell_spacing;
    let (rows, cols) = matrix.dim();
    let mut dots = Vec::with_capacity(rows * cols);
    let mut curves = Vec::new();
    let mut cells: Vec<Vec<GridCell>> = (0..rows).map(|_| Vec::with_capacity(cols)).collect();

    for (row, col, tile_id) in matrix.iter() {
        let origin = [(col + 1) as f64, (row + 1) as f64];
        let center = Point {
            x: origin[0] * spacing,
            y: origin[1] * spacing,
        };

        if let Some(cells_row) = cells.get_mut(row) {
            cells_row.push(GridCell {
                row,
                col,
                pattern_id: tile_id,
                dot_center: center,
            });
        }

        if tile_id == 0 {
            continue;
        }

        dots.push(Dot {
            id: format!("dot-{row}-{col}"),
            center,
            radius: config.dot_radius,
            color: config.color.clone(),
            filled: true,
        });

        let Some(tile) = catalog.get(tile_id).filter(|tile| tile.has_curve()) else {
            continue;
        };

        let curve_points: Vec<CurvePoint> = tile
            .points
            .iter()
            .map(|point| point.placed(origin, spacing))
            .collect();
        let (Some(first), Some(last)) = (curve_points.first(), curve_points.last()) else {
            continue;
        };

        curves.push(Curve {
            id: format!("curve-{row}-{col}"),
            start: to_point(first),
            end: to_point(last),
            stroke_width: config.stroke_width,
            color: config.color.clone(),
            curve_points,
        });
    }

    Ok(RenderedPattern {
        id: format!("kolam-{rows}x{cols}"),
        name: format!("Kolam {rows}×{cols}"),
        grid: PatternGrid {
            size: rows.max(cols),
            cells,
            cell_spacing: spacing,
        },
        curves,
        dots,
        symmetry_type: SymmetryType::Mirror,
        dimensions: Dimensions {
            width: (cols + 1) as f64 * spacing,
            height: (rows + 1) as f64 * spacing,
        },
    })
}
