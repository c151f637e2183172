//! Square and rectangular tile-assignment matrices with mirror reflection
//!
//! A matrix stores one tile id per cell. Reflections reverse the cell order
//! along one axis and substitute every tile by its mirror image, which is the
//! operation under which a synthesized kolam is invariant.

use ndarray::{Array2, ArrayView2, s};
use std::fmt;

use crate::io::error::{Result, invalid_parameter};
use crate::tiles::catalog::TileId;
use crate::tiles::rules::CompatibilityRules;

/// Grid of tile ids indexed by `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMatrix {
    cells: Array2<TileId>,
}

impl TileMatrix {
    /// Wrap an existing array
    pub const fn from_array(cells: Array2<TileId>) -> Self {
        Self { cells }
    }

    /// Build a matrix from equally long rows
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the rows differ in length
    pub fn from_rows(rows: &[Vec<TileId>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().position(|row| row.len() != cols) {
            return Err(invalid_parameter(
                "rows",
                &ragged,
                &format!("row length differs from first row length {cols}"),
            ));
        }
        let flat: Vec<TileId> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((rows.len(), cols), flat)
            .map(Self::from_array)
            .map_err(|e| invalid_parameter("rows", &rows.len(), &e))
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Tile at a position, if inside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<TileId> {
        self.cells.get([row, col]).copied()
    }

    /// Read-only view of the underlying array
    pub fn view(&self) -> ArrayView2<'_, TileId> {
        self.cells.view()
    }

    /// Copy of the sub-matrix starting at `(row, col)` with the given extent
    ///
    /// The extent is clamped to the matrix bounds.
    pub fn quadrant(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        let row_end = (row + rows).min(self.rows());
        let col_end = (col + cols).min(self.cols());
        let row_start = row.min(row_end);
        let col_start = col.min(col_end);
        Self::from_array(
            self.cells
                .slice(s![row_start..row_end, col_start..col_end])
                .to_owned(),
        )
    }

    /// Mirror across the vertical axis: reverse column order and substitute
    /// every tile by its left-right mirror image
    #[must_use]
    pub fn reflect_horizontal(&self, rules: &CompatibilityRules) -> Self {
        Self::from_array(
            self.cells
                .slice(s![.., ..;-1])
                .mapv(|tile| rules.horizontal_mirror(tile)),
        )
    }

    /// Mirror across the horizontal axis: reverse row order and substitute
    /// every tile by its top-bottom mirror image
    #[must_use]
    pub fn reflect_vertical(&self, rules: &CompatibilityRules) -> Self {
        Self::from_array(
            self.cells
                .slice(s![..;-1, ..])
                .mapv(|tile| rules.vertical_mirror(tile)),
        )
    }

    /// Cells in row-major order as `(row, col, tile)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TileId)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &tile)| (row, col, tile))
    }
}

impl fmt::Display for TileMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: Vec<String> = row.iter().map(|tile| format!("{tile:>2}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
