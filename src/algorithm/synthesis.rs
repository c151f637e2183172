//! Quadrant fill and mirror assembly of symmetric tile matrices
//!
//! One quadrant of the kolam is filled cell by cell from the candidate sets
//! of its already placed upper and left neighbours. The quadrant is padded by
//! a boundary row and column of empty tiles on the top and left, and by the
//! seam row and column on the bottom and right. The seams lie on the mirror
//! axes of odd-sized grids and only accept tiles stable under that mirror.
//! The full grid is then assembled from the quadrant and its reflections.
//!
//! An empty candidate set never aborts synthesis: the cell receives the empty
//! tile and the event is counted. There is no backtracking.

use ndarray::{Array2, s};
use rand::Rng;

use crate::io::configuration::{EMPTY_TILE, MAX_KOLAM_SIZE, MIN_KOLAM_SIZE};
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::spatial::matrix::TileMatrix;
use crate::tiles::bitset::TileSet;
use crate::tiles::catalog::TileId;
use crate::tiles::rules::CompatibilityRules;

/// Counters describing the work done by a synthesizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisStats {
    /// Number of completed grids
    pub grids: usize,
    /// Number of quadrant cells filled
    pub cells: usize,
    /// Quadrant cells kept in the output that fell back to the empty tile
    /// because no candidate remained
    pub fallbacks: usize,
}

/// Check a requested size and convert it to a grid dimension
///
/// # Errors
///
/// Returns `InvalidSize` below the minimum size and an invalid parameter
/// error above the maximum size
pub fn validate_size(size: i64) -> Result<usize> {
    let minimum = MIN_KOLAM_SIZE;
    match usize::try_from(size) {
        Ok(valid) if valid >= minimum => {
            if valid > MAX_KOLAM_SIZE {
                Err(invalid_parameter(
                    "size",
                    &size,
                    &format!("must not exceed {MAX_KOLAM_SIZE}"),
                ))
            } else {
                Ok(valid)
            }
        }
        _ => Err(KolamError::InvalidSize { size, minimum }),
    }
}

/// Half-period of a grid: the side of the quadrant that gets synthesized
pub const fn half_period(size: usize) -> usize {
    if size % 2 == 1 {
        (size - 1) / 2
    } else {
        size / 2
    }
}

/// Builds doubly mirror-symmetric tile matrices
pub struct Synthesizer<'a> {
    rules: &'a CompatibilityRules,
    stats: SynthesisStats,
    quadrant_fallbacks: Vec<[usize; 2]>,
}

impl<'a> Synthesizer<'a> {
    /// Create a synthesizer over a rule set
    pub const fn new(rules: &'a CompatibilityRules) -> Self {
        Self {
            rules,
            stats: SynthesisStats {
                grids: 0,
                cells: 0,
                fallbacks: 0,
            },
            quadrant_fallbacks: Vec::new(),
        }
    }

    /// Counters accumulated over all calls
    pub const fn stats(&self) -> SynthesisStats {
        self.stats
    }

    /// Synthesize a `size` × `size` matrix symmetric under both mirrors
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is below 2, or an invalid parameter error
    /// if it exceeds the configured maximum
    pub fn synthesize<R: Rng>(&mut self, size: i64, rng: &mut R) -> Result<TileMatrix> {
        let size = validate_size(size)?;
        let h = half_period(size);
        let odd = size % 2 == 1;

        let work = self.fill_quadrant(h, rng);
        let matrix = if odd {
            self.assemble_odd(&work, h)
        } else {
            self.assemble_even(&work, h)
        };

        // Even grids drop the seam row and column after filling them
        let kept = self
            .quadrant_fallbacks
            .iter()
            .filter(|[row, col]| odd || (*row <= h && *col <= h))
            .count();
        self.stats.fallbacks += kept;
        self.stats.grids += 1;
        log::debug!(
            "synthesized {size}x{size} kolam (half-period {h}, {kept} fallbacks)"
        );
        log::trace!("tile matrix:\n{matrix}");
        Ok(matrix)
    }

    /// Fill the padded `(h + 2)` × `(h + 2)` working quadrant
    ///
    /// Row and column 0 stay empty as the open boundary. Row and column
    /// `h + 1` are the seams. They are filled for even grids too, so both
    /// parities draw the same random sequence.
    pub fn fill_quadrant<R: Rng>(&mut self, h: usize, rng: &mut R) -> Array2<TileId> {
        self.quadrant_fallbacks.clear();
        let mut work = Array2::from_elem((h + 2, h + 2), EMPTY_TILE);
        let horizontal_self = self.rules.horizontal_self_inverse().clone();
        let vertical_self = self.rules.vertical_self_inverse().clone();

        for i in 1..=h {
            for j in 1..=h {
                self.fill_cell(&mut work, [i, j], &[], rng);
            }
        }

        for j in 1..=h {
            self.fill_cell(&mut work, [h + 1, j], &[&vertical_self], rng);
        }

        for i in 1..=h {
            self.fill_cell(&mut work, [i, h + 1], &[&horizontal_self], rng);
        }

        self.fill_cell(
            &mut work,
            [h + 1, h + 1],
            &[&horizontal_self, &vertical_self],
            rng,
        );

        work
    }

    fn fill_cell<R: Rng>(
        &mut self,
        work: &mut Array2<TileId>,
        [row, col]: [usize; 2],
        restrictions: &[&TileSet],
        rng: &mut R,
    ) {
        let above = row
            .checked_sub(1)
            .and_then(|r| work.get([r, col]))
            .copied()
            .unwrap_or(EMPTY_TILE);
        let left = col
            .checked_sub(1)
            .and_then(|c| work.get([row, c]))
            .copied()
            .unwrap_or(EMPTY_TILE);

        let mut candidates = self.rules.below(above).intersection(self.rules.right_of(left));
        for restriction in restrictions {
            candidates.intersect_with(restriction);
        }

        let tile = self.choose(&candidates, [row, col], rng);
        if let Some(cell) = work.get_mut([row, col]) {
            *cell = tile;
        }
        self.stats.cells += 1;
    }

    fn choose<R: Rng>(
        &mut self,
        candidates: &TileSet,
        position: [usize; 2],
        rng: &mut R,
    ) -> TileId {
        let ids = candidates.to_vec();
        if ids.is_empty() {
            self.quadrant_fallbacks.push(position);
            log::trace!("no candidate tile at {position:?}, using empty tile");
            return EMPTY_TILE;
        }
        ids.get(rng.random_range(0..ids.len()))
            .copied()
            .unwrap_or(EMPTY_TILE)
    }

    fn reflected_quadrants(&self, work: &Array2<TileId>, h: usize) -> [TileMatrix; 4] {
        let top_left = TileMatrix::from_array(work.slice(s![1..=h, 1..=h]).to_owned());
        let top_right = top_left.reflect_horizontal(self.rules);
        let bottom_left = top_left.reflect_vertical(self.rules);
        let bottom_right = top_right.reflect_vertical(self.rules);
        [top_left, top_right, bottom_left, bottom_right]
    }

    /// Four quadrants tile the grid exactly; the seams are not used
    fn assemble_even(&self, work: &Array2<TileId>, h: usize) -> TileMatrix {
        let [top_left, top_right, bottom_left, bottom_right] = self.reflected_quadrants(work, h);
        let mut full = Array2::from_elem((2 * h, 2 * h), EMPTY_TILE);

        full.slice_mut(s![..h, ..h]).assign(&top_left.view());
        full.slice_mut(s![..h, h..]).assign(&top_right.view());
        full.slice_mut(s![h.., ..h]).assign(&bottom_left.view());
        full.slice_mut(s![h.., h..]).assign(&bottom_right.view());

        TileMatrix::from_array(full)
    }

    /// Quadrants are separated by the shared seam row and column at index `h`
    fn assemble_odd(&self, work: &Array2<TileId>, h: usize) -> TileMatrix {
        let [top_left, top_right, bottom_left, bottom_right] = self.reflected_quadrants(work, h);
        let n = 2 * h + 1;
        let mut full = Array2::from_elem((n, n), EMPTY_TILE);

        full.slice_mut(s![..h, ..h]).assign(&top_left.view());
        full.slice_mut(s![..h, h + 1..]).assign(&top_right.view());
        full.slice_mut(s![h + 1.., ..h]).assign(&bottom_left.view());
        full.slice_mut(s![h + 1.., h + 1..]).assign(&bottom_right.view());

        // Seam row: left half including the centre, then its mirror image
        full.slice_mut(s![h, ..=h])
            .assign(&work.slice(s![h + 1, 1..=h + 1]));
        full.slice_mut(s![h, h + 1..]).assign(
            &work
                .slice(s![h + 1, 1..=h;-1])
                .mapv(|tile| self.rules.horizontal_mirror(tile)),
        );

        // Seam column: upper half, then its mirror image below the centre
        full.slice_mut(s![..h, h])
            .assign(&work.slice(s![1..=h, h + 1]));
        full.slice_mut(s![h + 1.., h]).assign(
            &work
                .slice(s![1..=h;-1, h + 1])
                .mapv(|tile| self.rules.vertical_mirror(tile)),
        );

        TileMatrix::from_array(full)
    }
}
