use bitvec::prelude::*;
use std::fmt;

use crate::io::configuration::TILE_COUNT;
use crate::tiles::catalog::TileId;

/// Membership set over the tile catalog
///
/// Uses 1-based indexing to match tile ids throughout the system.
/// Ids outside `1..=TILE_COUNT` are ignored on insert and never contained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
}

impl Default for TileSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSet {
    /// Create a set with no tiles present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; TILE_COUNT],
        }
    }

    /// Create a set containing every catalog tile
    pub fn all() -> Self {
        Self {
            bits: bitvec![1; TILE_COUNT],
        }
    }

    /// Build a set from tile ids
    pub fn from_ids(ids: &[TileId]) -> Self {
        let mut set = Self::new();
        for &id in ids {
            set.insert(id);
        }
        set
    }

    /// Insert a tile id
    pub fn insert(&mut self, id: TileId) {
        let index = usize::from(id);
        if index > 0 && index <= TILE_COUNT {
            self.bits.set(index - 1, true);
        }
    }

    /// Remove a tile id
    pub fn remove(&mut self, id: TileId) {
        let index = usize::from(id);
        if index > 0 && index <= TILE_COUNT {
            self.bits.set(index - 1, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, id: TileId) -> bool {
        let index = usize::from(id);
        index > 0 && self.bits.get(index - 1).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Tile ids in ascending order
    pub fn to_vec(&self) -> Vec<TileId> {
        self.bits
            .iter_ones()
            .filter_map(|index| TileId::try_from(index + 1).ok())
            .collect()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} tiles: {:?})", self.count(), self.to_vec())
    }
}
