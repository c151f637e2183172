//! Adjacency and symmetry rules derived from the tile catalog
//!
//! The mirror tables are hand-authored domain knowledge: a tile's mirror image
//! cannot be recovered from its curve geometry here, so both tables are fixed
//! constants that get validated against the catalog flags when the rules are
//! built. Everything else (edge connectivity on all four sides, the candidate
//! sets used by the synthesizer, the self-inverse sets and the compatibility
//! table) is derived once and immutable afterwards.

use crate::io::configuration::{EMPTY_TILE, TILE_COUNT};
use crate::io::error::{Result, catalog_error};
use crate::tiles::bitset::TileSet;
use crate::tiles::catalog::{Tile, TileCatalog, TileId};

/// Tile substitution for a reflection that swaps left and right
pub const HORIZONTAL_MIRROR: [TileId; TILE_COUNT] =
    [1, 2, 5, 4, 3, 9, 8, 7, 6, 10, 11, 12, 15, 14, 13, 16];

/// Tile substitution for a reflection that swaps top and bottom
pub const VERTICAL_MIRROR: [TileId; TILE_COUNT] =
    [1, 4, 3, 2, 5, 7, 6, 9, 8, 10, 11, 14, 13, 12, 15, 16];

/// Which cell edges a tile's curve crosses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    /// Crosses into the cell above
    pub up: bool,
    /// Crosses into the cell below
    pub down: bool,
    /// Crosses into the cell to the left
    pub left: bool,
    /// Crosses into the cell to the right
    pub right: bool,
}

impl Edges {
    /// True when the curve stays inside its cell
    pub const fn is_closed(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Derived adjacency tables, mirror tables and self-inverse sets
#[derive(Debug, Clone)]
pub struct CompatibilityRules {
    edges: Vec<Edges>,
    compatible: Vec<TileSet>,
    below_open: TileSet,
    below_connected: TileSet,
    right_of_open: TileSet,
    right_of_connected: TileSet,
    down_connectors: TileSet,
    right_connectors: TileSet,
    horizontal_mirror: [TileId; TILE_COUNT],
    vertical_mirror: [TileId; TILE_COUNT],
    horizontal_self: TileSet,
    vertical_self: TileSet,
}

fn lookup(table: &[TileId; TILE_COUNT], id: TileId) -> Option<TileId> {
    usize::from(id)
        .checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
}

fn tile_ids() -> impl Iterator<Item = TileId> {
    (1..=TILE_COUNT).filter_map(|id| TileId::try_from(id).ok())
}

fn validate_mirror(
    name: &str,
    table: &[TileId; TILE_COUNT],
    catalog: &TileCatalog,
    preserved_flag: fn(&Tile) -> bool,
) -> Result<()> {
    for id in tile_ids() {
        let image = lookup(table, id).unwrap_or(0);
        let Some(mirrored) = catalog.get(image) else {
            return Err(catalog_error(&format!(
                "{name} mirror maps tile {id} to unknown tile {image}"
            )));
        };
        if lookup(table, image) != Some(id) {
            return Err(catalog_error(&format!(
                "{name} mirror is not an involution at tile {id}"
            )));
        }
        let original = catalog.get(id).map(preserved_flag);
        if original != Some(preserved_flag(mirrored)) {
            return Err(catalog_error(&format!(
                "{name} mirror pairs tile {id} with tile {image} but their connectivity differs"
            )));
        }
    }
    Ok(())
}

fn fixed_points(table: &[TileId; TILE_COUNT]) -> TileSet {
    let mut set = TileSet::new();
    for id in tile_ids() {
        if lookup(table, id) == Some(id) {
            set.insert(id);
        }
    }
    set
}

impl CompatibilityRules {
    /// Derive the rules for a catalog using the built-in mirror tables
    ///
    /// # Errors
    ///
    /// Returns a catalog integrity error if the mirror tables disagree with the catalog
    pub fn build(catalog: &TileCatalog) -> Result<Self> {
        Self::with_mirrors(catalog, HORIZONTAL_MIRROR, VERTICAL_MIRROR)
    }

    /// Derive the rules for a catalog using explicit mirror tables
    ///
    /// # Errors
    ///
    /// Returns a catalog integrity error if:
    /// - a mirror table entry is outside the catalog or the table is not an involution
    /// - a horizontal mirror changes a tile's down flag, or a vertical mirror its right flag
    /// - the two mirror tables do not commute
    /// - the empty tile is not the only tile crossing no edge
    pub fn with_mirrors(
        catalog: &TileCatalog,
        horizontal_mirror: [TileId; TILE_COUNT],
        vertical_mirror: [TileId; TILE_COUNT],
    ) -> Result<Self> {
        validate_mirror("horizontal", &horizontal_mirror, catalog, |tile| tile.down)?;
        validate_mirror("vertical", &vertical_mirror, catalog, |tile| tile.right)?;

        for id in tile_ids() {
            let hv = lookup(&vertical_mirror, id).and_then(|v| lookup(&horizontal_mirror, v));
            let vh = lookup(&horizontal_mirror, id).and_then(|h| lookup(&vertical_mirror, h));
            if hv != vh {
                return Err(catalog_error(&format!(
                    "mirror tables do not commute at tile {id}"
                )));
            }
        }

        let flag = |id: Option<TileId>, pick: fn(&Tile) -> bool| {
            id.and_then(|id| catalog.get(id)).is_some_and(pick)
        };

        // A tile enters its cell from above where its vertical image leaves below
        let edges: Vec<Edges> = catalog
            .tiles()
            .iter()
            .map(|tile| Edges {
                up: flag(lookup(&vertical_mirror, tile.id), |t| t.down),
                down: tile.down,
                left: flag(lookup(&horizontal_mirror, tile.id), |t| t.right),
                right: tile.right,
            })
            .collect();

        let closed: Vec<TileId> = tile_ids()
            .zip(&edges)
            .filter(|(_, edge)| edge.is_closed())
            .map(|(id, _)| id)
            .collect();
        if closed != [EMPTY_TILE] {
            return Err(catalog_error(&format!(
                "tile {EMPTY_TILE} must be the only tile crossing no edge, found {closed:?}"
            )));
        }

        let mut below_open = TileSet::new();
        let mut below_connected = TileSet::new();
        let mut right_of_open = TileSet::new();
        let mut right_of_connected = TileSet::new();
        for (id, edge) in tile_ids().zip(&edges) {
            if id == EMPTY_TILE {
                continue;
            }
            if edge.up {
                below_connected.insert(id);
            } else {
                below_open.insert(id);
            }
            if edge.left {
                right_of_connected.insert(id);
            } else {
                right_of_open.insert(id);
            }
        }

        let compatible = catalog
            .tiles()
            .iter()
            .map(|current| {
                let mut row = TileSet::new();
                for target in catalog.tiles() {
                    let reaches_out = current.down || current.right;
                    let accepts = target.down || target.right || target.id == EMPTY_TILE;
                    if !reaches_out || accepts {
                        row.insert(target.id);
                    }
                }
                row
            })
            .collect();

        Ok(Self {
            edges,
            compatible,
            below_open,
            below_connected,
            right_of_open,
            right_of_connected,
            down_connectors: TileSet::from_ids(&catalog.down_connectors()),
            right_connectors: TileSet::from_ids(&catalog.right_connectors()),
            horizontal_self: fixed_points(&horizontal_mirror),
            vertical_self: fixed_points(&vertical_mirror),
            horizontal_mirror,
            vertical_mirror,
        })
    }

    /// Edge connectivity of a tile; unknown ids cross no edge
    pub fn edges(&self, id: TileId) -> Edges {
        usize::from(id)
            .checked_sub(1)
            .and_then(|index| self.edges.get(index))
            .copied()
            .unwrap_or_default()
    }

    /// Whether `next` may sit below or to the right of `current`
    ///
    /// A tile reaching out of its cell must be followed by a connecting tile
    /// or the empty tile; a closed tile may be followed by anything.
    pub fn is_compatible(&self, current: TileId, next: TileId) -> bool {
        self.compatible_with(current)
            .is_some_and(|row| row.contains(next))
    }

    /// Row of the compatibility table for `current`
    pub fn compatible_with(&self, current: TileId) -> Option<&TileSet> {
        usize::from(current)
            .checked_sub(1)
            .and_then(|index| self.compatible.get(index))
    }

    /// Candidate tiles for the cell below `upper`
    ///
    /// Their top edge matches the bottom edge of `upper`. The empty tile is
    /// never a candidate.
    pub fn below(&self, upper: TileId) -> &TileSet {
        if self.edges(upper).down {
            &self.below_connected
        } else {
            &self.below_open
        }
    }

    /// Candidate tiles for the cell right of `left`
    ///
    /// Their left edge matches the right edge of `left`. The empty tile is
    /// never a candidate.
    pub fn right_of(&self, left: TileId) -> &TileSet {
        if self.edges(left).right {
            &self.right_of_connected
        } else {
            &self.right_of_open
        }
    }

    /// Tiles whose curve crosses the bottom edge
    pub const fn down_connectors(&self) -> &TileSet {
        &self.down_connectors
    }

    /// Tiles whose curve crosses the right edge
    pub const fn right_connectors(&self) -> &TileSet {
        &self.right_connectors
    }

    /// Left-right mirror image of a tile; unknown ids map to themselves
    pub fn horizontal_mirror(&self, id: TileId) -> TileId {
        lookup(&self.horizontal_mirror, id).unwrap_or(id)
    }

    /// Top-bottom mirror image of a tile; unknown ids map to themselves
    pub fn vertical_mirror(&self, id: TileId) -> TileId {
        lookup(&self.vertical_mirror, id).unwrap_or(id)
    }

    /// Tiles unchanged by the left-right mirror
    pub const fn horizontal_self_inverse(&self) -> &TileSet {
        &self.horizontal_self
    }

    /// Tiles unchanged by the top-bottom mirror
    pub const fn vertical_self_inverse(&self) -> &TileSet {
        &self.vertical_self
    }

    /// The left-right mirror table, indexed by `id - 1`
    pub const fn horizontal_table(&self) -> &[TileId; TILE_COUNT] {
        &self.horizontal_mirror
    }

    /// The top-bottom mirror table, indexed by `id - 1`
    pub const fn vertical_table(&self) -> &[TileId; TILE_COUNT] {
        &self.vertical_mirror
    }
}
