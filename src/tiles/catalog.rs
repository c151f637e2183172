//! Fixed library of kolam curve tiles
//!
//! Each tile is a curve motif drawn around the dot of a single grid cell.
//! Curve offsets are measured from the dot in cell units with positive y
//! pointing down, so a tile touching its bottom edge reaches `y = 0.5`.
//! Only the down and right connectivity flags are authored; the up and left
//! flags follow from the mirror tables (see [`crate::tiles::rules`]).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::io::configuration::TILE_COUNT;
use crate::io::error::{Result, catalog_error, file_system_error};

/// Catalog identifier of a tile (1-based)
pub type TileId = u8;

const BUILTIN_CATALOG: &str = include_str!("../../data/tiles.json");

/// Point on a tile curve, optionally shaped by a quadratic control point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Control point of the segment ending at this point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<[f64; 2]>,
}

impl CurvePoint {
    /// Move the point and its control point to the dot at `origin` (in grid units)
    /// and scale the result to pixels
    #[must_use]
    pub fn placed(&self, origin: [f64; 2], scale: f64) -> Self {
        let [ox, oy] = origin;
        Self {
            x: (ox + self.x) * scale,
            y: (oy + self.y) * scale,
            control: self
                .control
                .map(|[cx, cy]| [(ox + cx) * scale, (oy + cy) * scale]),
        }
    }
}

/// One curve motif of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identifier referenced by the mirror tables
    pub id: TileId,
    /// Whether the curve crosses into the cell below
    pub down: bool,
    /// Whether the curve crosses into the cell to the right
    pub right: bool,
    /// Ordered curve path in cell-local offsets
    #[serde(default)]
    pub points: Vec<CurvePoint>,
}

impl Tile {
    /// Whether the tile draws anything besides its dot
    pub fn has_curve(&self) -> bool {
        !self.points.is_empty()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    tiles: Vec<Tile>,
}

/// Validated, read-only set of all catalog tiles ordered by id
#[derive(Debug, Clone, PartialEq)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl TileCatalog {
    /// Load the catalog shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns a catalog integrity error if the embedded data is malformed
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns a catalog integrity error if the JSON cannot be parsed, tile ids
    /// are not exactly `1..=16`, or a curve has a single point
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| catalog_error(&format!("malformed catalog JSON: {e}")))?;
        Self::from_tiles(file.tiles)
    }

    /// Read a catalog file from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation
    pub fn from_path(path: &Path) -> Result<Self> {
        let json =
            std::fs::read_to_string(path).map_err(file_system_error(path, "read catalog"))?;
        Self::from_json(&json)
    }

    /// Validate tiles and order them by id
    ///
    /// # Errors
    ///
    /// Returns a catalog integrity error if tile ids are not exactly `1..=16`
    /// or a curve has a single point
    pub fn from_tiles(mut tiles: Vec<Tile>) -> Result<Self> {
        if tiles.len() != TILE_COUNT {
            return Err(catalog_error(&format!(
                "expected {TILE_COUNT} tiles, found {}",
                tiles.len()
            )));
        }

        tiles.sort_by_key(|tile| tile.id);
        for (index, tile) in tiles.iter().enumerate() {
            if usize::from(tile.id) != index + 1 {
                return Err(catalog_error(&format!(
                    "tile ids must be 1..={TILE_COUNT} each exactly once, found id {} at position {}",
                    tile.id,
                    index + 1
                )));
            }
            if tile.points.len() == 1 {
                return Err(catalog_error(&format!(
                    "tile {} has a curve with a single point",
                    tile.id
                )));
            }
        }

        Ok(Self { tiles })
    }

    /// Look up a tile by id
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        usize::from(id)
            .checked_sub(1)
            .and_then(|index| self.tiles.get(index))
    }

    /// All tiles ordered by id
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Ids of tiles whose curve crosses the bottom edge
    pub fn down_connectors(&self) -> Vec<TileId> {
        self.tiles
            .iter()
            .filter(|tile| tile.down)
            .map(|tile| tile.id)
            .collect()
    }

    /// Ids of tiles whose curve crosses the right edge
    pub fn right_connectors(&self) -> Vec<TileId> {
        self.tiles
            .iter()
            .filter(|tile| tile.right)
            .map(|tile| tile.id)
            .collect()
    }
}
