//! Tile catalog and the adjacency and symmetry rules derived from it
//!
//! This module contains:
//! - The fixed catalog of curve tiles and its JSON loader
//! - Membership sets over catalog tiles
//! - Compatibility, mirror and self-inverse tables

/// Fixed-size membership set over catalog tiles
pub mod bitset;
/// Tile definitions and catalog loading
pub mod catalog;
/// Compatibility and mirror rules derived from the catalog
pub mod rules;

pub use bitset::TileSet;
pub use catalog::{CurvePoint, Tile, TileCatalog, TileId};
pub use rules::CompatibilityRules;
