//! Spatial data structures for tile assignments
//!
//! This module contains the tile-assignment matrix together with the mirror
//! reflections that define kolam symmetry.

/// Tile-assignment matrices and their reflections
pub mod matrix;

pub use matrix::TileMatrix;
