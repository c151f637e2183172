//! Procedural synthesizer for symmetric kolam floor-art patterns
//!
//! A fixed catalog of sixteen curve tiles is placed on one quadrant of a dot
//! grid so that neighbouring curves stay connected. The quadrant is reflected
//! through both grid axes into a mirror-symmetric tile matrix, which is then
//! compiled into absolute dot and curve geometry for rendering or export.

#![deny(unsafe_code)]

/// Quadrant synthesis and the generation entry points
pub mod algorithm;
/// Dot and curve geometry compiled from tile matrices
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile-assignment matrices and mirror reflection
pub mod spatial;
/// Tile catalog, compatibility rules and mirror tables
pub mod tiles;

pub use algorithm::{KolamGenerator, generate};
pub use geometry::RenderedPattern;
pub use io::error::{KolamError, Result};
