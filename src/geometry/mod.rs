//! Renderable geometry produced from synthesized tile matrices

/// Tile matrix to dot and curve compilation
pub mod compiler;
/// Rendered pattern data model
pub mod pattern;
/// SVG document and path export
pub mod svg;

pub use compiler::compile;
pub use pattern::RenderedPattern;
