/// Catalog, rules and configuration bundled behind the generation entry points
pub mod generator;
/// Randomized quadrant fill and symmetric grid assembly
pub mod synthesis;

pub use generator::{KolamGenerator, generate};
pub use synthesis::{SynthesisStats, Synthesizer};
