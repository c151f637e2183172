/// Command-line parsing and batch generation
pub mod cli;
/// Constants and drawing configuration
pub mod configuration;
/// Error types
pub mod error;
/// Pattern serialization and file output
pub mod export;
/// Logger initialisation
pub mod logging;
/// Progress display for batch generation
pub mod progress;
