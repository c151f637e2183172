//! CLI entry point for the kolam pattern generator

use clap::Parser;
use kolamgen::io::cli::{BatchProcessor, Cli};
use kolamgen::io::logging::init_logging;

fn main() -> kolamgen::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level())?;
    let mut processor = BatchProcessor::new(cli);
    processor.process().map(|_| ())
}
