//! Terminal logger setup for the command-line tool

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::io::error::{Result, invalid_parameter};

/// Log level for the given verbosity count
///
/// Quiet mode only reports errors; otherwise warnings are shown and each
/// verbosity step adds one level up to trace.
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a stderr logger at the given level
///
/// # Errors
///
/// Returns an error if a logger has already been installed
pub fn init_logging(level: LevelFilter) -> Result<()> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| invalid_parameter("logger", &level, &e))
}
