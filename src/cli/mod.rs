// CLI module
// Command-line interface, argument parsing and logger setup

mod args;

pub use args::{CliArgs, LogLevel};

use clap::Parser;
use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help` clap prints the message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr logger at the requested level
///
/// Can only succeed once per process.
pub fn configure_logging(level: LogLevel) -> Result<(), SetLoggerError> {
    SimpleLogger::new()
        .with_level(LevelFilter::from(level))
        .init()
}
