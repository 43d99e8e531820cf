use crate::console::ConsoleConfig;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Interactive banking front end producing daily transaction files
#[derive(Parser, Debug)]
#[command(name = "banking-frontend")]
#[command(about = "Interactive banking front end producing daily transaction files", long_about = None)]
pub struct CliArgs {
    /// Current Bank Accounts file loaded at every login
    #[arg(
        long = "accounts",
        value_name = "PATH",
        help = "Accounts file to load at login (prompted for when omitted)"
    )]
    pub accounts_file: Option<PathBuf>,

    /// Directory receiving the transaction file at logout
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory the transaction file is written to"
    )]
    pub output_dir: PathBuf,

    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Diagnostics written to stderr: off, error, warn, info, debug or trace"
    )]
    pub log_level: LogLevel,
}

/// Log verbosity accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl CliArgs {
    /// Build the console settings for a session run on `session_date`
    pub fn to_console_config(&self, session_date: NaiveDate) -> ConsoleConfig {
        ConsoleConfig {
            accounts_file: self.accounts_file.clone(),
            output_dir: self.output_dir.clone(),
            session_date,
        }
    }
}
