//! Operator console
//!
//! - `flow` - Command parsing and multi-prompt transaction entry
//! - `repl` - The read-print loop that drives flows against a
//!   [`BankingSystem`](crate::core::BankingSystem)

pub mod flow;
mod repl;

pub use flow::{AdminAction, Command, Flow, Request, Step, TransactionKind};
pub use repl::Console;

use chrono::NaiveDate;
use std::path::PathBuf;

/// Runtime settings for a console run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Accounts file loaded at every login. When unset the operator is
    /// asked for a path after choosing the session type.
    pub accounts_file: Option<PathBuf>,
    /// Directory the transaction file is written to at logout
    pub output_dir: PathBuf,
    /// Date used in the transaction file name
    pub session_date: NaiveDate,
}
